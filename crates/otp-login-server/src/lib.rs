//! WhatsApp OTP login backend.
//!
//! A small service that:
//! - proxies OTP send/verify requests to Message Central
//! - keeps a signed-up user registry in a JSON file
//! - serves the prebuilt React frontend

pub mod api;
pub mod config;
pub mod error;
pub mod registry;
pub mod sessions;

pub use config::Config;
pub use error::ApiError;
pub use registry::{Registry, Store, UserRecord};
pub use sessions::SessionTracker;
