//! Phone number normalization for the provider's `mobileNumber` parameter.

/// Reduce a client-submitted phone number to the bare subscriber number
/// Message Central expects.
///
/// Strips a leading `+`, then strips the country-code prefix when the
/// remaining digit string starts with it and is longer than 10 characters.
/// Input is assumed to be E.164-ish already; this is not a general parser.
pub fn normalize_mobile_number(phone: &str, country_code: &str) -> String {
    let digits = phone.strip_prefix('+').unwrap_or(phone);

    if digits.starts_with(country_code) && digits.len() > 10 {
        digits[country_code.len()..].to_string()
    } else {
        digits.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_plus_and_country_code() {
        assert_eq!(normalize_mobile_number("+919876543210", "91"), "9876543210");
        assert_eq!(normalize_mobile_number("919876543210", "91"), "9876543210");
    }

    #[test]
    fn keeps_ten_digit_numbers_untouched() {
        // Starts with "98", no prefix to strip
        assert_eq!(normalize_mobile_number("9876543210", "91"), "9876543210");
        // Starts with "91" but is not longer than 10 digits
        assert_eq!(normalize_mobile_number("9198765432", "91"), "9198765432");
        assert_eq!(normalize_mobile_number("+9198765432", "91"), "9198765432");
    }

    #[test]
    fn strips_only_leading_plus() {
        assert_eq!(normalize_mobile_number("+14155551234", "91"), "14155551234");
        assert_eq!(normalize_mobile_number("14155551234", "91"), "14155551234");
    }

    #[test]
    fn short_inputs_pass_through() {
        assert_eq!(normalize_mobile_number("91234", "91"), "91234");
        assert_eq!(normalize_mobile_number("", "91"), "");
    }
}
