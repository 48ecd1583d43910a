use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left alone when encoding a URI component: alphanumerics plus
/// `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query-string component (UTF-8, uppercase hex).
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Display a price the way shoppers read it: `2500` -> `2,500`,
/// `1234.5678` -> `1,234.568`.
pub fn format_price(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let rounded = (amount.abs() * 1000.0).round() / 1000.0;
    let fixed = format!("{rounded:.3}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if amount < 0.0 && rounded != 0.0 {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(2500.0), "2,500");
        assert_eq!(format_price(1234567.0), "1,234,567");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_price(19.5), "19.5");
        assert_eq!(format_price(1234.5678), "1,234.568");
        assert_eq!(format_price(2.0004), "2");
    }

    #[test]
    fn formats_non_finite_values() {
        assert_eq!(format_price(f64::NAN), "NaN");
        assert_eq!(format_price(f64::INFINITY), "∞");
        assert_eq!(format_price(-1500.0), "-1,500");
    }

    #[test]
    fn encodes_like_a_uri_component() {
        assert_eq!(encode_component("Hi! (test) ~*'._-"), "Hi!%20(test)%20~*'._-");
        assert_eq!(encode_component("\"Rose\" & more?"), "%22Rose%22%20%26%20more%3F");
        assert_eq!(encode_component("LKR 2,500"), "LKR%202%2C500");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    proptest::proptest! {
        #[test]
        fn whole_amounts_keep_their_digits(n in 0u64..10_000_000_000) {
            let formatted = format_price(n as f64);
            proptest::prop_assert_eq!(formatted.replace(',', ""), n.to_string());
        }

        #[test]
        fn encoded_components_are_query_safe(s in ".*") {
            let encoded = encode_component(&s);
            proptest::prop_assert!(!encoded.contains([' ', '&', '=', '?', '#', '+']));
        }
    }
}
