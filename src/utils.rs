//! Utility functions

use url::form_urlencoded;

/// Maximum number of digits the phone field keeps while typing
pub const PHONE_DIGITS: usize = 9;

/// Strip the separators people commonly type in phone numbers: whitespace, `-`, `(` and `)`
pub fn clean_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

/// Live-format the phone field: digits only, grouped as `XXX XXX XXX`
pub fn format_phone(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    digits
        .chunks(3)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encode key/value pairs as `application/x-www-form-urlencoded`, keeping order and repeats
pub fn encode_form<K, V>(entries: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in entries {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_phone_strips_separators() {
        assert_eq!(clean_phone("(+51) 987-654 321"), "+51987654321");
        assert_eq!(clean_phone("987\t654\n321"), "987654321");
    }

    #[test]
    fn typing_digit_by_digit_groups_in_threes() {
        let mut shown = String::new();
        for digit in "987654321".chars() {
            shown.push(digit);
            shown = format_phone(&shown);
        }
        assert_eq!(shown, "987 654 321");
    }

    #[test]
    fn format_phone_partial_groups() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("98"), "98");
        assert_eq!(format_phone("987"), "987");
        assert_eq!(format_phone("9876"), "987 6");
        assert_eq!(format_phone("987654"), "987 654");
        assert_eq!(format_phone("9876543"), "987 654 3");
    }

    #[test]
    fn format_phone_drops_non_digits_and_caps_length() {
        assert_eq!(format_phone("+51 987-654-321"), "519 876 543");
        assert_eq!(format_phone("abc"), "");
        assert_eq!(format_phone("9876543210"), "987 654 321");
    }

    #[test]
    fn encode_form_escapes_and_keeps_repeats() {
        let body = encode_form(&[
            ("nombre", "José Pérez"),
            ("mensaje", "a&b=c"),
            ("tag", "1"),
            ("tag", "2"),
        ]);
        assert_eq!(body, "nombre=Jos%C3%A9+P%C3%A9rez&mensaje=a%26b%3Dc&tag=1&tag=2");
    }

    #[test]
    fn encode_form_empty() {
        let entries: [(&str, &str); 0] = [];
        assert_eq!(encode_form(&entries), "");
    }
}
