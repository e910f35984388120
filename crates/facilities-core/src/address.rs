// ── Street address splitting ──
//
// Building cards show the house number apart from the street.

use serde::Serialize;

/// A building address split into house number and street.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    pub number: Option<String>,
    pub street: String,
}

/// Split a leading run of ASCII digits off `text`.
///
/// `"12 Main St"` and `"12Main St"` both yield number `12` and street
/// `Main St`. Text without a leading number, or a bare number, is all street.
pub fn split_address(text: &str) -> Address {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    let rest = text[digits..].trim_start();

    if digits == 0 || rest.is_empty() {
        return Address {
            number: None,
            street: text.to_owned(),
        };
    }

    Address {
        number: Some(text[..digits].to_owned()),
        street: rest.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn splits_leading_number() {
        assert_eq!(
            split_address("42 Vitosha Blvd"),
            Address {
                number: Some("42".into()),
                street: "Vitosha Blvd".into(),
            }
        );
    }

    #[test]
    fn number_without_space() {
        let address = split_address("7B Oak Lane");
        assert_eq!(address.number.as_deref(), Some("7"));
        assert_eq!(address.street, "B Oak Lane");
    }

    #[test]
    fn no_number_is_all_street() {
        assert_eq!(split_address("Main Street").number, None);
        assert_eq!(split_address("Main Street").street, "Main Street");
    }

    #[test]
    fn bare_number_or_empty() {
        assert_eq!(split_address("123").number, None);
        assert_eq!(split_address("123").street, "123");
        assert_eq!(split_address("").street, "");
        assert_eq!(split_address("12   ").number, None);
    }
}
