//! Masking of sensitive fields

use crate::processor::KeyFieldTransform;
use docorch_domain::{KeyFields, ScalarValue};
use tracing::debug;

/// Field-name fragments treated as sensitive by default
pub const DEFAULT_SENSITIVE_FRAGMENTS: [&str; 5] = [
    "Account_Number",
    "Account No",
    "Account_No",
    "AccountNumber",
    "Account",
];

/// Prefix of every masked value
pub const MASK: &str = "****";

/// Masks fields whose name contains a sensitive fragment
///
/// A masked value keeps its last four characters behind [`MASK`]; values of
/// four characters or fewer become [`MASK`] alone.
#[derive(Debug, Clone)]
pub struct Redactor {
    fragments: Vec<String>,
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVE_FRAGMENTS)
    }
}

impl Redactor {
    /// Create a redactor for the given name fragments
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            fragments: fragments
                .into_iter()
                .map(|f| f.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True if `name` contains any sensitive fragment, ignoring case
    pub fn is_sensitive(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.fragments.iter().any(|f| name.contains(f.as_str()))
    }

    /// Masked form of a value
    pub fn mask(value: &ScalarValue) -> String {
        let text = value.to_string();
        let chars: Vec<char> = text.chars().collect();
        if chars.len() > 4 {
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{}{}", MASK, tail)
        } else {
            MASK.to_string()
        }
    }
}

impl KeyFieldTransform for Redactor {
    fn apply(&self, fields: &KeyFields) -> KeyFields {
        fields
            .iter()
            .map(|(name, value)| {
                if self.is_sensitive(name) {
                    debug!("Redacting field '{}'", name);
                    (name.clone(), ScalarValue::String(Self::mask(value)))
                } else {
                    (name.clone(), value.clone())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fields(pairs: &[(&str, ScalarValue)]) -> KeyFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_masks_long_account_number() {
        let input = fields(&[("Account_Number", ScalarValue::from("1234567890"))]);
        let out = Redactor::default().apply(&input);
        assert_eq!(out["Account_Number"], ScalarValue::from("****7890"));
    }

    #[test]
    fn test_masks_short_value_entirely() {
        let input = fields(&[("account no", ScalarValue::from("1234"))]);
        let out = Redactor::default().apply(&input);
        assert_eq!(out["account no"], ScalarValue::from("****"));
    }

    #[test]
    fn test_masks_numeric_value() {
        let input = fields(&[("SavingsAccount", ScalarValue::Integer(9876543210))]);
        let out = Redactor::default().apply(&input);
        assert_eq!(out["SavingsAccount"], ScalarValue::from("****3210"));
    }

    #[test]
    fn test_leaves_other_fields_and_input_alone() {
        let input = fields(&[
            ("Account_Holder", ScalarValue::from("Ankita Sharma")),
            ("Closing_Balance", ScalarValue::from("64252")),
        ]);
        let out = Redactor::default().apply(&input);
        // "Account_Holder" contains "Account", so it is masked too.
        assert_eq!(out["Account_Holder"], ScalarValue::from("****arma"));
        assert_eq!(out["Closing_Balance"], ScalarValue::from("64252"));
        assert_eq!(input["Account_Holder"], ScalarValue::from("Ankita Sharma"));
    }

    #[test]
    fn test_mask_counts_characters() {
        assert_eq!(Redactor::mask(&ScalarValue::from("₹₹₹₹₹")), "****₹₹₹₹");
        assert_eq!(Redactor::mask(&ScalarValue::from("ééé")), "****");
    }

    #[test]
    fn test_custom_fragments() {
        let redactor = Redactor::new(["iban"]);
        assert!(redactor.is_sensitive("Customer_IBAN"));
        assert!(!redactor.is_sensitive("Account_Number"));
    }

    proptest! {
        #[test]
        fn prop_non_sensitive_fields_unchanged(name in "[B-Zb-z_]{1,12}", value in ".{0,20}") {
            prop_assume!(!Redactor::default().is_sensitive(&name));
            let input = fields(&[(name.as_str(), ScalarValue::from(value.as_str()))]);
            prop_assert_eq!(Redactor::default().apply(&input), input);
        }

        #[test]
        fn prop_sensitive_fields_keep_only_last_four(prefix in "[a-z]{0,5}", value in ".{0,20}") {
            let name = format!("{}account", prefix);
            let input = fields(&[(name.as_str(), ScalarValue::from(value.as_str()))]);
            let out = Redactor::default().apply(&input);
            let masked = out[name.as_str()].as_str().unwrap().to_string();

            let chars: Vec<char> = value.chars().collect();
            if chars.len() > 4 {
                let tail: String = chars[chars.len() - 4..].iter().collect();
                prop_assert_eq!(masked, format!("****{}", tail));
            } else {
                prop_assert_eq!(masked, "****");
            }
        }

        #[test]
        fn prop_redaction_is_stable(value in "[0-9]{0,16}") {
            let input = fields(&[("Account", ScalarValue::from(value.as_str()))]);
            let once = Redactor::default().apply(&input);
            let twice = Redactor::default().apply(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
