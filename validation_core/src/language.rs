//! Message resolution.
//!
//! Rules fail with a message key plus placeholder replacements; a
//! [`Language`] turns that into user-facing text. Resolution never fails:
//! an unknown key is returned verbatim so a missing translation degrades
//! to something greppable instead of an error.

use crate::MessageParams;

/// Resolves a message key and placeholder replacements to a user-facing
/// string.
///
/// Implementations must substitute the placeholder tokens into the
/// backing template and must return the key itself when no translation
/// exists.
pub trait Language: Send + Sync {
    /// Resolves `key`, substituting each `(token, value)` pair of
    /// `params` into the message template.
    fn translation(&self, key: &str, params: &MessageParams) -> String;
}

/// The default English message catalog.
///
/// Messages are phrased to read after a field name, so
/// `"age"` + `"must be at least 16"` renders as `age must be at least 16`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLanguage;

impl EnglishLanguage {
    /// Creates the default English language.
    pub fn new() -> Self {
        Self
    }

    fn template(key: &str) -> Option<&'static str> {
        let message = match key {
            "formvalidator_make_required" => "is required",
            "formvalidator_make_filled" => "must be present and filled",
            "formvalidator_make_present" => "must be present",
            "formvalidator_make_string" => "must be a string",
            "formvalidator_make_integer" => "must be an integer",
            "formvalidator_make_float" => "must be a float",
            "formvalidator_make_boolean" => "must be a boolean",
            "formvalidator_make_numeric" => "must be numeric",
            "formvalidator_make_array" => "must be an array",
            "formvalidator_make_array_subtype" => "must be an array of {0} values",
            "formvalidator_make_email" => "must be a valid email address",
            "formvalidator_make_url" => "must be a valid URL",
            "formvalidator_make_ip" => "must be a valid IP address",
            "formvalidator_make_json" => "must be valid JSON",
            "formvalidator_make_regex" => "has an invalid format",
            "formvalidator_make_date" => "must be a valid date",
            "formvalidator_make_date_format" => "must be a date of format {0}",
            "formvalidator_make_alpha" => "must contain only alphabetic characters",
            "formvalidator_make_alpha_dash" => {
                "must contain only alphabetic characters, dashes and underscores"
            }
            "formvalidator_make_alpha_num" => "must contain only alphanumeric characters",
            "formvalidator_make_uppercase" => "must be all uppercase",
            "formvalidator_make_lowercase" => "must be all lowercase",
            "formvalidator_make_nowhitespace" => "must not contain whitespace",
            "formvalidator_make_min" => "must be at least {0}",
            "formvalidator_make_min_string" => "must be at least {0} characters long",
            "formvalidator_make_max" => "may not be greater than {0}",
            "formvalidator_make_max_string" => "may not be longer than {0} characters",
            "formvalidator_make_size" => "must have a size of {0}",
            "formvalidator_make_between" => "must be between {0} and {1}",
            "formvalidator_make_same" => "must match the {0} field",
            "formvalidator_make_different" => "must differ from the {0} field",
            "formvalidator_make_in" => "must be one of: {0}",
            "formvalidator_make_before" => "must be a time before {0}",
            "formvalidator_make_after" => "must be a time after {0}",
            "formvalidator_make_confirmed" => "must be confirmed",
            "formvalidator_make_accepted" => "must be accepted",
            "formvalidator_make_digits" => "must be {0} digits",
            "formvalidator_make_distinct" => "must not contain duplicate values",
            "formvalidator_make_invalid_file" => {
                "does not contain a valid (or no at all) file"
            }
            "formvalidator_make_image" => "must be an image",
            "formvalidator_make_min_width" => "must meet the minimum image width ({0})",
            "formvalidator_make_min_height" => "must meet the minimum image height ({0})",
            "formvalidator_make_width" => "must meet the exact image width ({0})",
            "formvalidator_make_height" => "must meet the exact image height ({0})",
            "formvalidator_make_max_width" => "must not exceed the maximum image width ({0})",
            "formvalidator_make_max_height" => "must not exceed the maximum image height ({0})",
            "formvalidator_make_ratio" => "must meet the image ratio ({0})",
            "formvalidator_make_nullable" => "must not be null",
            "formvalidator_make_unknown_field" => "is not an expected field",
            _ => return None,
        };
        Some(message)
    }
}

impl Language for EnglishLanguage {
    fn translation(&self, key: &str, params: &MessageParams) -> String {
        let mut message = match Self::template(key) {
            Some(template) => template.to_string(),
            None => return key.to_string(),
        };

        for (token, value) in params {
            message = message.replace(token, value);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message() {
        let lang = EnglishLanguage::new();
        assert_eq!(
            lang.translation("formvalidator_make_string", &Vec::new()),
            "must be a string"
        );
    }

    #[test]
    fn test_placeholder_substitution() {
        let lang = EnglishLanguage::new();
        let params = vec![("{0}".to_string(), "16".to_string())];
        assert_eq!(
            lang.translation("formvalidator_make_min", &params),
            "must be at least 16"
        );

        let params = vec![
            ("{0}".to_string(), "1".to_string()),
            ("{1}".to_string(), "10".to_string()),
        ];
        assert_eq!(
            lang.translation("formvalidator_make_between", &params),
            "must be between 1 and 10"
        );
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let lang = EnglishLanguage::new();
        assert_eq!(
            lang.translation("some_custom_key", &Vec::new()),
            "some_custom_key"
        );
    }
}
