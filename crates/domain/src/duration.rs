use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use warden_core::{AppError, AppResult};

/// Maximum access duration granted by a rule, in whole seconds.
///
/// Declared configuration carries the duration as a decimal string while the
/// governance API stores an integer, so this type owns both encodings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MaxDuration(u64);

impl MaxDuration {
    /// Creates a duration from a second count.
    #[must_use]
    pub fn from_seconds(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Parses a declared duration string.
    ///
    /// Accepts an optional leading `+` and rejects whitespace, fractions,
    /// unit suffixes and negative values. `-0` is zero.
    pub fn parse(value: &str) -> AppResult<Self> {
        if let Some(digits) = value.strip_prefix('-')
            && is_decimal(digits)
        {
            if digits.bytes().all(|byte| byte == b'0') {
                return Ok(Self(0));
            }

            return Err(AppError::Validation(format!(
                "duration '{value}' must not be negative"
            )));
        }

        value.parse::<u64>().map(Self).map_err(|error| {
            AppError::Validation(format!(
                "duration '{value}' is not an integer number of seconds: {error}"
            ))
        })
    }
}

fn is_decimal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

impl Display for MaxDuration {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::MaxDuration;

    #[test]
    fn parses_plain_seconds() {
        let duration = MaxDuration::parse("3600");
        assert_eq!(duration.ok(), Some(MaxDuration::from_seconds(3600)));
    }

    #[test]
    fn accepts_leading_plus_and_renders_canonically() {
        let duration = MaxDuration::parse("+0042");
        assert_eq!(duration.ok().map(|value| value.to_string()), Some("42".to_owned()));
    }

    #[test]
    fn rejects_unit_suffix() {
        assert!(MaxDuration::parse("1h").is_err());
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(MaxDuration::parse(" 60").is_err());
    }

    #[test]
    fn rejects_empty_string() {
        assert!(MaxDuration::parse("").is_err());
    }

    #[test]
    fn rejects_negative_with_dedicated_message() {
        let error = MaxDuration::parse("-5").err().map(|error| error.to_string());
        assert_eq!(
            error.as_deref(),
            Some("validation error: duration '-5' must not be negative")
        );
    }

    #[test]
    fn negative_zero_is_zero() {
        let duration = MaxDuration::parse("-000");
        assert_eq!(duration.ok().map(|value| value.to_string()), Some("0".to_owned()));
    }

    #[test]
    fn rejects_lone_sign() {
        assert!(MaxDuration::parse("-").is_err());
        assert!(MaxDuration::parse("+").is_err());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let value = serde_json::to_value(MaxDuration::from_seconds(900));
        assert_eq!(value.ok(), Some(serde_json::json!(900)));
    }

    proptest! {
        #[test]
        fn rendered_seconds_parse_back_exactly(seconds in any::<u64>()) {
            let rendered = MaxDuration::from_seconds(seconds).to_string();
            let parsed = MaxDuration::parse(rendered.as_str());
            prop_assert_eq!(parsed.ok(), Some(MaxDuration::from_seconds(seconds)));
        }

        #[test]
        fn strings_with_non_digits_are_rejected(value in "[0-9]{0,4}[a-z .]{1,3}[0-9]{0,4}") {
            prop_assert!(MaxDuration::parse(value.as_str()).is_err());
        }
    }
}
