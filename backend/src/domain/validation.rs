//! Field-level validation shared by the entity constructors.

use serde_json::json;

use super::Error;

/// A validation failure attributable to one input field.
pub trait FieldViolation: std::fmt::Display {
    /// Input field the failure belongs to.
    fn field(&self) -> &'static str;

    /// Stable machine code for clients.
    fn code(&self) -> &'static str;
}

/// Build an `invalid_request` error whose details name the field and code.
///
/// # Examples
/// ```
/// use backend::domain::{CatValidationError, ErrorCode, invalid_field};
///
/// let err = invalid_field(&CatValidationError::EmptyName);
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.details().unwrap()["field"], "name");
/// ```
pub fn invalid_field(violation: &impl FieldViolation) -> Error {
    Error::invalid_request(violation.to_string()).with_details(json!({
        "field": violation.field(),
        "code": violation.code(),
    }))
}

/// Outcome of [`bounded_text`] when the value is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextViolation {
    Blank,
    TooLong,
}

/// Trim `value` and check it against `max` characters.
///
/// Blank values are rejected unless `allow_blank` is set.
pub(crate) fn bounded_text(
    value: &str,
    max: usize,
    allow_blank: bool,
) -> Result<String, TextViolation> {
    let trimmed = value.trim();
    if trimmed.is_empty() && !allow_blank {
        return Err(TextViolation::Blank);
    }
    if trimmed.chars().count() > max {
        return Err(TextViolation::TooLong);
    }
    Ok(trimmed.to_owned())
}

/// Define a positive integer record identifier backed by a database serial.
macro_rules! define_record_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Validate and wrap a raw identifier.
            pub fn new(raw: i32) -> Result<Self, $crate::domain::InvalidRecordId> {
                if raw > 0 {
                    Ok(Self(raw))
                } else {
                    Err($crate::domain::InvalidRecordId { kind: $label })
                }
            }

            /// Raw integer value.
            pub fn get(self) -> i32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::InvalidRecordId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .parse::<i32>()
                    .map_err(|_| $crate::domain::InvalidRecordId { kind: $label })?;
                Self::new(raw)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::domain::InvalidRecordId;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use define_record_id;

/// Raised when a record identifier is zero, negative or not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} id must be a positive integer")]
pub struct InvalidRecordId {
    /// Entity kind the identifier belongs to.
    pub kind: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    define_record_id!(WidgetId, "widget");

    #[rstest]
    #[case("  Fig  ", 10, false, Ok("Fig".to_owned()))]
    #[case("   ", 10, false, Err(TextViolation::Blank))]
    #[case("", 10, true, Ok(String::new()))]
    #[case("abcdefghijk", 10, true, Err(TextViolation::TooLong))]
    fn bounded_text_trims_and_checks(
        #[case] value: &str,
        #[case] max: usize,
        #[case] allow_blank: bool,
        #[case] expected: Result<String, TextViolation>,
    ) {
        assert_eq!(bounded_text(value, max, allow_blank), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(-4)]
    fn record_ids_reject_non_positive_values(#[case] raw: i32) {
        let err = WidgetId::new(raw).expect_err("non-positive id");
        assert_eq!(err.to_string(), "widget id must be a positive integer");
    }

    #[rstest]
    fn record_ids_parse_from_path_segments() {
        let id: WidgetId = "17".parse().expect("valid id");
        assert_eq!(id.get(), 17);
        assert!("seventeen".parse::<WidgetId>().is_err());
    }

    #[rstest]
    fn record_ids_serialise_as_bare_integers() {
        let id = WidgetId::new(3).expect("valid id");
        assert_eq!(serde_json::to_value(id).expect("serialise"), 3);
        assert!(serde_json::from_value::<WidgetId>(serde_json::json!(0)).is_err());
    }
}
