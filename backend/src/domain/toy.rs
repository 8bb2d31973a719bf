//! Toys shared by every user.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{FieldViolation, TextViolation, bounded_text, define_record_id};

define_record_id!(
    /// Database identifier of a toy.
    ToyId,
    "toy"
);

/// Maximum length of a toy's name.
pub const TOY_NAME_MAX: usize = 50;
/// Maximum length of a toy's color.
pub const COLOR_MAX: usize = 20;

/// Validation errors raised while building toy attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToyValidationError {
    EmptyName,
    NameTooLong { max: usize },
    EmptyColor,
    ColorTooLong { max: usize },
}

impl fmt::Display for ToyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::EmptyColor => write!(f, "color must not be empty"),
            Self::ColorTooLong { max } => write!(f, "color must be at most {max} characters"),
        }
    }
}

impl std::error::Error for ToyValidationError {}

impl FieldViolation for ToyValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong { .. } => "name",
            Self::EmptyColor | Self::ColorTooLong { .. } => "color",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::EmptyColor => "required",
            Self::NameTooLong { .. } | Self::ColorTooLong { .. } => "too_long",
        }
    }
}

/// Name and color of a toy, used for both creation and update.
///
/// # Examples
/// ```
/// use backend::domain::ToyDraft;
///
/// let draft = ToyDraft::try_from_parts(" Mouse ", "grey").unwrap();
/// assert_eq!(draft.name(), "Mouse");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToyDraft {
    name: String,
    color: String,
}

impl ToyDraft {
    /// Trim and validate raw name and color values.
    pub fn try_from_parts(name: &str, color: &str) -> Result<Self, ToyValidationError> {
        let name = bounded_text(name, TOY_NAME_MAX, false).map_err(|violation| match violation {
            TextViolation::Blank => ToyValidationError::EmptyName,
            TextViolation::TooLong => ToyValidationError::NameTooLong { max: TOY_NAME_MAX },
        })?;
        let color = bounded_text(color, COLOR_MAX, false).map_err(|violation| match violation {
            TextViolation::Blank => ToyValidationError::EmptyColor,
            TextViolation::TooLong => ToyValidationError::ColorTooLong { max: COLOR_MAX },
        })?;
        Ok(Self { name, color })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn color(&self) -> &str {
        self.color.as_str()
    }
}

/// A persisted toy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toy {
    id: ToyId,
    name: String,
    color: String,
}

impl Toy {
    /// Assemble a toy from stored attributes.
    pub fn new(id: ToyId, draft: ToyDraft) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
        }
    }

    pub fn id(&self) -> ToyId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn color(&self) -> &str {
        self.color.as_str()
    }
}
