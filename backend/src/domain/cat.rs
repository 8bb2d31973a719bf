//! Cat records owned by a single user.
//!
//! A cat's name and owner are fixed at creation. Breed, description and age
//! may change later through [`CatChanges`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::UserId;
use super::validation::{FieldViolation, TextViolation, bounded_text, define_record_id};

define_record_id!(
    /// Database identifier of a cat.
    CatId,
    "cat"
);

/// Maximum length of a cat's name.
pub const CAT_NAME_MAX: usize = 100;
/// Maximum length of a breed.
pub const BREED_MAX: usize = 100;
/// Maximum length of a description.
pub const DESCRIPTION_MAX: usize = 250;

/// Validation errors raised while building cat attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatValidationError {
    EmptyName,
    NameTooLong { max: usize },
    EmptyBreed,
    BreedTooLong { max: usize },
    DescriptionTooLong { max: usize },
    NegativeAge,
    InvalidAge { value: String },
}

impl fmt::Display for CatValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::EmptyBreed => write!(f, "breed must not be empty"),
            Self::BreedTooLong { max } => write!(f, "breed must be at most {max} characters"),
            Self::DescriptionTooLong { max } => {
                write!(f, "description must be at most {max} characters")
            }
            Self::NegativeAge => write!(f, "age must not be negative"),
            Self::InvalidAge { value } => write!(f, "age must be a whole number, got {value:?}"),
        }
    }
}

impl std::error::Error for CatValidationError {}

impl FieldViolation for CatValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong { .. } => "name",
            Self::EmptyBreed | Self::BreedTooLong { .. } => "breed",
            Self::DescriptionTooLong { .. } => "description",
            Self::NegativeAge | Self::InvalidAge { .. } => "age",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::EmptyBreed => "required",
            Self::NameTooLong { .. } | Self::BreedTooLong { .. } | Self::DescriptionTooLong { .. } => {
                "too_long"
            }
            Self::NegativeAge => "negative_age",
            Self::InvalidAge { .. } => "invalid_age",
        }
    }
}

/// A cat's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatName(String);

impl CatName {
    /// Trim and validate a name.
    pub fn new(raw: &str) -> Result<Self, CatValidationError> {
        bounded_text(raw, CAT_NAME_MAX, false)
            .map(Self)
            .map_err(|violation| match violation {
                TextViolation::Blank => CatValidationError::EmptyName,
                TextViolation::TooLong => CatValidationError::NameTooLong { max: CAT_NAME_MAX },
            })
    }
}

impl AsRef<str> for CatName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Free-text breed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breed(String);

impl Breed {
    /// Trim and validate a breed.
    pub fn new(raw: &str) -> Result<Self, CatValidationError> {
        bounded_text(raw, BREED_MAX, false)
            .map(Self)
            .map_err(|violation| match violation {
                TextViolation::Blank => CatValidationError::EmptyBreed,
                TextViolation::TooLong => CatValidationError::BreedTooLong { max: BREED_MAX },
            })
    }
}

impl AsRef<str> for Breed {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Optional description. Empty text is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Trim and validate a description.
    pub fn new(raw: &str) -> Result<Self, CatValidationError> {
        bounded_text(raw, DESCRIPTION_MAX, true)
            .map(Self)
            .map_err(|_| CatValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX,
            })
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Age in whole years.
///
/// # Examples
/// ```
/// use backend::domain::{Age, CatValidationError};
///
/// assert_eq!(Age::parse(" 3 ").unwrap().get(), 3);
/// assert_eq!(Age::new(-1), Err(CatValidationError::NegativeAge));
/// assert!(matches!(Age::parse("three"), Err(CatValidationError::InvalidAge { .. })));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct Age(i32);

impl Age {
    /// Validate a numeric age.
    pub fn new(raw: i64) -> Result<Self, CatValidationError> {
        if raw < 0 {
            return Err(CatValidationError::NegativeAge);
        }
        i32::try_from(raw)
            .map(Self)
            .map_err(|_| CatValidationError::InvalidAge {
                value: raw.to_string(),
            })
    }

    /// Parse an age submitted as text.
    pub fn parse(raw: &str) -> Result<Self, CatValidationError> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| CatValidationError::InvalidAge {
                value: trimmed.to_owned(),
            })?;
        Self::new(value)
    }

    /// Age in years.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Age {
    type Error = CatValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Age> for i32 {
    fn from(value: Age) -> Self {
        value.0
    }
}

/// Attributes submitted for a new cat, before an owner is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCat {
    pub name: CatName,
    pub breed: Breed,
    pub description: Description,
    pub age: Age,
}

impl NewCat {
    /// Assign the owning user, producing a persistable draft.
    pub fn owned_by(self, owner: UserId) -> CatDraft {
        CatDraft {
            owner,
            name: self.name,
            breed: self.breed,
            description: self.description,
            age: self.age,
        }
    }
}

/// Attributes for a new cat, owner included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatDraft {
    pub owner: UserId,
    pub name: CatName,
    pub breed: Breed,
    pub description: Description,
    pub age: Age,
}

/// Mutable attributes of an existing cat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatChanges {
    pub breed: Breed,
    pub description: Description,
    pub age: Age,
}

/// A persisted cat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
    id: CatId,
    owner: UserId,
    name: CatName,
    breed: Breed,
    description: Description,
    age: Age,
}

impl Cat {
    /// Assemble a cat from a stored draft and its assigned id.
    pub fn new(id: CatId, draft: CatDraft) -> Self {
        let CatDraft {
            owner,
            name,
            breed,
            description,
            age,
        } = draft;
        Self {
            id,
            owner,
            name,
            breed,
            description,
            age,
        }
    }

    /// Return a copy with `changes` applied. Name and owner are kept.
    pub fn with_changes(&self, changes: &CatChanges) -> Self {
        Self {
            breed: changes.breed.clone(),
            description: changes.description.clone(),
            age: changes.age,
            ..self.clone()
        }
    }

    pub fn id(&self) -> CatId {
        self.id
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn name(&self) -> &CatName {
        &self.name
    }

    pub fn breed(&self) -> &Breed {
        &self.breed
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn age(&self) -> Age {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft() -> CatDraft {
        CatDraft {
            owner: UserId::random(),
            name: CatName::new("Fig").expect("name"),
            breed: Breed::new("Tabby").expect("breed"),
            description: Description::new("orange").expect("description"),
            age: Age::new(3).expect("age"),
        }
    }

    #[rstest]
    #[case("", CatValidationError::EmptyName)]
    #[case("   ", CatValidationError::EmptyName)]
    fn name_rejects_blank(#[case] raw: &str, #[case] expected: CatValidationError) {
        assert_eq!(CatName::new(raw), Err(expected));
    }

    #[rstest]
    fn text_fields_enforce_their_limits() {
        assert_eq!(
            CatName::new(&"n".repeat(CAT_NAME_MAX + 1)),
            Err(CatValidationError::NameTooLong { max: CAT_NAME_MAX })
        );
        assert_eq!(
            Breed::new(&"b".repeat(BREED_MAX + 1)),
            Err(CatValidationError::BreedTooLong { max: BREED_MAX })
        );
        assert_eq!(
            Description::new(&"d".repeat(DESCRIPTION_MAX + 1)),
            Err(CatValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX
            })
        );
        assert!(Description::new("").is_ok());
    }

    #[rstest]
    #[case("0", Ok(0))]
    #[case("12", Ok(12))]
    #[case("-2", Err(CatValidationError::NegativeAge))]
    #[case("2.5", Err(CatValidationError::InvalidAge { value: "2.5".to_owned() }))]
    #[case("", Err(CatValidationError::InvalidAge { value: String::new() }))]
    fn age_parses_whole_years(#[case] raw: &str, #[case] expected: Result<i32, CatValidationError>) {
        assert_eq!(Age::parse(raw).map(Age::get), expected);
    }

    #[rstest]
    fn violations_name_their_field() {
        assert_eq!(CatValidationError::NegativeAge.field(), "age");
        assert_eq!(CatValidationError::EmptyBreed.code(), "required");
        assert_eq!(
            CatValidationError::DescriptionTooLong { max: 1 }.field(),
            "description"
        );
    }

    #[rstest]
    fn changes_keep_name_and_owner() {
        let cat = Cat::new(CatId::new(1).expect("id"), draft());
        let changes = CatChanges {
            breed: Breed::new("Siamese").expect("breed"),
            description: Description::new("").expect("description"),
            age: Age::new(4).expect("age"),
        };
        let updated = cat.with_changes(&changes);
        assert_eq!(updated.name(), cat.name());
        assert_eq!(updated.owner(), cat.owner());
        assert_eq!(updated.breed().as_ref(), "Siamese");
        assert_eq!(updated.age().get(), 4);
    }

    #[rstest]
    fn cat_serialises_camel_case() {
        let cat = Cat::new(CatId::new(9).expect("id"), draft());
        let value = serde_json::to_value(&cat).expect("serialise");
        assert_eq!(value["id"], 9);
        assert_eq!(value["name"], "Fig");
        assert_eq!(value["age"], 3);
        assert!(value["owner"].is_string());
    }
}
