//! Feeding log entries.
//!
//! A [`FeedingForm`] holds raw submitted strings. Validation turns it into a
//! [`FeedingDraft`], which only becomes persistable once linked to a cat via
//! [`FeedingDraft::for_cat`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CatId;
use super::validation::{FieldViolation, define_record_id};

define_record_id!(
    /// Database identifier of a feeding.
    FeedingId,
    "feeding"
);

/// Date format accepted by the feeding form.
pub const FEEDING_DATE_FORMAT: &str = "%Y-%m-%d";

/// Meal of the day. Stored and exchanged as its one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meal {
    #[serde(rename = "B")]
    Breakfast,
    #[serde(rename = "L")]
    Lunch,
    #[serde(rename = "D")]
    Dinner,
}

impl Meal {
    /// Every meal in display order.
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    /// One-letter storage code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Breakfast => "B",
            Self::Lunch => "L",
            Self::Dinner => "D",
        }
    }

    /// Human label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a meal code is not one of `B`, `L` or `D`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown meal code: {input}")]
pub struct ParseMealError {
    pub input: String,
}

impl FromStr for Meal {
    type Err = ParseMealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(Self::Breakfast),
            "L" => Ok(Self::Lunch),
            "D" => Ok(Self::Dinner),
            other => Err(ParseMealError {
                input: other.to_owned(),
            }),
        }
    }
}

/// Validation errors for a submitted feeding form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedingValidationError {
    MissingDate,
    InvalidDate { value: String },
    MissingMeal,
    InvalidMeal { value: String },
}

impl fmt::Display for FeedingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDate => write!(f, "feeding date is required"),
            Self::InvalidDate { value } => {
                write!(f, "feeding date must use YYYY-MM-DD, got {value:?}")
            }
            Self::MissingMeal => write!(f, "meal is required"),
            Self::InvalidMeal { value } => {
                write!(f, "meal must be one of B, L or D, got {value:?}")
            }
        }
    }
}

impl std::error::Error for FeedingValidationError {}

impl FieldViolation for FeedingValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::MissingDate | Self::InvalidDate { .. } => "date",
            Self::MissingMeal | Self::InvalidMeal { .. } => "meal",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::MissingDate | Self::MissingMeal => "required",
            Self::InvalidDate { .. } => "invalid_date",
            Self::InvalidMeal { .. } => "invalid_choice",
        }
    }
}

/// Raw feeding submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedingForm {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub meal: Option<String>,
}

/// Validated feeding not yet linked to a cat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedingDraft {
    date: NaiveDate,
    meal: Meal,
}

impl FeedingDraft {
    /// Link the draft to the cat it describes.
    pub fn for_cat(self, cat_id: CatId) -> NewFeeding {
        NewFeeding {
            cat_id,
            date: self.date,
            meal: self.meal,
        }
    }
}

fn required(value: Option<&String>) -> Option<&str> {
    value.map(|raw| raw.trim()).filter(|raw| !raw.is_empty())
}

impl TryFrom<&FeedingForm> for FeedingDraft {
    type Error = FeedingValidationError;

    fn try_from(form: &FeedingForm) -> Result<Self, Self::Error> {
        let raw_date = required(form.date.as_ref()).ok_or(FeedingValidationError::MissingDate)?;
        let date = NaiveDate::parse_from_str(raw_date, FEEDING_DATE_FORMAT).map_err(|_| {
            FeedingValidationError::InvalidDate {
                value: raw_date.to_owned(),
            }
        })?;
        let raw_meal = required(form.meal.as_ref()).ok_or(FeedingValidationError::MissingMeal)?;
        let meal = raw_meal
            .parse::<Meal>()
            .map_err(|err| FeedingValidationError::InvalidMeal { value: err.input })?;
        Ok(Self { date, meal })
    }
}

/// Feeding ready to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFeeding {
    pub cat_id: CatId,
    pub date: NaiveDate,
    pub meal: Meal,
}

/// A persisted feeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feeding {
    id: FeedingId,
    cat_id: CatId,
    date: NaiveDate,
    meal: Meal,
}

impl Feeding {
    pub fn new(id: FeedingId, new: NewFeeding) -> Self {
        Self {
            id,
            cat_id: new.cat_id,
            date: new.date,
            meal: new.meal,
        }
    }

    pub fn id(&self) -> FeedingId {
        self.id
    }

    pub fn cat_id(&self) -> CatId {
        self.cat_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn meal(&self) -> Meal {
        self.meal
    }
}

/// Newest first, then by id for a stable order within one day.
pub fn sort_newest_first(feedings: &mut [Feeding]) {
    feedings.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
}

/// One selectable meal in the empty feeding form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealChoice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Shape of an empty feeding form for clients rendering one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingFormDescriptor {
    pub fields: Vec<&'static str>,
    pub meal_choices: Vec<MealChoice>,
}

impl Default for FeedingFormDescriptor {
    fn default() -> Self {
        Self {
            fields: vec!["date", "meal"],
            meal_choices: Meal::ALL
                .iter()
                .map(|meal| MealChoice {
                    value: meal.code(),
                    label: meal.label(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn form(date: Option<&str>, meal: Option<&str>) -> FeedingForm {
        FeedingForm {
            date: date.map(str::to_owned),
            meal: meal.map(str::to_owned),
        }
    }

    #[rstest]
    #[case(form(None, Some("B")), FeedingValidationError::MissingDate)]
    #[case(form(Some("  "), Some("B")), FeedingValidationError::MissingDate)]
    #[case(form(Some("15/01/2024"), Some("B")), FeedingValidationError::InvalidDate { value: "15/01/2024".to_owned() })]
    #[case(form(Some("2024-01-15"), None), FeedingValidationError::MissingMeal)]
    #[case(form(Some("2024-01-15"), Some("S")), FeedingValidationError::InvalidMeal { value: "S".to_owned() })]
    fn draft_rejects_incomplete_forms(
        #[case] form: FeedingForm,
        #[case] expected: FeedingValidationError,
    ) {
        assert_eq!(FeedingDraft::try_from(&form), Err(expected));
    }

    #[rstest]
    fn draft_links_to_cat() {
        let draft = FeedingDraft::try_from(&form(Some("2024-01-15"), Some("L"))).expect("valid");
        let cat_id = CatId::new(4).expect("id");
        let new = draft.for_cat(cat_id);
        assert_eq!(new.cat_id, cat_id);
        assert_eq!(new.meal, Meal::Lunch);
        assert_eq!(
            new.date,
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("date")
        );
    }

    #[rstest]
    fn sorting_puts_newest_first() {
        let cat_id = CatId::new(1).expect("id");
        let feeding = |id: i32, day: u32| {
            Feeding::new(
                FeedingId::new(id).expect("id"),
                NewFeeding {
                    cat_id,
                    date: NaiveDate::from_ymd_opt(2024, 3, day).expect("date"),
                    meal: Meal::Dinner,
                },
            )
        };
        let mut feedings = vec![feeding(1, 1), feeding(2, 3), feeding(3, 2), feeding(4, 3)];
        sort_newest_first(&mut feedings);
        let ids: Vec<i32> = feedings.iter().map(|f| f.id().get()).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[rstest]
    fn meal_serialises_as_code() {
        assert_eq!(serde_json::to_value(Meal::Dinner).expect("serialise"), "D");
        assert_eq!(Meal::Breakfast.to_string(), "Breakfast");
    }

    #[rstest]
    fn descriptor_lists_meal_choices() {
        let descriptor = FeedingFormDescriptor::default();
        assert_eq!(descriptor.fields, vec!["date", "meal"]);
        let codes: Vec<&str> = descriptor.meal_choices.iter().map(|c| c.value).collect();
        assert_eq!(codes, vec!["B", "L", "D"]);
    }
}
