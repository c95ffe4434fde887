//! Feeding domain models and parameters.

use chrono::NaiveDate;
use entity::feeding::Meal;

use crate::{model::feeding::FeedingDto, server::error::validation::ValidationError};

/// Date format accepted from the feeding form (`<input type="date">`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct Feeding {
    pub id: i32,
    pub date: NaiveDate,
    pub meal: Meal,
    pub bird_id: i32,
}

impl Feeding {
    pub fn from_entity(entity: entity::feeding::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            meal: entity.meal,
            bird_id: entity.bird_id,
        }
    }
}

/// Whether breakfast, lunch and dinner have all been logged on `today`.
///
/// Snacks do not count towards being fed for the day.
pub fn fed_for_today(feedings: &[Feeding], today: NaiveDate) -> bool {
    [Meal::Breakfast, Meal::Lunch, Meal::Dinner]
        .iter()
        .all(|meal| {
            feedings
                .iter()
                .any(|feeding| feeding.date == today && feeding.meal == *meal)
        })
}

/// Validated feeding submission.
#[derive(Debug, Clone)]
pub struct CreateFeedingParams {
    pub bird_id: i32,
    pub date: NaiveDate,
    pub meal: Meal,
}

impl CreateFeedingParams {
    /// Validates a feeding form for `bird_id`.
    ///
    /// Missing fields deserialize as empty strings and fail here like malformed ones.
    ///
    /// # Returns
    /// - `Ok(CreateFeedingParams)` - Date parses as `YYYY-MM-DD` and meal is a known code
    /// - `Err(ValidationError)` - One message per failed field
    pub fn from_dto(bird_id: i32, dto: FeedingDto) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();

        let date = match NaiveDate::parse_from_str(dto.date.trim(), DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push("Enter a valid feeding date.".to_string());
                None
            }
        };
        let meal = Meal::from_code(dto.meal.trim());
        if meal.is_none() {
            errors.push("Select a valid meal.".to_string());
        }

        match (date, meal) {
            (Some(date), Some(meal)) => Ok(Self {
                bird_id,
                date,
                meal,
            }),
            _ => Err(ValidationError(errors)),
        }
    }
}
