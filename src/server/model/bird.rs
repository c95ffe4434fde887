//! Bird domain models and parameters.

use crate::{
    model::bird::{CreateBirdDto, UpdateBirdDto},
    server::{
        error::validation::ValidationError,
        model::{feeding::Feeding, photo::Photo, toy::Toy},
    },
};

pub const NAME_MAX_LEN: usize = 100;
pub const BREED_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 250;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub id: i32,
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
    /// Id of the owning user.
    pub user_id: i32,
}

impl Bird {
    /// Converts an entity model to a bird domain model at the repository boundary.
    pub fn from_entity(entity: entity::bird::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            breed: entity.breed,
            description: entity.description,
            age: entity.age,
            user_id: entity.user_id,
        }
    }
}

/// Everything the bird detail page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct BirdDetail {
    pub bird: Bird,
    /// Newest first.
    pub feedings: Vec<Feeding>,
    pub toys: Vec<Toy>,
    /// Toys not yet associated with the bird; disjoint from `toys`.
    pub available_toys: Vec<Toy>,
    pub photos: Vec<Photo>,
    pub fed_for_today: bool,
}

/// Validated bird creation submission. The owner comes from the session, never the form.
#[derive(Debug, Clone)]
pub struct CreateBirdParams {
    pub user_id: i32,
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
}

impl CreateBirdParams {
    /// Validates a creation form for `user_id`.
    ///
    /// # Returns
    /// - `Ok(CreateBirdParams)` - All fields satisfy their constraints
    /// - `Err(ValidationError)` - One message per failed constraint
    pub fn from_dto(user_id: i32, dto: CreateBirdDto) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();

        let name = required_text("Name", &dto.name, NAME_MAX_LEN, &mut errors);
        let breed = required_text("Breed", &dto.breed, BREED_MAX_LEN, &mut errors);
        let description = optional_text("Description", &dto.description, &mut errors);
        let age = parse_age(&dto.age, &mut errors);

        ValidationError::check(errors)?;

        Ok(Self {
            user_id,
            name,
            breed,
            description,
            age,
        })
    }
}

/// Validated bird update submission. Name is not updatable.
#[derive(Debug, Clone)]
pub struct UpdateBirdParams {
    pub breed: String,
    pub description: String,
    pub age: i32,
}

impl UpdateBirdParams {
    pub fn from_dto(dto: UpdateBirdDto) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();

        let breed = required_text("Breed", &dto.breed, BREED_MAX_LEN, &mut errors);
        let description = optional_text("Description", &dto.description, &mut errors);
        let age = parse_age(&dto.age, &mut errors);

        ValidationError::check(errors)?;

        Ok(Self {
            breed,
            description,
            age,
        })
    }
}

fn required_text(label: &str, value: &str, max_len: usize, errors: &mut Vec<String>) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.push(format!("{} is required.", label));
    } else if value.chars().count() > max_len {
        errors.push(format!("{} may be at most {} characters.", label, max_len));
    }
    value.to_string()
}

fn optional_text(label: &str, value: &str, errors: &mut Vec<String>) -> String {
    let value = value.trim();
    if value.chars().count() > DESCRIPTION_MAX_LEN {
        errors.push(format!(
            "{} may be at most {} characters.",
            label, DESCRIPTION_MAX_LEN
        ));
    }
    value.to_string()
}

fn parse_age(value: &str, errors: &mut Vec<String>) -> i32 {
    match value.trim().parse::<i32>() {
        Ok(age) if age >= 0 => age,
        Ok(_) => {
            errors.push("Age cannot be negative.".to_string());
            0
        }
        Err(_) => {
            errors.push("Age must be a whole number.".to_string());
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, breed: &str, age: &str) -> CreateBirdDto {
        CreateBirdDto {
            name: name.to_string(),
            breed: breed.to_string(),
            description: String::new(),
            age: age.to_string(),
        }
    }

    #[test]
    fn accepts_valid_bird() {
        let params = CreateBirdParams::from_dto(7, dto(" Robin ", "Finch", "2")).unwrap();

        assert_eq!(params.user_id, 7);
        assert_eq!(params.name, "Robin");
        assert_eq!(params.age, 2);
    }

    #[test]
    fn collects_every_failed_field() {
        let err = CreateBirdParams::from_dto(1, dto("", "", "two")).unwrap_err();

        assert_eq!(err.messages().len(), 3);
    }

    #[test]
    fn rejects_negative_age() {
        let err = UpdateBirdParams::from_dto(UpdateBirdDto {
            breed: "Finch".to_string(),
            description: String::new(),
            age: "-1".to_string(),
        })
        .unwrap_err();

        assert_eq!(err.messages(), ["Age cannot be negative."]);
    }
}
