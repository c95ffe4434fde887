//! Toy domain models and parameters.

use crate::{model::toy::ToyDto, server::error::validation::ValidationError};

pub const COLOR_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 250;

#[derive(Debug, Clone, PartialEq)]
pub struct Toy {
    pub id: i32,
    pub color: String,
    pub description: String,
}

impl Toy {
    pub fn from_entity(entity: entity::toy::Model) -> Self {
        Self {
            id: entity.id,
            color: entity.color,
            description: entity.description,
        }
    }
}

/// Validated toy submission, shared by create and update.
#[derive(Debug, Clone)]
pub struct ToyParams {
    pub color: String,
    pub description: String,
}

impl ToyParams {
    pub fn from_dto(dto: ToyDto) -> Result<Self, ValidationError> {
        let color = dto.color.trim().to_string();
        let description = dto.description.trim().to_string();
        let mut errors = Vec::new();

        if color.is_empty() {
            errors.push("Color is required.".to_string());
        } else if color.chars().count() > COLOR_MAX_LEN {
            errors.push(format!("Color may be at most {} characters.", COLOR_MAX_LEN));
        }
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            errors.push(format!(
                "Description may be at most {} characters.",
                DESCRIPTION_MAX_LEN
            ));
        }

        ValidationError::check(errors)?;

        Ok(Self { color, description })
    }
}
