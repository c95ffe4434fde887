//! Photo domain model.

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: i32,
    /// Fully qualified URL of the object in storage.
    pub url: String,
    pub bird_id: i32,
}

impl Photo {
    pub fn from_entity(entity: entity::photo::Model) -> Self {
        Self {
            id: entity.id,
            url: entity.url,
            bird_id: entity.bird_id,
        }
    }
}
