use serde::Deserialize;

/// Bird creation form. Age stays text so a bad value can be reported alongside other fields.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateBirdDto {
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: String,
}

/// Bird update form; the name is deliberately absent.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateBirdDto {
    pub breed: String,
    pub description: String,
    pub age: String,
}
