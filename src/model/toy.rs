use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ToyDto {
    pub color: String,
    pub description: String,
}
