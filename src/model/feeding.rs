use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FeedingDto {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Meal code: `B`, `L`, `D` or `S`
    pub meal: String,
}
