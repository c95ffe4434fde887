use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SignupDto {
    pub username: String,
    pub password1: String,
    pub password2: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}
