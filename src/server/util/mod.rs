pub mod password;
pub mod upload;
