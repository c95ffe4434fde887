//! SeaORM entity models for the bird collector schema.

pub mod prelude;

pub mod bird;
pub mod bird_toy;
pub mod feeding;
pub mod photo;
pub mod toy;
pub mod user;
