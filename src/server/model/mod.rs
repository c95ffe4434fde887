//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary. Parameter
//! types are built from submitted form DTOs and carry the field validation, so a value of a
//! `*Params` type is always fit to persist.

pub mod bird;
pub mod feeding;
pub mod photo;
pub mod toy;
pub mod user;
