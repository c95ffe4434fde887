//! Database repository layer for all domain entities.
//!
//! Repositories handle database operations (CRUD) for each domain in the application. They
//! use SeaORM entity models internally and return domain models, keeping the service layer
//! free of query details. Relationship traversal is explicit: each join the pages need is a
//! named repository method.

pub mod bird;
pub mod feeding;
pub mod photo;
pub mod toy;
pub mod user;

#[cfg(test)]
mod test;
