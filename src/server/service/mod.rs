//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They combine repository
//! calls into the operations pages need, apply business rules such as username uniqueness
//! and the fed-for-today status, and coordinate the photo upload with its database record.
//! Ownership is checked by `AuthGuard` before a service is called.

pub mod auth;
pub mod bird;
pub mod feeding;
pub mod photo;
pub mod toy;

#[cfg(test)]
mod test;
