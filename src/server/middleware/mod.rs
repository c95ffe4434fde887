//! Request guards and session wrappers shared by controllers.
//!
//! - `session` - Type-safe access to values stored in the user's session
//! - `auth` - `AuthGuard`, which resolves the logged-in user and checks permissions

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
