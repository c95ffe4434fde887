//! HTTP request handlers.
//!
//! Handlers resolve the current user through `AuthGuard`, turn submitted forms into
//! validated params, call a service and answer with a rendered page or a `303 See Other`
//! redirect. Errors propagate as `AppError`, which renders the matching error page.

pub mod account;
pub mod bird;
pub mod page;
pub mod toy;

#[cfg(test)]
mod test;
