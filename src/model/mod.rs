//! Form payloads submitted by the browser.
//!
//! Every field defaults to an empty string so a missing field reaches validation instead of
//! failing extraction.

pub mod auth;
pub mod bird;
pub mod feeding;
pub mod toy;
