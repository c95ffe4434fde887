//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories take the ids of the
//! rows they depend on, while `helpers` creates whole dependency chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let bird = factory::bird::create_bird(&db, user.id).await?;
//!
//! let (user, bird) = factory::helpers::create_bird_with_owner(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let bird = factory::bird::BirdFactory::new(&db, user.id)
//!     .name("Robin")
//!     .breed("Finch")
//!     .age(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `bird` - Create bird entities owned by a user
//! - `toy` - Create toy entities
//! - `feeding` - Create feedings for a bird
//! - `photo` - Create photos for a bird
//! - `helpers` - Unique id counter and dependency chains

pub mod bird;
pub mod feeding;
pub mod helpers;
pub mod photo;
pub mod toy;
pub mod user;

pub use bird::create_bird;
pub use feeding::create_feeding;
pub use photo::create_photo;
pub use toy::{associate_toy, create_toy};
pub use user::create_user;
