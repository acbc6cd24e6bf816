//! Domain models
//!
//! Query windows are validated when constructed.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod hero;
pub mod item;
pub mod person;
pub mod pagination;

pub use validation::ValidationError;
pub use hero::{Hero, HeroCreate};
pub use item::{Item, ItemEcho, ItemQuery, ItemUpdated};
pub use person::{generate_people, random_people, Person, PEOPLE_PER_PAGE};
pub use pagination::{ListParams, ListWindow};
