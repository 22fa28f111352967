//! Item repository binding
//!
//! Keeps a named, ordered list of items in sync with every element tagged
//! with the list's name: adding, removing, selecting and refreshing items
//! mirror onto rendered child elements.

pub mod cache;
pub mod component;
pub mod config;
pub mod error;
pub mod item;
pub mod markup;
pub mod store;

mod repository;

pub use component::Component;
pub use config::RepositoryOptions;
pub use error::{RepositoryError, Result};
pub use item::Item;
pub use repository::Repository;
pub use store::Store;
