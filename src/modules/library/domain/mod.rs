pub mod entities;
pub mod repository;
pub mod services;

pub use entities::{LibraryItem, MediaType};
pub use repository::LibraryIndex;
pub use services::CollectionMatcher;

#[cfg(test)]
pub use repository::MockLibraryIndex;
