pub mod domain;
pub mod infrastructure;

pub use domain::{CollectionMatcher, LibraryIndex, LibraryItem, MediaType};
pub use infrastructure::JellyfinAdapter;
