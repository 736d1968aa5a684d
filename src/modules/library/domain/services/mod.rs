pub mod collection_matcher;

pub use collection_matcher::CollectionMatcher;
