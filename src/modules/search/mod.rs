pub mod application;

pub use application::{SearchOrchestrator, SearchResult};
