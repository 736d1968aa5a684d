pub mod dto;
pub mod service;

pub use dto::SearchResult;
pub use service::SearchOrchestrator;
