pub mod entities;
pub mod repository;
pub mod services;

pub use entities::MetadataCandidate;
pub use repository::MetadataProvider;
pub use services::{FallbackReason, Normalization, TitleNormalizer};

#[cfg(test)]
pub use repository::MockMetadataProvider;
