pub mod domain;
pub mod infrastructure;

pub use domain::{FallbackReason, MetadataCandidate, MetadataProvider, Normalization, TitleNormalizer};
pub use infrastructure::TmdbAdapter;
