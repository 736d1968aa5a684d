pub mod title_normalizer;

pub use title_normalizer::{FallbackReason, Normalization, TitleNormalizer};
