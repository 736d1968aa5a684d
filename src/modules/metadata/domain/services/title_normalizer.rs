use std::sync::Arc;

use crate::{
    modules::metadata::domain::{MetadataCandidate, MetadataProvider},
    shared::{errors::AppError, utils::logger::LogContext},
};

/// Why normalization kept the caller's title
#[derive(Debug)]
pub enum FallbackReason {
    /// No metadata service configured
    Disabled,
    /// The service knows no movie by that title
    NoResults,
    /// The service failed, timed out or answered with garbage
    LookupFailed(AppError),
}

/// Outcome of [`TitleNormalizer::normalize`]
#[derive(Debug)]
pub enum Normalization {
    Canonical { title: String, candidate_id: u64 },
    Unchanged { title: String, reason: FallbackReason },
}

impl Normalization {
    pub fn title(&self) -> &str {
        match self {
            Normalization::Canonical { title, .. } | Normalization::Unchanged { title, .. } => {
                title.as_str()
            }
        }
    }

    pub fn into_title(self) -> String {
        match self {
            Normalization::Canonical { title, .. } | Normalization::Unchanged { title, .. } => {
                title
            }
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, Normalization::Canonical { .. })
    }
}

/// Resolves a candidate title to the metadata service's canonical title
pub struct TitleNormalizer {
    provider: Option<Arc<dyn MetadataProvider>>,
    locale: String,
}

impl TitleNormalizer {
    pub fn new(provider: Arc<dyn MetadataProvider>, locale: impl Into<String>) -> Self {
        Self {
            provider: Some(provider),
            locale: locale.into(),
        }
    }

    /// Normalizer that always returns its input
    pub fn disabled() -> Self {
        Self {
            provider: None,
            locale: String::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Never fails: every problem degrades to `Normalization::Unchanged`.
    pub async fn normalize(&self, candidate: &str) -> Normalization {
        let Some(provider) = &self.provider else {
            return Normalization::Unchanged {
                title: candidate.to_string(),
                reason: FallbackReason::Disabled,
            };
        };

        match self.resolve(provider.as_ref(), candidate).await {
            Ok(Some((candidate_id, title))) => {
                log::info!("Canonical title for '{}': '{}'", candidate, title);
                Normalization::Canonical {
                    title,
                    candidate_id,
                }
            }
            Ok(None) => {
                log::info!("No metadata match for '{}', keeping it", candidate);
                Normalization::Unchanged {
                    title: candidate.to_string(),
                    reason: FallbackReason::NoResults,
                }
            }
            Err(e) => {
                log::warn!(
                    "Metadata lookup failed for '{}', using original title: {}",
                    candidate,
                    e
                );
                Normalization::Unchanged {
                    title: candidate.to_string(),
                    reason: FallbackReason::LookupFailed(e),
                }
            }
        }
    }

    async fn resolve(
        &self,
        provider: &dyn MetadataProvider,
        candidate: &str,
    ) -> Result<Option<(u64, String)>, AppError> {
        LogContext::search_operation(candidate, Some("metadata"), None);
        let results = provider.search_movies(candidate).await?;
        LogContext::search_operation(candidate, Some("metadata"), Some(results.len()));

        let Some(best) = Self::select_best(&results, candidate) else {
            return Ok(None);
        };

        let title = provider.localized_title(best.id, &self.locale).await?;
        if title.trim().is_empty() {
            return Err(AppError::SerializationError(format!(
                "empty title for movie {}",
                best.id
            )));
        }

        Ok(Some((best.id, title)))
    }

    /// First exact (case-insensitive) title match, else the top-ranked result
    pub fn select_best<'a>(
        results: &'a [MetadataCandidate],
        candidate: &str,
    ) -> Option<&'a MetadataCandidate> {
        results
            .iter()
            .find(|result| result.is_exact_match(candidate))
            .or_else(|| results.first())
    }
}
