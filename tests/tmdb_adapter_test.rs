use shelfcheck::modules::metadata::{
    FallbackReason, MetadataProvider, Normalization, TitleNormalizer, TmdbAdapter,
};
use shelfcheck::shared::errors::AppError;
use shelfcheck::shared::infrastructure::RateLimitClient;
use std::sync::Arc;
use std::time::Duration;

const TEST_API_KEY: &str = "14a032abcf1763ff7568aaf97994df89";

// Nothing listens on the discard port locally, so connections are refused
const UNREACHABLE: &str = "http://127.0.0.1:9/3";

fn unreachable_adapter() -> TmdbAdapter {
    let client = RateLimitClient::for_tmdb(Duration::from_secs(2)).unwrap();
    TmdbAdapter::with_base_url(client, TEST_API_KEY.to_string(), UNREACHABLE.to_string())
}

#[test]
fn test_adapter_creation() {
    let client = RateLimitClient::for_tmdb(Duration::from_secs(5)).unwrap();
    assert!(client.can_make_request_now());
    let _adapter = TmdbAdapter::new(client, TEST_API_KEY.to_string());
}

#[tokio::test]
async fn test_unreachable_search_is_an_error() {
    let adapter = unreachable_adapter();

    let result = adapter.search_movies("Inception").await;

    assert!(matches!(
        result,
        Err(AppError::ExternalServiceError(_)) | Err(AppError::ApiError(_))
    ));
}

#[tokio::test]
async fn test_unreachable_service_degrades_to_candidate() {
    let normalizer = TitleNormalizer::new(Arc::new(unreachable_adapter()), "en-US");

    let outcome = normalizer.normalize("Inception").await;

    assert_eq!(outcome.title(), "Inception");
    assert!(matches!(
        outcome,
        Normalization::Unchanged {
            reason: FallbackReason::LookupFailed(_),
            ..
        }
    ));
}
