/*!
 * Unit tests for the batch merge protocol and the session translation paths
 */

use slidetrans::providers::mock::MockProvider;
use slidetrans::translation::{SENTINEL, SENTINEL_TOKEN};
use tempfile::tempdir;

use crate::common::{session_with, session_with_terms, write_terms_file};

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_translateBatch_withEchoProvider_shouldPreserveCountAndOrder() {
    let mock = MockProvider::echoing();
    let session = session_with(&mock);

    let results = session
        .translate_batch(&texts(&["one", "two", "three"]))
        .await;

    assert_eq!(results, vec!["[T] one", "[T] two", "[T] three"]);
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn test_translateBatch_withEmptyInput_shouldIssueNoCall() {
    let mock = MockProvider::echoing();
    let session = session_with(&mock);

    assert!(session.translate_batch(&[]).await.is_empty());
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_translateBatch_shouldJoinUnitsWithSentinel() {
    let mock = MockProvider::echoing();
    let session = session_with(&mock);

    session.translate_batch(&texts(&["one", "two"])).await;

    let request = &mock.requests()[0];
    assert_eq!(request.user_text, format!("one{}two", SENTINEL));
    assert!(request.system_prompt.contains(SENTINEL_TOKEN));
}

#[tokio::test]
async fn test_translateBatch_withScriptedResponse_shouldSplitSegments() {
    let mock = MockProvider::scripted(vec![format!("你好世界{}数据", SENTINEL)]);
    let session = session_with(&mock);

    let results = session
        .translate_batch(&texts(&["Hello world", "Data"]))
        .await;

    assert_eq!(results, vec!["你好世界", "数据"]);
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn test_translateBatch_withDroppedSentinel_shouldFallBackPerUnit() {
    // First response collapses both units into one segment, the per-unit
    // retries then succeed
    let mock = MockProvider::scripted(vec![
        "你好世界 数据".to_string(),
        "你好世界".to_string(),
        "数据".to_string(),
    ]);
    let session = session_with(&mock);

    let results = session
        .translate_batch(&texts(&["Hello world", "Data"]))
        .await;

    assert_eq!(results, vec!["你好世界", "数据"]);
    assert_eq!(mock.request_count(), 3);
}

#[tokio::test]
async fn test_translateBatch_withProviderFailure_shouldReturnOriginals() {
    let mock = MockProvider::failing();
    let session = session_with(&mock);

    let input = texts(&["one", "two"]);
    let results = session.translate_batch(&input).await;

    assert_eq!(results, input);
    // A hard provider failure is not retried per unit
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn test_translateBatch_withTerms_shouldHintOnlyPresentTerms() {
    let dir = tempdir().unwrap();
    write_terms_file(dir.path(), "computer", &["CPU = 中央处理器", "GPU = 图形处理器"]);

    let mock = MockProvider::echoing();
    let session = session_with_terms(&mock, dir.path(), "computer");

    session
        .translate_batch(&texts(&["The CPU is busy", "All quiet"]))
        .await;

    let prompt = &mock.requests()[0].system_prompt;
    assert!(prompt.contains("CPU = 中央处理器"));
    assert!(!prompt.contains("GPU"));
}

#[tokio::test]
async fn test_translateBatch_shouldEnforceTerminologyOnResults() {
    let dir = tempdir().unwrap();
    write_terms_file(dir.path(), "computer", &["CPU = 中央处理器"]);

    // The provider leaves the term untranslated in its output
    let mock = MockProvider::scripted(vec!["CPU 很忙".to_string()]);
    let session = session_with_terms(&mock, dir.path(), "computer");

    let results = session.translate_batch(&texts(&["The CPU is busy"])).await;
    assert_eq!(results, vec!["中央处理器 很忙"]);
}

#[tokio::test]
async fn test_translateSingle_withRepeatedText_shouldHitCache() {
    let mock = MockProvider::echoing();
    let session = session_with(&mock);

    let first = session.translate_single("Hello").await;
    let second = session.translate_single("Hello").await;

    assert_eq!(first, "[T] Hello");
    assert_eq!(second, first);
    assert_eq!(mock.request_count(), 1);

    let stats = session.cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[tokio::test]
async fn test_translateSingle_withEmptyText_shouldIssueNoCall() {
    let mock = MockProvider::echoing();
    let session = session_with(&mock);

    assert_eq!(session.translate_single("   ").await, "   ");
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_translateSingle_withProviderFailure_shouldKeepOriginal() {
    let mock = MockProvider::failing();
    let session = session_with(&mock);

    assert_eq!(session.translate_single("Hello").await, "Hello");
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn test_translateBatch_shouldNotConsultCacheBeforeTheCall() {
    let mock = MockProvider::echoing();
    let session = session_with(&mock);

    // Seed the cache through the single-unit path
    session.translate_single("Hello").await;
    assert_eq!(mock.request_count(), 1);

    // The batch path always issues its merged call
    let results = session.translate_batch(&texts(&["Hello"])).await;
    assert_eq!(results, vec!["[T] Hello"]);
    assert_eq!(mock.request_count(), 2);
}

#[tokio::test]
async fn test_translateBatch_fallback_shouldServeRepeatsFromCache() {
    // One mismatched batch response, then a single per-unit success; the
    // repeated unit is then served from the translation memory
    let mock = MockProvider::scripted(vec!["collapsed".to_string(), "你好".to_string()]);
    let session = session_with(&mock);

    let results = session.translate_batch(&texts(&["Hello", "Hello"])).await;
    assert_eq!(results, vec!["你好", "你好"]);
    // merged call + one per-unit call; the second unit was a cache hit
    assert_eq!(mock.request_count(), 2);
}
