/*!
 * Unit tests for the translation memory cache
 */

use slidetrans::translation::TranslationCache;

#[test]
fn test_cache_withStoredEntry_shouldReturnIt() {
    let cache = TranslationCache::new();
    cache.store("Hello", "en", "zh", "computer", "你好");

    assert_eq!(
        cache.get("Hello", "en", "zh", "computer"),
        Some("你好".to_string())
    );
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_shouldKeySeparatelyByLanguagePairAndDomain() {
    let cache = TranslationCache::new();
    cache.store("Hello", "en", "zh", "computer", "你好");

    assert!(cache.get("Hello", "en", "fr", "computer").is_none());
    assert!(cache.get("Hello", "de", "zh", "computer").is_none());
    assert!(cache.get("Hello", "en", "zh", "").is_none());
    assert!(cache.get("Hello", "en", "zh", "os").is_none());
}

#[test]
fn test_cache_shouldNormalizeTextByTrimming() {
    let cache = TranslationCache::new();
    cache.store("Hello", "en", "zh", "", "你好");

    assert_eq!(cache.get("  Hello  ", "en", "zh", ""), Some("你好".to_string()));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_shouldCountHitsAndMisses() {
    let cache = TranslationCache::new();
    assert!(cache.get("Hello", "en", "zh", "").is_none());

    cache.store("Hello", "en", "zh", "", "你好");
    assert!(cache.get("Hello", "en", "zh", "").is_some());

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_cache_withNoLookups_shouldReportZeroHitRate() {
    let cache = TranslationCache::new();
    assert_eq!(cache.stats().hit_rate(), 0.0);
    assert!(cache.is_empty());
}

#[test]
fn test_cache_withOverwrite_shouldKeepLatestEntry() {
    let cache = TranslationCache::new();
    cache.store("Hello", "en", "zh", "", "你好");
    cache.store("Hello", "en", "zh", "", "您好");

    assert_eq!(cache.get("Hello", "en", "zh", ""), Some("您好".to_string()));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_clonedCache_shouldShareStorage() {
    let cache = TranslationCache::new();
    let cloned = cache.clone();

    cloned.store("Hello", "en", "zh", "", "你好");
    assert_eq!(cache.get("Hello", "en", "zh", ""), Some("你好".to_string()));
    assert_eq!(cloned.stats().hits, 1);
}
