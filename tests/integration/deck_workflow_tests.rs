/*!
 * End-to-end tests: open a deck, translate it through a mock provider, save
 * it, and inspect the result.
 */

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::Arc;

use slidetrans::app_config::Config;
use slidetrans::app_controller::Controller;
use slidetrans::deck::{Deck, DeckStore, Shape};
use slidetrans::providers::mock::MockProvider;
use slidetrans::providers::Provider;
use tempfile::tempdir;

use crate::common::{sample_deck, write_terms_file};

fn stage_deck(dir: &std::path::Path, deck: &Deck) -> (PathBuf, PathBuf) {
    let input = dir.join("input.json");
    let output = dir.join("output.json");
    DeckStore::save(deck, &input).unwrap();
    (input, output)
}

fn controller_with(config: Config, mock: &MockProvider) -> Controller {
    let provider: Arc<dyn Provider> = Arc::new(mock.clone());
    Controller::with_provider(config, provider).unwrap()
}

#[tokio::test]
async fn test_translateDocument_withEchoProvider_shouldTranslateEveryUnit() {
    let dir = tempdir().unwrap();
    let (input, output) = stage_deck(dir.path(), &sample_deck());

    let mock = MockProvider::echoing();
    let controller = controller_with(Config::default(), &mock);
    let report = controller
        .translate_document(&input, &output, |_, _| {})
        .await
        .unwrap();

    assert_eq!(report.slides, 2);
    assert_eq!(report.units_total, 14);
    assert_eq!(report.units_skipped, 1);
    assert_eq!(report.units_translated, 13);
    assert_eq!(report.units_unchanged, 0);
    assert_eq!(report.units_failed, 0);

    let result = DeckStore::open(&output).unwrap();

    // Paragraph translation collapsed into the first run
    let Shape::TextBox(tb) = &result.slides[0].shapes[0] else {
        panic!("expected a text box");
    };
    assert_eq!(tb.frame.paragraphs[0].runs[0].text, "[T] Hello world");
    assert_eq!(tb.frame.paragraphs[0].runs[1].text, "");
    // The boilerplate-only paragraph stays untouched
    assert_eq!(tb.frame.paragraphs[1].text(), "Click to add text");
    assert_eq!(tb.frame.paragraphs[2].text(), "[T] Data");

    let Shape::Table(table) = &result.slides[0].shapes[1] else {
        panic!("expected a table");
    };
    assert_eq!(table.rows[0].cells[0].text(), "[T] Alpha");
    assert_eq!(table.rows[0].cells[1].text(), "[T] Beta");

    let Shape::Chart(chart) = &result.slides[1].shapes[0] else {
        panic!("expected a chart");
    };
    assert_eq!(chart.title.as_deref(), Some("[T] Sales"));
    assert_eq!(chart.category_axis_title.as_deref(), Some("[T] Quarter"));
    assert_eq!(chart.value_axis_title.as_deref(), Some("[T] Revenue"));
    assert_eq!(chart.series[0].name, "[T] North");
    assert_eq!(chart.categories, vec!["[T] Q1", "[T] Q2"]);
    assert_eq!(chart.series[0].data_labels, vec!["[T] 10", "[T] Peak"]);

    let Shape::FreeText(free_text) = result.shape_at(1, &[1, 0]).unwrap() else {
        panic!("expected grouped free text");
    };
    assert_eq!(free_text.text, "[T] Grouped note");
}

#[tokio::test]
async fn test_translateDocument_shouldPreserveUnrecognizedShapes() {
    let dir = tempdir().unwrap();
    let (input, output) = stage_deck(dir.path(), &sample_deck());

    let mock = MockProvider::echoing();
    let controller = controller_with(Config::default(), &mock);
    controller
        .translate_document(&input, &output, |_, _| {})
        .await
        .unwrap();

    let result = DeckStore::open(&output).unwrap();
    let Shape::Unrecognized(raw) = result.shape_at(1, &[2]).unwrap() else {
        panic!("expected the unrecognized shape to survive");
    };
    assert_eq!(
        *raw,
        serde_json::json!({
            "kind": "smart_art",
            "nodes": [{"text": "untouchable"}]
        })
    );
}

#[tokio::test]
async fn test_translateDocument_shouldBatchPerShapeAndReportProgressPerSlide() {
    let dir = tempdir().unwrap();
    let (input, output) = stage_deck(dir.path(), &sample_deck());

    let mock = MockProvider::echoing();
    let controller = controller_with(Config::default(), &mock);

    let progress_calls = RefCell::new(Vec::new());
    controller
        .translate_document(&input, &output, |done, total| {
            progress_calls.borrow_mut().push((done, total));
        })
        .await
        .unwrap();

    assert_eq!(*progress_calls.borrow(), vec![(1, 2), (2, 2)]);
    // One merged request per text-bearing shape: text box, table, chart,
    // and the group on slide 2
    assert_eq!(mock.request_count(), 4);
}

#[tokio::test]
async fn test_translateDocument_withFailingProvider_shouldSaveDocumentUnchanged() {
    let dir = tempdir().unwrap();
    let deck = sample_deck();
    let (input, output) = stage_deck(dir.path(), &deck);

    let mock = MockProvider::failing();
    let controller = controller_with(Config::default(), &mock);
    let report = controller
        .translate_document(&input, &output, |_, _| {})
        .await
        .unwrap();

    assert_eq!(report.units_translated, 0);
    assert_eq!(report.units_unchanged, 13);
    assert_eq!(report.units_skipped, 1);
    assert_eq!(report.units_failed, 0);

    let result = DeckStore::open(&output).unwrap();
    assert_eq!(result, deck);
}

#[tokio::test]
async fn test_translateDocument_withDomainTerms_shouldEnforceTerminology() {
    let dir = tempdir().unwrap();
    let (input, output) = stage_deck(dir.path(), &sample_deck());
    write_terms_file(dir.path(), "computer", &["Data = 数据"]);

    let mut config = Config::default();
    config.domain = Some("computer".to_string());
    config.terms_dir = dir.path().to_path_buf();

    let mock = MockProvider::echoing();
    let controller = controller_with(config, &mock);
    controller
        .translate_document(&input, &output, |_, _| {})
        .await
        .unwrap();

    let result = DeckStore::open(&output).unwrap();
    let Shape::TextBox(tb) = &result.slides[0].shapes[0] else {
        panic!("expected a text box");
    };
    // The echo provider leaves "Data" untranslated; enforcement rewrites it
    assert_eq!(tb.frame.paragraphs[2].text(), "[T] 数据");

    // The merged request for the text box carried the matching hint
    let hinted = mock
        .requests()
        .iter()
        .any(|r| r.system_prompt.contains("Data = 数据"));
    assert!(hinted);
}

#[tokio::test]
async fn test_translateDocument_withMissingInput_shouldFail() {
    let dir = tempdir().unwrap();
    let mock = MockProvider::echoing();
    let controller = controller_with(Config::default(), &mock);

    let result = controller
        .translate_document(
            &dir.path().join("missing.json"),
            &dir.path().join("out.json"),
            |_, _| {},
        )
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_translateDocument_withEmptyDeck_shouldSucceedWithEmptyReport() {
    let dir = tempdir().unwrap();
    let (input, output) = stage_deck(dir.path(), &Deck::default());

    let mock = MockProvider::echoing();
    let controller = controller_with(Config::default(), &mock);
    let report = controller
        .translate_document(&input, &output, |_, _| {})
        .await
        .unwrap();

    assert_eq!(report.units_total, 0);
    assert_eq!(mock.request_count(), 0);
    assert!(DeckStore::open(&output).is_ok());
}
