/*!
 * Unit tests for ordered text extraction
 */

use slidetrans::deck::{Deck, DeckWalker, Shape, Slide, TargetSlot, TextKind};

use crate::common;

#[test]
fn test_walk_withSampleDeck_shouldYieldUnitsInReadingOrder() {
    let deck = common::sample_deck();
    let units = DeckWalker::walk(&deck);

    let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            // Slide 1: text box paragraphs, then table cells
            "Hello world",
            "Click to add text",
            "Data",
            "Alpha",
            "Beta",
            // Slide 2: chart title, axis titles, series names, categories,
            // data labels, then the grouped free-text shape
            "Sales",
            "Quarter",
            "Revenue",
            "North",
            "Q1",
            "Q2",
            "10",
            "Peak",
            "Grouped note",
        ]
    );
}

#[test]
fn test_walk_shouldAssignSequentialIds() {
    let deck = common::sample_deck();
    let units = DeckWalker::walk(&deck);

    for (idx, unit) in units.iter().enumerate() {
        assert_eq!(unit.id, idx);
    }
}

#[test]
fn test_walk_shouldClassifyUnitsByStructuralKind() {
    let deck = common::sample_deck();
    let units = DeckWalker::walk(&deck);

    let kinds: Vec<TextKind> = units.iter().map(|u| u.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TextKind::Paragraph,
            TextKind::Paragraph,
            TextKind::Paragraph,
            TextKind::TableCell,
            TextKind::TableCell,
            TextKind::ChartTitle,
            TextKind::AxisTitle,
            TextKind::AxisTitle,
            TextKind::SeriesName,
            TextKind::Category,
            TextKind::Category,
            TextKind::DataLabel,
            TextKind::DataLabel,
            TextKind::FreeText,
        ]
    );
}

#[test]
fn test_walk_shouldNotMutateTheDeck() {
    let deck = common::sample_deck();
    let before = deck.clone();

    let _ = DeckWalker::walk(&deck);
    assert_eq!(deck, before);
}

#[test]
fn test_walk_withNestedGroup_shouldRecordFullShapePath() {
    let deck = common::sample_deck();
    let units = DeckWalker::walk(&deck);

    let grouped = units
        .iter()
        .find(|u| u.text == "Grouped note")
        .expect("grouped free text missing");
    assert_eq!(grouped.target.slide, 1);
    assert_eq!(grouped.target.shape_path, vec![1, 0]);
    assert_eq!(grouped.target.slot, TargetSlot::FreeText);
}

#[test]
fn test_walk_withWhitespaceOnlyText_shouldSkipUnit() {
    let deck = Deck {
        slides: vec![Slide {
            shapes: vec![common::text_box(&[&["   "], &["real"], &[]])],
            ..Default::default()
        }],
        ..Default::default()
    };

    let units = DeckWalker::walk(&deck);
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].text, "real");
    // The skipped paragraphs still count toward slot indices
    assert_eq!(units[0].target.slot, TargetSlot::Paragraph { paragraph: 1 });
}

#[test]
fn test_walk_withUnrecognizedShape_shouldYieldNoUnitsForIt() {
    let deck = Deck {
        slides: vec![Slide {
            shapes: vec![Shape::Unrecognized(serde_json::json!({
                "kind": "smart_art",
                "nodes": [{"text": "hidden"}]
            }))],
            ..Default::default()
        }],
        ..Default::default()
    };

    assert!(DeckWalker::walk(&deck).is_empty());
}
