/*!
 * Run-preserving reinjection of translated text.
 *
 * Writes a translated string back into the structural slot its text unit was
 * extracted from. The formatting-collapse policy is deliberate and lossy:
 * a multi-run paragraph gets the whole translation in its first run and the
 * remaining runs are emptied, since inline formatting boundaries cannot be
 * reconstructed after translation.
 */

use crate::errors::DeckError;

use super::model::{Deck, Paragraph, Run, Shape, TextFrame};
use super::walker::{Axis, TargetRef, TargetSlot};

/// Write `text` into the slot addressed by `target`.
///
/// Fails with [`DeckError::TargetNotFound`] when the target no longer
/// resolves, which the caller treats as an isolated per-unit failure.
pub fn apply_translation(deck: &mut Deck, target: &TargetRef, text: &str) -> Result<(), DeckError> {
    let shape = deck
        .shape_at_mut(target.slide, &target.shape_path)
        .ok_or_else(|| not_found(target, "shape path does not resolve"))?;

    match (&target.slot, shape) {
        (TargetSlot::Paragraph { paragraph }, Shape::TextBox(text_box)) => {
            let paragraph = text_box
                .frame
                .paragraphs
                .get_mut(*paragraph)
                .ok_or_else(|| not_found(target, "paragraph index out of range"))?;
            write_paragraph(paragraph, text);
            Ok(())
        }
        (TargetSlot::TableCell { row, col }, Shape::Table(table)) => {
            let cell = table
                .rows
                .get_mut(*row)
                .and_then(|r| r.cells.get_mut(*col))
                .ok_or_else(|| not_found(target, "cell coordinates out of range"))?;
            write_cell_frame(&mut cell.frame, text);
            Ok(())
        }
        (TargetSlot::ChartTitle, Shape::Chart(chart)) => {
            chart.title = Some(text.to_string());
            Ok(())
        }
        (TargetSlot::AxisTitle { axis }, Shape::Chart(chart)) => {
            match axis {
                Axis::Category => chart.category_axis_title = Some(text.to_string()),
                Axis::Value => chart.value_axis_title = Some(text.to_string()),
            }
            Ok(())
        }
        (TargetSlot::SeriesName { series }, Shape::Chart(chart)) => {
            let series = chart
                .series
                .get_mut(*series)
                .ok_or_else(|| not_found(target, "series index out of range"))?;
            series.name = text.to_string();
            Ok(())
        }
        (TargetSlot::Category { index }, Shape::Chart(chart)) => {
            // Categories are written back by the same index used at
            // extraction time; the collection must not have been resized.
            let slot = chart
                .categories
                .get_mut(*index)
                .ok_or_else(|| not_found(target, "category index out of range"))?;
            *slot = text.to_string();
            Ok(())
        }
        (TargetSlot::DataLabel { series, label }, Shape::Chart(chart)) => {
            let slot = chart
                .series
                .get_mut(*series)
                .and_then(|s| s.data_labels.get_mut(*label))
                .ok_or_else(|| not_found(target, "data label index out of range"))?;
            *slot = text.to_string();
            Ok(())
        }
        (TargetSlot::FreeText, Shape::FreeText(free_text)) => {
            free_text.text = text.to_string();
            Ok(())
        }
        (_, _) => Err(not_found(target, "slot does not match shape kind")),
    }
}

/// Collapse a paragraph to a single textual run.
///
/// Zero runs: one run is created. One or more runs: the first run receives
/// the whole translation and keeps its formatting, every other run is
/// emptied but keeps its formatting attributes.
fn write_paragraph(paragraph: &mut Paragraph, text: &str) {
    match paragraph.runs.first_mut() {
        Some(first) => {
            first.text = text.to_string();
            for run in paragraph.runs.iter_mut().skip(1) {
                run.text.clear();
            }
        }
        None => {
            paragraph.runs.push(Run {
                text: text.to_string(),
                ..Default::default()
            });
        }
    }
}

/// A table cell is a single paragraph-like unit: every run in every
/// paragraph is cleared, then the first paragraph receives the translation.
fn write_cell_frame(frame: &mut TextFrame, text: &str) {
    for paragraph in &mut frame.paragraphs {
        for run in &mut paragraph.runs {
            run.text.clear();
        }
    }
    match frame.paragraphs.first_mut() {
        Some(first) => write_paragraph(first, text),
        None => {
            let mut paragraph = Paragraph::default();
            write_paragraph(&mut paragraph, text);
            frame.paragraphs.push(paragraph);
        }
    }
}

fn not_found(target: &TargetRef, reason: &str) -> DeckError {
    DeckError::TargetNotFound(format!(
        "slide {}, shape {:?}, slot {:?}: {}",
        target.slide + 1,
        target.shape_path,
        target.slot,
        reason
    ))
}
