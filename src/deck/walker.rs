/*!
 * Ordered text extraction from a deck.
 *
 * The walker visits slides, shapes, and shape sub-elements in natural reading
 * order and yields one `TextUnit` per translatable fragment, each bound to
 * the exact structural slot it must be written back to. The walk never
 * mutates the tree and never aborts on a single shape.
 */

use log::debug;

use super::model::{Chart, Deck, Shape, Table, TextFrame};

/// Classification of a text unit by the structural element it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Paragraph,
    TableCell,
    ChartTitle,
    AxisTitle,
    SeriesName,
    Category,
    DataLabel,
    FreeText,
}

/// Chart axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Category,
    Value,
}

/// The exact sub-element of a shape that a text unit belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSlot {
    /// Paragraph index inside a text box frame
    Paragraph { paragraph: usize },
    /// Cell coordinates inside a table
    TableCell { row: usize, col: usize },
    /// The chart title
    ChartTitle,
    /// One of the chart axis titles
    AxisTitle { axis: Axis },
    /// Legend name of a series
    SeriesName { series: usize },
    /// Positionally indexed category label
    Category { index: usize },
    /// Data label of one series
    DataLabel { series: usize, label: usize },
    /// The single text value of a free-text shape
    FreeText,
}

/// Opaque back-pointer to the write target of a text unit.
///
/// Targets address by position (slide, path through nested groups, slot) and
/// are only valid as long as the tree is not structurally mutated between
/// walk and reinjection. They are never used for unit equality or ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRef {
    /// Slide index
    pub slide: usize,
    /// Indices from the slide's shape list down through nested groups
    pub shape_path: Vec<usize>,
    /// The sub-element inside the resolved shape
    pub slot: TargetSlot,
}

/// A minimal translatable fragment bound to its structural location
#[derive(Debug, Clone)]
pub struct TextUnit {
    /// Sequential id in walk order
    pub id: usize,
    /// The original text as extracted
    pub text: String,
    /// Structural classification
    pub kind: TextKind,
    /// Where the translation must be written back
    pub target: TargetRef,
}

/// Walks a deck and extracts text units in reading order
pub struct DeckWalker;

impl DeckWalker {
    /// Produce the ordered list of text units for the whole deck.
    ///
    /// Order is: slide, then shape, then paragraph/cell/chart sub-element.
    /// Groups are expanded recursively in place. Whitespace-only fragments
    /// and unrecognized shapes are skipped.
    pub fn walk(deck: &Deck) -> Vec<TextUnit> {
        let mut units = Vec::new();
        for (slide_idx, slide) in deck.slides.iter().enumerate() {
            for (shape_idx, shape) in slide.shapes.iter().enumerate() {
                Self::collect_shape(shape, slide_idx, vec![shape_idx], &mut units);
            }
        }
        units
    }

    fn collect_shape(shape: &Shape, slide: usize, path: Vec<usize>, units: &mut Vec<TextUnit>) {
        match shape {
            Shape::TextBox(text_box) => {
                Self::collect_frame(&text_box.frame, slide, &path, units);
            }
            Shape::Table(table) => {
                Self::collect_table(table, slide, &path, units);
            }
            Shape::Chart(chart) => {
                Self::collect_chart(chart, slide, &path, units);
            }
            Shape::Group(group) => {
                for (child_idx, child) in group.shapes.iter().enumerate() {
                    let mut child_path = path.clone();
                    child_path.push(child_idx);
                    Self::collect_shape(child, slide, child_path, units);
                }
            }
            Shape::FreeText(free_text) => {
                Self::push_unit(
                    units,
                    &free_text.text,
                    TextKind::FreeText,
                    slide,
                    path,
                    TargetSlot::FreeText,
                );
            }
            Shape::Unrecognized(_) => {
                debug!("slide {}: skipping unrecognized shape at {:?}", slide + 1, path);
            }
        }
    }

    fn collect_frame(frame: &TextFrame, slide: usize, path: &[usize], units: &mut Vec<TextUnit>) {
        for (para_idx, paragraph) in frame.paragraphs.iter().enumerate() {
            Self::push_unit(
                units,
                &paragraph.text(),
                TextKind::Paragraph,
                slide,
                path.to_vec(),
                TargetSlot::Paragraph { paragraph: para_idx },
            );
        }
    }

    fn collect_table(table: &Table, slide: usize, path: &[usize], units: &mut Vec<TextUnit>) {
        for (row_idx, row) in table.rows.iter().enumerate() {
            for (col_idx, cell) in row.cells.iter().enumerate() {
                Self::push_unit(
                    units,
                    &cell.text(),
                    TextKind::TableCell,
                    slide,
                    path.to_vec(),
                    TargetSlot::TableCell { row: row_idx, col: col_idx },
                );
            }
        }
    }

    fn collect_chart(chart: &Chart, slide: usize, path: &[usize], units: &mut Vec<TextUnit>) {
        if let Some(title) = &chart.title {
            Self::push_unit(units, title, TextKind::ChartTitle, slide, path.to_vec(), TargetSlot::ChartTitle);
        }
        if let Some(title) = &chart.category_axis_title {
            Self::push_unit(
                units,
                title,
                TextKind::AxisTitle,
                slide,
                path.to_vec(),
                TargetSlot::AxisTitle { axis: Axis::Category },
            );
        }
        if let Some(title) = &chart.value_axis_title {
            Self::push_unit(
                units,
                title,
                TextKind::AxisTitle,
                slide,
                path.to_vec(),
                TargetSlot::AxisTitle { axis: Axis::Value },
            );
        }
        for (series_idx, series) in chart.series.iter().enumerate() {
            Self::push_unit(
                units,
                &series.name,
                TextKind::SeriesName,
                slide,
                path.to_vec(),
                TargetSlot::SeriesName { series: series_idx },
            );
        }
        for (cat_idx, category) in chart.categories.iter().enumerate() {
            Self::push_unit(
                units,
                category,
                TextKind::Category,
                slide,
                path.to_vec(),
                TargetSlot::Category { index: cat_idx },
            );
        }
        for (series_idx, series) in chart.series.iter().enumerate() {
            for (label_idx, label) in series.data_labels.iter().enumerate() {
                Self::push_unit(
                    units,
                    label,
                    TextKind::DataLabel,
                    slide,
                    path.to_vec(),
                    TargetSlot::DataLabel { series: series_idx, label: label_idx },
                );
            }
        }
    }

    fn push_unit(
        units: &mut Vec<TextUnit>,
        text: &str,
        kind: TextKind,
        slide: usize,
        shape_path: Vec<usize>,
        slot: TargetSlot,
    ) {
        if text.trim().is_empty() {
            return;
        }
        units.push(TextUnit {
            id: units.len(),
            text: text.to_string(),
            kind,
            target: TargetRef { slide, shape_path, slot },
        });
    }
}
