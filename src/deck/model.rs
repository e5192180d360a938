/*!
 * Deck container model.
 *
 * This module defines the in-memory tree for a slide deck: slides own shapes,
 * shapes are a closed set of tagged variants (text box, table, chart, group,
 * free text, unrecognized). Formatting attributes the pipeline does not touch
 * are carried through `#[serde(flatten)]` maps so a load/save round-trip never
 * loses data it was not given.
 */

use log::warn;
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A whole deck: the root container handed to the walker and reinjection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Deck {
    /// Slides in presentation order
    #[serde(default)]
    pub slides: Vec<Slide>,

    /// Container attributes the pipeline passes through untouched
    #[serde(flatten)]
    pub props: Map<String, Value>,
}

/// One slide, owning an ordered list of shapes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Slide {
    /// Shapes in z-order
    #[serde(default)]
    pub shapes: Vec<Shape>,

    #[serde(flatten)]
    pub props: Map<String, Value>,
}

/// Closed classification of every shape the pipeline understands.
///
/// Classification happens once, at deserialization: a shape whose `kind` is
/// unknown (or whose payload does not parse) becomes `Unrecognized` and keeps
/// its raw value, so it is skipped by the walker and written back verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A shape holding a text frame
    TextBox(TextBox),
    /// A table of rows and cells
    Table(Table),
    /// A chart with translatable sub-elements
    Chart(Chart),
    /// A group expanding into child shapes
    Group(Group),
    /// A shape carrying one plain text value (WordArt and similar)
    FreeText(FreeText),
    /// Anything else; preserved byte-for-byte, never translated
    Unrecognized(Value),
}

/// Text-frame holder shape
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TextBox {
    /// The text frame with its paragraphs
    pub frame: TextFrame,

    #[serde(flatten)]
    pub props: Map<String, Value>,
}

/// A text frame: ordered paragraphs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TextFrame {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

/// One paragraph: ordered formatting runs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Paragraph {
    #[serde(default)]
    pub runs: Vec<Run>,

    #[serde(flatten)]
    pub props: Map<String, Value>,
}

/// A minimal span of text carrying independent formatting
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Run {
    /// The text content of the run
    #[serde(default)]
    pub text: String,

    /// Formatting attributes (font, size, color, ...) kept as-is
    #[serde(flatten)]
    pub props: Map<String, Value>,
}

impl Paragraph {
    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Table shape
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<TableRow>,

    #[serde(flatten)]
    pub props: Map<String, Value>,
}

/// One table row
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

/// One table cell: treated as a single paragraph-like unit by the pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableCell {
    /// The cell's text frame
    #[serde(default)]
    pub frame: TextFrame,

    #[serde(flatten)]
    pub props: Map<String, Value>,
}

impl TableCell {
    /// Concatenated text of every paragraph in the cell
    pub fn text(&self) -> String {
        self.frame
            .paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Chart shape with its translatable sub-elements
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Chart {
    /// Chart title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Category (x) axis title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_axis_title: Option<String>,

    /// Value (y) axis title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_axis_title: Option<String>,

    /// Data series, each with a legend name and optional data labels
    #[serde(default)]
    pub series: Vec<Series>,

    /// Category labels; written back positionally, must not be resized
    /// between walk and reinjection
    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(flatten)]
    pub props: Map<String, Value>,
}

/// One data series of a chart
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Series {
    /// Series name shown in the legend
    #[serde(default)]
    pub name: String,

    /// Data labels attached to points of this series
    #[serde(default)]
    pub data_labels: Vec<String>,

    #[serde(flatten)]
    pub props: Map<String, Value>,
}

/// Grouped shape expanding into children
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Group {
    #[serde(default)]
    pub shapes: Vec<Shape>,

    #[serde(flatten)]
    pub props: Map<String, Value>,
}

/// Free-standing text shape without paragraph structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FreeText {
    #[serde(default)]
    pub text: String,

    #[serde(flatten)]
    pub props: Map<String, Value>,
}

impl Shape {
    fn kind_tag(&self) -> &'static str {
        match self {
            Shape::TextBox(_) => "text_box",
            Shape::Table(_) => "table",
            Shape::Chart(_) => "chart",
            Shape::Group(_) => "group",
            Shape::FreeText(_) => "free_text",
            Shape::Unrecognized(_) => "unrecognized",
        }
    }
}

impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut value = match self {
            Shape::TextBox(inner) => serde_json::to_value(inner),
            Shape::Table(inner) => serde_json::to_value(inner),
            Shape::Chart(inner) => serde_json::to_value(inner),
            Shape::Group(inner) => serde_json::to_value(inner),
            Shape::FreeText(inner) => serde_json::to_value(inner),
            // Unknown shapes are written back exactly as they were read
            Shape::Unrecognized(raw) => return raw.serialize(serializer),
        }
        .map_err(S::Error::custom)?;

        if let Value::Object(map) = &mut value {
            map.insert("kind".to_string(), Value::String(self.kind_tag().to_string()));
        }
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(D::Error::custom("shape must be a JSON object"));
        }

        let kind = value
            .get("kind")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        let parsed = match kind.as_str() {
            "text_box" => serde_json::from_value(strip_kind(&value)).map(Shape::TextBox),
            "table" => serde_json::from_value(strip_kind(&value)).map(Shape::Table),
            "chart" => serde_json::from_value(strip_kind(&value)).map(Shape::Chart),
            "group" => serde_json::from_value(strip_kind(&value)).map(Shape::Group),
            "free_text" => serde_json::from_value(strip_kind(&value)).map(Shape::FreeText),
            other => {
                warn!("skipping shape with unrecognized kind '{}'", other);
                return Ok(Shape::Unrecognized(value));
            }
        };

        match parsed {
            Ok(shape) => Ok(shape),
            Err(e) => {
                // A malformed known shape must not abort the load of the
                // whole deck; it degrades to an opaque, skipped shape.
                warn!("failed to parse '{}' shape, treating as unrecognized: {}", kind, e);
                Ok(Shape::Unrecognized(value))
            }
        }
    }
}

/// Remove the `kind` tag before handing the payload to the variant struct,
/// so the flattened `props` maps never accumulate the tag on re-save.
fn strip_kind(value: &Value) -> Value {
    let mut value = value.clone();
    if let Value::Object(map) = &mut value {
        map.remove("kind");
    }
    value
}

impl Deck {
    /// Resolve a shape by slide index and path through nested groups
    pub fn shape_at(&self, slide: usize, path: &[usize]) -> Option<&Shape> {
        let slide = self.slides.get(slide)?;
        let (first, rest) = path.split_first()?;
        let mut shape = slide.shapes.get(*first)?;
        for idx in rest {
            match shape {
                Shape::Group(group) => shape = group.shapes.get(*idx)?,
                _ => return None,
            }
        }
        Some(shape)
    }

    /// Mutable variant of [`Deck::shape_at`]
    pub fn shape_at_mut(&mut self, slide: usize, path: &[usize]) -> Option<&mut Shape> {
        let slide = self.slides.get_mut(slide)?;
        let (first, rest) = path.split_first()?;
        let mut shape = slide.shapes.get_mut(*first)?;
        for idx in rest {
            match shape {
                Shape::Group(group) => shape = group.shapes.get_mut(*idx)?,
                _ => return None,
            }
        }
        Some(shape)
    }
}
