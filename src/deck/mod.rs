/*!
 * Deck container: model, persistence, text extraction, and write-back.
 *
 * - `model`: the slide/shape tree with tagged shape variants
 * - `store`: open/save primitives for the JSON container
 * - `walker`: ordered extraction of text units
 * - `reinject`: run-collapsing write-back of translated text
 */

pub use self::model::{
    Chart, Deck, FreeText, Group, Paragraph, Run, Series, Shape, Slide, Table, TableCell,
    TableRow, TextBox, TextFrame,
};
pub use self::reinject::apply_translation;
pub use self::store::DeckStore;
pub use self::walker::{Axis, DeckWalker, TargetRef, TargetSlot, TextKind, TextUnit};

pub mod model;
pub mod reinject;
pub mod store;
pub mod walker;
