/*!
 * Boilerplate filtering for slide placeholder prompts.
 *
 * Slide templates carry empty-slot prompts ("Click to add text" and friends)
 * that must never be sent for translation. Any known marker substring is
 * stripped; a unit left empty after stripping is excluded from batching and
 * its original text stays untouched in the document.
 */

use once_cell::sync::Lazy;

/// Known placeholder prompts, English and Chinese
const RAW_MARKERS: &[&str] = &[
    "Click to add text",
    "Click to add",
    "Add title",
    "Add subtitle",
    "点击此处添加文本",
    "点击添加",
    "添加标题",
    "添加副标题",
];

/// Markers ordered longest first, so "Click to add text" is removed before
/// "Click to add" can leave a dangling " text" behind.
static MARKERS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut markers = RAW_MARKERS.to_vec();
    markers.sort_by(|a, b| b.len().cmp(&a.len()));
    markers
});

/// Strip every known placeholder marker from `text` and trim the result
pub fn strip_placeholders(text: &str) -> String {
    let mut cleaned = text.to_string();
    for marker in MARKERS.iter() {
        if cleaned.contains(marker) {
            cleaned = cleaned.replace(marker, "");
        }
    }
    cleaned.trim().to_string()
}

/// Whether any translatable content remains after stripping
pub fn is_translatable(text: &str) -> bool {
    !strip_placeholders(text).is_empty()
}
