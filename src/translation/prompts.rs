/*!
 * System prompt construction for translation requests.
 *
 * Prompts carry three parts: an optional domain persona preamble, the
 * translation instruction (single-unit or delimiter-preserving batch), and
 * advisory terminology hints for terms present in the outgoing text.
 */

use super::batch::SENTINEL_TOKEN;

/// Domain persona preamble. Empty for the generic domain; known domains get
/// a specific persona, anything else a generic specialist persona.
pub fn domain_preamble(domain: Option<&str>) -> String {
    match domain {
        None | Some("") | Some("general") => String::new(),
        Some("computer") => {
            "You are an expert translator fluent in computer science terminology. ".to_string()
        }
        Some("os") => {
            "You are an expert translator fluent in operating systems terminology. ".to_string()
        }
        Some(other) => format!(
            "You are an expert translator fluent in the terminology of the {} domain. ",
            other
        ),
    }
}

/// System prompt for translating one text unit
pub fn single_system_prompt(
    source_language: &str,
    target_language: &str,
    domain: Option<&str>,
    hints: &[String],
) -> String {
    let mut prompt = format!(
        "{}Translate the following {} text into {}. Keep the translation \
         professionally accurate and preserve the original formatting and \
         punctuation. Use the standard target-language equivalents for \
         technical terms. The text may come from a slide; translate all of \
         it completely without omitting anything. Only respond with the \
         translated text.",
        domain_preamble(domain),
        source_language,
        target_language
    );
    append_hints(&mut prompt, hints);
    prompt
}

/// System prompt for translating a sentinel-merged batch
pub fn batch_system_prompt(
    source_language: &str,
    target_language: &str,
    domain: Option<&str>,
    hints: &[String],
) -> String {
    let mut prompt = format!(
        "{}The following input contains multiple {} text segments separated \
         by the marker '{}'. Translate every segment into {} and keep the \
         exact same separator marker between the translated segments. Keep \
         the translation professionally accurate and preserve the original \
         formatting and punctuation. Use the standard target-language \
         equivalents for technical terms. Translate every segment completely \
         without omitting anything. Only respond with the translated \
         segments and separators.",
        domain_preamble(domain),
        source_language,
        SENTINEL_TOKEN,
        target_language
    );
    append_hints(&mut prompt, hints);
    prompt
}

fn append_hints(prompt: &mut String, hints: &[String]) {
    if hints.is_empty() {
        return;
    }
    prompt.push_str("\n\nPay particular attention to these term translations:\n");
    prompt.push_str(&hints.join("\n"));
}
