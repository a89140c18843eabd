// Prompt construction for devotional generation.
//
// The six section headings are the contract with the model: the parser in
// `generation::parser` splits on exactly these strings.

use crate::catalog::verses::{random_verses, DEFAULT_VERSE_COUNT};
use crate::generation::parser::Section;
use crate::generation::validation::GenerationRequest;

pub const MIN_WORD_COUNT: u32 = 200;
pub const MAX_WORD_COUNT: u32 = 300;

const CONTENT_CHECKLIST: &str = "It must include:
1. A concise title (3-6 words) for the devotional.
2. An introductory thought on the theme.
3. The provided Bible verses (with chapter and verse numbers, e.g., John 3:16) in the Scripture section.
4. A brief reflection or practical application of the theme from a biblical perspective, specifically referencing the provided verses.
5. A short concluding prayer.
6. An actionable and engaging \"Today's Challenge\".";

const NO_MARKDOWN_INSTRUCTION: &str = "Do not use any Markdown formatting like bold (**), \
    italics (*), or headings (###) within the content of each section.";

/// Builds the full prompt. Pure: the caller supplies the already-sampled verses.
///
/// Empty `audience` / `mood` strings are treated the same as `None`.
pub fn build_prompt(
    theme: &str,
    audience: Option<&str>,
    mood: Option<&str>,
    verses: &[&str],
) -> String {
    let mut prompt = format!(
        "Generate a short devotional ({MIN_WORD_COUNT}-{MAX_WORD_COUNT} words) on the theme of \"{theme}\"."
    );

    if let Some(audience) = audience.filter(|a| !a.is_empty()) {
        prompt.push_str(&format!(
            " It should be tailored for a \"{audience}\" audience."
        ));
    }
    if let Some(mood) = mood.filter(|m| !m.is_empty()) {
        prompt.push_str(&format!(
            " The devotional should also consider a mood of \"{mood}\"."
        ));
    }

    if !verses.is_empty() {
        prompt.push_str("\n\nScripture for reflection:\n");
        prompt.push_str(&verses.join("\n"));
    }

    prompt.push_str("\n\n");
    prompt.push_str(CONTENT_CHECKLIST);

    let headings = Section::ALL
        .iter()
        .map(|s| format!("\"{}\"", s.heading()))
        .collect::<Vec<_>>()
        .join(", ");
    prompt.push_str(&format!(
        "\nPlease format your response with clear headings for each section, in this order: {headings}. "
    ));
    prompt.push_str(NO_MARKDOWN_INSTRUCTION);

    prompt
}

/// Samples verses for the request's theme and builds its prompt.
pub fn prompt_for(request: &GenerationRequest) -> String {
    let verses = random_verses(request.theme, DEFAULT_VERSE_COUNT);
    build_prompt(
        request.theme.as_str(),
        request.audience.as_deref(),
        request.mood.as_deref(),
        &verses,
    )
}
