//! Devotional parser: splits generated text into its six labelled sections.
//!
//! Matching is driven by the literal headings, not by position, so sections may
//! arrive in any order. The parser never fails; a missing heading leaves its
//! field empty.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One of the six sections of a devotional, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Title,
    Intro,
    Scripture,
    Reflection,
    Prayer,
    Challenge,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Title,
        Section::Intro,
        Section::Scripture,
        Section::Reflection,
        Section::Prayer,
        Section::Challenge,
    ];

    /// The exact heading the model is told to emit.
    pub fn heading(self) -> &'static str {
        match self {
            Section::Title => "Concise Title (3-6 words):",
            Section::Intro => "Introductory Thought:",
            Section::Scripture => "Scripture:",
            Section::Reflection => "Reflection:",
            Section::Prayer => "Prayer:",
            Section::Challenge => "Today's Challenge:",
        }
    }

    /// Heading used when rendering a stored devotional for people.
    pub fn display_heading(self) -> &'static str {
        match self {
            Section::Title => "Title",
            Section::Intro => "Introductory Thought",
            Section::Scripture => "Scripture",
            Section::Reflection => "Reflection",
            Section::Prayer => "Prayer",
            Section::Challenge => "Today's Challenge",
        }
    }

    fn from_heading(heading: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.heading() == heading)
    }
}

/// The six parsed sections of a devotional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevotionalContent {
    pub title: String,
    pub intro: String,
    pub scripture: String,
    pub reflection: String,
    pub prayer: String,
    pub challenge: String,
}

impl DevotionalContent {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Title => &self.title,
            Section::Intro => &self.intro,
            Section::Scripture => &self.scripture,
            Section::Reflection => &self.reflection,
            Section::Prayer => &self.prayer,
            Section::Challenge => &self.challenge,
        }
    }

    fn get_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Title => &mut self.title,
            Section::Intro => &mut self.intro,
            Section::Scripture => &mut self.scripture,
            Section::Reflection => &mut self.reflection,
            Section::Prayer => &mut self.prayer,
            Section::Challenge => &mut self.challenge,
        }
    }

    /// True when every section has content.
    pub fn is_complete(&self) -> bool {
        Section::ALL.iter().all(|s| !self.get(*s).is_empty())
    }
}

static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = Section::ALL
        .iter()
        .map(|s| regex::escape(s.heading()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("({alternation})")).expect("valid heading regex")
});

static RE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static RE_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid regex"));
static RE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#+\s*").expect("valid regex"));

/// Parses raw generated text into a `DevotionalContent`.
///
/// Text before the first heading is dropped. A heading that appears twice has
/// both bodies appended to the same field.
pub fn parse_devotional(text: &str) -> DevotionalContent {
    let mut content = DevotionalContent::default();
    let mut current: Option<Section> = None;
    let mut body_start = 0;

    for heading in HEADING_RE.find_iter(text) {
        append_body(&mut content, current, &text[body_start..heading.start()]);
        current = Section::from_heading(heading.as_str());
        body_start = heading.end();
    }
    append_body(&mut content, current, &text[body_start..]);

    for section in Section::ALL {
        let field = content.get_mut(section);
        *field = clean_markdown(field.trim());
    }

    content
}

fn append_body(content: &mut DevotionalContent, section: Option<Section>, body: &str) {
    if let Some(section) = section {
        let field = content.get_mut(section);
        field.push_str(body.trim());
        field.push('\n');
    }
}

/// Strips markdown bold, italics and line-leading heading markers, then trims.
pub fn clean_markdown(text: &str) -> String {
    let text = RE_BOLD.replace_all(text, "$1");
    let text = RE_ITALIC.replace_all(&text, "$1");
    let text = RE_HEADING.replace_all(&text, "");
    text.trim().to_string()
}
