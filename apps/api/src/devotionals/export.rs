//! Printable and shareable renderings of a stored devotional.

use serde::Serialize;
use serde_json::{json, Value};

use crate::generation::parser::Section;
use crate::models::devotional::DevotionalRow;

const SHARE_EXCERPT_CHARS: usize = 200;
const PUBLISHER_NAME: &str = "Devotional Generator";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SharePayload {
    pub url: String,
    pub links: ShareLinks,
    #[serde(rename = "jsonLd")]
    pub json_ld: Value,
}

/// Public page for a stored devotional.
pub fn share_url(row: &DevotionalRow, site_url: &str) -> String {
    format!("{site_url}/devotional/{}", row.id)
}

/// Body text without the title: the intro, then each later section behind its
/// label (`Scripture: ...`), blank-line separated.
fn body_text(row: &DevotionalRow) -> String {
    let content = row.content();
    Section::ALL[1..]
        .iter()
        .filter(|s| !content.get(**s).is_empty())
        .map(|s| match s {
            Section::Intro => content.intro.clone(),
            _ => format!("{}: {}", s.display_heading(), content.get(*s)),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Plain-text rendering for printing or saving.
pub fn render_plain_text(row: &DevotionalRow) -> String {
    let content = row.content();
    let mut out = String::new();

    out.push_str(&row.title);
    out.push('\n');
    out.push_str(&"=".repeat(row.title.chars().count().max(3)));
    out.push_str(&format!("\nTheme: {}", row.theme));
    if let Some(audience) = row.audience.as_deref().filter(|a| !a.is_empty()) {
        out.push_str(&format!(" | Audience: {audience}"));
    }
    if let Some(mood) = row.mood.as_deref().filter(|m| !m.is_empty()) {
        out.push_str(&format!(" | Mood: {mood}"));
    }
    out.push('\n');

    for section in &Section::ALL[1..] {
        out.push_str(&format!(
            "\n{}\n{}\n",
            section.display_heading(),
            content.get(*section)
        ));
    }

    out.push_str(&format!(
        "\nGenerated on {}\n",
        row.created_at.format("%B %-d, %Y")
    ));
    out
}

/// Title, a blank line, then the first 200 characters of the body and an ellipsis.
fn share_text(row: &DevotionalRow) -> String {
    let excerpt: String = body_text(row).chars().take(SHARE_EXCERPT_CHARS).collect();
    format!("{}\n\n{excerpt}...", row.title)
}

pub fn share_links(row: &DevotionalRow, site_url: &str) -> ShareLinks {
    let url = share_url(row, site_url);
    let encoded_url = urlencoding::encode(&url);

    let twitter = format!(
        "https://twitter.com/intent/tweet?text={}&url={encoded_url}",
        urlencoding::encode(&share_text(row))
    );
    let facebook = format!("https://www.facebook.com/sharer/sharer.php?u={encoded_url}");

    let email_body = format!("{}\n\nGenerated at: {url}", body_text(row));
    let email = format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(&row.title),
        urlencoding::encode(&email_body)
    );

    ShareLinks {
        twitter,
        facebook,
        email,
    }
}

/// schema.org `Article` describing the devotional, for rich link previews.
pub fn article_schema(row: &DevotionalRow, site_url: &str) -> Value {
    let published = row.created_at.to_rfc3339();
    let organization = json!({
        "@type": "Organization",
        "name": PUBLISHER_NAME,
        "url": site_url,
    });

    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": row.title,
        "description": row.intro,
        "articleBody": body_text(row),
        "datePublished": published,
        "dateModified": published,
        "author": organization,
        "publisher": {
            "@type": "Organization",
            "name": PUBLISHER_NAME,
            "url": site_url,
            "logo": {
                "@type": "ImageObject",
                "url": format!("{site_url}/logo.png"),
                "width": 512,
                "height": 512,
            },
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": share_url(row, site_url),
        },
        "about": { "@type": "Thing", "name": row.theme },
        "keywords": "devotional, Bible, Christian, faith, spiritual growth",
    })
}

pub fn share_payload(row: &DevotionalRow, site_url: &str) -> SharePayload {
    SharePayload {
        url: share_url(row, site_url),
        links: share_links(row, site_url),
        json_ld: article_schema(row, site_url),
    }
}
