use crate::generation::parser::DevotionalContent;
use crate::models::devotional::NewDevotional;
use crate::validation::{optional_string, parse_object, required_string, Issue};

/// Validates a create-devotional body.
///
/// The six sections and `theme` must be non-empty strings; `audience` and
/// `mood` are optional and may be `null`.
pub fn validate_new_devotional(body: &[u8]) -> Result<NewDevotional, Vec<Issue>> {
    let obj = parse_object(body)?;
    let mut issues = Vec::new();

    let mut required = |key: &str| required_string(&obj, key, 1, &mut issues);
    let title = required("title");
    let intro = required("intro");
    let scripture = required("scripture");
    let reflection = required("reflection");
    let prayer = required("prayer");
    let challenge = required("challenge");
    let theme = required("theme");

    let audience = optional_string(&obj, "audience", &mut issues);
    let mood = optional_string(&obj, "mood", &mut issues);

    match (title, intro, scripture, reflection, prayer, challenge, theme) {
        (
            Some(title),
            Some(intro),
            Some(scripture),
            Some(reflection),
            Some(prayer),
            Some(challenge),
            Some(theme),
        ) if issues.is_empty() => Ok(NewDevotional {
            content: DevotionalContent {
                title,
                intro,
                scripture,
                reflection,
                prayer,
                challenge,
            },
            theme,
            audience,
            mood,
        }),
        _ => Err(issues),
    }
}
