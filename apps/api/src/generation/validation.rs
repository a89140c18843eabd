use serde_json::Value;

use crate::catalog::Theme;
use crate::validation::{optional_string, parse_object, type_name, Issue};

/// A validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub theme: Theme,
    pub audience: Option<String>,
    pub mood: Option<String>,
}

/// Validates a raw `{ selectedTheme, selectedAudience?, selectedMood? }` body.
///
/// All field problems are collected before returning.
pub fn validate_generation_request(body: &[u8]) -> Result<GenerationRequest, Vec<Issue>> {
    let obj = parse_object(body)?;
    let mut issues = Vec::new();

    let theme = match obj.get("selectedTheme") {
        None => {
            issues.push(Issue::new("selectedTheme", "Required"));
            None
        }
        Some(Value::String(raw)) => match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(_) => {
                issues.push(Issue::new(
                    "selectedTheme",
                    format!(
                        "Invalid enum value. Expected {}, received '{raw}'",
                        Theme::expected_list()
                    ),
                ));
                None
            }
        },
        Some(other) => {
            issues.push(Issue::new(
                "selectedTheme",
                format!("Expected string, received {}", type_name(other)),
            ));
            None
        }
    };

    let audience = optional_string(&obj, "selectedAudience", &mut issues);
    let mood = optional_string(&obj, "selectedMood", &mut issues);

    match theme {
        Some(theme) if issues.is_empty() => Ok(GenerationRequest {
            theme,
            audience,
            mood,
        }),
        _ => Err(issues),
    }
}
