use axum::Json;
use serde::Serialize;

use crate::catalog::{theme_options, OptionCard, AUDIENCE_OPTIONS, MOOD_OPTIONS};

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub themes: Vec<OptionCard>,
    pub audiences: &'static [OptionCard],
    pub moods: &'static [OptionCard],
}

/// GET /api/options
///
/// Selection cards for the theme, audience and mood grids.
pub async fn handle_get_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        themes: theme_options(),
        audiences: AUDIENCE_OPTIONS,
        moods: MOOD_OPTIONS,
    })
}
