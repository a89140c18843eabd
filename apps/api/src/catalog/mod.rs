//! Selection catalogs: the closed theme set, suggested audiences and moods, and
//! the icon each option is drawn with.

pub mod handlers;
pub mod verses;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Themes
// ────────────────────────────────────────────────────────────────────────────

/// A devotional theme. Closed set; parsed from its exact display name, which is
/// also the variant name it serializes as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Theme {
    Patience,
    Forgiveness,
    Leadership,
    Hope,
    Love,
    Faith,
    Gratitude,
    Courage,
    Wisdom,
    Joy,
    Kindness,
    Humility,
    Peace,
    Trust,
    Perseverance,
    Compassion,
    Faithfulness,
    Grace,
    Mercy,
    Obedience,
    Worship,
    Service,
    Sacrifice,
    Purpose,
}

impl Theme {
    pub const ALL: [Theme; 24] = [
        Theme::Patience,
        Theme::Forgiveness,
        Theme::Leadership,
        Theme::Hope,
        Theme::Love,
        Theme::Faith,
        Theme::Gratitude,
        Theme::Courage,
        Theme::Wisdom,
        Theme::Joy,
        Theme::Kindness,
        Theme::Humility,
        Theme::Peace,
        Theme::Trust,
        Theme::Perseverance,
        Theme::Compassion,
        Theme::Faithfulness,
        Theme::Grace,
        Theme::Mercy,
        Theme::Obedience,
        Theme::Worship,
        Theme::Service,
        Theme::Sacrifice,
        Theme::Purpose,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Patience => "Patience",
            Theme::Forgiveness => "Forgiveness",
            Theme::Leadership => "Leadership",
            Theme::Hope => "Hope",
            Theme::Love => "Love",
            Theme::Faith => "Faith",
            Theme::Gratitude => "Gratitude",
            Theme::Courage => "Courage",
            Theme::Wisdom => "Wisdom",
            Theme::Joy => "Joy",
            Theme::Kindness => "Kindness",
            Theme::Humility => "Humility",
            Theme::Peace => "Peace",
            Theme::Trust => "Trust",
            Theme::Perseverance => "Perseverance",
            Theme::Compassion => "Compassion",
            Theme::Faithfulness => "Faithfulness",
            Theme::Grace => "Grace",
            Theme::Mercy => "Mercy",
            Theme::Obedience => "Obedience",
            Theme::Worship => "Worship",
            Theme::Service => "Service",
            Theme::Sacrifice => "Sacrifice",
            Theme::Purpose => "Purpose",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Theme::Patience => Icon::Clock,
            Theme::Forgiveness => Icon::Heart,
            Theme::Leadership => Icon::Crown,
            Theme::Hope => Icon::Sparkles,
            Theme::Love => Icon::HeartHandshake,
            Theme::Faith => Icon::Church,
            Theme::Gratitude => Icon::Smile,
            Theme::Courage => Icon::Shield,
            Theme::Wisdom => Icon::BookOpen,
            Theme::Joy => Icon::PartyPopper,
            Theme::Kindness => Icon::HandHeart,
            Theme::Humility => Icon::UserCheck,
            Theme::Peace => Icon::Waves,
            Theme::Trust => Icon::Handshake,
            Theme::Perseverance => Icon::Mountain,
            Theme::Compassion => Icon::HeartPulse,
            Theme::Faithfulness => Icon::Star,
            Theme::Grace => Icon::Gift,
            Theme::Mercy => Icon::Droplets,
            Theme::Obedience => Icon::CheckCircle,
            Theme::Worship => Icon::Music,
            Theme::Service => Icon::HandHelping,
            Theme::Sacrifice => Icon::Flame,
            Theme::Purpose => Icon::Target,
        }
    }

    /// `'Patience' | 'Forgiveness' | ...` — used in validation messages.
    pub fn expected_list() -> String {
        Theme::ALL
            .iter()
            .map(|t| format!("'{}'", t.as_str()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Icons
// ────────────────────────────────────────────────────────────────────────────

/// Icon identifiers understood by the front end. Serialized by variant name,
/// which matches the icon set's component names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    // Themes
    Clock,
    Heart,
    Crown,
    Sparkles,
    HeartHandshake,
    Church,
    Smile,
    Shield,
    BookOpen,
    PartyPopper,
    HandHeart,
    UserCheck,
    Waves,
    Handshake,
    Mountain,
    HeartPulse,
    Star,
    Gift,
    Droplets,
    CheckCircle,
    Music,
    HandHelping,
    Flame,
    Target,
    // Audiences
    Users,
    GraduationCap,
    Home,
    Briefcase,
    BookMarked,
    User,
    Building2,
    Armchair,
    Baby,
    Smartphone,
    Sprout,
    Search,
    // Moods
    Minus,
    CloudLightning,
    HelpCircle,
    BrainCircuit,
    AlertCircle,
    ZapOff,
    Sunrise,
    Zap,
    HeartCrack,
    TrendingDown,
    Lightbulb,
    Loader,
}

// ────────────────────────────────────────────────────────────────────────────
// Option cards
// ────────────────────────────────────────────────────────────────────────────

/// One selectable card. An empty `value` means "no constraint".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionCard {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

const fn card(value: &'static str, label: &'static str, icon: Icon) -> OptionCard {
    OptionCard { value, label, icon }
}

pub const AUDIENCE_OPTIONS: &[OptionCard] = &[
    card("", "General", Icon::Users),
    card("Youth", "Youth", Icon::GraduationCap),
    card("Parents", "Parents", Icon::Home),
    card("Leaders", "Leaders", Icon::Briefcase),
    card("Students", "Students", Icon::BookMarked),
    card("Couples", "Couples", Icon::HeartHandshake),
    card("Singles", "Singles", Icon::User),
    card("Professionals", "Professionals", Icon::Building2),
    card("Seniors", "Seniors", Icon::Armchair),
    card("Children", "Children", Icon::Baby),
    card("Teenagers", "Teenagers", Icon::Smartphone),
    card("Ministers", "Ministers", Icon::Church),
    card("New Believers", "New Believers", Icon::Sprout),
    card("Seekers", "Seekers", Icon::Search),
    card("Caregivers", "Caregivers", Icon::HeartPulse),
];

pub const MOOD_OPTIONS: &[OptionCard] = &[
    card("", "Neutral", Icon::Minus),
    card("Anxious", "Anxious", Icon::CloudLightning),
    card("Grateful", "Grateful", Icon::Smile),
    card("Lost", "Lost", Icon::HelpCircle),
    card("Confused", "Confused", Icon::BrainCircuit),
    card("Doubting", "Doubting", Icon::AlertCircle),
    card("Joyful", "Joyful", Icon::PartyPopper),
    card("Stressed", "Stressed", Icon::ZapOff),
    card("Peaceful", "Peaceful", Icon::Waves),
    card("Hopeful", "Hopeful", Icon::Sunrise),
    card("Overwhelmed", "Overwhelmed", Icon::Zap),
    card("Broken", "Broken", Icon::HeartCrack),
    card("Discouraged", "Discouraged", Icon::TrendingDown),
    card("Inspired", "Inspired", Icon::Lightbulb),
    card("Weary", "Weary", Icon::Loader),
];

pub fn theme_options() -> Vec<OptionCard> {
    Theme::ALL
        .iter()
        .map(|t| card(t.as_str(), t.as_str(), t.icon()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_theme_round_trips_through_display_name() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_theme_parse_is_exact() {
        assert!("hope".parse::<Theme>().is_err());
        assert!(" Hope".parse::<Theme>().is_err());
        assert!("Strength".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_names_are_unique() {
        let names: HashSet<_> = Theme::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names.len(), Theme::ALL.len());
    }

    #[test]
    fn test_theme_serializes_as_display_name() {
        for theme in Theme::ALL {
            assert_eq!(serde_json::to_value(theme).unwrap(), theme.as_str());
        }
    }

    #[test]
    fn test_unknown_theme_message() {
        let err = "Strength".parse::<Theme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme 'Strength'");
    }

    #[test]
    fn test_icon_serializes_as_component_name() {
        assert_eq!(serde_json::to_string(&Icon::Building2).unwrap(), r#""Building2""#);
        assert_eq!(
            serde_json::to_value(card("", "General", Icon::Users)).unwrap(),
            serde_json::json!({ "value": "", "label": "General", "icon": "Users" })
        );
    }

    #[test]
    fn test_expected_list_format() {
        let list = Theme::expected_list();
        assert!(list.starts_with("'Patience' | 'Forgiveness'"));
        assert!(list.ends_with("'Purpose'"));
    }

    #[test]
    fn test_neutral_options_come_first() {
        assert_eq!(AUDIENCE_OPTIONS[0].value, "");
        assert_eq!(MOOD_OPTIONS[0].value, "");
    }
}
