//! Hue-band labels describing the mood a color evokes.

use serde::Serialize;

/// One of six fixed hue bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Psychology {
    /// `[0, 30)` and `[330, 360]`
    Warm,
    /// `[30, 90)`
    Creative,
    /// `[90, 150)`
    Calm,
    /// `[150, 210)`
    Trust,
    /// `[210, 270)`
    Luxury,
    /// `[270, 330)` and anything that is not a number
    Neutral,
}

impl Psychology {
    pub const ALL: [Psychology; 6] = [
        Psychology::Warm,
        Psychology::Creative,
        Psychology::Calm,
        Psychology::Trust,
        Psychology::Luxury,
        Psychology::Neutral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Psychology::Warm => "Warmth, Energy, Passion (Red tones)",
            Psychology::Creative => "Optimism, Happiness, Creativity (Yellow tones)",
            Psychology::Calm => "Nature, Growth, Calmness (Green tones)",
            Psychology::Trust => "Trust, Serenity, Peace (Blue tones)",
            Psychology::Luxury => "Luxury, Mystery, Spirituality (Purple tones)",
            Psychology::Neutral => "Neutral, Balance, Simplicity (Gray tones)",
        }
    }
}

impl std::fmt::Display for Psychology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a hue in degrees to its band. Hues outside `[0, 360]` wrap around.
pub fn describe(hue: f32) -> Psychology {
    let hue = if (0.0..=360.0).contains(&hue) {
        hue
    } else {
        hue.rem_euclid(360.0)
    };

    if (0.0..30.0).contains(&hue) || (330.0..=360.0).contains(&hue) {
        Psychology::Warm
    } else if (30.0..90.0).contains(&hue) {
        Psychology::Creative
    } else if (90.0..150.0).contains(&hue) {
        Psychology::Calm
    } else if (150.0..210.0).contains(&hue) {
        Psychology::Trust
    } else if (210.0..270.0).contains(&hue) {
        Psychology::Luxury
    } else {
        Psychology::Neutral
    }
}
