//! Condition Classifier
//!
//! Maps upstream weather signals onto a closed set of condition keys.
//! Numeric WMO codes come from Open-Meteo, free-text descriptions from
//! wttr.in-style services. Both paths are total: unrecognized input
//! classifies as [`ConditionKey::Clear`].

use std::fmt;

use serde::{Deserialize, Serialize};

// == Condition Key ==
/// Symbolic weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKey {
    #[default]
    Clear,
    PartlyCloudy,
    Cloudy,
    Overcast,
    Drizzle,
    Showers,
    Rain,
    Sleet,
    Hail,
    Snow,
    Blizzard,
    Thunderstorms,
    Fog,
    Mist,
    Haze,
    Smoke,
    Sandstorm,
    Dust,
    Windy,
    Hot,
    Warm,
    Cool,
    Cold,
    Freezing,
    Frost,
    Humid,
    Dry,
    VolcanicAsh,
}

impl ConditionKey {
    /// Every key, in declaration order.
    pub const ALL: [ConditionKey; 28] = [
        Self::Clear,
        Self::PartlyCloudy,
        Self::Cloudy,
        Self::Overcast,
        Self::Drizzle,
        Self::Showers,
        Self::Rain,
        Self::Sleet,
        Self::Hail,
        Self::Snow,
        Self::Blizzard,
        Self::Thunderstorms,
        Self::Fog,
        Self::Mist,
        Self::Haze,
        Self::Smoke,
        Self::Sandstorm,
        Self::Dust,
        Self::Windy,
        Self::Hot,
        Self::Warm,
        Self::Cool,
        Self::Cold,
        Self::Freezing,
        Self::Frost,
        Self::Humid,
        Self::Dry,
        Self::VolcanicAsh,
    ];

    /// Snake-case name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly_cloudy",
            Self::Cloudy => "cloudy",
            Self::Overcast => "overcast",
            Self::Drizzle => "drizzle",
            Self::Showers => "showers",
            Self::Rain => "rain",
            Self::Sleet => "sleet",
            Self::Hail => "hail",
            Self::Snow => "snow",
            Self::Blizzard => "blizzard",
            Self::Thunderstorms => "thunderstorms",
            Self::Fog => "fog",
            Self::Mist => "mist",
            Self::Haze => "haze",
            Self::Smoke => "smoke",
            Self::Sandstorm => "sandstorm",
            Self::Dust => "dust",
            Self::Windy => "windy",
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Cold => "cold",
            Self::Freezing => "freezing",
            Self::Frost => "frost",
            Self::Humid => "humid",
            Self::Dry => "dry",
            Self::VolcanicAsh => "volcanic_ash",
        }
    }

    /// Glyph and colour used when rendering this condition.
    pub fn display(&self) -> ConditionDisplay {
        lookup_display(*self)
    }
}

impl fmt::Display for ConditionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Condition Display ==
/// Short glyph plus a named SVG colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionDisplay {
    pub glyph: &'static str,
    pub color: &'static str,
}

impl ConditionDisplay {
    const fn new(glyph: &'static str, color: &'static str) -> Self {
        Self { glyph, color }
    }
}

// == Classify By Code ==
/// Classifies an Open-Meteo (WMO) weather code.
///
/// Codes outside the known groups, including negative ones, are `Clear`.
pub fn classify_by_code(code: i32) -> ConditionKey {
    match code {
        0 => ConditionKey::Clear,
        1..=3 => ConditionKey::PartlyCloudy,
        45 | 48 => ConditionKey::Fog,
        51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => ConditionKey::Rain,
        71 | 73 | 75 | 77 => ConditionKey::Snow,
        95 | 96 | 99 => ConditionKey::Thunderstorms,
        _ => ConditionKey::Clear,
    }
}

// == Classify By Text ==
/// Keyword groups checked in order; the first group with any substring
/// present in the lowercased description wins. Order matters: compound
/// phrases must hit their specific group before a generic one
/// (e.g. "freezing rain" is rain, not freezing).
const TEXT_RULES: &[(&[&str], ConditionKey)] = &[
    (&["sandstorm", "sand storm"], ConditionKey::Sandstorm),
    (&["duststorm", "dust storm"], ConditionKey::Sandstorm),
    (&["dust"], ConditionKey::Dust),
    (&["sand"], ConditionKey::Dust),
    (&["blizzard"], ConditionKey::Blizzard),
    (&["snow", "flurr"], ConditionKey::Snow),
    (&["sleet"], ConditionKey::Sleet),
    (&["hail"], ConditionKey::Hail),
    (&["thunder", "t-storm", "tstorm"], ConditionKey::Thunderstorms),
    (&["lightning"], ConditionKey::Thunderstorms),
    (&["storm"], ConditionKey::Thunderstorms),
    (&["drizzle", "light rain"], ConditionKey::Drizzle),
    (&["shower"], ConditionKey::Showers),
    (&["rain"], ConditionKey::Rain),
    // Unreachable in practice: every match already contains "rain".
    (&["freezing rain"], ConditionKey::Sleet),
    (&["fog"], ConditionKey::Fog),
    (&["mist"], ConditionKey::Mist),
    (&["haze"], ConditionKey::Haze),
    (&["smoke"], ConditionKey::Smoke),
    (&["overcast"], ConditionKey::Overcast),
    (&["cloudy"], ConditionKey::Cloudy),
    (&["partly"], ConditionKey::PartlyCloudy),
    (&["sunny interval", "sunny period"], ConditionKey::PartlyCloudy),
    (&["sunny", "clear", "fair", "fine"], ConditionKey::Clear),
    (&["windy", "squall", "gale"], ConditionKey::Windy),
    (&["hot"], ConditionKey::Hot),
    (&["cold"], ConditionKey::Cold),
    (&["chilly"], ConditionKey::Cold),
    (&["warm"], ConditionKey::Warm),
    (&["cool"], ConditionKey::Cool),
    (&["freezing"], ConditionKey::Freezing),
    (&["frost"], ConditionKey::Frost),
    (&["humid"], ConditionKey::Humid),
    (&["dry"], ConditionKey::Dry),
    (&["volcanic ash", "volcanic-ash", "volcanic"], ConditionKey::VolcanicAsh),
];

/// Classifies a free-text description by case-insensitive keyword match.
pub fn classify_by_text(description: &str) -> ConditionKey {
    let text = description.to_lowercase();

    TEXT_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(_, key)| *key)
        .unwrap_or_default()
}

// == Lookup Display ==
/// Display table over the whole key set.
pub fn lookup_display(key: ConditionKey) -> ConditionDisplay {
    match key {
        ConditionKey::Clear => ConditionDisplay::new("☀️", "gold"),
        ConditionKey::PartlyCloudy => ConditionDisplay::new("🌤️", "orange"),
        ConditionKey::Cloudy => ConditionDisplay::new("☁️", "lightgray"),
        ConditionKey::Overcast => ConditionDisplay::new("☁️", "gray"),
        ConditionKey::Drizzle => ConditionDisplay::new("🌦️", "lightblue"),
        ConditionKey::Showers => ConditionDisplay::new("🌦️", "skyblue"),
        ConditionKey::Rain => ConditionDisplay::new("🌧️", "skyblue"),
        ConditionKey::Sleet => ConditionDisplay::new("🌨️", "lightblue"),
        ConditionKey::Hail => ConditionDisplay::new("🌨️", "white"),
        ConditionKey::Snow => ConditionDisplay::new("❄️", "white"),
        ConditionKey::Blizzard => ConditionDisplay::new("🌨️", "white"),
        ConditionKey::Thunderstorms => ConditionDisplay::new("⛈️", "red"),
        ConditionKey::Fog => ConditionDisplay::new("🌫️", "silver"),
        ConditionKey::Mist => ConditionDisplay::new("🌫️", "lightgray"),
        ConditionKey::Haze => ConditionDisplay::new("🌁", "silver"),
        ConditionKey::Smoke => ConditionDisplay::new("🌫️", "gray"),
        ConditionKey::Sandstorm => ConditionDisplay::new("🌪️", "sandybrown"),
        ConditionKey::Dust => ConditionDisplay::new("🌪️", "tan"),
        ConditionKey::Windy => ConditionDisplay::new("💨", "white"),
        ConditionKey::Hot => ConditionDisplay::new("🔥", "red"),
        ConditionKey::Warm => ConditionDisplay::new("🌡️", "orange"),
        ConditionKey::Cool => ConditionDisplay::new("🌡️", "lightblue"),
        ConditionKey::Cold => ConditionDisplay::new("❄️", "lightblue"),
        ConditionKey::Freezing => ConditionDisplay::new("🥶", "lightblue"),
        ConditionKey::Frost => ConditionDisplay::new("❄️", "lightcyan"),
        ConditionKey::Humid => ConditionDisplay::new("💧", "skyblue"),
        ConditionKey::Dry => ConditionDisplay::new("🏜️", "sandybrown"),
        ConditionKey::VolcanicAsh => ConditionDisplay::new("🌋", "darkred"),
    }
}
