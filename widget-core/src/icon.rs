//! Condition code to icon lookup.
//!
//! OpenWeather condition codes are two digits plus `d`/`n` for day or night.

/// Local icon assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Clear,
    Cloud,
    Drizzle,
    Rain,
    Snow,
    Smog,
    Wind,
    Humidity,
}

/// Night snow is keyed `13a`, so `13n` falls through to [`Icon::Clear`].
const CONDITION_ICONS: &[(&str, Icon)] = &[
    ("01d", Icon::Clear),
    ("01n", Icon::Clear),
    ("02d", Icon::Cloud),
    ("02n", Icon::Cloud),
    ("03d", Icon::Cloud),
    ("03n", Icon::Cloud),
    ("04d", Icon::Drizzle),
    ("04n", Icon::Drizzle),
    ("09d", Icon::Rain),
    ("09n", Icon::Rain),
    ("10d", Icon::Rain),
    ("10n", Icon::Rain),
    ("13d", Icon::Snow),
    ("13a", Icon::Snow),
    ("50d", Icon::Smog),
    ("50n", Icon::Smog),
];

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::Clear,
        Icon::Cloud,
        Icon::Drizzle,
        Icon::Rain,
        Icon::Snow,
        Icon::Smog,
        Icon::Wind,
        Icon::Humidity,
    ];

    /// Look up the icon for a condition code, falling back to [`Icon::Clear`].
    pub fn for_condition(code: &str) -> Icon {
        CONDITION_ICONS
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, icon)| *icon)
            .unwrap_or(Icon::Clear)
    }

    pub fn asset(&self) -> &'static str {
        match self {
            Icon::Clear => "clear.png",
            Icon::Cloud => "cloud.png",
            Icon::Drizzle => "drizzle.png",
            Icon::Rain => "rain.png",
            Icon::Snow => "snow.png",
            Icon::Smog => "smog.png",
            Icon::Wind => "wind.png",
            Icon::Humidity => "humidity.png",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Clear => "☀",
            Icon::Cloud => "☁",
            Icon::Drizzle => "🌦",
            Icon::Rain => "🌧",
            Icon::Snow => "❄",
            Icon::Smog => "🌫",
            Icon::Wind => "💨",
            Icon::Humidity => "💧",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_table_code_maps_to_its_icon() {
        for (code, icon) in CONDITION_ICONS {
            assert_eq!(Icon::for_condition(code), *icon, "code {code}");
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_clear() {
        for code in ["", "11d", "11n", "99x", "10D", "13n"] {
            assert_eq!(Icon::for_condition(code), Icon::Clear, "code {code}");
        }
    }

    #[test]
    fn night_snow_uses_13a_key() {
        assert_eq!(Icon::for_condition("13a"), Icon::Snow);
        assert_eq!(Icon::for_condition("13n"), Icon::Clear);
    }

    #[test]
    fn assets_are_distinct() {
        let assets: HashSet<_> = Icon::ALL.iter().map(Icon::asset).collect();
        assert_eq!(assets.len(), Icon::ALL.len());
    }
}
