//! Display helpers derived from condition data: background theme and icon URLs.

const BACKGROUND_BASE_URL: &str = "https://source.unsplash.com/1600x900/";

/// Theme used before any successful lookup.
pub const DEFAULT_BACKGROUND_QUERY: &str = "nature,sky";

/// Theme key for a primary condition label ("Clouds" -> "clouds").
pub fn theme_key(condition_main: &str) -> String {
    condition_main.trim().to_lowercase()
}

/// Background image URL for a theme key, or the default scene when `None`.
pub fn background_url(theme: Option<&str>) -> String {
    match theme {
        Some(key) if !key.is_empty() => format!("{BACKGROUND_BASE_URL}?{key},weather"),
        _ => format!("{BACKGROUND_BASE_URL}?{DEFAULT_BACKGROUND_QUERY}"),
    }
}

/// Static icon URL for a provider icon id.
pub fn icon_url(icon_base_url: &str, icon_id: &str) -> String {
    format!("{}/{}@2x.png", icon_base_url.trim_end_matches('/'), icon_id)
}
