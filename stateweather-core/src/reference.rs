//! Fixed lookup tables: Indian state → capital city, and Open-Meteo
//! weather code → display label.

/// Label used for any weather code missing from [`WEATHER_LABELS`].
pub const UNKNOWN_LABEL: &str = "🌍 Unknown";

/// Supported states and union territories with the city used for lookups.
pub const STATE_CAPITALS: &[(&str, &str)] = &[
    ("Andhra Pradesh", "Amaravati"),
    ("Arunachal Pradesh", "Itanagar"),
    ("Assam", "Dispur"),
    ("Bihar", "Patna"),
    ("Chhattisgarh", "Raipur"),
    ("Goa", "Panaji"),
    ("Gujarat", "Gandhinagar"),
    ("Haryana", "Chandigarh"),
    ("Himachal Pradesh", "Shimla"),
    ("Jharkhand", "Ranchi"),
    ("Karnataka", "Bengaluru"),
    ("Kerala", "Thiruvananthapuram"),
    ("Madhya Pradesh", "Bhopal"),
    ("Maharashtra", "Mumbai"),
    ("Manipur", "Imphal"),
    ("Meghalaya", "Shillong"),
    ("Mizoram", "Aizawl"),
    ("Nagaland", "Kohima"),
    ("Odisha", "Bhubaneswar"),
    ("Punjab", "Chandigarh"),
    ("Rajasthan", "Jaipur"),
    ("Sikkim", "Gangtok"),
    ("Tamil Nadu", "Chennai"),
    ("Telangana", "Hyderabad"),
    ("Tripura", "Agartala"),
    ("Uttar Pradesh", "Lucknow"),
    ("Uttarakhand", "Dehradun"),
    ("West Bengal", "Kolkata"),
    ("Delhi", "New Delhi"),
    ("Jammu and Kashmir", "Srinagar"),
    ("Ladakh", "Leh"),
];

/// WMO weather codes reported by Open-Meteo, with an icon glyph.
pub const WEATHER_LABELS: &[(i32, &str)] = &[
    (0, "☀️ Clear Sky"),
    (1, "🌤️ Mainly Clear"),
    (2, "⛅ Partly Cloudy"),
    (3, "☁️ Overcast"),
    (45, "🌫️ Fog"),
    (48, "🌫️ Rime Fog"),
    (51, "🌦️ Light Drizzle"),
    (61, "🌧️ Light Rain"),
    (63, "🌧️ Moderate Rain"),
    (65, "🌧️ Heavy Rain"),
    (71, "❄️ Snowfall"),
    (80, "🌦️ Rain Showers"),
    (95, "⛈️ Thunderstorm"),
];

/// Capital for an exact (case-sensitive) state name.
pub fn capital_of(state: &str) -> Option<&'static str> {
    STATE_CAPITALS
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, capital)| *capital)
}

/// All supported state names, in table order.
pub fn state_names() -> Vec<&'static str> {
    STATE_CAPITALS.iter().map(|(name, _)| *name).collect()
}

/// Display label for a weather code. Never fails.
pub fn label_for(code: i32) -> &'static str {
    WEATHER_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_LABEL)
}
