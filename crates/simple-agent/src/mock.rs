//! Mock Data
//!
//! Static tables standing in for real weather and clock services.
//! Keys are the canonical spellings handed to the tools.

/// City → current conditions
pub const WEATHER: &[(&str, &str)] = &[
    ("New York", "Sunny, 72°F, Wind: 10 mph"),
    ("London", "Cloudy, 55°F, Wind: 15 mph"),
    ("Tokyo", "Rainy, 68°F, Wind: 8 mph"),
    ("Sydney", "Clear, 75°F, Wind: 12 mph"),
    ("Paris", "Partly cloudy, 62°F, Wind: 7 mph"),
];

/// Timezone abbreviation → current local time
pub const TIME: &[(&str, &str)] = &[
    ("UTC", "14:30 UTC"),
    ("EST", "09:30 EST"),
    ("PST", "06:30 PST"),
    ("IST", "20:00 IST"),
    ("JST", "23:30 JST"),
    ("AEST", "00:30 AEST"),
];

/// City → timezone abbreviation, for "what time is it in Tokyo"
pub const CITY_ZONES: &[(&str, &str)] = &[
    ("London", "UTC"),
    ("New York", "EST"),
    ("Los Angeles", "PST"),
    ("San Francisco", "PST"),
    ("Mumbai", "IST"),
    ("Delhi", "IST"),
    ("Tokyo", "JST"),
    ("Sydney", "AEST"),
];

/// Case-insensitive lookup returning the stored value
pub fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    let key = key.trim();
    table
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| *v)
}
