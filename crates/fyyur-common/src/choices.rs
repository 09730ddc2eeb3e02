//! Enumerated values offered by the venue and artist forms

/// Genres a venue or artist may list, in display order.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// US state codes (including DC), in display order.
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Exact, case-sensitive match against [`GENRES`].
pub fn is_valid_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}

/// Exact, case-sensitive match against [`STATES`].
pub fn is_valid_state(state: &str) -> bool {
    STATES.contains(&state)
}
