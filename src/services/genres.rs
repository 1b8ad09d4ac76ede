//! Prompt-to-genre keyword table.
//!
//! Matching is plain substring search over the lowered prompt, scanning [`GENRE_TABLE`]
//! top to bottom. The first hit wins, so "dramatic" matches `drama` and a prompt naming
//! both "comedy" and "horror" resolves to comedy.

/// Keyword to TMDB genre id, in match priority order
pub const GENRE_TABLE: &[(&str, u32)] = &[
    ("action", 28),
    ("adventure", 12),
    ("comedy", 35),
    ("drama", 18),
    ("horror", 27),
    ("romance", 10749),
    ("sci-fi", 878),
    ("thriller", 53),
    // synonyms
    ("scary", 27),
    ("funny", 35),
    ("romantic", 10749),
    ("science fiction", 878),
    ("suspense", 53),
];

/// A keyword hit in the genre table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreMatch {
    pub keyword: &'static str,
    pub genre_id: u32,
}

/// Find the first table keyword contained in an already lower-cased prompt
pub fn match_genre(prompt_lower: &str) -> Option<GenreMatch> {
    GENRE_TABLE
        .iter()
        .find(|(keyword, _)| prompt_lower.contains(keyword))
        .map(|&(keyword, genre_id)| GenreMatch { keyword, genre_id })
}
