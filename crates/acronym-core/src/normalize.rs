// Word normalization, input sanitizing and share links

// ---------------------------------------------------------------------------
// Engine normalization
// ---------------------------------------------------------------------------

/// Map one input character to its normalized letter.
///
/// Non-alphabetic characters (whitespace, digits, punctuation) yield `None`.
/// Letters are uppercased; when the uppercase form is not a single character
/// (e.g. `'ß'`), the original character is kept so that every alphabetic
/// input character maps to exactly one normalized letter.
pub fn normalize_letter(c: char) -> Option<char> {
    if !c.is_alphabetic() {
        return None;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => Some(c),
    }
}

/// Normalize a raw word into the letter sequence the engine indexes.
///
/// ```
/// use acronym_core::normalize::normalize_word;
/// assert_eq!(normalize_word(" go 4 it! "), vec!['G', 'O', 'I', 'T']);
/// ```
pub fn normalize_word(word: &str) -> Vec<char> {
    word.chars().filter_map(normalize_letter).collect()
}

// ---------------------------------------------------------------------------
// Front-end helpers
// ---------------------------------------------------------------------------

/// Filter text typed into the word field: only ASCII letters and whitespace
/// survive, letters are uppercased.
pub fn sanitize_input(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Build the `?word=...` query for a share link.
///
/// The word is sanitized, lowercased and percent-encoded. Returns `None`
/// when nothing but whitespace would be shared.
pub fn share_query(word: &str) -> Option<String> {
    let sanitized = sanitize_input(word);
    if sanitized.trim().is_empty() {
        return None;
    }
    let lower = sanitized.to_lowercase();
    Some(format!("?word={}", urlencoding::encode(&lower)))
}

/// Join a page URL (origin + path, no query) with the share query.
pub fn share_url(base: &str, word: &str) -> Option<String> {
    share_query(word).map(|q| format!("{base}{q}"))
}
