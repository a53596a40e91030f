//! Shared string helpers for naming and code generation.
//!
//! Every helper works on `char`s, never on byte offsets, so arbitrary
//! (including empty or non-ASCII) input is safe.

/// Upper-case the first character (e.g., "scoreText" -> "ScoreText")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character (e.g., "ScoreText" -> "scoreText")
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Prepend `prefix` to `name`; an empty prefix leaves the name untouched.
pub fn add_prefix(name: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}{}", prefix, name)
    }
}

/// Drop the first `n` characters of `s`.
pub fn drop_chars(s: &str, n: usize) -> String {
    s.chars().skip(n).collect()
}

/// Split a Pascal/camel-case identifier into words.
///
/// A word boundary sits before an uppercase letter whose predecessor is not
/// uppercase, so acronym runs stay together ("UIPanel" is a single word,
/// "PlayerHealth" is two).
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in s.chars() {
        let boundary = prev.is_some_and(|p| c.is_uppercase() && !p.is_uppercase());
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("scoreText"), "ScoreText");
        assert_eq!(capitalize("ScoreText"), "ScoreText");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn test_lowercase_first() {
        assert_eq!(lowercase_first("ScoreText"), "scoreText");
        assert_eq!(lowercase_first("URL"), "uRL");
        assert_eq!(lowercase_first(""), "");
    }

    #[test]
    fn test_add_prefix() {
        assert_eq!(add_prefix("score", "_"), "_score");
        assert_eq!(add_prefix("score", ""), "score");
        assert_eq!(add_prefix("", "m_"), "m_");
    }

    #[test]
    fn test_drop_chars() {
        assert_eq!(drop_chars("txtScore", 3), "Score");
        assert_eq!(drop_chars("ab", 3), "");
        assert_eq!(drop_chars("ñandú", 1), "andú");
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("PlayerHealth"), vec!["Player", "Health"]);
        assert_eq!(split_words("playerHealth"), vec!["player", "Health"]);
        assert_eq!(split_words("UIPanel"), vec!["UIPanel"]);
        assert_eq!(split_words("MainUIPanel"), vec!["Main", "UIPanel"]);
        assert_eq!(split_words("Rigidbody2D"), vec!["Rigidbody2", "D"]);
        assert_eq!(split_words("Inventory"), vec!["Inventory"]);
        assert!(split_words("").is_empty());
    }
}
