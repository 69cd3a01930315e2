//! Abbreviation expansion for questions.
//!
//! A question is split on whitespace and each token is rewritten
//! independently against the [`Glossary`]:
//!
//! 1. **Decomposition**: `^(\W*)([\w-]+)(\W*)$` splits the token into leading
//!    punctuation, a core word (word characters and hyphens) and trailing
//!    punctuation. A known core is replaced and the punctuation re-attached.
//! 2. **Fallback**: tokens the pattern cannot split (`U.S.A.`, `CPU's`) are
//!    stripped of outer non-word characters; a known candidate replaces its
//!    first occurrence inside the raw token.
//!
//! Tokens are re-joined with single spaces, so runs of whitespace collapse.

use crate::glossary::Glossary;
use regex::Regex;
use std::sync::LazyLock;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\W*)([\w-]+)(\W*)$").expect("token pattern is valid"));

static OUTER_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\W+|\W+$").expect("punctuation pattern is valid"));

/// A whitespace-delimited token split around its core word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub leading: &'a str,
    pub core: &'a str,
    pub trailing: &'a str,
}

/// Split a token into leading punctuation, core word and trailing punctuation.
///
/// Returns `None` when the token has no single run of word characters and
/// hyphens bounded by punctuation (pure punctuation, inner dots, apostrophes).
pub fn decompose_token(token: &str) -> Option<TokenParts<'_>> {
    let caps = TOKEN_PATTERN.captures(token)?;
    Some(TokenParts {
        leading: caps.get(1).map_or("", |m| m.as_str()),
        core: caps.get(2).map_or("", |m| m.as_str()),
        trailing: caps.get(3).map_or("", |m| m.as_str()),
    })
}

/// Rewrite every known abbreviation in `question` with its expansion.
///
/// Never fails: unknown tokens pass through unchanged.
pub fn expand(question: &str, glossary: &Glossary) -> String {
    question
        .split_whitespace()
        .map(|token| expand_token(token, glossary))
        .collect::<Vec<_>>()
        .join(" ")
}

fn expand_token(token: &str, glossary: &Glossary) -> String {
    if let Some(parts) = decompose_token(token) {
        return match glossary.lookup(parts.core) {
            Some(expansion) => format!("{}{}{}", parts.leading, expansion, parts.trailing),
            None => token.to_string(),
        };
    }

    let candidate = OUTER_PUNCTUATION.replace_all(token, "");
    if candidate.is_empty() {
        return token.to_string();
    }

    // First textual occurrence only; may land on an earlier repeat of the
    // candidate inside the token.
    match glossary.lookup(&candidate) {
        Some(expansion) => token.replacen(candidate.as_ref(), expansion, 1),
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glossary() -> Glossary {
        [
            ("ASAP", "as soon as possible"),
            ("CPU", "central processing unit"),
            ("U.S.A", "United States of America"),
            ("CPU'S", "processors"),
            ("E-MAIL", "electronic mail"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_decompose_plain_word() {
        let parts = decompose_token("CPU").unwrap();
        assert_eq!(parts.leading, "");
        assert_eq!(parts.core, "CPU");
        assert_eq!(parts.trailing, "");
    }

    #[test]
    fn test_decompose_with_punctuation() {
        let parts = decompose_token("(CPU)?").unwrap();
        assert_eq!(parts.leading, "(");
        assert_eq!(parts.core, "CPU");
        assert_eq!(parts.trailing, ")?");
    }

    #[test]
    fn test_decompose_keeps_trailing_hyphen_in_core() {
        let parts = decompose_token("-CPU-").unwrap();
        assert_eq!(parts.leading, "-");
        assert_eq!(parts.core, "CPU-");
        assert_eq!(parts.trailing, "");
    }

    #[test]
    fn test_decompose_fails_on_inner_punctuation() {
        assert!(decompose_token("U.S.A.").is_none());
        assert!(decompose_token("?!").is_none());
        assert!(decompose_token("CPU's").is_none());
    }

    #[test]
    fn test_expand_identity_without_glossary() {
        let empty = Glossary::empty();
        let q = "What is a CPU? (and why) U.S.A.!";
        assert_eq!(expand(q, &empty), q);
    }

    #[test]
    fn test_expand_preserves_punctuation() {
        assert_eq!(expand("Reply ASAP!", &glossary()), "Reply as soon as possible!");
        assert_eq!(
            expand("What is a CPU?", &glossary()),
            "What is a central processing unit?"
        );
        assert_eq!(
            expand("\"(cpu)\"", &glossary()),
            "\"(central processing unit)\""
        );
    }

    #[test]
    fn test_expand_is_case_insensitive() {
        assert_eq!(expand("asap", &glossary()), "as soon as possible");
    }

    #[test]
    fn test_expand_hyphenated_core() {
        assert_eq!(expand("e-mail?", &glossary()), "electronic mail?");
    }

    #[test]
    fn test_expand_collapses_whitespace() {
        assert_eq!(
            expand("  Reply   ASAP \t now ", &glossary()),
            "Reply as soon as possible now"
        );
    }

    #[test]
    fn test_expand_fallback_dotted_abbreviation() {
        assert_eq!(
            expand("Where is the U.S.A.?", &glossary()),
            // Only the first occurrence of the stripped candidate is replaced,
            // so the abbreviation's own trailing dot stays.
            "Where is the United States of America.?"
        );
    }

    #[test]
    fn test_expand_fallback_apostrophe() {
        assert_eq!(expand("Why CPU's?", &glossary()), "Why processors?");
    }

    #[test]
    fn test_expand_fallback_unknown_is_unchanged() {
        assert_eq!(expand("don't", &glossary()), "don't");
        assert_eq!(expand("?!", &glossary()), "?!");
    }

    #[test]
    fn test_expand_fallback_keeps_outer_punctuation() {
        let glossary: Glossary = [("A.A", "x")].into_iter().collect();
        assert_eq!(expand("(a.a)", &glossary), "(x)");
        // "a.a.a" is its own candidate and is not a key
        assert_eq!(expand("a.a.a", &glossary), "a.a.a");
    }

    #[test]
    fn test_expand_does_not_touch_unknown_tokens() {
        assert_eq!(expand("Tell me about GPUs", &glossary()), "Tell me about GPUs");
    }

    #[test]
    fn test_expand_empty_question() {
        assert_eq!(expand("", &glossary()), "");
        assert_eq!(expand("   ", &glossary()), "");
    }
}
