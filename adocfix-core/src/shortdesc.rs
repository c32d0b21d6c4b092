//! Shortdesc length normalization and title-based derivation.
//!
//! A compliant shortdesc is between [`SHORTDESC_MIN`] and [`SHORTDESC_MAX`]
//! characters. Everything here is a pure function of its input: the same
//! title or candidate always produces the same output.

/// Minimum shortdesc length in characters.
pub const SHORTDESC_MIN: usize = 50;
/// Maximum shortdesc length in characters.
pub const SHORTDESC_MAX: usize = 300;

/// Suffix appended to reach the minimum length when deriving or padding.
pub const DEFAULT_SUFFIX: &str = " Use this when writing or matching rules.";

/// Filler used when a title is empty and nothing can be derived from it.
const EMPTY_TITLE_FILLER: &str = "This topic.";

/// Marker appended when a too-long shortdesc is truncated.
const ELLIPSIS: char = '…';

/// Adjust a candidate shortdesc into the [50, 300] character window.
///
/// Within bounds the input is returned unchanged, so the function is
/// idempotent. Lengths are counted in characters, not bytes.
pub fn normalize(text: &str) -> String {
    let len = char_len(text);
    if len > SHORTDESC_MAX {
        truncate_at_word_boundary(text)
    } else if len < SHORTDESC_MIN {
        pad_to_minimum(text)
    } else {
        text.to_string()
    }
}

/// Build a shortdesc candidate from a topic title.
///
/// The title is framed as a sentence and extended with [`DEFAULT_SUFFIX`] so
/// the candidate is never a verbatim echo of the title. The caller is
/// expected to pass the result through [`normalize`].
pub fn derive_from_title(title: &str) -> String {
    let trimmed = title.trim();
    let base = if trimmed.is_empty() {
        EMPTY_TITLE_FILLER.to_string()
    } else if trimmed.ends_with('.') {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    };
    format!("{base}{DEFAULT_SUFFIX}")
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cut to the longest prefix that ends at a whitespace boundary, leaving
/// room for the ellipsis marker.
fn truncate_at_word_boundary(text: &str) -> String {
    let limit = SHORTDESC_MAX - 1;
    let prefix: String = text.chars().take(limit).collect();
    let mut result = match prefix.rfind(char::is_whitespace) {
        Some(boundary) => prefix[..boundary].trim_end().to_string(),
        // Single unbroken run of characters, hard cut is the only option.
        None => prefix,
    };
    result.push(ELLIPSIS);
    if char_len(&result) < SHORTDESC_MIN {
        pad_to_minimum(&result)
    } else {
        result
    }
}

/// Append whole copies of [`DEFAULT_SUFFIX`] until the floor is met,
/// never crossing the ceiling. The loop can stop short of the floor only if
/// another copy would cross the ceiling first; with the current suffix that
/// cannot happen for any input under the floor, but the guard stands.
fn pad_to_minimum(text: &str) -> String {
    let suffix_len = char_len(DEFAULT_SUFFIX);
    let mut result = text.trim_end().to_string();
    while char_len(&result) < SHORTDESC_MIN {
        if char_len(&result) + suffix_len > SHORTDESC_MAX {
            break;
        }
        result.push_str(DEFAULT_SUFFIX);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_SUFFIX, SHORTDESC_MAX, SHORTDESC_MIN, derive_from_title, normalize,
    };

    fn char_len(text: &str) -> usize {
        text.chars().count()
    }

    #[test]
    fn in_bounds_input_is_unchanged() {
        let text = "A perfectly reasonable description of this topic's content.";
        assert!(char_len(text) >= SHORTDESC_MIN && char_len(text) <= SHORTDESC_MAX);
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn long_input_is_truncated_at_a_word_boundary() {
        let text = "word ".repeat(100);
        let result = normalize(&text);
        let len = char_len(&result);
        assert!((SHORTDESC_MIN..=SHORTDESC_MAX).contains(&len));
        assert!(result.ends_with('…'));
        // The character before the ellipsis completes a word.
        let before_marker: Vec<char> = result.chars().collect();
        assert_eq!(before_marker[before_marker.len() - 2], 'd');
    }

    #[test]
    fn long_input_without_boundary_is_hard_cut() {
        let text = "x".repeat(500);
        let result = normalize(&text);
        assert_eq!(char_len(&result), SHORTDESC_MAX);
        assert!(result.ends_with('…'));
        assert!(result.starts_with("xxx"));
    }

    #[test]
    fn short_input_is_padded_past_the_floor() {
        let result = normalize("Too short.");
        let len = char_len(&result);
        assert!((SHORTDESC_MIN..=SHORTDESC_MAX).contains(&len));
        assert!(result.starts_with("Too short."));
        assert!(result.contains("Use this when writing or matching rules."));
    }

    #[test]
    fn empty_input_is_padded_from_the_suffix_alone() {
        let result = normalize("");
        assert!(char_len(&result) >= SHORTDESC_MIN);
        assert!(char_len(&result) <= SHORTDESC_MAX);
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            String::new(),
            "Short.".to_string(),
            "word ".repeat(100),
            "x".repeat(500),
            "A perfectly reasonable description of this topic's content.".to_string(),
        ];
        for input in inputs {
            let once = normalize(&input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // Multi-byte characters separated by spaces, well past the limit.
        let text = "héllo wörld ".repeat(40);
        let result = normalize(&text);
        assert!(char_len(&result) <= SHORTDESC_MAX);
        assert!(result.ends_with('…'));
    }

    #[test]
    fn derivation_frames_the_title_as_a_sentence() {
        let candidate = derive_from_title("Configuring the rule engine");
        assert_eq!(
            candidate,
            format!("Configuring the rule engine.{DEFAULT_SUFFIX}")
        );
    }

    #[test]
    fn derivation_keeps_an_existing_period() {
        let candidate = derive_from_title("Configuring the rule engine.");
        assert_eq!(
            candidate,
            format!("Configuring the rule engine.{DEFAULT_SUFFIX}")
        );
    }

    #[test]
    fn derivation_falls_back_for_empty_titles() {
        let candidate = derive_from_title("   ");
        assert_eq!(candidate, format!("This topic.{DEFAULT_SUFFIX}"));
        assert!(char_len(&normalize(&candidate)) >= SHORTDESC_MIN);
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(
            derive_from_title("Managing overrides"),
            derive_from_title("Managing overrides")
        );
    }
}
