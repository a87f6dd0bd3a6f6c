//! Text normalization for whole-word phrase matching.
//!
//! [`wordify`] reduces identifiers, comment bodies and file names to a
//! canonical, lowercase, space-framed word sequence. A phrase `p` is then
//! contained as whole words exactly when the result contains `" p "`.

/// Characters replaced by a blank before words are split.
const PUNCTUATION: &[char] = &['.', '?', '!', ';', ':', '-', '/', '(', ')', '\n', '\r'];

/// Case classification of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharCase {
    /// Upper-casing is a no-op, lower-casing is not.
    Upper,
    /// Lower-casing is a no-op, upper-casing is not.
    Lower,
    /// Casing changes nothing (digits, symbols, caseless scripts).
    Neutral,
}

impl CharCase {
    fn of(c: char) -> Self {
        let no_lower_change = c.to_lowercase().eq(std::iter::once(c));
        let no_upper_change = c.to_uppercase().eq(std::iter::once(c));

        if no_lower_change == no_upper_change {
            Self::Neutral
        } else if no_upper_change {
            Self::Upper
        } else {
            Self::Lower
        }
    }
}

/// Normalizes `s` into a space-framed, lowercase word sequence.
///
/// Punctuation becomes whitespace, runs of blanks collapse, and every token is
/// split further on `MixedCase` and digit-to-letter boundaries. Returns the
/// empty string when no word remains.
///
/// # Example
///
/// ```
/// use consider_lint_core::text::wordify;
///
/// assert_eq!(
///     wordify("This is a SpecialTest     of\nsomething-true."),
///     " this is a special test of something true ",
/// );
/// assert_eq!(wordify("   "), "");
/// ```
#[must_use]
pub fn wordify(s: &str) -> String {
    let cleaned = merge_blanks(&remove_punctuation(s));

    let mut words: Vec<String> = Vec::new();
    for token in cleaned.split(' ') {
        split_case_transitions(token, &mut words);
    }

    if words.is_empty() {
        return String::new();
    }
    format!(" {} ", words.join(" ").to_lowercase())
}

fn remove_punctuation(s: &str) -> String {
    s.chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect()
}

/// Collapses runs of blanks until a fixed point is reached.
fn merge_blanks(s: &str) -> String {
    let mut current = s.to_owned();
    loop {
        let merged = current.replace("  ", " ");
        if merged.len() == current.len() {
            return merged;
        }
        current = merged;
    }
}

fn split_case_transitions(token: &str, words: &mut Vec<String>) {
    let mut part = String::new();
    let mut last = CharCase::Neutral;

    for c in token.chars() {
        let case = CharCase::of(c);
        let starts_upper = case == CharCase::Upper && last != CharCase::Upper;
        let starts_lower = case == CharCase::Lower && last == CharCase::Neutral;
        if (starts_upper || starts_lower) && !part.is_empty() {
            words.push(std::mem::take(&mut part));
        }
        last = case;
        part.push(c);
    }

    if !part.is_empty() {
        words.push(part);
    }
}
