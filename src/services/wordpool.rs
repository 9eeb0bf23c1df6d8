use crate::error::{PickError, PickResult};

/// Default word list compiled into the binary.
pub const BUILTIN_WORDLIST: &str = include_str!("../../wordlist.txt");

/// Parse a word-list source into usable words. Lines are trimmed; blank
/// lines and `#` header/comment lines are dropped.
pub fn load(source: &str) -> PickResult<Vec<String>> {
    let words: Vec<String> = source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        return Err(PickError::EmptyWordlist);
    }
    Ok(words)
}

/// Keep words whose character count lies within `[min, max]`. An absent
/// bound is unbounded.
pub fn filter_by_length(
    pool: Vec<String>,
    min: Option<usize>,
    max: Option<usize>,
) -> PickResult<Vec<String>> {
    if min.is_none() && max.is_none() {
        return Ok(pool);
    }
    let kept: Vec<String> = pool
        .into_iter()
        .filter(|word| {
            let len = word.chars().count();
            min.map_or(true, |m| len >= m) && max.map_or(true, |m| len <= m)
        })
        .collect();
    if kept.is_empty() {
        return Err(PickError::NoWordsRemain);
    }
    Ok(kept)
}

/// Keep words whose case-folded first character matches `letter`. May return
/// an empty pool; the caller checks it against the requested count.
pub fn filter_by_letter(pool: Vec<String>, letter: char) -> Vec<String> {
    let wanted = fold(letter);
    pool.into_iter()
        .filter(|word| initial(word) == Some(wanted))
        .collect()
}

/// Case-folded first character of a word.
pub fn initial(word: &str) -> Option<char> {
    word.chars().next().map(fold)
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::{filter_by_length, filter_by_letter, initial, load};
    use crate::error::PickError;

    #[test]
    fn load_trims_and_drops_blanks_and_comments() {
        let words = load("# header\n# more header\n  alpha  \n\nbravo\n").expect("load");
        assert_eq!(words, vec!["alpha", "bravo"]);
    }

    #[test]
    fn load_rejects_empty_source() {
        assert!(matches!(load("# only\n\n"), Err(PickError::EmptyWordlist)));
    }

    #[test]
    fn builtin_wordlist_parses() {
        let words = load(super::BUILTIN_WORDLIST).expect("builtin list");
        assert!(words.len() > 200);
        assert!(words.iter().all(|w| !w.starts_with('#')));
    }

    #[test]
    fn length_filter_applies_both_bounds() {
        let pool = vec!["ox".to_string(), "wolf".to_string(), "pelican".to_string()];
        let kept = filter_by_length(pool, Some(3), Some(5)).expect("filter");
        assert_eq!(kept, vec!["wolf"]);
    }

    #[test]
    fn length_filter_errors_when_nothing_remains() {
        let pool = vec!["ox".to_string()];
        assert!(matches!(
            filter_by_length(pool, Some(10), None),
            Err(PickError::NoWordsRemain)
        ));
    }

    #[test]
    fn letter_filter_is_case_insensitive() {
        let pool = vec!["Apple".to_string(), "avocado".to_string(), "birch".to_string()];
        let kept = filter_by_letter(pool, 'A');
        assert_eq!(kept, vec!["Apple", "avocado"]);
    }

    #[test]
    fn initial_folds_case() {
        assert_eq!(initial("Zebra"), Some('z'));
        assert_eq!(initial(""), None);
    }
}
