/// Interleave words and rendered separators into the final output string.
/// `separators` holds exactly one entry per gap between adjacent words; the
/// one-word case passes an empty slice and comes back unchanged.
pub fn compose(words: &[String], separators: &[String]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push_str(&separators[i - 1]);
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::compose;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn interleaves_words_and_separators() {
        let out = compose(
            &owned(&["alpha", "bravo", "charlie"]),
            &owned(&["-", "42"]),
        );
        assert_eq!(out, "alpha-bravo42charlie");
    }

    #[test]
    fn single_word_needs_no_separators() {
        assert_eq!(compose(&owned(&["alpha"]), &[]), "alpha");
    }
}
