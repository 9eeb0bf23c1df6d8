use rand::Rng;

/// Chance that a word in multi-word output gets a case transform at all.
const TRANSFORM_CHANCE: f64 = 0.4;

/// Apply the capitalization policy to one word.
///
/// Disabled caps are the identity and consume no draws. A lone requested
/// word is always capitalized. In multi-word output each word independently
/// has a 0.4 chance of a transform (an even split between capitalized and
/// all-upper), otherwise it is forced lower-case.
pub fn apply_caps<R: Rng>(
    word: &str,
    caps_enabled: bool,
    forced_single: bool,
    rng: &mut R,
) -> String {
    if !caps_enabled {
        return word.to_string();
    }
    if forced_single {
        return capitalize(word);
    }
    if rng.gen_bool(TRANSFORM_CHANCE) {
        if rng.gen_bool(0.5) {
            capitalize(word)
        } else {
            word.to_uppercase()
        }
    } else {
        word.to_lowercase()
    }
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}
