use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

use crate::error::{PickError, PickResult};
use crate::services::wordpool;

/// Draw `count` distinct words uniformly without replacement.
pub fn pick_distinct<R: Rng>(
    pool: &[String],
    count: usize,
    rng: &mut R,
) -> PickResult<Vec<String>> {
    if pool.len() < count {
        return Err(PickError::InsufficientPool {
            requested: count,
            available: pool.len(),
        });
    }
    let mut candidates = pool.to_vec();
    let mut chosen = Vec::with_capacity(count);
    for _ in 0..count {
        let i = rng.gen_range(0..candidates.len());
        chosen.push(candidates.swap_remove(i));
    }
    Ok(chosen)
}

/// Draw `count` words whose case-folded starting letters are pairwise
/// distinct. Group order is randomized, as is the pick within each group;
/// the result follows the group-visit order, not pool order.
///
/// Groups are keyed through a `BTreeMap` so the pre-shuffle order is stable
/// and a fixed seed reproduces the same draw.
pub fn pick_unique_initials<R: Rng>(
    pool: &[String],
    count: usize,
    rng: &mut R,
) -> PickResult<Vec<String>> {
    let mut groups: BTreeMap<char, Vec<&String>> = BTreeMap::new();
    for word in pool {
        if let Some(c) = wordpool::initial(word) {
            groups.entry(c).or_default().push(word);
        }
    }
    if groups.len() < count {
        return Err(PickError::InsufficientDistinctLetters {
            requested: count,
            available: groups.len(),
        });
    }

    let mut letters: Vec<char> = groups.keys().copied().collect();
    letters.shuffle(rng);

    let mut chosen = Vec::with_capacity(count);
    for letter in letters.into_iter().take(count) {
        let members = &groups[&letter];
        chosen.push(members[rng.gen_range(0..members.len())].clone());
    }
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::{pick_distinct, pick_unique_initials};
    use crate::error::PickError;
    use crate::services::wordpool;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn distinct_draw_returns_requested_count_without_repeats() {
        let pool = pool(&["alpha", "bravo", "charlie", "delta", "echo"]);
        let mut rng = StdRng::seed_from_u64(9);
        let chosen = pick_distinct(&pool, 4, &mut rng).expect("pick");
        assert_eq!(chosen.len(), 4);
        for (i, word) in chosen.iter().enumerate() {
            assert!(pool.contains(word));
            assert!(!chosen[i + 1..].contains(word));
        }
    }

    #[test]
    fn distinct_draw_is_reproducible_for_a_seed() {
        let pool = pool(&["alpha", "bravo", "charlie", "delta"]);
        let first = pick_distinct(&pool, 3, &mut StdRng::seed_from_u64(1111)).expect("pick");
        let second = pick_distinct(&pool, 3, &mut StdRng::seed_from_u64(1111)).expect("pick");
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_draw_fails_on_short_pool() {
        let pool = pool(&["alpha", "bravo"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            pick_distinct(&pool, 3, &mut rng),
            Err(PickError::InsufficientPool {
                requested: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn unique_initials_never_repeat_a_starting_letter() {
        let pool = pool(&[
            "apple", "avocado", "birch", "blossom", "cedar", "cinder", "daisy",
        ]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = pick_unique_initials(&pool, 3, &mut rng).expect("pick");
            let mut initials: Vec<char> =
                chosen.iter().filter_map(|w| wordpool::initial(w)).collect();
            initials.sort_unstable();
            initials.dedup();
            assert_eq!(initials.len(), 3, "repeated initial in {chosen:?}");
        }
    }

    #[test]
    fn unique_initials_fail_when_groups_are_scarce() {
        let pool = pool(&["apple", "avocado", "birch"]);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            pick_unique_initials(&pool, 3, &mut rng),
            Err(PickError::InsufficientDistinctLetters {
                requested: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn unique_initials_fold_case_when_grouping() {
        let pool = pool(&["Apple", "avocado", "Birch"]);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(pick_unique_initials(&pool, 3, &mut rng).is_err());
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            pick_unique_initials(&pool, 2, &mut rng).expect("pick").len(),
            2
        );
    }
}
