use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::models::SeparatorKind;
use crate::error::{PickError, PickResult};

const CONCRETE_KINDS: [SeparatorKind; 4] = [
    SeparatorKind::Dots,
    SeparatorKind::Dashes,
    SeparatorKind::Underscores,
    SeparatorKind::Numbers,
];

/// Parse a comma-separated separator spec against the closed alias table.
/// Order is preserved; duplicates are kept for display purposes.
pub fn parse_spec(raw: &str) -> PickResult<Vec<SeparatorKind>> {
    raw.split(',')
        .map(|token| {
            let t = token.trim().to_lowercase();
            match t.as_str() {
                "dots" | "dot" | "." => Ok(SeparatorKind::Dots),
                "dashes" | "dash" | "-" => Ok(SeparatorKind::Dashes),
                "underscores" | "underscore" | "_" => Ok(SeparatorKind::Underscores),
                "numbers" | "number" => Ok(SeparatorKind::Numbers),
                "random" => Ok(SeparatorKind::Random),
                _ => Err(PickError::UnknownSeparator(token.trim().to_string())),
            }
        })
        .collect()
}

/// Distinct concrete kinds named by a spec, in first-seen order. The
/// wildcard is excluded: it names no kind of its own.
pub fn required_kinds(spec: &[SeparatorKind]) -> Vec<SeparatorKind> {
    let mut required = Vec::new();
    for kind in spec {
        if *kind != SeparatorKind::Random && !required.contains(kind) {
            required.push(*kind);
        }
    }
    required
}

/// Number of distinct kinds a spec names, wildcard included. Used for the
/// single-word suffix note.
pub fn distinct_kinds(spec: &[SeparatorKind]) -> usize {
    let mut seen = Vec::new();
    for kind in spec {
        if !seen.contains(kind) {
            seen.push(*kind);
        }
    }
    seen.len()
}

pub struct CoveragePlan {
    pub rendered: Vec<String>,
    pub covered_all: bool,
}

/// Pick one separator for the single-word suffix: a uniform choice among the
/// spec's entries, rendered once. Returns `None` only for an empty spec.
pub fn plan_single<R: Rng>(
    spec: &[SeparatorKind],
    rng: &mut R,
) -> Option<(String, SeparatorKind)> {
    let kind = *spec.choose(rng)?;
    Some((render(kind, rng), kind))
}

/// Fill `slots` separator positions, guaranteeing one instance of every
/// required kind whenever they fit. Remaining slots draw uniformly from the
/// fill pool: all four concrete kinds when the spec contains the wildcard or
/// names no concrete kind, otherwise the required kinds themselves. The
/// token list is shuffled before rendering so repeats do not cluster.
pub fn plan_coverage<R: Rng>(
    spec: &[SeparatorKind],
    slots: usize,
    rng: &mut R,
) -> CoveragePlan {
    if slots == 0 {
        return CoveragePlan {
            rendered: Vec::new(),
            covered_all: true,
        };
    }

    let has_random = spec.contains(&SeparatorKind::Random);
    let required = required_kinds(spec);

    let (mut tokens, covered_all) = if slots >= required.len() {
        let mut tokens = required.clone();
        let fill: &[SeparatorKind] = if has_random || required.is_empty() {
            &CONCRETE_KINDS
        } else {
            &required
        };
        while tokens.len() < slots {
            tokens.push(fill[rng.gen_range(0..fill.len())]);
        }
        (tokens, true)
    } else {
        (required[..slots].to_vec(), false)
    };

    tokens.shuffle(rng);
    let rendered = tokens.iter().map(|kind| render(*kind, rng)).collect();
    CoveragePlan {
        rendered,
        covered_all,
    }
}

/// Render one kind to its concrete string. The wildcard resolves here, and
/// `Numbers` draws a fresh value in 1..=999 per occurrence.
pub fn render<R: Rng>(kind: SeparatorKind, rng: &mut R) -> String {
    match kind {
        SeparatorKind::Dots => ".".to_string(),
        SeparatorKind::Dashes => "-".to_string(),
        SeparatorKind::Underscores => "_".to_string(),
        SeparatorKind::Numbers => rng.gen_range(1u32..=999).to_string(),
        SeparatorKind::Random => {
            let concrete = CONCRETE_KINDS[rng.gen_range(0..CONCRETE_KINDS.len())];
            render(concrete, rng)
        }
    }
}
