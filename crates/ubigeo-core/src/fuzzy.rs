// crates/ubigeo-core/src/fuzzy.rs

//! # Fuzzy Matcher
//!
//! Approximate matching of a folded place name against the alias keys of the
//! equivalence table. Scores are on a 0–100 scale and follow the usual
//! "weighted ratio" recipe: a plain similarity ratio, boosted by
//! word-order-insensitive token comparisons and, when the lengths differ a
//! lot, by best-substring (partial) and shared-word comparisons.
//!
//! The matcher is a fallback only: exact key lookup always runs first.

use rapidfuzz::distance::indel;

/// Weight applied to token-based ratios so they never beat an equally good
/// plain ratio.
const UNBASE_SCALE: f64 = 0.95;

/// A winning candidate and its score (0–100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch<'a> {
    pub candidate: &'a str,
    pub score: f64,
}

/// Picks the best-scoring candidate for a query.
///
/// By default there is no minimum score: some candidate is returned for any
/// non-empty candidate set, however weak the similarity.
/// [`FuzzyMatcher::with_min_score`] adds a floor below which the match is
/// rejected.
///
/// ```rust
/// use ubigeo_core::fuzzy::FuzzyMatcher;
///
/// let matcher = FuzzyMatcher::default();
/// let hit = matcher
///     .best_match("HUANUKO", ["HUANUCO", "HUANCAVELICA", "HUAURA"])
///     .unwrap();
/// assert_eq!(hit.candidate, "HUANUCO");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FuzzyMatcher {
    min_score: Option<f64>,
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A matcher that rejects candidates scoring below `score` (0–100).
    pub fn with_min_score(score: f64) -> Self {
        Self {
            min_score: Some(score),
        }
    }

    pub fn min_score(&self) -> Option<f64> {
        self.min_score
    }

    /// Similarity between two strings, 0–100.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        wratio(a, b)
    }

    /// Scores `query` against every candidate and returns the best one.
    ///
    /// Ties keep the earliest candidate, so callers control precedence
    /// through iteration order. Returns `None` for an empty candidate set or
    /// when the best score is under the configured minimum.
    pub fn best_match<'a, I>(&self, query: &str, candidates: I) -> Option<FuzzyMatch<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut best: Option<FuzzyMatch<'a>> = None;
        for candidate in candidates {
            let score = self.score(query, candidate);
            if best.map_or(true, |b| score > b.score) {
                best = Some(FuzzyMatch { candidate, score });
                if score >= 100.0 {
                    break;
                }
            }
        }

        match (best, self.min_score) {
            (Some(hit), Some(floor)) if hit.score < floor => None,
            (hit, _) => hit,
        }
    }
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    indel::normalized_similarity(a.iter().copied(), b.iter().copied()) * 100.0
}

/// Normalized indel similarity, 0–100.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Best ratio of the shorter string against every window of the longer one.
///
/// Besides the full-length windows, the prefixes and suffixes of the longer
/// string that are shorter than the query are scored too, so a query that
/// hangs off either edge still gets credit for the overlap.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return 0.0;
    }

    let m = short.len();
    let n = long.len();
    let heads = (1..m).map(|i| &long[..i]);
    let tails = (n - m + 1..n).map(|j| &long[j..]);

    let mut best = 0.0_f64;
    for window in heads.chain(long.windows(m)).chain(tails) {
        let score = ratio_chars(&short, window);
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

fn tokens(s: &str) -> Vec<&str> {
    let mut t: Vec<&str> = s.split_whitespace().collect();
    t.sort_unstable();
    t
}

/// Ratio after sorting the words of both strings.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&tokens(a).join(" "), &tokens(b).join(" "))
}

/// Ratio over shared and leftover word sets; 100 when one side's words are
/// a subset of the other's.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let mut ta = tokens(a);
    let mut tb = tokens(b);
    ta.dedup();
    tb.dedup();

    let shared: Vec<&str> = ta.iter().copied().filter(|t| tb.contains(t)).collect();
    let only_a: Vec<&str> = ta.iter().copied().filter(|t| !shared.contains(t)).collect();
    let only_b: Vec<&str> = tb.iter().copied().filter(|t| !shared.contains(t)).collect();

    if !shared.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100.0;
    }

    let sect = shared.join(" ");
    let join = |rest: &[&str]| -> String {
        match (sect.is_empty(), rest.is_empty()) {
            (true, _) => rest.join(" "),
            (false, true) => sect.clone(),
            (false, false) => format!("{sect} {}", rest.join(" ")),
        }
    };
    let combined_a = join(&only_a);
    let combined_b = join(&only_b);

    ratio(&sect, &combined_a)
        .max(ratio(&sect, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

/// 100 when the strings share a word, otherwise the partial ratio of their
/// deduplicated, sorted words.
pub fn partial_token_set_ratio(a: &str, b: &str) -> f64 {
    let mut ta = tokens(a);
    let mut tb = tokens(b);
    ta.dedup();
    tb.dedup();
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    if ta.iter().any(|t| tb.contains(t)) {
        return 100.0;
    }
    partial_ratio(&ta.join(" "), &tb.join(" "))
}

/// Weighted combination of the ratios above, 0–100.
pub fn wratio(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let len_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;
    let base = ratio(a, b);

    if len_ratio < 1.5 {
        return base
            .max(token_set_ratio(a, b) * UNBASE_SCALE)
            .max(token_sort_ratio(a, b) * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };
    let partial = partial_ratio(a, b) * partial_scale;
    let partial_sort = partial_ratio(&tokens(a).join(" "), &tokens(b).join(" "));
    let partial_tokens =
        partial_sort.max(partial_token_set_ratio(a, b)) * UNBASE_SCALE * partial_scale;

    base.max(partial).max(partial_tokens)
}
