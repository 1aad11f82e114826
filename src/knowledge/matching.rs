use super::storage::WordIndex;
use super::{calculate_value, edit_distance};

/// Known word whose value is closest to the word's value.
/// An exact tie goes to the higher value.
pub fn nearest_by_value(index: &WordIndex, word: &str) -> Option<String> {
    let target = calculate_value(word);
    let before = index.value_floor(target);
    let after = index.value_ceiling(target);
    debug!(
        "value match: {} target: {}, before: {:?}, after: {:?}",
        word, target, before, after
    );

    let matched = match (before, after) {
        (None, None) => None,
        (Some((_, w)), None) | (None, Some((_, w))) => Some(w),
        (Some((bv, bw)), Some((av, aw))) => {
            if target - bv < av - target {
                Some(bw)
            } else {
                Some(aw)
            }
        }
    };

    matched.map(str::to_string)
}

/// Alphabetical neighbour with the smaller edit distance to the word.
/// A tie goes to the alphabetically preceding neighbour.
pub fn nearest_by_lexical(index: &WordIndex, word: &str) -> Option<String> {
    let before = index.lexical_floor(word);
    let after = index.lexical_ceiling(word);

    let matched = match (before, after) {
        (None, None) => None,
        (Some(w), None) | (None, Some(w)) => Some(w),
        (Some(bw), Some(aw)) => {
            let before_distance = edit_distance(bw, word);
            let after_distance = edit_distance(aw, word);
            debug!(
                "lexical match: {}, before: {} ({}), after: {} ({})",
                word, bw, before_distance, aw, after_distance
            );
            if before_distance <= after_distance {
                Some(bw)
            } else {
                Some(aw)
            }
        }
    };

    matched.map(str::to_string)
}
