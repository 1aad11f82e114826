pub mod brain;
mod matching;
mod storage;

/// Letter-sum of a word, `a` = 1 .. `z` = 26. Only meaningful for lowercase a-z.
pub fn calculate_value(word: &str) -> i64 {
    word.bytes().map(|b| b as i64 - b'a' as i64 + 1).sum()
}

/// Levenshtein distance, case-insensitive, single-row sweep.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a = a.to_lowercase().chars().collect::<Vec<_>>();
    let b = b.to_lowercase().chars().collect::<Vec<_>>();

    let mut costs = (0..=b.len()).collect::<Vec<usize>>();
    for (i, ca) in a.iter().enumerate() {
        costs[0] = i + 1;
        // value of costs[j - 1] from the previous row
        let mut diagonal = i;
        for (j, cb) in b.iter().enumerate() {
            let substitution = if ca == cb { diagonal } else { diagonal + 1 };
            let current = (1 + costs[j + 1].min(costs[j])).min(substitution);
            diagonal = costs[j + 1];
            costs[j + 1] = current;
        }
    }

    costs[b.len()]
}
