use std::collections::HashMap;

/// Symbol -> occurrence count.
pub type FrequencyTable = HashMap<char, usize>;

/// Counts how often each `char` occurs in `text`.
pub fn count(text: &str) -> FrequencyTable {
    text.chars().fold(HashMap::new(), |mut acc, symbol| {
        *acc.entry(symbol).or_insert(0) += 1;
        acc
    })
}
