use std::collections::HashMap;

use crate::normalize::normalize_text;

/// Label applied to rows whose address occurs more than once.
pub const DUPLICATE_LABEL: &str = "Duplicado";
/// Label applied to rows whose address occurs exactly once.
pub const UNIQUE_LABEL: &str = "Único";
/// Default number of ranked addresses carried into the summary.
pub const DEFAULT_TOP_N: usize = 10;

/// One entry of the frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedAddress {
    /// Normalized address shared by the group.
    pub address: String,
    /// Number of rows in the group.
    pub count: usize,
}

/// Duplicate statistics computed over the address column of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressAnalysis {
    /// Normalized deduplication key per input row, in row order.
    pub keys: Vec<String>,
    /// Total occurrences per normalized key.
    pub counts: HashMap<String, usize>,
    /// The most frequent normalized addresses, ranked by count descending.
    pub top: Vec<RankedAddress>,
}

impl AddressAnalysis {
    /// Number of rows sharing the given row's normalized address.
    pub fn repeat_count(&self, row: usize) -> usize {
        self.keys
            .get(row)
            .and_then(|key| self.counts.get(key))
            .copied()
            .unwrap_or(0)
    }

    /// Duplicate/unique label for the given row.
    pub fn label(&self, row: usize) -> &'static str {
        if self.repeat_count(row) > 1 {
            DUPLICATE_LABEL
        } else {
            UNIQUE_LABEL
        }
    }
}

/// Normalizes every address, counts group sizes, and ranks the `top_n` most
/// frequent addresses. The sort is stable, so addresses tied on count keep
/// their first-encountered order. Rows normalizing to an empty string never
/// enter the ranking.
pub fn analyze_addresses(addresses: &[String], top_n: usize) -> AddressAnalysis {
    let keys: Vec<String> = addresses.iter().map(|value| normalize_text(value)).collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for key in &keys {
        let entry = counts.entry(key.clone()).or_insert(0);
        if *entry == 0 {
            first_seen.push(key.clone());
        }
        *entry += 1;
    }

    let mut top: Vec<RankedAddress> = first_seen
        .into_iter()
        .filter(|key| !key.is_empty())
        .map(|address| {
            let count = counts.get(&address).copied().unwrap_or(0);
            RankedAddress { address, count }
        })
        .collect();
    top.sort_by(|lhs, rhs| rhs.count.cmp(&lhs.count));
    top.truncate(top_n);

    AddressAnalysis { keys, counts, top }
}
