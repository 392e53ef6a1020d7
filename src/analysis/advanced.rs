use crate::history::draw::{Draw, MAX_NUMBER, MIN_NUMBER};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Draws considered for hot/cold ranking.
pub const HOT_COLD_WINDOW: usize = 10;
/// Draws a number must be absent from to count as overdue.
pub const OVERDUE_WINDOW: usize = 5;
/// Length of the hot and cold lists.
pub const RANK_SIZE: usize = 10;
pub const SUM_BUCKET_WIDTH: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedStats {
    pub hot_numbers: Vec<u8>,
    pub cold_numbers: Vec<u8>,
    pub overdue_numbers: Vec<u8>,
    /// Bucket start (multiple of 20) to number of draws whose sum falls in it.
    pub sum_distribution: BTreeMap<u32, usize>,
}

impl AdvancedStats {
    pub fn max_bucket_count(&self) -> usize {
        self.sum_distribution.values().copied().max().unwrap_or(0)
    }
}

pub fn sum_bucket(sum: u32) -> u32 {
    sum / SUM_BUCKET_WIDTH * SUM_BUCKET_WIDTH
}

/// Numbers drawn in `window`, by count descending then number ascending.
/// Numbers that never appear in the window are not ranked.
pub fn rank_by_count(window: &[Draw]) -> Vec<u8> {
    let mut counts = [0u32; MAX_NUMBER as usize + 1];
    for draw in window {
        for &n in draw.numbers() {
            counts[n as usize] += 1;
        }
    }

    let mut ranked: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER)
        .filter(|&n| counts[n as usize] > 0)
        .collect();
    ranked.sort_by(|a, b| counts[*b as usize].cmp(&counts[*a as usize]).then(a.cmp(b)));
    ranked
}

/// `draws` is most recent first; short histories shrink the windows.
pub fn analyze_advanced(draws: &[Draw]) -> AdvancedStats {
    let window = &draws[..HOT_COLD_WINDOW.min(draws.len())];
    let ranked = rank_by_count(window);

    let hot_numbers = ranked.iter().take(RANK_SIZE).copied().collect();
    let cold_numbers = ranked[ranked.len().saturating_sub(RANK_SIZE)..].to_vec();

    let recent: HashSet<u8> = window
        .iter()
        .take(OVERDUE_WINDOW)
        .flat_map(|d| d.numbers().iter().copied())
        .collect();
    let overdue_numbers = (MIN_NUMBER..=MAX_NUMBER)
        .filter(|n| !recent.contains(n))
        .collect();

    let mut sum_distribution = BTreeMap::new();
    for draw in draws {
        *sum_distribution.entry(sum_bucket(draw.sum())).or_insert(0) += 1;
    }

    AdvancedStats {
        hot_numbers,
        cold_numbers,
        overdue_numbers,
        sum_distribution,
    }
}
