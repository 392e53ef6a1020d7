use crate::history::draw::{Draw, DRAW_SIZE};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeDistribution {
    /// 1-15
    pub low: f64,
    /// 16-30
    pub mid: f64,
    /// 31-45
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternStats {
    /// Mean number of `n, n+1` pairs per draw.
    pub consecutive_rate: f64,
    pub odd_percent: f64,
    pub even_percent: f64,
    pub ranges: RangeDistribution,
}

/// Number of adjacent pairs in the sorted numbers that differ by exactly one.
pub fn consecutive_pairs(numbers: &[u8]) -> usize {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).filter(|w| w[1] == w[0] + 1).count()
}

/// `None` when there is no history to describe.
pub fn analyze_patterns(draws: &[Draw]) -> Option<PatternStats> {
    if draws.is_empty() {
        return None;
    }

    let mut consecutive = 0usize;
    let mut odd = 0usize;
    let mut buckets = [0usize; 3];

    for draw in draws {
        consecutive += consecutive_pairs(draw.numbers());
        for &n in draw.numbers() {
            if n % 2 == 1 {
                odd += 1;
            }
            let bucket = match n {
                0..=15 => 0,
                16..=30 => 1,
                _ => 2,
            };
            buckets[bucket] += 1;
        }
    }

    let total = draws.len() * DRAW_SIZE;
    let percent = |count: usize| count as f64 / total as f64 * 100.0;

    Some(PatternStats {
        consecutive_rate: consecutive as f64 / draws.len() as f64,
        odd_percent: percent(odd),
        even_percent: percent(total - odd),
        ranges: RangeDistribution {
            low: percent(buckets[0]),
            mid: percent(buckets[1]),
            high: percent(buckets[2]),
        },
    })
}
