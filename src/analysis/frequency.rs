use crate::history::draw::{Draw, MAX_NUMBER, MIN_NUMBER};
use serde::{Serialize, Serializer};

/// Occurrence count of every number over the whole history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    // index 0 unused
    counts: [u32; MAX_NUMBER as usize + 1],
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            counts: [0; MAX_NUMBER as usize + 1],
        }
    }

    pub fn record(&mut self, number: u8) {
        if (MIN_NUMBER..=MAX_NUMBER).contains(&number) {
            self.counts[number as usize] += 1;
        }
    }

    /// Count for `number`; 0 for numbers never drawn or outside 1..=45.
    pub fn get(&self, number: u8) -> u32 {
        if (MIN_NUMBER..=MAX_NUMBER).contains(&number) {
            self.counts[number as usize]
        } else {
            0
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        (MIN_NUMBER..=MAX_NUMBER).map(move |n| (n, self.counts[n as usize]))
    }

    #[cfg(test)]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Bar length for the chart: percentage of the highest count.
    pub fn relative(&self, number: u8) -> f64 {
        let max = self.max_count();
        if max == 0 {
            0.0
        } else {
            self.get(number) as f64 / max as f64 * 100.0
        }
    }

    /// Highest count among drawn numbers; ties go to the lowest number.
    pub fn most_frequent(&self) -> Option<(u8, u32)> {
        self.iter()
            .filter(|&(_, c)| c > 0)
            .fold(None, |best, (n, c)| match best {
                Some((_, bc)) if bc >= c => best,
                _ => Some((n, c)),
            })
    }

    /// Lowest non-zero count; ties go to the lowest number.
    pub fn least_frequent(&self) -> Option<(u8, u32)> {
        self.iter()
            .filter(|&(_, c)| c > 0)
            .fold(None, |best, (n, c)| match best {
                Some((_, bc)) if bc <= c => best,
                _ => Some((n, c)),
            })
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().filter(|&(_, c)| c > 0))
    }
}

pub fn analyze_frequency(draws: &[Draw]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for draw in draws {
        for &n in draw.numbers() {
            table.record(n);
        }
    }
    table
}

/// Headline numbers for the statistics panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub total_draws: usize,
    pub most_frequent: Option<u8>,
    pub least_frequent: Option<u8>,
    pub average_sum: Option<f64>,
}

pub fn summarize(draws: &[Draw], table: &FrequencyTable) -> HistorySummary {
    let average_sum = if draws.is_empty() {
        None
    } else {
        let total: u32 = draws.iter().map(Draw::sum).sum();
        Some(total as f64 / draws.len() as f64)
    };

    HistorySummary {
        total_draws: draws.len(),
        most_frequent: table.most_frequent().map(|(n, _)| n),
        least_frequent: table.least_frequent().map(|(n, _)| n),
        average_sum,
    }
}
