pub mod advanced;
pub mod frequency;
pub mod patterns;
pub mod selection;
pub mod strategy;

use crate::history::History;
use advanced::AdvancedStats;
use frequency::{FrequencyTable, HistorySummary};
use patterns::PatternStats;
use serde::Serialize;

/// Everything the statistics view shows, computed from one history snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub summary: HistorySummary,
    pub frequency: FrequencyTable,
    pub patterns: Option<PatternStats>,
    pub advanced: AdvancedStats,
}

impl StatsReport {
    pub fn compute(history: &History) -> Self {
        let draws = history.draws();
        let frequency = frequency::analyze_frequency(draws);

        StatsReport {
            summary: frequency::summarize(draws, &frequency),
            patterns: patterns::analyze_patterns(draws),
            advanced: advanced::analyze_advanced(draws),
            frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::draw::Draw;

    #[test]
    fn test_single_draw_report() {
        let history = History::from_draws(vec![Draw::new(&[1, 2, 3, 4, 5, 6]).unwrap()], 10);
        let report = StatsReport::compute(&history);

        assert_eq!(report.summary.total_draws, 1);
        assert_eq!(report.summary.average_sum, Some(21.0));
        assert_eq!(report.frequency.get(4), 1);
        assert_eq!(report.patterns.as_ref().map(|p| p.consecutive_rate), Some(5.0));
        assert_eq!(report.advanced.sum_distribution.get(&20), Some(&1));
    }

    #[test]
    fn test_empty_report_serializes_no_data() {
        let report = StatsReport::compute(&History::new(10));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["patterns"], serde_json::Value::Null);
        assert_eq!(json["summary"]["averageSum"], serde_json::Value::Null);
        assert_eq!(json["advanced"]["overdueNumbers"].as_array().map(|a| a.len()), Some(45));
        assert_eq!(json["frequency"], serde_json::json!({}));
    }
}
