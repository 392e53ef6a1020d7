use crate::analysis::advanced::{AdvancedStats, SUM_BUCKET_WIDTH};
use crate::analysis::frequency::{FrequencyTable, HistorySummary};
use crate::analysis::patterns::PatternStats;
use crate::analysis::selection::SelectionAnalysis;
use crate::analysis::strategy::Suggestion;
use crate::analysis::StatsReport;
use crate::history::draw::Draw;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

const BAR_WIDTH: usize = 30;
const NO_DATA: &str = "no data";

#[derive(Tabled)]
struct DrawRow {
    #[tabled(rename = "#")]
    number: String,
    numbers: String,
    sum: String,
}

#[derive(Tabled)]
struct FrequencyRow {
    number: String,
    count: String,
    chart: String,
}

#[derive(Tabled)]
struct SumRow {
    range: String,
    draws: String,
    chart: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

fn header(title: &str) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());
}

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}

fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

fn tags(numbers: &[u8]) -> String {
    if numbers.is_empty() {
        return NO_DATA.dimmed().to_string();
    }
    numbers
        .iter()
        .map(|n| format!("[{}]", n))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn display_summary(summary: &HistorySummary) {
    header("📊 STATISTICS");

    let or_no_data = |value: Option<String>| value.unwrap_or_else(|| NO_DATA.to_string());

    println!("{} {}", "Total draws:".bold(), summary.total_draws);
    println!(
        "{} {}",
        "Most frequent:".bold(),
        or_no_data(summary.most_frequent.map(|n| n.to_string()))
    );
    println!(
        "{} {}",
        "Least frequent:".bold(),
        or_no_data(summary.least_frequent.map(|n| n.to_string()))
    );
    println!(
        "{} {}",
        "Average sum:".bold(),
        or_no_data(summary.average_sum.map(|s| format!("{}", s.round() as u32)))
    );
}

pub fn display_frequency_chart(table: &FrequencyTable) {
    header("🔢 NUMBER FREQUENCY");

    let rows: Vec<FrequencyRow> = table
        .iter()
        .map(|(number, count)| FrequencyRow {
            number: number.to_string(),
            count: format!("{}x", count),
            chart: bar(table.relative(number)).cyan().to_string(),
        })
        .collect();

    let mut out = Table::new(rows);
    out.with(Style::rounded());
    println!("{}", out);
}

pub fn display_patterns(patterns: Option<&PatternStats>) {
    header("🧩 PATTERNS");

    let Some(stats) = patterns else {
        println!("{}", "No pattern data available (history is empty)".yellow());
        return;
    };

    println!(
        "{} average {:.1} consecutive numbers",
        "Consecutive:".bold(),
        stats.consecutive_rate
    );
    println!(
        "{} odd {:.1}% : even {:.1}%",
        "Odd/Even:".bold(),
        stats.odd_percent,
        stats.even_percent
    );
    println!(
        "{} 1-15: {:.1}%, 16-30: {:.1}%, 31-45: {:.1}%",
        "Ranges:".bold(),
        stats.ranges.low,
        stats.ranges.mid,
        stats.ranges.high
    );
}

pub fn display_advanced(stats: &AdvancedStats) {
    header("🔬 ADVANCED ANALYSIS");

    println!("{} {}", "🔥 Hot:".bold().red(), tags(&stats.hot_numbers));
    println!("{} {}", "❄️ Cold:".bold().blue(), tags(&stats.cold_numbers));
    println!("{} {}", "⏰ Overdue:".bold().yellow(), tags(&stats.overdue_numbers));

    println!("\n{}", "Sum distribution".bold().yellow());
    if stats.sum_distribution.is_empty() {
        println!("{}", NO_DATA.dimmed());
        return;
    }

    let max = stats.max_bucket_count() as f64;
    let rows: Vec<SumRow> = stats
        .sum_distribution
        .iter()
        .map(|(&start, &count)| SumRow {
            range: format!("{}-{}", start, start + SUM_BUCKET_WIDTH - 1),
            draws: format!("{}x", count),
            chart: bar(count as f64 / max * 100.0).green().to_string(),
        })
        .collect();

    let mut out = Table::new(rows);
    out.with(Style::rounded());
    println!("{}", out);
}

pub fn display_report(report: &StatsReport) {
    display_summary(&report.summary);
    display_frequency_chart(&report.frequency);
    display_patterns(report.patterns.as_ref());
    display_advanced(&report.advanced);
    println!();
}

pub fn display_history(draws: &[Draw]) {
    header(&format!("🗂️ LAST {} DRAWS", draws.len()));

    if draws.is_empty() {
        println!("{}", "No draws recorded yet".yellow());
        return;
    }

    let rows: Vec<DrawRow> = draws
        .iter()
        .enumerate()
        .map(|(idx, draw)| DrawRow {
            number: format!("{}", idx + 1),
            numbers: join_numbers(&draw.sorted()),
            sum: draw.sum().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_numbers(numbers: &[u8]) {
    let balls = numbers
        .iter()
        .map(|n| format!("( {:2} )", n).bold().yellow().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("\n  {}\n", balls);
}

pub fn display_suggestion(suggestion: &Suggestion) {
    display_numbers(&suggestion.numbers);
    println!(
        "{} {}",
        "Strategy used:".bold(),
        suggestion.strategy.display_name()
    );
    println!("{}", "Chosen from past draw statistics.".dimmed());
}

pub fn display_selection_analysis(analysis: &SelectionAnalysis) {
    println!(
        "\n{} {}",
        "Selected numbers:".bold(),
        join_numbers(&analysis.numbers)
    );
    println!("  • Sum: {}", analysis.sum);
    println!("  • Odd: {}", analysis.odd);
    println!("  • Even: {}", analysis.even);
    println!("  • Consecutive: {}\n", analysis.consecutive);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(0.0), "");
        assert_eq!(bar(100.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(50.0).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(250.0).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_join_numbers() {
        assert_eq!(join_numbers(&[1, 12, 45]), " 1 - 12 - 45");
    }
}
