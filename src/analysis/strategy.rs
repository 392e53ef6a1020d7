use super::advanced::AdvancedStats;
use crate::history::draw::{DRAW_SIZE, MAX_NUMBER, MIN_NUMBER};
use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Weighted-sampling policy used for smart suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    #[value(name = "hot")]
    HotNumbers,
    #[value(name = "cold")]
    ColdNumbers,
    #[value(name = "overdue")]
    OverdueNumbers,
    Balanced,
}

#[derive(Debug, Clone, Copy)]
enum Pool {
    Hot,
    Cold,
    Overdue,
    /// 1..=45 minus whatever this suggestion already holds.
    Remaining,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::HotNumbers,
        Strategy::ColdNumbers,
        Strategy::OverdueNumbers,
        Strategy::Balanced,
    ];

    /// Uniform choice among the four strategies.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::HotNumbers => "🔥 Hot numbers strategy",
            Strategy::ColdNumbers => "❄️ Cold numbers strategy",
            Strategy::OverdueNumbers => "⏰ Overdue numbers strategy",
            Strategy::Balanced => "⚖️ Balanced strategy",
        }
    }

    fn steps(&self) -> &'static [(Pool, usize)] {
        match self {
            Strategy::HotNumbers => &[(Pool::Hot, 3), (Pool::Remaining, 3)],
            Strategy::ColdNumbers => &[(Pool::Cold, 3), (Pool::Remaining, 3)],
            Strategy::OverdueNumbers => &[(Pool::Overdue, 4), (Pool::Remaining, 2)],
            Strategy::Balanced => &[(Pool::Hot, 2), (Pool::Cold, 2), (Pool::Overdue, 2)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub numbers: [u8; DRAW_SIZE],
    pub strategy: Strategy,
}

/// Shuffles a copy of `pool` and keeps the first `count` (fewer if the pool is short).
pub fn sample_from_pool<R: Rng + ?Sized>(pool: &[u8], count: usize, rng: &mut R) -> Vec<u8> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

/// Drops repeats, pads with uniform numbers up to 6 and sorts ascending.
pub fn fill_unique<R: Rng + ?Sized>(picked: Vec<u8>, rng: &mut R) -> [u8; DRAW_SIZE] {
    let mut unique: Vec<u8> = Vec::with_capacity(DRAW_SIZE);
    for n in picked {
        if !unique.contains(&n) {
            unique.push(n);
        }
    }

    while unique.len() < DRAW_SIZE {
        let n = rng.random_range(MIN_NUMBER..=MAX_NUMBER);
        if !unique.contains(&n) {
            unique.push(n);
        }
    }
    unique.truncate(DRAW_SIZE);

    let mut numbers = [0u8; DRAW_SIZE];
    numbers.copy_from_slice(&unique);
    numbers.sort_unstable();
    numbers
}

/// Plain uniform suggestion, no statistics involved.
pub fn generate_random<R: Rng + ?Sized>(rng: &mut R) -> [u8; DRAW_SIZE] {
    fill_unique(Vec::new(), rng)
}

pub fn suggest<R: Rng + ?Sized>(
    stats: &AdvancedStats,
    strategy: Strategy,
    rng: &mut R,
) -> Suggestion {
    let mut picked: Vec<u8> = Vec::with_capacity(DRAW_SIZE);

    for &(pool, count) in strategy.steps() {
        let sampled = match pool {
            Pool::Hot => sample_from_pool(&stats.hot_numbers, count, rng),
            Pool::Cold => sample_from_pool(&stats.cold_numbers, count, rng),
            Pool::Overdue => sample_from_pool(&stats.overdue_numbers, count, rng),
            Pool::Remaining => {
                let remaining: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER)
                    .filter(|n| !picked.contains(n))
                    .collect();
                sample_from_pool(&remaining, count, rng)
            }
        };
        picked.extend(sampled);
    }

    Suggestion {
        numbers: fill_unique(picked, rng),
        strategy,
    }
}

/// Smart suggestion with a uniformly chosen strategy.
pub fn generate_smart<R: Rng + ?Sized>(stats: &AdvancedStats, rng: &mut R) -> Suggestion {
    let strategy = Strategy::choose(rng);
    suggest(stats, strategy, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::advanced::analyze_advanced;
    use crate::history::{arb_draws, make_test_draws};
    use proptest::prelude::{any, prop_assert, proptest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn assert_valid(numbers: &[u8; DRAW_SIZE]) {
        assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "not strictly ascending: {:?}",
            numbers
        );
        assert!(
            numbers.iter().all(|&n| (1..=45).contains(&n)),
            "out of range: {:?}",
            numbers
        );
    }

    #[test]
    fn test_sample_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = [3, 9, 27, 40];

        let sample = sample_from_pool(&pool, 3, &mut rng);
        assert_eq!(sample.len(), 3);
        assert_eq!(sample.iter().collect::<HashSet<_>>().len(), 3);
        assert!(sample.iter().all(|n| pool.contains(n)));

        assert_eq!(sample_from_pool(&pool, 10, &mut rng).len(), 4);
        assert!(sample_from_pool(&[], 3, &mut rng).is_empty());
    }

    #[test]
    fn test_fill_unique_dedupes_and_pads() {
        let mut rng = StdRng::seed_from_u64(11);
        let numbers = fill_unique(vec![5, 5, 40, 5, 12], &mut rng);
        assert_valid(&numbers);
        for n in [5, 12, 40] {
            assert!(numbers.contains(&n));
        }
    }

    #[test]
    fn test_generate_random() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            assert_valid(&generate_random(&mut rng));
        }
    }

    #[test]
    fn test_all_strategies_across_history_sizes() {
        let mut rng = StdRng::seed_from_u64(42);
        for size in [0, 1, 5, 10, 100] {
            let stats = analyze_advanced(&make_test_draws(size));
            for strategy in Strategy::ALL {
                for _ in 0..25 {
                    let suggestion = suggest(&stats, strategy, &mut rng);
                    assert_eq!(suggestion.strategy, strategy);
                    assert_valid(&suggestion.numbers);
                }
            }
        }
    }

    #[test]
    fn test_hot_strategy_draws_from_hot_list() {
        let mut rng = StdRng::seed_from_u64(5);
        let stats = analyze_advanced(&make_test_draws(20));
        for _ in 0..50 {
            let suggestion = suggest(&stats, Strategy::HotNumbers, &mut rng);
            let from_hot = suggestion
                .numbers
                .iter()
                .filter(|n| stats.hot_numbers.contains(n))
                .count();
            assert!(from_hot >= 3, "{:?} vs {:?}", suggestion.numbers, stats.hot_numbers);
        }
    }

    #[test]
    fn test_overdue_strategy_draws_from_overdue_list() {
        let mut rng = StdRng::seed_from_u64(9);
        let stats = analyze_advanced(&make_test_draws(20));
        for _ in 0..50 {
            let suggestion = suggest(&stats, Strategy::OverdueNumbers, &mut rng);
            let from_overdue = suggestion
                .numbers
                .iter()
                .filter(|n| stats.overdue_numbers.contains(n))
                .count();
            assert!(from_overdue >= 4);
        }
    }

    #[test]
    fn test_empty_history_falls_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(1);
        let stats = analyze_advanced(&[]);
        for _ in 0..50 {
            assert_valid(&generate_smart(&stats, &mut rng).numbers);
        }
    }

    #[test]
    fn test_choose_reaches_every_strategy() {
        let mut rng = StdRng::seed_from_u64(2024);
        let seen: HashSet<Strategy> = (0..400).map(|_| Strategy::choose(&mut rng)).collect();
        assert_eq!(seen.len(), Strategy::ALL.len());
    }

    #[test]
    fn test_same_seed_same_suggestion() {
        let stats = analyze_advanced(&make_test_draws(30));
        let a = generate_smart(&stats, &mut StdRng::seed_from_u64(77));
        let b = generate_smart(&stats, &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_suggestions_are_valid(draws in arb_draws(40), seed in any::<u64>()) {
            let stats = analyze_advanced(&draws);
            let mut rng = StdRng::seed_from_u64(seed);
            for strategy in Strategy::ALL {
                let numbers = suggest(&stats, strategy, &mut rng).numbers;
                prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(numbers.iter().all(|&n| (1..=45).contains(&n)));
            }
        }
    }
}
