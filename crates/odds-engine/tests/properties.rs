//! Property tests for the odds engine.

use odds_engine::{OddsEngine, OddsSchedule, OddsTable, RarityTier};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn tier() -> impl Strategy<Value = RarityTier> {
    prop::sample::select(RarityTier::all().to_vec())
}

fn constant_engine(p: f64) -> OddsEngine {
    OddsEngine::new(
        OddsTable::default().with_schedule(RarityTier::Rare, OddsSchedule::constant(p).unwrap()),
    )
}

fn custom_engine(one_in: Vec<f64>) -> OddsEngine {
    OddsEngine::new(OddsTable::default().with_schedule(
        RarityTier::VeryRare,
        OddsSchedule::from_one_in(one_in).unwrap(),
    ))
}

proptest! {
    #[test]
    fn no_openings_no_drop(tier in tier(), start in 0usize..200) {
        let engine = OddsEngine::standard();
        prop_assert_eq!(engine.probability(tier, start, 0).unwrap(), 0.0);
    }

    #[test]
    fn probability_in_unit_interval(tier in tier(), start in 0usize..100, n in 0usize..400) {
        let engine = OddsEngine::standard();
        let p = engine.probability(tier, start, n).unwrap();
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn probability_non_decreasing(tier in tier(), start in 0usize..100, n in 0usize..300) {
        let engine = OddsEngine::standard();
        let here = engine.probability(tier, start, n).unwrap();
        let next = engine.probability(tier, start, n + 1).unwrap();
        prop_assert!(next >= here);
    }

    #[test]
    fn memoryless_expected_value(p in 0.001f64..0.999, start in 0usize..10_000) {
        let engine = constant_engine(p);
        let ev = engine.expected_value(RarityTier::Rare, start).unwrap();
        prop_assert!((ev - 1.0 / p).abs() <= 1e-9 * (1.0 / p));
    }

    #[test]
    fn memoryless_probability(p in 0.001f64..0.999, start in 0usize..1_000, n in 0usize..200) {
        let engine = constant_engine(p);
        let got = engine.probability(RarityTier::Rare, start, n).unwrap();
        let want = 1.0 - (1.0 - p).powi(n as i32);
        prop_assert!((got - want).abs() < 1e-9);
    }

    #[test]
    fn expected_value_non_negative(tier in tier(), start in 0usize..500) {
        let engine = OddsEngine::standard();
        let ev = engine.expected_value(tier, start).unwrap();
        prop_assert!(ev >= 1.0);
    }

    #[test]
    fn expected_value_recurrence(
        one_in in prop::collection::vec(1.0f64..500.0, 1..30),
        start in 0usize..40,
    ) {
        let engine = custom_engine(one_in.clone());
        let schedule = OddsSchedule::from_one_in(one_in).unwrap();
        let here = engine.expected_value(RarityTier::VeryRare, start).unwrap();
        let next = engine.expected_value(RarityTier::VeryRare, start + 1).unwrap();
        let p = schedule.probability_at(start);
        prop_assert!((here - (1.0 + (1.0 - p) * next)).abs() <= 1e-9 * here.max(1.0));
    }

    #[test]
    fn table_shape(tier in tier(), max_start in 0usize..8, max_add in 0usize..8) {
        let engine = OddsEngine::standard();
        let chart = engine.generate_table(tier, max_start, max_add).unwrap();
        prop_assert_eq!(chart.len(), (max_start + 1) * (max_add + 1));
        let mut expected_keys = Vec::new();
        for s in 0..=max_start {
            for n in 0..=max_add {
                expected_keys.push((s, n));
            }
        }
        let keys: Vec<_> = chart
            .rows
            .iter()
            .map(|r| (r.start_trial, r.additional_trials))
            .collect();
        prop_assert_eq!(keys, expected_keys);
    }
}

#[test]
fn concrete_two_percent_scenario() {
    let engine = constant_engine(0.02);
    let ev = engine.expected_value(RarityTier::Rare, 0).unwrap();
    assert!((ev - 50.0).abs() < 1e-9);
    let p = engine.probability(RarityTier::Rare, 0, 50).unwrap();
    assert!((p - 0.636).abs() < 5e-4, "{p}");
    let chart = engine.generate_table(RarityTier::Rare, 1, 2).unwrap();
    assert_eq!(chart.len(), 6);
}

/// Simulate openings one by one and compare with the closed form.
#[test]
fn monte_carlo_agrees_with_closed_form() {
    let engine = custom_engine(vec![40.0, 20.0, 10.0, 5.0, 3.0]);
    let schedule = engine.schedule(RarityTier::VeryRare).unwrap().clone();
    let mut rng = StdRng::seed_from_u64(42);

    let runs = 200_000;
    let start = 1;
    let mut total_openings = 0u64;
    let mut within_three = 0u64;
    for _ in 0..runs {
        let mut trial = start;
        loop {
            if rng.random::<f64>() < schedule.probability_at(trial) {
                break;
            }
            trial += 1;
        }
        let openings = (trial - start + 1) as u64;
        total_openings += openings;
        if openings <= 3 {
            within_three += 1;
        }
    }

    let simulated_ev = total_openings as f64 / runs as f64;
    let simulated_p = within_three as f64 / runs as f64;
    let ev = engine.expected_value(RarityTier::VeryRare, start).unwrap();
    let p = engine.probability(RarityTier::VeryRare, start, 3).unwrap();

    assert!((simulated_ev - ev).abs() < 0.05 * ev, "{simulated_ev} vs {ev}");
    assert!((simulated_p - p).abs() < 0.01, "{simulated_p} vs {p}");
}
