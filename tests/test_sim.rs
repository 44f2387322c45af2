use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use seedpicker::error::SeedError;
use seedpicker::sim::*;

fn identity() -> [u8; 52] {
    std::array::from_fn(|i| i as u8)
}

#[test]
fn test_zero_shuffles_leaves_deck_ordered() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(shuffled_deck(0, 0.5, 0.5, &mut rng), identity());
}

#[test]
fn test_riffle_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut deck = shuffled_deck(7, 0.8, 0.5, &mut rng);
    deck.sort_unstable();
    assert_eq!(deck, identity());
}

#[test]
fn test_fully_sticky_riffle_is_a_cut() {
    let mut swapped = [0u8; 52];
    for i in 0..26 {
        swapped[i] = (i + 26) as u8;
        swapped[i + 26] = i as u8;
    }

    let mut rng = StdRng::seed_from_u64(3);
    // right hand first drops the deck back in order
    let mut deck = identity();
    riffle(&mut deck, 1.0, 1.0, &mut rng);
    assert_eq!(deck, identity());

    let mut deck = identity();
    riffle(&mut deck, 1.0, 0.0, &mut rng);
    assert_eq!(deck, swapped);
}

#[test]
fn test_perfect_riffle_alternates() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut deck = identity();
    riffle(&mut deck, 0.0, 1.0, &mut rng);
    assert_eq!(deck[51], 51);
    assert_eq!(deck[50], 25);
    assert_eq!(deck[49], 50);
    assert_eq!(deck[0], 0);
}

#[test]
fn test_unshuffled_entropy_is_zero() {
    let entropy = position_entropy(0, 0.5, 0.5, 100, Some(5));
    assert_eq!(entropy.len(), 52);
    for h in entropy {
        assert_relative_eq!(h, 0.0);
    }
}

#[test]
fn test_perfect_riffle_has_one_bit() {
    let entropy = position_entropy(1, 0.0, 0.5, 4000, Some(6));
    for h in entropy {
        assert!(h <= 1.0 + 1e-9);
        assert!(h > 0.95, "entropy {} too low", h);
    }
}

#[test]
fn test_entropy_is_reproducible_with_seed() {
    let a = position_entropy(3, 0.8, 0.5, 500, Some(9));
    let b = position_entropy(3, 0.8, 0.5, 500, Some(9));
    assert_eq!(a, b);
}

#[test]
fn test_simulate_entropy_report() {
    let config = ShuffleConfig {
        runs: 300,
        max_shuffles: 2,
        stickiness: vec![0.5, 0.99],
        seed: Some(10),
        ..ShuffleConfig::default()
    };
    let report = simulate_entropy(&config).unwrap();
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].shuffles, 1);
    for row in &report.rows {
        assert_eq!(row.results.len(), 2);
        for result in &row.results {
            assert_eq!(result.entropy.len(), 52);
            assert!(result.min_normalized_entropy >= 0.0);
            assert!(result.min_normalized_entropy < 1.0);
        }
    }

    let table = report.markdown();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Shuffles"));
    assert!(lines[0].contains("0.99"));
    assert!(lines[1].starts_with("| ------------ |"));
    assert!(!table.contains("**"));
}

#[test]
fn test_simulate_entropy_rejects_bad_config() {
    let config = ShuffleConfig {
        stickiness: vec![1.5],
        ..ShuffleConfig::default()
    };
    assert!(matches!(simulate_entropy(&config), Err(SeedError::InvalidValue(_))));

    let config = ShuffleConfig {
        runs: 0,
        ..ShuffleConfig::default()
    };
    assert!(simulate_entropy(&config).is_err());
}

#[test]
fn test_drawn_orderings() {
    // 52! / 6!
    assert_relative_eq!(drawn_orderings(), 1.1202524329297762e65, max_relative = 1e-12);
}

#[test]
fn test_estimate_unsuited() {
    let config = UnsuitedConfig {
        runs: 200_000,
        seed: Some(11),
    };
    let estimate = estimate_unsuited(&config).unwrap();
    assert_eq!(estimate.runs, 200_000);
    assert!(estimate.rate > 0.0015 && estimate.rate < 0.003, "rate {}", estimate.rate);
    assert_relative_eq!(estimate.estimate, estimate.orderings * estimate.rate, max_relative = 1e-12);
    assert!(estimate.bits > 200.0 && estimate.bits < 210.0);

    let again = estimate_unsuited(&config).unwrap();
    assert_eq!(again.count, estimate.count);
}

#[test]
fn test_estimate_unsuited_rejects_zero_runs() {
    let config = UnsuitedConfig { runs: 0, seed: None };
    assert!(estimate_unsuited(&config).is_err());
}

#[test]
fn test_format_significant_digits() {
    assert_eq!(format_significant(0.991234, 5), "0.99123");
    assert_eq!(format_significant(0.0123456, 5), "0.012346");
    assert_eq!(format_significant(0.999996, 5), "1.0000");
    assert_eq!(format_significant(0.5, 5), "0.50000");
    assert_eq!(format_significant(0.0, 5), "0.0000");
}
