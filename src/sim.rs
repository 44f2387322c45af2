use std::fmt;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::cards::{DECK_SIZE, RANK_COUNT};
use crate::error::{SeedError, SeedResult};

/// Cards consumed when drawing a seed: 23 tuples. The order of the last six
/// cards never matters.
pub const CARDS_DRAWN: usize = 46;

const HALF_DECK: usize = DECK_SIZE / 2;

/// Parameters of the sticky riffle simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShuffleConfig {
    /// Simulated shuffles per (shuffle count, stickiness) job.
    pub runs: usize,
    pub max_shuffles: usize,
    /// Chance of pulling the next card from the same hand. 0 is a perfect
    /// alternating riffle, 1 drops each half as a clump.
    pub stickiness: Vec<f64>,
    /// Chance of starting each riffle from the right hand.
    pub starting_right_hand: f64,
    /// Normalized minimum entropy above which a deck counts as shuffled.
    pub entropy_threshold: f64,
    pub seed: Option<u64>,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        ShuffleConfig {
            runs: 100_000,
            max_shuffles: 15,
            stickiness: vec![0.1, 0.5, 0.8, 0.9, 0.95, 0.99],
            starting_right_hand: 0.5,
            entropy_threshold: 0.99,
            seed: None,
        }
    }
}

impl ShuffleConfig {
    fn validate(&self) -> SeedResult<()> {
        if self.runs == 0 {
            return Err(SeedError::InvalidValue("runs must be positive".to_string()));
        }
        let probabilities = self
            .stickiness
            .iter()
            .chain([&self.starting_right_hand, &self.entropy_threshold]);
        for &p in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(SeedError::InvalidValue(format!(
                    "{} is not a probability",
                    p
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StickinessResult {
    pub stickiness: f64,
    /// Shannon entropy in bits of the card found at each deck position.
    pub entropy: Vec<f64>,
    /// Lowest entropy among the drawn positions, divided by log2(52).
    pub min_normalized_entropy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShuffleRow {
    pub shuffles: usize,
    pub results: Vec<StickinessResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntropyReport {
    pub config: ShuffleConfig,
    pub rows: Vec<ShuffleRow>,
}

fn run_rng(seed: Option<u64>, run: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run as u64)),
        None => StdRng::from_entropy(),
    }
}

/// One riffle: cut at 26, then fill positions 51..0 from the bottom of
/// whichever half is in hand.
pub fn riffle<R: Rng>(deck: &mut [u8; DECK_SIZE], stickiness: f64, starting_right_hand: f64, rng: &mut R) {
    let before = *deck;
    let mut left: isize = HALF_DECK as isize - 1;
    let mut right: isize = DECK_SIZE as isize - 1;
    let mut right_side = rng.gen::<f64>() < starting_right_hand;

    for slot in (0..DECK_SIZE).rev() {
        deck[slot] = if right_side {
            right -= 1;
            before[(right + 1) as usize]
        } else {
            left -= 1;
            before[(left + 1) as usize]
        };

        right_side = if right < HALF_DECK as isize {
            false
        } else if left < 0 {
            true
        } else if rng.gen::<f64>() < stickiness {
            right_side
        } else {
            !right_side
        };
    }
}

/// Deck order after `shuffles` riffles of a fresh deck.
pub fn shuffled_deck<R: Rng>(shuffles: usize, stickiness: f64, starting_right_hand: f64, rng: &mut R) -> [u8; DECK_SIZE] {
    let mut deck: [u8; DECK_SIZE] = std::array::from_fn(|i| i as u8);
    for _ in 0..shuffles {
        riffle(&mut deck, stickiness, starting_right_hand, rng);
    }
    deck
}

/// Per-position entropy, in bits, of the card found there after `shuffles`
/// riffles.
pub fn position_entropy(
    shuffles: usize,
    stickiness: f64,
    starting_right_hand: f64,
    runs: usize,
    seed: Option<u64>,
) -> Vec<f64> {
    let empty = || vec![[0u64; DECK_SIZE]; DECK_SIZE];
    let counts = (0..runs)
        .into_par_iter()
        .fold(empty, |mut acc, run| {
            let mut rng = run_rng(seed, run);
            let deck = shuffled_deck(shuffles, stickiness, starting_right_hand, &mut rng);
            for (position, &card) in deck.iter().enumerate() {
                acc[position][card as usize] += 1;
            }
            acc
        })
        .reduce(empty, |mut a, b| {
            for (row_a, row_b) in a.iter_mut().zip(b.iter()) {
                for (x, y) in row_a.iter_mut().zip(row_b.iter()) {
                    *x += y;
                }
            }
            a
        });

    counts
        .iter()
        .map(|row| {
            -row.iter()
                .filter(|&&n| n > 0)
                .map(|&n| {
                    let rate = n as f64 / runs as f64;
                    rate * rate.log2()
                })
                .sum::<f64>()
        })
        .collect()
}

pub fn simulate_entropy(config: &ShuffleConfig) -> SeedResult<EntropyReport> {
    config.validate()?;
    info!("starting simulation to estimate entropy");
    let max_entropy = (DECK_SIZE as f64).log2();

    let rows = (1..=config.max_shuffles)
        .map(|shuffles| {
            let results = config
                .stickiness
                .iter()
                .map(|&stickiness| {
                    debug!("running shuffle-count: {}, stickiness: {}", shuffles, stickiness);
                    let entropy = position_entropy(
                        shuffles,
                        stickiness,
                        config.starting_right_hand,
                        config.runs,
                        config.seed,
                    );
                    let min_normalized_entropy = entropy[..CARDS_DRAWN]
                        .iter()
                        .copied()
                        .fold(f64::INFINITY, f64::min)
                        / max_entropy;
                    StickinessResult {
                        stickiness,
                        entropy,
                        min_normalized_entropy,
                    }
                })
                .collect();
            ShuffleRow { shuffles, results }
        })
        .collect();

    Ok(EntropyReport {
        config: config.clone(),
        rows,
    })
}

const CELL_WIDTH: usize = 12;
const SIGNIFICANT_DIGITS: usize = 5;

/// Formats `v` with `digits` significant digits in fixed notation, so
/// 0.991234 becomes `0.99123` and 0.0123456 becomes `0.012346`.
pub fn format_significant(v: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if v == 0.0 || !v.is_finite() {
        return format!("{:.*}", digits - 1, v);
    }
    let exponent = v.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    let text = format!("{:.*}", decimals, v);
    // Rounding can carry into the next power of ten (0.999996 -> 1.00000).
    let carried = text
        .parse::<f64>()
        .map(|r| r.abs() >= 10f64.powi(exponent + 1))
        .unwrap_or(false);
    if carried && decimals > 0 {
        format!("{:.*}", decimals - 1, v)
    } else {
        text
    }
}

fn pad(v: impl fmt::Display) -> String {
    format!("{:>width$}", v.to_string(), width = CELL_WIDTH)
}

impl EntropyReport {
    /// Markdown table: one row per shuffle count, one column per stickiness.
    /// Values above the threshold are bolded.
    pub fn markdown(&self) -> String {
        let header: Vec<String> = std::iter::once(pad("Shuffles"))
            .chain(self.config.stickiness.iter().map(pad))
            .collect();
        let mut lines = vec![
            format!("| {} |", header.join(" | ")),
            format!("| {}", format!("{} | ", "-".repeat(CELL_WIDTH)).repeat(header.len())),
        ];
        for row in &self.rows {
            let cells: Vec<String> = std::iter::once(pad(row.shuffles))
                .chain(row.results.iter().map(|r| {
                    let v = format_significant(r.min_normalized_entropy, SIGNIFICANT_DIGITS);
                    if r.min_normalized_entropy > self.config.entropy_threshold {
                        pad(format!("**{}**", v))
                    } else {
                        pad(v)
                    }
                }))
                .collect();
            lines.push(format!("| {} |", cells.join(" | ")));
        }
        lines.join("\n")
    }
}

/// Parameters of the unsuited-ordering estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnsuitedConfig {
    pub runs: usize,
    pub seed: Option<u64>,
}

impl Default for UnsuitedConfig {
    fn default() -> Self {
        UnsuitedConfig {
            runs: 10_000_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnsuitedEstimate {
    pub runs: usize,
    /// Runs in which every tuple drawn was unsuited.
    pub count: usize,
    pub rate: f64,
    /// 52! / 6!
    pub orderings: f64,
    pub estimate: f64,
    /// log2 of the estimated number of unsuited orderings.
    pub bits: f64,
}

/// Draws 23 tuples from a shuffled deck, stopping at the first suited one.
/// Only suits are tracked since nothing else affects the outcome.
pub fn draw_unsuited<R: Rng>(rng: &mut R) -> bool {
    let mut deck: [u8; DECK_SIZE] = std::array::from_fn(|i| (i / RANK_COUNT) as u8);
    for i in (0..CARDS_DRAWN).step_by(2) {
        let j = rng.gen_range(i..DECK_SIZE);
        deck.swap(i, j);

        let j = rng.gen_range(i + 1..DECK_SIZE);
        if deck[i] == deck[j] {
            return false;
        }
        deck.swap(i + 1, j);
    }
    true
}

/// Number of orderings of the drawn cards, 52! / 6!.
pub fn drawn_orderings() -> f64 {
    (DECK_SIZE - CARDS_DRAWN + 1..=DECK_SIZE)
        .map(|n| n as f64)
        .product()
}

pub fn estimate_unsuited(config: &UnsuitedConfig) -> SeedResult<UnsuitedEstimate> {
    if config.runs == 0 {
        return Err(SeedError::InvalidValue("runs must be positive".to_string()));
    }
    info!("starting simulation to count permutations");

    let count = (0..config.runs)
        .into_par_iter()
        .filter(|&run| draw_unsuited(&mut run_rng(config.seed, run)))
        .count();

    let rate = count as f64 / config.runs as f64;
    let orderings = drawn_orderings();
    let estimate = orderings * rate;
    Ok(UnsuitedEstimate {
        runs: config.runs,
        count,
        rate,
        orderings,
        estimate,
        bits: estimate.log2(),
    })
}
