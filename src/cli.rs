use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::{debug, info};

use crate::cards::{parse_card, Suit, ALL_SUITS};
use crate::display::{card_display, lookup_sheet, presence_grid, print_error, print_section, print_success};
use crate::error::SeedResult;
use crate::sim::{estimate_unsuited, simulate_entropy, ShuffleConfig, UnsuitedConfig};
use crate::word_table::word_table;
use crate::wordlist::Wordlist;

#[derive(Parser)]
#[command(
    name = "seedpicker",
    version = "1.0.0",
    about = "SeedPicker card tables: map ordered pairs of playing cards to mnemonic seed words."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum SuitArg {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl SuitArg {
    fn suit(&self) -> Suit {
        match self {
            SuitArg::Spades => Suit::Spades,
            SuitArg::Hearts => Suit::Hearts,
            SuitArg::Diamonds => Suit::Diamonds,
            SuitArg::Clubs => Suit::Clubs,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 52x52 word presence grid (# = word, . = blank)
    Grid,
    /// Look up the seed word for an ordered pair of cards
    Lookup {
        /// First card drawn (e.g., As, 10h, Q♢)
        first: String,
        /// Second card drawn
        second: String,
        /// Wordlist file, one word per line (defaults to BIP39 English)
        #[arg(short, long)]
        wordlist: Option<PathBuf>,
    },
    /// Print the lookup sheet, one grid per first card
    Sheet {
        /// Only print first cards of this suit
        #[arg(short, long)]
        suit: Option<SuitArg>,
        /// Wordlist file, one word per line (defaults to BIP39 English)
        #[arg(short, long)]
        wordlist: Option<PathBuf>,
    },
    /// Exhaustively check the table's structural invariants
    Verify,
    /// Export every tuple and its word as JSON
    Export {
        /// Wordlist file, one word per line (defaults to BIP39 English)
        #[arg(short, long)]
        wordlist: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Monte Carlo analyses of shuffling and drawing
    Sim {
        #[command(subcommand)]
        sim: SimCommands,
    },
}

#[derive(Subcommand)]
enum SimCommands {
    /// Estimate per-position entropy of a deck after sticky riffle shuffles
    Shuffle {
        /// Simulated shuffles per shuffle count and stickiness
        #[arg(short, long, default_value = "100000")]
        runs: usize,
        /// Largest number of consecutive riffles to simulate
        #[arg(short, long, default_value = "15")]
        max_shuffles: usize,
        /// Comma-separated stickiness values
        #[arg(long, value_delimiter = ',', default_values_t = ShuffleConfig::default().stickiness)]
        stickiness: Vec<f64>,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Print the full report as JSON instead of a Markdown table
        #[arg(long)]
        json: bool,
    },
    /// Estimate how many deck orderings draw only unsuited tuples
    Unsuited {
        /// Number of simulated draws
        #[arg(short, long, default_value = "10000000")]
        runs: usize,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run() {
    let cli = Cli::parse();
    dispatch(cli);
}

/// Log level comes from `LOG_LEVEL` (env_logger filter syntax), default info.
fn init_logging() {
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", "info");
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn dispatch(cli: Cli) {
    init_logging();
    let result = match cli.command {
        Commands::Grid => cmd_grid(),
        Commands::Lookup {
            first,
            second,
            wordlist,
        } => cmd_lookup(first, second, wordlist),
        Commands::Sheet { suit, wordlist } => cmd_sheet(suit, wordlist),
        Commands::Verify => cmd_verify(),
        Commands::Export { wordlist, pretty } => cmd_export(wordlist, pretty),
        Commands::Sim { sim } => match sim {
            SimCommands::Shuffle {
                runs,
                max_shuffles,
                stickiness,
                seed,
                json,
            } => cmd_sim_shuffle(runs, max_shuffles, stickiness, seed, json),
            SimCommands::Unsuited { runs, seed } => cmd_sim_unsuited(runs, seed),
        },
    };
    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn load_wordlist(path: Option<PathBuf>) -> SeedResult<Wordlist> {
    match path {
        Some(path) => {
            debug!("reading wordlist from {}", path.display());
            Wordlist::from_path(path)
        }
        None => Ok(Wordlist::english()),
    }
}

fn cmd_grid() -> SeedResult<()> {
    print!("{}", presence_grid(word_table()));
    Ok(())
}

fn cmd_lookup(first: String, second: String, wordlist: Option<PathBuf>) -> SeedResult<()> {
    let first = parse_card(&first)?;
    let second = parse_card(&second)?;
    let wordlist = load_wordlist(wordlist)?;
    let table = word_table();

    let pair = format!("{} : {}", card_display(&first), card_display(&second));
    match table.word_index_of(&first, &second) {
        Some(index) => println!("  {}  {} (#{})", pair, wordlist.get(index).green().bold(), index),
        None => println!("  {}  {}", pair, "blank - draw again".dimmed()),
    }
    Ok(())
}

fn cmd_sheet(suit: Option<SuitArg>, wordlist: Option<PathBuf>) -> SeedResult<()> {
    let wordlist = load_wordlist(wordlist)?;
    println!("{}", lookup_sheet(word_table(), &wordlist, suit.map(|s| s.suit())));
    Ok(())
}

fn cmd_verify() -> SeedResult<()> {
    let table = word_table();
    table.check_invariants()?;

    let by_suit = table.suited_words_by_suit();
    let summary = ALL_SUITS
        .iter()
        .zip(by_suit.iter())
        .map(|(suit, n)| format!("{} {}", suit.symbol(), n))
        .collect::<Vec<_>>()
        .join("  ");
    print_section("Suited words", &summary);
    print_section(
        "Totals",
        &format!("{} tuples, {} words, {} blanks", table.len(), table.word_count(), table.blank_count()),
    );
    println!();
    print_success("All invariants hold.");
    Ok(())
}

fn cmd_export(wordlist: Option<PathBuf>, pretty: bool) -> SeedResult<()> {
    let wordlist = load_wordlist(wordlist)?;
    let entries = word_table().entries(Some(&wordlist));
    let json = if pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    println!("{}", json);
    Ok(())
}

fn cmd_sim_shuffle(
    runs: usize,
    max_shuffles: usize,
    stickiness: Vec<f64>,
    seed: Option<u64>,
    json: bool,
) -> SeedResult<()> {
    let config = ShuffleConfig {
        runs,
        max_shuffles,
        stickiness,
        seed,
        ..ShuffleConfig::default()
    };
    let report = simulate_entropy(&config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        info!("\n{}", report.markdown());
    }
    Ok(())
}

fn cmd_sim_unsuited(runs: usize, seed: Option<u64>) -> SeedResult<()> {
    let estimate = estimate_unsuited(&UnsuitedConfig { runs, seed })?;
    info!("{}", serde_json::to_string_pretty(&estimate)?);
    Ok(())
}
