use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{suit_cards, Card, Color, Suit, ALL_RANKS, ALL_SUITS, RANKS_STR};
use crate::word_table::WordTable;
use crate::wordlist::Wordlist;

const GRID_INDENT: &str = "     ";
const GROUP_GAP: &str = "  ";

/// Plain-text 52x52 map of the table: `#` for tuples that yield a word, `.`
/// for blanks. One block per first-card suit.
pub fn presence_grid(table: &WordTable) -> String {
    let header = [
        format!("{}{}", GRID_INDENT, format!("{}{}", RANKS_STR, GROUP_GAP).repeat(4)),
        format!(
            "{}{}",
            GRID_INDENT,
            ALL_SUITS
                .iter()
                .map(|s| s.symbol().to_string().repeat(ALL_RANKS.len()))
                .collect::<Vec<_>>()
                .join(GROUP_GAP)
        ),
    ];

    let mut lines: Vec<String> = Vec::new();
    for (block, &row_suit) in ALL_SUITS.iter().enumerate() {
        if block > 0 {
            lines.push(String::new());
        }
        lines.extend(header.iter().cloned());
        for first in suit_cards(row_suit) {
            let marks = ALL_SUITS
                .iter()
                .map(|&col_suit| {
                    suit_cards(col_suit)
                        .iter()
                        .map(|second| match table.word_index_of(first, second) {
                            Some(_) => '#',
                            None => '.',
                        })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join(GROUP_GAP);
            lines.push(format!(
                " {}{}{}{}",
                first.rank.to_char(),
                first.suit.symbol(),
                GROUP_GAP,
                marks
            ));
        }
    }
    lines.join("\n") + "\n"
}

pub fn card_display(card: &Card) -> String {
    colored_pips(card, &card.pretty())
}

fn colored_pips(card: &Card, text: &str) -> String {
    match card.suit.color() {
        Color::Red => text.red().to_string(),
        Color::Black => text.bold().to_string(),
    }
}

/// Lookup grid for one first card: rows by second-card rank, columns by
/// second-card suit. Blanks show a run of dashes as wide as the longest word.
pub fn first_card_table(table: &WordTable, wordlist: &Wordlist, first: &Card) -> Table {
    let blank = "-".repeat(wordlist.max_word_len());

    let mut grid = Table::new();
    grid.set_content_arrangement(ContentArrangement::Dynamic);
    grid.set_header(
        ALL_SUITS
            .iter()
            .map(|&suit| {
                let pip = Card::new(suit, first.rank);
                Cell::new(colored_pips(&pip, &suit.symbol().to_string()))
                    .set_alignment(CellAlignment::Center)
            })
            .collect::<Vec<_>>(),
    );

    for rank in ALL_RANKS {
        let row = ALL_SUITS
            .iter()
            .map(|&suit| {
                let second = Card::new(suit, rank);
                let pips = colored_pips(&second, &format!("{:>3}", second.pretty()));
                let word = wordlist.word_for(table, first, &second);
                let text = match word {
                    Some(word) => format!("{} {}", pips, word),
                    None => format!("{} {}", pips, blank.dimmed()),
                };
                Cell::new(text)
            })
            .collect::<Vec<_>>();
        grid.add_row(row);
    }
    grid
}

/// Full lookup sheet, or the part of it for first cards of one suit.
pub fn lookup_sheet(table: &WordTable, wordlist: &Wordlist, suit: Option<Suit>) -> String {
    let suits: Vec<Suit> = match suit {
        Some(suit) => vec![suit],
        None => ALL_SUITS.to_vec(),
    };

    let mut sections = Vec::new();
    for suit in suits {
        for first in suit_cards(suit) {
            sections.push(format!(
                "  {}\n{}",
                card_display(first),
                first_card_table(table, wordlist, first)
            ));
        }
    }
    sections.join("\n\n")
}

pub fn print_section(title: &str, content: &str) {
    println!("\n{}", title.cyan().bold());
    println!("  {}", content);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}

pub fn print_success(msg: &str) {
    println!("{}", msg.green().bold());
}
