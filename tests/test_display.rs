use seedpicker::cards::{card, Suit};
use seedpicker::display::*;
use seedpicker::word_table::word_table;
use seedpicker::wordlist::Wordlist;

const EXPECTED_ROWS: [&str; 52] = [
    " A♠  ............#  #############  #############  #############",
    " 2♠  ............#  #############  #############  #############",
    " 3♠  .............  #############  #############  #############",
    " 4♠  .............  #############  #############  #############",
    " 5♠  .............  #############  #############  #############",
    " 6♠  .............  #############  #############  #############",
    " 7♠  .............  #############  #############  #############",
    " 8♠  .............  #############  #############  #############",
    " 9♠  .............  #############  #############  #############",
    " X♠  .............  #############  #############  #############",
    " J♠  .............  #############  #############  #############",
    " Q♠  .............  #############  #############  #############",
    " K♠  ##...........  #############  #############  #############",
    " A♡  #############  ............#  #############  #############",
    " 2♡  #############  ............#  #############  #############",
    " 3♡  #############  .............  #############  #############",
    " 4♡  #############  .............  #############  #############",
    " 5♡  #############  .............  #############  #############",
    " 6♡  #############  .............  #############  #############",
    " 7♡  #############  .............  #############  #############",
    " 8♡  #############  .............  #############  #############",
    " 9♡  #############  .............  #############  #############",
    " X♡  #############  .............  #############  #############",
    " J♡  #############  .............  #############  #############",
    " Q♡  #############  .............  #############  #############",
    " K♡  #############  ##...........  #############  #############",
    " A♢  #############  #############  ...........##  #############",
    " 2♢  #############  #############  ............#  #############",
    " 3♢  #############  #############  .............  #############",
    " 4♢  #############  #############  .............  #############",
    " 5♢  #############  #############  .............  #############",
    " 6♢  #############  #############  .............  #############",
    " 7♢  #############  #############  .............  #############",
    " 8♢  #############  #############  .............  #############",
    " 9♢  #############  #############  .............  #############",
    " X♢  #############  #############  .............  #############",
    " J♢  #############  #############  .............  #############",
    " Q♢  #############  #############  #............  #############",
    " K♢  #############  #############  ##...........  #############",
    " A♣  #############  #############  #############  ...........##",
    " 2♣  #############  #############  #############  ............#",
    " 3♣  #############  #############  #############  .............",
    " 4♣  #############  #############  #############  .............",
    " 5♣  #############  #############  #############  .............",
    " 6♣  #############  #############  #############  .............",
    " 7♣  #############  #############  #############  .............",
    " 8♣  #############  #############  #############  .............",
    " 9♣  #############  #############  #############  .............",
    " X♣  #############  #############  #############  .............",
    " J♣  #############  #############  #############  .............",
    " Q♣  #############  #############  #############  #............",
    " K♣  #############  #############  #############  ##...........",
];

fn grid_rows(grid: &str) -> Vec<&str> {
    grid.lines()
        .filter(|line| !line.is_empty() && !line.starts_with("     "))
        .collect()
}

#[test]
fn test_presence_grid_matches_documented_diagram() {
    let grid = presence_grid(word_table());
    assert_eq!(grid_rows(&grid), EXPECTED_ROWS.to_vec());
}

#[test]
fn test_presence_grid_layout() {
    let grid = presence_grid(word_table());
    assert!(grid.ends_with('\n'));
    let lines: Vec<&str> = grid.lines().collect();
    // 4 blocks of 2 header lines + 13 rows, separated by 3 empty lines
    assert_eq!(lines.len(), 4 * 15 + 3);
    assert_eq!(lines[0], "     A23456789XJQK  A23456789XJQK  A23456789XJQK  A23456789XJQK  ");
    assert_eq!(
        lines[1],
        "     \u{2660}\u{2660}\u{2660}\u{2660}\u{2660}\u{2660}\u{2660}\u{2660}\u{2660}\u{2660}\u{2660}\u{2660}\u{2660}  \
         \u{2661}\u{2661}\u{2661}\u{2661}\u{2661}\u{2661}\u{2661}\u{2661}\u{2661}\u{2661}\u{2661}\u{2661}\u{2661}  \
         \u{2662}\u{2662}\u{2662}\u{2662}\u{2662}\u{2662}\u{2662}\u{2662}\u{2662}\u{2662}\u{2662}\u{2662}\u{2662}  \
         \u{2663}\u{2663}\u{2663}\u{2663}\u{2663}\u{2663}\u{2663}\u{2663}\u{2663}\u{2663}\u{2663}\u{2663}\u{2663}"
    );
    assert_eq!(lines[15], "");
    assert_eq!(lines[16], lines[0]);
}

#[test]
fn test_presence_grid_counts_marks() {
    let grid = presence_grid(word_table());
    let rows = grid_rows(&grid).join("");
    assert_eq!(rows.matches('#').count(), 2048);
    assert_eq!(rows.matches('.').count(), 656);
}

#[test]
fn test_first_card_table_shows_words_and_blanks() {
    colored::control::set_override(false);
    let wordlist = Wordlist::english();
    let table = word_table();

    // A♠:K♠ carries the first word, A♠:2♠ is blank
    let sheet = first_card_table(table, &wordlist, card(0)).to_string();
    assert!(sheet.contains("abandon"));
    assert!(sheet.contains(&"-".repeat(wordlist.max_word_len())));
}

#[test]
fn test_lookup_sheet_single_suit() {
    colored::control::set_override(false);
    let wordlist = Wordlist::english();
    let sheet = lookup_sheet(word_table(), &wordlist, Some(Suit::Clubs));
    assert!(sheet.contains("K\u{2663}"));
    // the last word sits at K♣:2♣
    assert!(sheet.contains("zoo"));
    assert!(!sheet.contains("abandon"));
}

#[test]
fn test_card_display_keeps_pips() {
    colored::control::set_override(false);
    assert_eq!(card_display(card(13)), "A\u{2661}");
}
