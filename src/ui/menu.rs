//! Console menu: option parsing and text rendering.
//!
//! Renderers write into any `core::fmt::Write` so the firmware can format
//! into a `heapless::String` and tests into a `String`.

use core::fmt::{self, Write};

use crate::config::TOP_SCORES_SHOWN;
use crate::error::Error;
use crate::leaderboard::Leaderboard;

pub const BANNER: &[&str] = &[
    r"  _   _                 _                  _____ _            __  __ _",
    r"| \ | |               | |                / ____| |          / _|/ _| |",
    r"|  \| |_   _ _ __ ___ | |__   ___ _ __  | (___ | |__  _   _| |_| |_| | ___ ",
    r"| . ` | | | | '_ ` _ \| '_ \ / _ \ '__|  \___ \| '_ \| | | |  _|  _| |/ _ \",
    r"| |\  | |_| | | | | | | |_) |  __/ |     ____) | | | | |_| | | | | | |  __/",
    r"|_| \_|\__,_|_| |_| |_|_.__/ \___|_|    |_____/|_| |_|\__,_|_| |_| |_|\___|",
    "",
    "Guess the number and immortalise your name in the High Score Hall of Fame!",
];

pub const MENU_PROMPT: &str =
    "Select an option:   H - View High Scores     P - Play Game       Q - Quit";
pub const INVALID_OPTION: &str = "Invalid option. Please select a valid one!";
pub const HIGH_SCORES_TITLE: &str = "HIGH SCORES!!";
pub const ROUND_INTRO: &[&str] = &[
    "Starting a new round!",
    "Use the buttons to make and submit your guess!",
    "Press and hold the guess button to cancel your game",
];
pub const WIN_MESSAGE: &str = "You guessed the number!";
pub const NAME_PROMPT: &str = "Enter your name: ";
pub const SAVE_FAILED: &str = "Your score could not be saved.";
pub const CANCELLED: &str = "Round cancelled.";
pub const GOODBYE: &str = "Come back soon!";

/// Top-level menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuChoice {
    /// `H` - show the leaderboard.
    HighScores,
    /// `P` - play a round.
    Play,
    /// `Q` - quit.
    Quit,
}

impl MenuChoice {
    /// Parse a console line. Case-insensitive, surrounding whitespace ignored.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "H" | "h" => Some(MenuChoice::HighScores),
            "P" | "p" => Some(MenuChoice::Play),
            "Q" | "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Render the leaderboard summary and the best `TOP_SCORES_SHOWN` entries,
/// one line each.
pub fn write_scores<W: Write>(out: &mut W, board: &Leaderboard) -> fmt::Result {
    writeln!(
        out,
        "There are {} scores. Here are the top {}!",
        board.count(),
        TOP_SCORES_SHOWN
    )?;
    for (rank, record) in board.top(TOP_SCORES_SHOWN).iter().enumerate() {
        writeln!(
            out,
            "{} - {} took {} guesses",
            rank + 1,
            record.name.as_str(),
            record.guesses
        )?;
    }
    Ok(())
}

/// Render the outcome of saving a won round: its placement, or the
/// could-not-save line when the store failed.
pub fn write_save_result<W: Write>(
    out: &mut W,
    saved: Result<Option<usize>, Error>,
    attempts: u8,
) -> fmt::Result {
    match saved {
        Ok(rank) => write_placement(out, rank, attempts),
        Err(_) => writeln!(out, "{}", SAVE_FAILED),
    }
}

/// Render where a new score landed after saving.
pub fn write_placement<W: Write>(out: &mut W, rank: Option<usize>, attempts: u8) -> fmt::Result {
    match rank {
        Some(rank) => writeln!(out, "Saved! {} guesses puts you at #{}", attempts, rank + 1),
        None => writeln!(out, "{} guesses did not make the board this time", attempts),
    }
}
