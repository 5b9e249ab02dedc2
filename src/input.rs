//! Turning raw lines of player input into validated choices.

use crate::config::StarterTemplate;
use crate::errors::{GameError, GameResult};
use crate::move_data::move_names;
use crate::terminal::Terminal;
use schema::Move;
use std::str::FromStr;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Main menu entries, in the order they are listed. Entry `n` is selected by
/// typing `n + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MenuAction {
    #[strum(to_string = "Move")]
    Move,
    #[strum(to_string = "Show Pokémon")]
    ShowPokemon,
    #[strum(to_string = "Show money")]
    ShowMoney,
    #[strum(to_string = "Visit Pokémon Center")]
    VisitPokecenter,
    #[strum(to_string = "Visit Poké Mart")]
    VisitMart,
    #[strum(to_string = "Quit")]
    Quit,
}

/// The numbered main menu.
pub fn menu_text() -> String {
    let mut text = String::from("\n---\nWhat would you like to do?");
    for (i, action) in MenuAction::iter().enumerate() {
        text.push_str(&format!("\n{}. {}", i + 1, action));
    }
    text
}

pub fn parse_menu_choice(input: &str) -> GameResult<MenuAction> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| MenuAction::iter().nth(i))
        .ok_or_else(|| GameError::InvalidSelection("Invalid choice. Please try again.".to_string()))
}

pub fn normalize_direction(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Capitalize the first letter of every word and lowercase the rest.
/// Runs of whitespace collapse to a single space.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// "A, B, or C" style list for prompts and corrective messages.
pub fn list_choices(names: &[&str], conjunction: &str) -> String {
    match names {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} {} {}", first, conjunction, second),
        [rest @ .., last] => format!("{}, {} {}", rest.join(", "), conjunction, last),
    }
}

/// Spell out small counts for prose ("three choices").
pub fn count_in_words(count: usize) -> String {
    const WORDS: [&str; 10] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ];
    WORDS
        .get(count)
        .map(|word| word.to_string())
        .unwrap_or_else(|| count.to_string())
}

pub fn move_prompt() -> String {
    format!("Enter your move ({}): ", move_names().join("/"))
}

/// Accept any catalog move name, case-insensitively.
pub fn parse_move_choice(input: &str) -> GameResult<Move> {
    Move::from_str(&title_case(input)).map_err(|_| {
        GameError::InvalidSelection(format!(
            "Invalid move. Choose {}.",
            list_choices(&move_names(), "or")
        ))
    })
}

pub fn parse_starter_choice<'a>(
    input: &str,
    starters: &'a [StarterTemplate],
) -> GameResult<&'a StarterTemplate> {
    let wanted = title_case(input);
    starters
        .iter()
        .find(|starter| starter.name == wanted)
        .ok_or_else(|| {
            let names: Vec<&str> = starters.iter().map(|s| s.name.as_str()).collect();
            GameError::InvalidSelection(format!(
                "Invalid choice. Please choose {}.",
                list_choices(&names, "or")
            ))
        })
}

/// Keep asking until `parse` accepts a line.
///
/// `InvalidSelection` messages are shown and the prompt repeats; any other
/// error, including a closed input stream, is returned.
pub fn prompt_until<T, F>(terminal: &mut impl Terminal, prompt: &str, mut parse: F) -> GameResult<T>
where
    F: FnMut(&str) -> GameResult<T>,
{
    loop {
        let line = terminal.read_line(prompt).ok_or(GameError::InputClosed)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(GameError::InvalidSelection(message)) => terminal.write_line(&message),
            Err(other) => return Err(other),
        }
    }
}
