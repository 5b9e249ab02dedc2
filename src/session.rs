//! The interactive game loop: starter choice, the main menu and battles.

use crate::battle::runner::BattleRunnerError;
use crate::battle::state::{BattleEvent, TurnRng};
use crate::config::{GameConfig, StarterTemplate};
use crate::errors::{GameError, GameResult};
use crate::game::{Game, GameEvent};
use crate::input::{
    count_in_words, list_choices, menu_text, move_prompt, normalize_direction, parse_menu_choice,
    parse_move_choice, parse_starter_choice, prompt_until, MenuAction,
};
use crate::terminal::Terminal;

const STARTER_PROMPT: &str = "Enter the name of the Pokémon you want to choose: ";
const NAME_PROMPT: &str = "Enter your name: ";
const MENU_PROMPT: &str = "Enter your choice: ";
const DIRECTION_PROMPT: &str = "Enter direction (north/south/east/west): ";

/// Load the embedded world and play one game on it.
pub fn run_default(terminal: &mut impl Terminal, rng: TurnRng) -> GameResult<()> {
    let config = GameConfig::load_default()?;
    run(&config, terminal, rng)
}

/// Play one game until the player quits or input runs out.
///
/// A closed input stream is a normal way to end a session.
pub fn run(config: &GameConfig, terminal: &mut impl Terminal, rng: TurnRng) -> GameResult<()> {
    match play(config, terminal, rng) {
        Err(GameError::InputClosed) => {
            log::info!("Input closed, ending session");
            Ok(())
        }
        other => other,
    }
}

fn play(config: &GameConfig, terminal: &mut impl Terminal, rng: TurnRng) -> GameResult<()> {
    let starter = choose_starter(config, terminal)?;
    let name = terminal.read_line(NAME_PROMPT).ok_or(GameError::InputClosed)?;
    let mut game = Game::from_config(config, name.trim(), starter, rng);

    terminal.write_line(&format!(
        "\nHello, {}! Your adventure begins in {} with your new {}.",
        game.player().name,
        game.current_location(),
        starter.name
    ));

    loop {
        terminal.write_line(&menu_text());
        let action = prompt_until(terminal, MENU_PROMPT, parse_menu_choice)?;
        log::debug!("Menu action: {:?}", action);

        match action {
            MenuAction::Move => {
                let line = terminal
                    .read_line(DIRECTION_PROMPT)
                    .ok_or(GameError::InputClosed)?;
                let events = game.travel(&normalize_direction(&line));
                write_game_events(terminal, &events);
                if events.iter().any(GameEvent::forces_battle) {
                    run_battle(&mut game, terminal)?;
                }
            }
            MenuAction::ShowPokemon => write_game_events(terminal, &game.show_pokemon()),
            MenuAction::ShowMoney => write_game_events(terminal, &game.show_money()),
            MenuAction::VisitPokecenter => write_game_events(terminal, &game.visit_pokecenter()),
            MenuAction::VisitMart => write_game_events(terminal, &game.visit_mart()),
            MenuAction::Quit => {
                terminal.write_line("Thanks for playing!");
                return Ok(());
            }
        }
    }
}

fn choose_starter<'a>(
    config: &'a GameConfig,
    terminal: &mut impl Terminal,
) -> GameResult<&'a StarterTemplate> {
    terminal.write_line("Welcome to the world of Pokémon!");
    terminal.write_line(
        "I am Professor Oak. Before you embark on your journey, you need to choose your starter Pokémon.",
    );
    let names = config.starter_names();
    terminal.write_line(&format!(
        "You have {} choices: {}.",
        count_in_words(names.len()),
        list_choices(&names, "and")
    ));

    prompt_until(terminal, STARTER_PROMPT, |line| {
        parse_starter_choice(line, &config.starters)
    })
}

/// Fight the wild Pokémon at the player's location until one side faints.
///
/// A battle that cannot start is reported and skipped. The player cannot
/// flee; only closed input leaves a battle early.
pub fn run_battle(game: &mut Game, terminal: &mut impl Terminal) -> GameResult<()> {
    let (mut battle, opening) = match game.start_wild_battle() {
        Ok(started) => started,
        Err(
            err @ (GameError::EmptyRoster
            | GameError::CombatantFainted { .. }
            | GameError::NoWildPokemon { .. }),
        ) => {
            terminal.write_line(&err.to_string());
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    write_battle_events(terminal, &opening);

    let prompt = move_prompt();
    while battle.is_ongoing() {
        if let Some(report) = game.hp_report(&battle) {
            write_battle_events(terminal, &[report]);
        }

        let chosen = prompt_until(terminal, &prompt, parse_move_choice)?;
        match game.battle_turn(&mut battle, chosen) {
            Ok(result) => write_battle_events(terminal, &result.events),
            Err(GameError::Battle(err @ BattleRunnerError::UnknownMove { .. })) => {
                terminal.write_line(&err.to_string());
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn write_game_events(terminal: &mut impl Terminal, events: &[GameEvent]) {
    for event in events {
        terminal.write_line(&event.to_string());
    }
}

fn write_battle_events(terminal: &mut impl Terminal, events: &[BattleEvent]) {
    for text in events.iter().filter_map(BattleEvent::format) {
        terminal.write_line(&text);
    }
}
