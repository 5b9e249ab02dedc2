use crate::battle::state::{BattleEvent, BattleStatus, TurnRng};
use crate::battle::tests::common::{
    assert_ok, create_test_game, predictable_rng, TestPokemonBuilder, TEST_LOCATION,
};
use crate::world::Encounter;
use schema::{Move, PokemonType};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_capture_moves_wild_pokemon_into_roster() {
    let charmander = TestPokemonBuilder::new("Charmander", 5, PokemonType::Fire).build();
    let rattata = TestPokemonBuilder::new("Rattata", 3, PokemonType::Normal).build();
    let mut game = create_test_game(charmander, rattata, predictable_rng());

    let (mut battle, _) = assert_ok(game.start_wild_battle());
    let result = assert_ok(game.battle_turn(&mut battle, Move::Ember));

    assert_eq!(result.status, BattleStatus::PlayerWon);
    assert_eq!(
        result.events.last(),
        Some(&BattleEvent::PokemonCaught {
            pokemon: "Rattata".to_string()
        })
    );

    let roster: Vec<String> = game.player().roster.iter().map(|p| p.to_string()).collect();
    assert_eq!(
        roster,
        vec![
            "Charmander (Level 5), Type: Fire".to_string(),
            "Rattata (Level 3), Type: Normal".to_string(),
        ]
    );
    // Caught at whatever HP the battle left it with.
    assert_eq!(game.player().roster[1].hp, -5.0);
    assert_eq!(
        game.world().encounter(TEST_LOCATION),
        Some(&Encounter::Caught {
            name: "Rattata".to_string()
        })
    );
    assert!(game.start_wild_battle().is_err());
}

#[rstest]
#[case(vec![60], 0)]
#[case(vec![50, 51], 1)]
#[case(vec![1, 1, 100], 2)]
fn test_failed_capture_sequence(#[case] outcomes: Vec<u8>, #[case] wiggles: u8) {
    let charmander = TestPokemonBuilder::new("Charmander", 5, PokemonType::Fire).build();
    let rattata = TestPokemonBuilder::new("Rattata", 3, PokemonType::Normal).build();
    let mut game = create_test_game(charmander, rattata, TurnRng::new_for_test(outcomes));

    let (mut battle, _) = assert_ok(game.start_wild_battle());
    let result = assert_ok(game.battle_turn(&mut battle, Move::Ember));

    let wiggle_count = result
        .events
        .iter()
        .filter(|event| matches!(event, BattleEvent::PokeballWiggled { .. }))
        .count();
    assert_eq!(wiggle_count, wiggles as usize);
    assert_eq!(
        &result.events[result.events.len() - 2..],
        &[BattleEvent::PokemonBrokeFree, BattleEvent::PokemonEscaped]
    );
    assert_eq!(game.player().roster.len(), 1);
    assert!(game.world().wild_pokemon(TEST_LOCATION).is_some());
}

#[test]
fn test_no_capture_after_ongoing_turn() {
    let squirtle = TestPokemonBuilder::new("Squirtle", 5, PokemonType::Water).build();
    let rattata = TestPokemonBuilder::new("Rattata", 5, PokemonType::Normal).build();
    // One outcome for the wild move and nothing left for a Pokéball.
    let mut game = create_test_game(squirtle, rattata, TurnRng::new_for_test(vec![3]));

    let (mut battle, _) = assert_ok(game.start_wild_battle());
    let result = assert_ok(game.battle_turn(&mut battle, Move::Tackle));

    assert_eq!(result.status, BattleStatus::Ongoing);
    assert!(!result.events.contains(&BattleEvent::PokeballThrown));
}

#[test]
fn test_capture_text() {
    let charmander = TestPokemonBuilder::new("Charmander", 5, PokemonType::Fire).build();
    let rattata = TestPokemonBuilder::new("Rattata", 3, PokemonType::Normal).build();
    let mut game = create_test_game(charmander, rattata, TurnRng::new_for_test(vec![10, 10, 10]));

    let (mut battle, _) = assert_ok(game.start_wild_battle());
    let result = assert_ok(game.battle_turn(&mut battle, Move::Ember));
    let text: Vec<String> = result.events.iter().filter_map(BattleEvent::format).collect();

    assert_eq!(
        text,
        vec![
            "Charmander used Ember!".to_string(),
            "Charmander dealt 20 damage to Rattata.".to_string(),
            "Rattata fainted!".to_string(),
            "You defeated Rattata!".to_string(),
            "You threw a Pokéball!".to_string(),
            "The Pokéball wiggles...".to_string(),
            "The Pokéball wiggles...".to_string(),
            "The Pokéball wiggles...".to_string(),
            "Congratulations! You caught Rattata!".to_string(),
        ]
    );
}
