use crate::battle::catch::{can_attempt_catch, throw_pokeball, CaptureAttempt, CatchError};
use crate::battle::state::{BattleEvent, BattleStatus, TurnRng};

/// Run the capture sequence after a battle and describe it as events.
///
/// The caller owns moving the Pokémon into the roster when `caught` is set.
pub fn calculate_catch_events(
    status: BattleStatus,
    target_name: &str,
    rng: &mut TurnRng,
) -> Result<(CaptureAttempt, Vec<BattleEvent>), CatchError> {
    can_attempt_catch(status)?;

    let attempt = throw_pokeball(rng);
    let mut events = vec![BattleEvent::PokeballThrown];
    events.extend((1..=attempt.wiggles).map(|wiggle| BattleEvent::PokeballWiggled { wiggle }));

    if attempt.caught {
        events.push(BattleEvent::PokemonCaught {
            pokemon: target_name.to_string(),
        });
    } else {
        events.push(BattleEvent::PokemonBrokeFree);
        events.push(BattleEvent::PokemonEscaped);
    }

    log::info!(
        "Pokéball thrown at {}: {} wiggle(s), caught = {}",
        target_name,
        attempt.wiggles,
        attempt.caught
    );

    Ok((attempt, events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_successful_catch_events() {
        let mut rng = TurnRng::new_for_test(vec![1, 2, 3]);

        let (attempt, events) =
            calculate_catch_events(BattleStatus::PlayerWon, "Pidgey", &mut rng).unwrap();

        assert!(attempt.caught);
        assert_eq!(
            events,
            vec![
                BattleEvent::PokeballThrown,
                BattleEvent::PokeballWiggled { wiggle: 1 },
                BattleEvent::PokeballWiggled { wiggle: 2 },
                BattleEvent::PokeballWiggled { wiggle: 3 },
                BattleEvent::PokemonCaught {
                    pokemon: "Pidgey".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_failed_catch_events() {
        let mut rng = TurnRng::new_for_test(vec![1, 75]);

        let (attempt, events) =
            calculate_catch_events(BattleStatus::PlayerWon, "Pidgey", &mut rng).unwrap();

        assert!(!attempt.caught);
        assert_eq!(
            events,
            vec![
                BattleEvent::PokeballThrown,
                BattleEvent::PokeballWiggled { wiggle: 1 },
                BattleEvent::PokemonBrokeFree,
                BattleEvent::PokemonEscaped,
            ]
        );
    }

    #[test]
    fn test_no_throw_unless_won() {
        // Empty script: any roll would panic.
        let mut rng = TurnRng::new_for_test(vec![]);
        let result = calculate_catch_events(BattleStatus::PlayerLost, "Pidgey", &mut rng);
        assert!(matches!(result, Err(CatchError::BattleNotWon { .. })));
    }
}
