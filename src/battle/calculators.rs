use crate::battle::state::{BattleEvent, EventBus};
use crate::battle::stats::TypeChart;
use crate::pokemon::{AttackOutcome, PokemonInst};
use schema::Move;

/// Resolve one attack and record what happened on the bus.
pub fn execute_attack(
    attacker: &PokemonInst,
    defender: &mut PokemonInst,
    move_used: Move,
    chart: &TypeChart,
    bus: &mut EventBus,
) -> AttackOutcome {
    let outcome = attacker.attack(move_used, defender, chart);

    match outcome {
        AttackOutcome::UnknownMove => {
            bus.push(BattleEvent::MoveUnknown {
                attacker: attacker.name.clone(),
                move_used,
            });
        }
        AttackOutcome::Hit {
            damage,
            target_fainted,
            ..
        } => {
            bus.push(BattleEvent::MoveUsed {
                attacker: attacker.name.clone(),
                move_used,
                super_effective: outcome.is_super_effective(),
            });
            bus.push(BattleEvent::DamageDealt {
                attacker: attacker.name.clone(),
                target: defender.name.clone(),
                damage,
                remaining_hp: defender.current_hp(),
            });
            if target_fainted {
                bus.push(BattleEvent::PokemonFainted {
                    pokemon: defender.name.clone(),
                });
            }
        }
    }

    outcome
}
