use crate::battle::state::TurnRng;

/// Consecutive wiggles needed for the ball to hold.
pub const WIGGLES_REQUIRED: u8 = 3;

/// Percent chance that a single wiggle succeeds.
pub const WIGGLE_CHANCE: u8 = 50;

/// Result of one Pokéball throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureAttempt {
    /// Wiggles completed before the ball held or the Pokémon broke free
    pub wiggles: u8,
    pub caught: bool,
}

/// Roll a single wiggle trial
pub fn roll_wiggle(rng: &mut TurnRng) -> bool {
    rng.roll_percent(WIGGLE_CHANCE, "pokeball wiggle")
}

/// Throw a Pokéball: up to `WIGGLES_REQUIRED` independent trials, stopping at
/// the first failure. Only an unbroken run of successes catches the Pokémon.
pub fn throw_pokeball(rng: &mut TurnRng) -> CaptureAttempt {
    let mut wiggles = 0;
    while wiggles < WIGGLES_REQUIRED {
        if !roll_wiggle(rng) {
            return CaptureAttempt {
                wiggles,
                caught: false,
            };
        }
        wiggles += 1;
    }

    CaptureAttempt {
        wiggles,
        caught: true,
    }
}

/// Exact probability that a throw succeeds
pub fn capture_probability() -> f64 {
    (WIGGLE_CHANCE as f64 / 100.0).powi(WIGGLES_REQUIRED as i32)
}
