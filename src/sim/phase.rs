//! Session state machine as a pure transition function
//!
//! `transition` decides the next phase and lists the side effects to run;
//! [`GameState::fire`](super::GameState::fire) executes them in order.

use super::state::GamePhase;

/// What can drive the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Player pressed the confirm key
    Confirm,
    /// Last brick destroyed
    BoardCleared,
    /// Ball crossed the bottom edge
    BallLost,
}

/// Side effect of a transition, applied in list order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Snap active bricks to full opacity
    RevealBricks,
    /// Score 0, level 1, full lives, no speed bonus
    ResetStats,
    /// Level + 1 and add the speed bonus (takes effect on the next re-serve)
    AdvanceLevel,
    LoseLife,
    /// Clear particles, re-serve the ball, reactivate bricks, play the reset sound
    ResetBoard,
    DeactivateBall,
}

/// Result of a legal transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: GamePhase,
    pub effects: &'static [Effect],
}

const START_ROUND: &[Effect] = &[Effect::RevealBricks];
const NEXT_LEVEL: &[Effect] = &[Effect::ResetBoard, Effect::AdvanceLevel];
const RETRY: &[Effect] = &[Effect::LoseLife, Effect::ResetBoard];
const GAME_OVER: &[Effect] = &[Effect::DeactivateBall];
const RESTART: &[Effect] = &[Effect::ResetBoard, Effect::ResetStats];

/// Compute the transition for `trigger` in `phase`, or `None` if it is not legal
///
/// `lives` is the count before any effect runs.
pub fn transition(phase: GamePhase, trigger: Trigger, lives: u32) -> Option<Transition> {
    let (next, effects) = match (phase, trigger) {
        (GamePhase::Init, Trigger::Confirm) => (GamePhase::Running, START_ROUND),
        (GamePhase::Running, Trigger::BoardCleared) => (GamePhase::Init, NEXT_LEVEL),
        (GamePhase::Running, Trigger::BallLost) if lives > 1 => (GamePhase::Init, RETRY),
        (GamePhase::Running, Trigger::BallLost) => (GamePhase::GameOver, GAME_OVER),
        (GamePhase::GameOver, Trigger::Confirm) => (GamePhase::Init, RESTART),
        _ => return None,
    };

    Some(Transition { next, effects })
}
