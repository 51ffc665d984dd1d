//! Per-frame simulation step
//!
//! One call to [`tick`] is one frame: paddle input, the confirm action, then
//! either the brick fade-in (Init) or the full physics pass (Running).

use super::collision::{circle_rect_overlap, hit_face, paddle_deflection};
use super::phase::Trigger;
use super::state::{Ball, GameEvent, GamePhase, GameState};
use crate::audio::SoundEffect;
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
    /// Confirm key pressed this frame
    pub confirm: bool,
}

/// Advance the game by one frame; `dt` is the real frame time in seconds
///
/// `state.events` is cleared first and then holds only this frame's events.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.paddle.steer(input.left, input.right);

    if input.confirm {
        state.fire(Trigger::Confirm);
    }

    match state.phase {
        GamePhase::Init => state.bricks.fade_in_step(),
        GamePhase::Running => step_running(state, dt),
        GamePhase::GameOver => {}
    }
}

fn step_running(state: &mut GameState, dt: f32) {
    state.particles.update(dt);

    if resolve_borders(&mut state.ball) {
        state.emit(GameEvent::BallLost);
        state.emit(GameEvent::Sound(SoundEffect::BallLost));
        state.fire(Trigger::BallLost);
        return;
    }

    handle_paddle(state);

    if handle_bricks(state) {
        if state.bricks_left() == 0 {
            state.fire(Trigger::BoardCleared);
        }
        return;
    }

    state.ball.integrate();
}

/// Bounce the ball off the side and top walls; returns true if it fell out the bottom
pub fn resolve_borders(ball: &mut Ball) -> bool {
    let r = ball.radius;

    if ball.pos.x > WIDTH - r {
        ball.pos.x = WIDTH - r;
        ball.vel.x = -ball.vel.x;
    }

    if ball.pos.x < r {
        ball.pos.x = r;
        ball.vel.x = -ball.vel.x;
    }

    if ball.pos.y < r {
        ball.pos.y = r;
        ball.vel.y = -ball.vel.y;
    }

    ball.pos.y > HEIGHT - r
}

/// Paddle bounce: lift the ball above the paddle, send it back up, steer by hit offset
fn handle_paddle(state: &mut GameState) {
    let paddle = state.paddle.rect;
    let ball = &mut state.ball;
    if !circle_rect_overlap(ball.pos, ball.radius, &paddle) {
        return;
    }

    ball.pos.y = paddle.top() - ball.radius;
    ball.vel.y = -ball.vel.y;
    ball.vel.x = paddle_deflection(ball.pos.x, &paddle);

    state.emit(GameEvent::Sound(SoundEffect::PaddleHit));
}

/// Destroy at most one brick; returns true if one was hit
fn handle_bricks(state: &mut GameState) -> bool {
    let ball = state.ball;
    let Some((row, col)) = state.bricks.first_hit(ball.pos, ball.radius) else {
        return false;
    };
    let Some(brick) = state.bricks.destroy(row, col) else {
        return false;
    };

    let face = hit_face(ball.pos, ball.radius, &brick.rect);
    state.ball.vel = face.reflect(ball.vel);
    state.score += BRICK_SCORE;

    state.particles.spawn(
        brick.rect.center(),
        PARTICLES_PER_BRICK,
        brick.color,
        &mut state.rng,
    );

    log::debug!(
        "Brick ({}, {}) destroyed via {:?}, {} left",
        row,
        col,
        face,
        state.bricks_left()
    );
    state.emit(GameEvent::BrickDestroyed { row, col });
    state.emit(GameEvent::Sound(SoundEffect::BrickDestroy));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / TARGET_FPS as f32;

    fn confirm() -> TickInput {
        TickInput {
            confirm: true,
            ..Default::default()
        }
    }

    /// Running session with the ball back on the serve spot and no pending events
    fn running_state() -> GameState {
        let mut state = GameState::new(12345);
        tick(&mut state, &confirm(), DT);
        state.ball.reset(state.speed_increment);
        state.events.clear();
        state
    }

    fn sounds(state: &GameState) -> Vec<SoundEffect> {
        state
            .events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Sound(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_tick_init_to_running() {
        let mut state = GameState::new(12345);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Init);
        // Bricks fade in while waiting, ball stays put
        assert!((state.bricks.get(0, 0).fade - BRICK_FADE_STEP).abs() < 1e-6);
        assert_eq!(state.ball.pos, Vec2::new(BALL_START_X, BALL_START_Y));

        tick(&mut state, &confirm(), DT);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.bricks.iter().all(|(_, _, b)| b.fade == 1.0));
        // The serve spot rests on the paddle, so the first frame is a paddle bounce
        assert!(state.events.contains(&GameEvent::Sound(SoundEffect::PaddleHit)));
    }

    #[test]
    fn test_paddle_moves_in_every_phase() {
        let mut state = GameState::new(1);
        let x = state.paddle.rect.x;
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &left, DT);
        assert_eq!(state.paddle.rect.x, x - BAR_SPEED);

        state.phase = GamePhase::GameOver;
        tick(&mut state, &left, DT);
        assert_eq!(state.paddle.rect.x, x - 2.0 * BAR_SPEED);
    }

    #[test]
    fn test_ball_moves_when_running() {
        let mut state = running_state();
        // Shift the paddle so the serve spot is clear of it
        state.paddle.rect.x = 0.0;
        let start = state.ball.pos;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.ball.pos, start - Vec2::new(0.0, BALL_SPEED));
        assert!((state.ball.vel.y - (BALL_SPEED + GRAVITY)).abs() < 1e-6);
    }

    #[test]
    fn test_paddle_center_hit_sends_ball_straight_up() {
        let mut state = running_state();
        let paddle = state.paddle.rect;
        // Falling onto the paddle's centre
        state.ball.pos = Vec2::new(paddle.center().x, paddle.top() - 5.0);
        state.ball.vel = Vec2::new(0.0, -BALL_SPEED);

        tick(&mut state, &TickInput::default(), DT);

        assert!(state.ball.vel.x.abs() < 1e-6);
        assert!((state.ball.vel.y - (BALL_SPEED + GRAVITY)).abs() < 1e-5);
        assert_eq!(sounds(&state), vec![SoundEffect::PaddleHit]);
    }

    #[test]
    fn test_paddle_edge_hit_deflects() {
        let mut state = running_state();
        let paddle = state.paddle.rect;
        state.ball.pos = Vec2::new(paddle.right() - 5.0, paddle.top() - 5.0);
        state.ball.vel = Vec2::new(0.0, -BALL_SPEED);

        tick(&mut state, &TickInput::default(), DT);

        // 70 px right of centre
        assert!((state.ball.vel.x - 70.0 * PADDLE_DEFLECTION).abs() < 1e-4);
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(WIDTH + 3.0, 400.0);
        state.ball.vel = Vec2::new(2.0, 1.0);
        tick(&mut state, &TickInput::default(), DT);
        // Clamped, reflected, then integrated once
        assert_eq!(state.ball.vel.x, -2.0);
        assert_eq!(state.ball.pos.x, WIDTH - BALL_RADIUS - 2.0);
    }

    #[test]
    fn test_brick_hit_destroys_one_brick() {
        let mut state = running_state();
        let rect = state.bricks.get(4, 2).rect;
        state.ball.pos = Vec2::new(rect.center().x, rect.bottom() + 5.0);
        state.ball.vel = Vec2::new(0.5, BALL_SPEED);
        let pos_before = state.ball.pos;

        tick(&mut state, &TickInput::default(), DT);

        assert!(!state.bricks.get(4, 2).active);
        assert_eq!(state.bricks_left(), BRICK_COUNT - 1);
        assert_eq!(state.score, BRICK_SCORE);
        assert_eq!(state.particles.active_count(), PARTICLES_PER_BRICK);
        // Bottom face: rise flips, no integration this frame
        assert_eq!(state.ball.vel, Vec2::new(0.5, -BALL_SPEED));
        assert_eq!(state.ball.pos, pos_before);
        assert_eq!(sounds(&state), vec![SoundEffect::BrickDestroy]);
        assert!(
            state
                .events
                .contains(&GameEvent::BrickDestroyed { row: 4, col: 2 })
        );
    }

    #[test]
    fn test_clearing_board_advances_level() {
        let mut state = running_state();
        state.score = 240;
        for (row, col) in (0..ROWS).flat_map(|r| (0..COLS).map(move |c| (r, c))) {
            if (row, col) != (4, 4) {
                state.bricks.destroy(row, col);
            }
        }
        assert_eq!(state.bricks_left(), 1);

        let rect = state.bricks.get(4, 4).rect;
        state.ball.pos = Vec2::new(rect.center().x, rect.bottom() + 5.0);
        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.phase, GamePhase::Init);
        assert_eq!(state.level, 2);
        assert_eq!(state.speed_increment, SPEED_INCREMENT);
        assert_eq!(state.score, 250);
        assert_eq!(state.bricks_left(), BRICK_COUNT);
        assert_eq!(state.bricks.active_count(), BRICK_COUNT);
        assert_eq!(state.particles.active_count(), 0);
        assert_eq!(state.ball.pos, Vec2::new(BALL_START_X, BALL_START_Y));
        // New level serves at the old speed; the bonus shows from the next reset
        assert_eq!(state.ball.vel.y, BALL_SPEED);
        assert!(state.events.contains(&GameEvent::LevelCleared { level: 2 }));
        assert_eq!(
            sounds(&state),
            vec![SoundEffect::BrickDestroy, SoundEffect::RoundReset]
        );
    }

    #[test]
    fn test_losing_a_life_resets_round() {
        let mut state = running_state();
        state.score = 70;
        state.bricks.destroy(0, 0);
        state.ball.pos = Vec2::new(100.0, HEIGHT);

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.phase, GamePhase::Init);
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 70);
        assert_eq!(state.level, 1);
        assert_eq!(state.bricks_left(), BRICK_COUNT);
        assert!(state.ball.active);
        assert_eq!(
            sounds(&state),
            vec![SoundEffect::BallLost, SoundEffect::RoundReset]
        );
    }

    #[test]
    fn test_losing_last_life_is_game_over() {
        let mut state = running_state();
        state.lives = 1;
        state.score = 120;
        state.level = 3;
        state.ball.pos = Vec2::new(100.0, HEIGHT);

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.ball.active);
        // Final life is not spent, so the scoreboard still reads 1
        assert_eq!(state.lives, 1);
        assert!(state.events.contains(&GameEvent::BallLost));
        assert_eq!(state.score, 120);
        assert_eq!(state.level, 3);
        assert_eq!(sounds(&state), vec![SoundEffect::BallLost]);

        // Nothing moves after game over
        let ball = state.ball;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.ball, ball);
    }

    #[test]
    fn test_restart_after_game_over_is_full_reset() {
        let mut state = running_state();
        state.lives = 1;
        state.score = 500;
        state.level = 4;
        state.speed_increment = 3.0;
        state.bricks.destroy(1, 1);
        state.ball.pos = Vec2::new(100.0, HEIGHT);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(&mut state, &confirm(), DT);

        assert_eq!(state.phase, GamePhase::Init);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.speed_increment, 0.0);
        assert_eq!(state.bricks_left(), BRICK_COUNT);
        assert_eq!(state.bricks.active_count(), BRICK_COUNT);
        assert!(state.ball.active);
        // Re-served before the bonus was cleared
        assert_eq!(state.ball.vel.y, BALL_SPEED + 3.0);
    }

    #[test]
    fn test_undrained_events_do_not_pile_up() {
        let mut state = running_state();
        let rect = state.bricks.get(4, 2).rect;
        state.ball.pos = Vec2::new(rect.center().x, rect.bottom() + 5.0);
        tick(&mut state, &TickInput::default(), DT);
        assert!(!state.events.is_empty());

        // Next frame is a plain move; the brick events are gone
        state.paddle.rect.x = 0.0;
        state.ball.pos = Vec2::new(300.0, 400.0);
        tick(&mut state, &TickInput::default(), DT);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_confirm_while_running_is_ignored() {
        let mut state = running_state();
        state.paddle.rect.x = 0.0;
        tick(&mut state, &confirm(), DT);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(
            !state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::PhaseChanged { .. }))
        );
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            TickInput::default(),
            confirm(),
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        for _ in 0..300 {
            for input in &inputs {
                tick(&mut state1, input, DT);
                tick(&mut state2, input, DT);
            }
        }

        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.events, state2.events);
    }

    fn input_strategy() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), prop::bool::weighted(0.05)).prop_map(
            |(left, right, confirm)| TickInput {
                left,
                right,
                confirm,
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn bricks_left_tracks_grid(
            seed in any::<u64>(),
            inputs in proptest::collection::vec(input_strategy(), 1..600),
        ) {
            let mut state = GameState::new(seed);
            for input in &inputs {
                let before = state.bricks_left();
                let was_running = state.phase == GamePhase::Running;
                tick(&mut state, input, DT);

                prop_assert_eq!(state.bricks_left(), state.bricks.active_count());
                prop_assert!(state.particles.active_count() <= MAX_PARTICLES);

                let destroyed = state
                    .events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
                    .count();
                prop_assert!(destroyed <= 1);
                if !was_running && state.phase != GamePhase::Running {
                    prop_assert_eq!(destroyed, 0);
                }
                if state.phase == GamePhase::Running {
                    prop_assert_eq!(before - state.bricks_left(), destroyed);
                }
            }
        }

        #[test]
        fn borders_keep_ball_on_screen(
            x in -50.0f32..1100.0,
            y in -50.0f32..700.0,
            vx in -20.0f32..20.0,
            vy in -20.0f32..20.0,
        ) {
            let mut ball = Ball::new(0.0);
            ball.pos = Vec2::new(x, y);
            ball.vel = Vec2::new(vx, vy);

            let lost = resolve_borders(&mut ball);

            prop_assert!(!lost);
            prop_assert!(ball.pos.x >= BALL_RADIUS && ball.pos.x <= WIDTH - BALL_RADIUS);
            prop_assert!(ball.pos.y >= BALL_RADIUS && ball.pos.y <= HEIGHT - BALL_RADIUS);
        }
    }
}
