//! Per-frame simulation tick
//!
//! Routes one frame of input through the phase machine. Inputs are
//! press-edges, so a held key acts once.

use super::round::RoundOutcome;
use super::state::{GameEvent, GamePhase, GameState};
use crate::normalize_degrees;
use crate::platform::{Button, Input};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Confirm / fire pressed this frame (any source)
    pub confirm: bool,
}

impl TickInput {
    pub fn confirm() -> Self {
        Self { confirm: true }
    }

    /// Fold every confirm source of an input device into one flag
    pub fn from_input(input: &impl Input) -> Self {
        Self {
            confirm: Button::ALL.iter().any(|&b| input.is_pressed(b)),
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.frame += 1;

    match state.phase {
        GamePhase::Title => {
            if input.confirm {
                log::info!("Game started (seed {})", state.seed);
                state.phase = GamePhase::Aiming;
                state.events.push(GameEvent::Started);
            }
        }

        GamePhase::GameOver => {
            if input.confirm {
                log::info!("Restarting after game over");
                state.restart();
                state.events.push(GameEvent::Restarted);
            }
        }

        GamePhase::Aiming => {
            state.aim_angle = normalize_degrees(state.aim_angle + state.round.rotation_speed);

            if input.confirm && state.round.fire(state.aim_angle) {
                state.phase = GamePhase::Flying;
                state.events.push(GameEvent::Fired {
                    degrees: state.aim_angle,
                });
                // The new laser moves on the frame it is fired
                fly(state);
            }
        }

        GamePhase::Flying => fly(state),
    }
}

fn fly(state: &mut GameState) {
    let report = state.round.tick();

    if report.bounce.count() > 0 {
        state.events.push(GameEvent::Bounced {
            reflections: report.reflections,
        });
    }
    for &(index, reflections) in &report.hits {
        state
            .events
            .push(GameEvent::TargetHit { index, reflections });
    }

    match report.outcome {
        Some(RoundOutcome::Won { gained }) => {
            state.phase = GamePhase::Aiming;
            state.events.push(GameEvent::RoundWon {
                gained,
                round: state.round.round_count,
            });
        }
        Some(RoundOutcome::Lost) => {
            log::info!("Game over, final score {}", state.round.score);
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver {
                score: state.round.score,
            });
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::EdgeInput;
    use crate::sim::Target;
    use glam::Vec2;

    fn idle(state: &mut GameState, ticks: usize) {
        for _ in 0..ticks {
            tick(state, &TickInput::default());
        }
    }

    /// Game in Aiming with the indicator at 0 degrees after the next tick
    fn aiming_at_zero(target: Vec2) -> GameState {
        let mut state = GameState::new(12345);
        tick(&mut state, &TickInput::confirm());
        state.aim_angle = 360.0 - state.round.rotation_speed;
        state.round.set_targets(vec![Target::new(target)]);
        state
    }

    #[test]
    fn test_title_waits_for_confirm() {
        let mut state = GameState::new(12345);
        idle(&mut state, 10);
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.frame, 10);

        tick(&mut state, &TickInput::confirm());
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.events, vec![GameEvent::Started]);
    }

    #[test]
    fn test_every_source_confirms() {
        for button in Button::ALL {
            let mut state = GameState::new(1);
            let mut input = EdgeInput::new();
            input.poll(|b| b == button);
            tick(&mut state, &TickInput::from_input(&input));
            assert_eq!(state.phase, GamePhase::Aiming, "{:?}", button);
        }
    }

    #[test]
    fn test_held_confirm_does_not_fire_on_title_transition() {
        let mut state = GameState::new(1);
        let mut input = EdgeInput::new();
        for _ in 0..5 {
            input.poll(|b| b == Button::AltConfirm);
            tick(&mut state, &TickInput::from_input(&input));
        }
        // Pressed once: left the title, never fired
        assert_eq!(state.phase, GamePhase::Aiming);
        assert!(!state.round.has_laser());
    }

    #[test]
    fn test_indicator_rotates_while_aiming() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::confirm());
        assert_eq!(state.aim_angle, 0.0);
        idle(&mut state, 3);
        assert_eq!(state.aim_angle, 15.0);
        idle(&mut state, 69);
        assert_eq!(state.aim_angle, 0.0);
    }

    #[test]
    fn test_fire_moves_laser_same_frame() {
        let mut state = aiming_at_zero(Vec2::new(20.0, 20.0));
        tick(&mut state, &TickInput::confirm());
        assert_eq!(state.phase, GamePhase::Flying);
        assert_eq!(state.aim_angle, 0.0);
        assert!(!state.indicator_visible());

        let laser = state.round.laser.as_ref().unwrap();
        assert_eq!(laser.trail.len(), 2);
        assert_eq!(laser.pos(), Vec2::new(72.0, 80.0));
        assert_eq!(state.events, vec![GameEvent::Fired { degrees: 0.0 }]);
    }

    #[test]
    fn test_indicator_frozen_during_flight_and_refire_ignored() {
        let mut state = aiming_at_zero(Vec2::new(20.0, 20.0));
        tick(&mut state, &TickInput::confirm());
        tick(&mut state, &TickInput::confirm());
        tick(&mut state, &TickInput::confirm());
        assert_eq!(state.phase, GamePhase::Flying);
        assert_eq!(state.aim_angle, 0.0);
        let laser = state.round.laser.as_ref().unwrap();
        assert_eq!(laser.pos(), Vec2::new(86.0, 80.0));
        assert_eq!(laser.velocity, Vec2::new(LASER_SPEED, 0.0));
    }

    #[test]
    fn test_bank_shot_returns_to_aiming_with_score() {
        let mut state = aiming_at_zero(Vec2::new(20.0, 20.0));
        tick(&mut state, &TickInput::confirm());
        // Laser at 72; six more frames reach the wall at 110
        idle(&mut state, 6);
        assert_eq!(state.round.laser.as_ref().unwrap().reflections, 1);
        assert!(state
            .events
            .contains(&GameEvent::Bounced { reflections: 1 }));

        state.round.set_targets(vec![Target::new(Vec2::new(103.0, 80.0))]);
        idle(&mut state, 1);
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.score(), 2);
        assert_eq!(
            state.events,
            vec![
                GameEvent::TargetHit {
                    index: 0,
                    reflections: 1
                },
                GameEvent::RoundWon { gained: 2, round: 1 },
            ]
        );
        assert!(state.indicator_visible());
        assert!(!state.round.has_laser());
    }

    #[test]
    fn test_exhausted_laser_ends_game() {
        let mut state = aiming_at_zero(Vec2::new(20.0, 20.0));
        state.round.score = 9;
        tick(&mut state, &TickInput::confirm());

        let mut frames = 0;
        while state.phase == GamePhase::Flying && frames < 1000 {
            idle(&mut state, 1);
            frames += 1;
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score(), 9);
        assert_eq!(state.events.last(), Some(&GameEvent::GameOver { score: 9 }));
        assert!(state.round.targets.iter().all(|t| !t.is_hit()));
    }

    #[test]
    fn test_game_over_restart_resets_everything() {
        let mut state = aiming_at_zero(Vec2::new(20.0, 20.0));
        state.round.score = 30;
        state.round.round_count = 7;
        state.round.rotation_speed = 7.0;
        state.phase = GamePhase::GameOver;
        state.aim_angle = 123.0;

        idle(&mut state, 5);
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(&mut state, &TickInput::confirm());
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.score(), 0);
        assert_eq!(state.round.round_count, 0);
        assert_eq!(state.round.rotation_speed, INITIAL_ROTATION_SPEED);
        assert_eq!(state.aim_angle, 0.0);
        assert_eq!(state.events, vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_determinism() {
        let inputs: Vec<TickInput> = (0..600)
            .map(|i| TickInput {
                confirm: i % 37 == 0,
            })
            .collect();

        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        for input in &inputs {
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.score(), state2.score());
        assert_eq!(state1.aim_angle, state2.aim_angle);
        let t1: Vec<_> = state1.round.targets.iter().map(|t| t.pos).collect();
        let t2: Vec<_> = state2.round.targets.iter().map(|t| t.pos).collect();
        assert_eq!(t1, t2);
    }
}
