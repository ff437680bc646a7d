//! Simulation tick
//!
//! Advances the session by one frame: move, rotate, home, collide.

use glam::Vec2;

use super::collision::{monster_reaches_player, petal_hit};
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Movement keys held for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one tick and return what happened
///
/// On game-over the state is replaced by a fresh session before returning,
/// and monsters after the one that reached the player are not processed.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.time_ticks += 1;

    move_player(state, input);
    state.petals.rotate(ROTATION_SPEED);

    // Index walk so a removal never skips the following monster
    let mut i = 0;
    while i < state.monsters.len() {
        let center = state.player.pos;
        let monster = &mut state.monsters[i];
        monster.home_toward(center);

        if petal_hit(monster, &state.petals, center).is_some() {
            let killed = state.monsters.remove(i);
            state.score += KILL_SCORE;
            state.petals.count += 1;
            log::debug!(
                "Monster {} destroyed, score {} petals {}",
                killed.id,
                state.score,
                state.petals.count
            );
            events.push(GameEvent::MonsterKilled {
                id: killed.id,
                pos: killed.pos,
                score: state.score,
                petals: state.petals.count,
            });
            continue;
        }

        if monster_reaches_player(&state.monsters[i], &state.player) {
            let final_score = state.score;
            log::info!(
                "Game over after {} ticks, final score {}",
                state.time_ticks,
                final_score
            );
            events.push(GameEvent::GameOver { final_score });
            *state = state.next_session();
            return events;
        }

        i += 1;
    }

    events
}

/// Apply held directions, one axis step at a time
///
/// A step is taken only if the player's circle stays on the canvas.
/// Diagonals are not normalized.
fn move_player(state: &mut GameState, input: &TickInput) {
    let steps = [
        (input.up, Vec2::new(0.0, -PLAYER_STEP)),
        (input.down, Vec2::new(0.0, PLAYER_STEP)),
        (input.left, Vec2::new(-PLAYER_STEP, 0.0)),
        (input.right, Vec2::new(PLAYER_STEP, 0.0)),
    ];
    for (held, step) in steps {
        if !held {
            continue;
        }
        let next = state.player.pos + step;
        if state.arena.contains_circle(next, state.player.radius) {
            state.player.pos = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn_monster;
    use crate::sim::state::{Arena, Monster};
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    fn fresh() -> GameState {
        GameState::new(12345, Arena::default())
    }

    fn push_monster(state: &mut GameState, pos: Vec2, radius: f32, speed: f32) -> u32 {
        let id = state.next_entity_id();
        state.monsters.push(Monster {
            id,
            pos,
            radius,
            speed,
        });
        id
    }

    #[test]
    fn test_monster_on_first_petal_is_destroyed() {
        let mut state = fresh();
        let id = push_monster(&mut state, Vec2::new(460.0, 300.0), 20.0, 2.0);

        let events = tick(&mut state, &TickInput::default());

        assert!(state.monsters.is_empty());
        assert_eq!(state.score, 10);
        assert_eq!(state.petals.count, 7);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            GameEvent::MonsterKilled { id: killed, score: 10, petals: 7, .. } if killed == id
        ));
    }

    #[test]
    fn test_monster_at_player_triggers_single_game_over() {
        let mut state = fresh();
        // At the flower center every petal is 60 away, out of kill range
        push_monster(&mut state, Vec2::new(400.0, 300.0), 20.0, 1.0);
        push_monster(&mut state, Vec2::new(401.0, 300.0), 20.0, 1.0);
        state.score = 30;

        let events = tick(&mut state, &TickInput::default());

        let game_overs: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .collect();
        assert_eq!(game_overs, vec![&GameEvent::GameOver { final_score: 30 }]);
        assert_eq!(state.score, 0);
        assert_eq!(state.petals.count, 6);
        assert_eq!(state.petals.rotation, 0.0);
        assert!(state.monsters.is_empty());
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_petal_kill_beats_game_over() {
        let mut state = fresh();
        // Close enough to the player for game-over, but on top of petal 0
        push_monster(&mut state, Vec2::new(450.0, 300.0), 40.0, 0.0);

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::MonsterKilled { .. }));
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_adjacent_kills_are_not_skipped() {
        let mut state = fresh();
        push_monster(&mut state, Vec2::new(460.0, 300.0), 20.0, 1.0);
        push_monster(&mut state, Vec2::new(340.0, 300.0), 20.0, 1.0);
        let survivor = push_monster(&mut state, Vec2::new(-30.0, 10.0), 30.0, 1.0);

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(events.len(), 2);
        assert_eq!(state.score, 20);
        assert_eq!(state.petals.count, 8);
        assert_eq!(state.monsters.len(), 1);
        assert_eq!(state.monsters[0].id, survivor);
    }

    #[test]
    fn test_kill_counts_carry_into_game_over_score() {
        let mut state = fresh();
        push_monster(&mut state, Vec2::new(460.0, 300.0), 20.0, 1.0);
        push_monster(&mut state, Vec2::new(400.0, 300.0), 20.0, 1.0);

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], GameEvent::MonsterKilled { score: 10, .. }));
        assert_eq!(events[1], GameEvent::GameOver { final_score: 10 });
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_far_monster_moves_toward_player() {
        let mut state = fresh();
        push_monster(&mut state, Vec2::new(0.0, 300.0), 20.0, 2.5);

        let events = tick(&mut state, &TickInput::default());

        assert!(events.is_empty());
        assert!((state.monsters[0].pos - Vec2::new(2.5, 300.0)).length() < 1e-4);
    }

    #[test]
    fn test_movement_steps_and_diagonals() {
        let mut state = fresh();
        tick(
            &mut state,
            &TickInput {
                up: true,
                right: true,
                ..Default::default()
            },
        );
        assert_eq!(state.player.pos, Vec2::new(405.0, 295.0));

        // Opposite keys cancel
        tick(
            &mut state,
            &TickInput {
                left: true,
                right: true,
                ..Default::default()
            },
        );
        assert_eq!(state.player.pos, Vec2::new(405.0, 295.0));
    }

    #[test]
    fn test_player_stops_at_edge() {
        let mut state = fresh();
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..200 {
            tick(&mut state, &input);
        }
        assert_eq!(state.player.pos.x, 30.0);
    }

    #[test]
    fn test_rotation_advances_each_tick() {
        let mut state = fresh();
        tick(&mut state, &TickInput::default());
        tick(&mut state, &TickInput::default());
        assert!((state.petals.rotation - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, Arena::default());
        let mut state2 = GameState::new(99999, Arena::default());
        let input = TickInput {
            down: true,
            left: true,
            ..Default::default()
        };

        for t in 0..600 {
            if t % 120 == 0 {
                spawn_monster(&mut state1);
                spawn_monster(&mut state2);
            }
            let e1 = tick(&mut state1, &input);
            let e2 = tick(&mut state2, &input);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.monsters, state2.monsters);
        assert_eq!(state1.player.pos, state2.player.pos);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(up, down, left, right)| TickInput {
                up,
                down,
                left,
                right,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_player_stays_on_canvas(inputs in prop::collection::vec(arb_input(), 1..400)) {
            let mut state = fresh();
            for input in &inputs {
                tick(&mut state, input);
                let p = state.player.pos;
                let r = state.player.radius;
                prop_assert!(p.x >= r && p.x <= state.arena.width - r);
                prop_assert!(p.y >= r && p.y <= state.arena.height - r);
            }
        }

        #[test]
        fn prop_petal_positions_follow_formula(
            ticks in 0usize..500,
            inputs in prop::collection::vec(arb_input(), 1..20),
        ) {
            let mut state = fresh();
            for t in 0..ticks {
                tick(&mut state, &inputs[t % inputs.len()]);
            }
            let count = state.petals.count;
            for (i, pos) in state.petal_positions().enumerate() {
                let theta = TAU * i as f32 / count as f32 + state.petals.rotation;
                let expected = state.player.pos + 60.0 * Vec2::new(theta.cos(), theta.sin());
                prop_assert!((pos - expected).length() < 1e-3);
            }
        }

        #[test]
        fn prop_score_only_drops_on_game_over(
            seed in any::<u64>(),
            inputs in prop::collection::vec(arb_input(), 1..600),
        ) {
            let mut state = GameState::new(seed, Arena::default());
            let mut last = 0;
            for (t, input) in inputs.iter().enumerate() {
                if t % 60 == 0 {
                    spawn_monster(&mut state);
                }
                let events = tick(&mut state, input);
                let reset = events.iter().any(|e| matches!(e, GameEvent::GameOver { .. }));
                if reset {
                    prop_assert_eq!(state.score, 0);
                } else {
                    prop_assert!(state.score >= last);
                    prop_assert_eq!(state.score - last, 10 * events.len() as u32);
                }
                last = state.score;
            }
        }
    }
}
