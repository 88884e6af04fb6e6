//! Per-frame simulation step
//!
//! One call per rendered frame, in a fixed order:
//! spawn → enemy motion → fire → projectiles (with collisions) → reap.

use super::collision::CollisionResolver;
use super::entity::DamageOutcome;
use super::rng::RandomSource;
use super::state::{GameState, SimEvent};
use crate::consts::MAX_FRAME_DT;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Angle the player should face (from the cursor)
    pub target_angle: Option<f32>,
    /// Trigger held
    pub fire: bool,
}

/// Advance the game state by one frame of `dt` seconds
///
/// A frame with no positive delta is skipped entirely: nothing ages, moves
/// or spawns, and the frame counter does not advance.
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    if !(dt > 0.0) {
        return;
    }
    let dt = dt.min(MAX_FRAME_DT);

    if let Some(angle) = input.target_angle {
        state.player.set_rotation(angle);
    }
    state.player.update(dt);

    // Spawn, then move everything that is already alive
    let alive = state.enemies.alive_count();
    if let Some(enemy) = state.spawner.update(dt, alive, &mut state.rng) {
        log::debug!("Enemy spawned at {:?} heading {:?}", enemy.pos, enemy.vel);
        state.events.push(SimEvent::EnemySpawned { pos: enemy.pos });
        state.enemies.push(enemy);
    }
    state.enemies.update(dt);

    // Fire only when the trigger is held and the interval allows it
    state.fire.update(dt);
    if input.fire && state.fire.can_shoot(&mut state.rng) {
        let origin = state.player.position();
        let aim = state.player.rotation;
        let projectile = state.fire.make_projectile(origin, aim, &mut state.rng);
        state.projectiles.push(projectile);
        state.fire.update_last_shot_time();
        state.events.push(SimEvent::ProjectileFired { angle: aim });
    }

    // Projectiles move and resolve hits before dead enemies are removed
    let mut resolver = CollisionResolver::new(&mut state.enemies);
    state.projectiles.update(dt, Some(&mut resolver));
    for hit in resolver.into_reports() {
        state.events.push(match hit.outcome {
            DamageOutcome::Died => SimEvent::EnemyDestroyed { pos: hit.enemy_pos },
            DamageOutcome::Survived { hp_remaining } => SimEvent::EnemyHit {
                pos: hit.enemy_pos,
                hp_remaining,
            },
        });
    }
    state.enemies.reap();

    state.time += dt;
    state.frame += 1;
}
