//! Projectile vs enemy collision
//!
//! A projectile is treated as a point tested against each enemy's square hit
//! box. The projectile radius is accepted so callers can pass their sprite
//! size, but the test itself only uses the enemy box.

use glam::Vec2;

use super::enemy::EnemyPool;
use super::entity::DamageOutcome;

/// Damage dealt by a single projectile hit
pub const PROJECTILE_DAMAGE: i32 = 1;

/// One resolved hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitReport {
    /// Enemy position at the time of the hit
    pub enemy_pos: Vec2,
    pub outcome: DamageOutcome,
}

/// Resolves projectile hits against an enemy pool for one frame
pub struct CollisionResolver<'a> {
    enemies: &'a mut EnemyPool,
    reports: Vec<HitReport>,
}

impl<'a> CollisionResolver<'a> {
    pub fn new(enemies: &'a mut EnemyPool) -> Self {
        Self {
            enemies,
            reports: Vec::new(),
        }
    }

    /// Damage the first live enemy whose box contains `pos`
    ///
    /// Returns true on a hit. At most one enemy is affected per call, even
    /// when several boxes overlap the point.
    pub fn check_projectile_collisions(&mut self, pos: Vec2, _radius: f32) -> bool {
        let Some(enemy) = self.enemies.iter_mut().find(|e| e.contains_point(pos)) else {
            return false;
        };

        let outcome = enemy.take_damage(PROJECTILE_DAMAGE);
        match outcome {
            DamageOutcome::Died => log::debug!("Enemy destroyed at {:?}", enemy.pos),
            DamageOutcome::Survived { hp_remaining } => {
                log::debug!("Enemy hit! HP remaining: {hp_remaining}")
            }
        }
        self.reports.push(HitReport {
            enemy_pos: enemy.pos,
            outcome,
        });
        true
    }

    /// Hits resolved so far, in order
    pub fn reports(&self) -> &[HitReport] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<HitReport> {
        self.reports
    }
}
