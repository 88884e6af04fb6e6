//! Projectile pool
//!
//! Projectiles fly straight, age, and leave the pool when they hit an enemy,
//! exit the world or outlive their lifetime.

use serde::{Deserialize, Serialize};

use super::collision::CollisionResolver;
use super::entity::Projectile;
use crate::consts::PROJECTILE_RADIUS;

/// Ordered collection of projectiles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectilePool {
    projectiles: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    /// Advance every projectile and drop the spent ones in a single pass
    ///
    /// Each projectile is moved, then tested against the enemies (when a
    /// resolver is given). A hit consumes the projectile; otherwise it is
    /// kept unless it has left the world or expired. Returns how many
    /// projectiles hit something.
    pub fn update(&mut self, dt: f32, mut resolver: Option<&mut CollisionResolver<'_>>) -> usize {
        let mut hits = 0;
        self.projectiles.retain_mut(|proj| {
            proj.advance(dt);

            let hit = resolver
                .as_deref_mut()
                .is_some_and(|r| r.check_projectile_collisions(proj.pos, PROJECTILE_RADIUS));
            if hit {
                hits += 1;
                return false;
            }
            !proj.is_expired()
        });
        hits
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn as_slice(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::EnemyPool;
    use crate::sim::entity::Enemy;
    use glam::Vec2;

    #[test]
    fn test_moves_and_ages() {
        let mut pool = ProjectilePool::new();
        pool.push(Projectile::new(Vec2::ZERO, Vec2::new(1.5, 0.0)));
        pool.update(0.1, None);

        let proj = &pool.as_slice()[0];
        assert!((proj.pos.x - 0.15).abs() < 1e-6);
        assert!((proj.life - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_removes_old_projectile() {
        let mut pool = ProjectilePool::new();
        let mut old = Projectile::new(Vec2::ZERO, Vec2::ZERO);
        old.life = 5.01;
        pool.push(old);
        pool.update(0.0, None);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_removes_out_of_bounds() {
        let mut pool = ProjectilePool::new();
        pool.push(Projectile::new(Vec2::new(5.1, 0.0), Vec2::ZERO));
        pool.push(Projectile::new(Vec2::new(0.0, -5.1), Vec2::ZERO));
        pool.push(Projectile::new(Vec2::new(1.0, 1.0), Vec2::ZERO));
        pool.update(0.0, None);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.as_slice()[0].pos, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_hit_consumes_projectile() {
        let mut enemies = EnemyPool::new();
        enemies.push(Enemy::new(Vec2::new(1.0, 1.0), Vec2::ZERO));

        let mut pool = ProjectilePool::new();
        pool.push(Projectile::new(Vec2::new(-1.0, -1.0), Vec2::ZERO));
        pool.push(Projectile::new(Vec2::new(1.0, 1.0), Vec2::ZERO));
        pool.push(Projectile::new(Vec2::new(2.0, 2.0), Vec2::ZERO));

        let mut resolver = CollisionResolver::new(&mut enemies);
        assert_eq!(pool.update(0.016, Some(&mut resolver)), 1);
        assert_eq!(resolver.reports().len(), 1);

        let xs: Vec<f32> = pool.iter().map(|p| p.pos.x).collect();
        assert_eq!(xs, vec![-1.0, 2.0]);
        assert_eq!(enemies.as_slice()[0].hit_points, 2);
    }

    #[test]
    fn test_stacked_projectiles_each_hit_once() {
        let mut enemies = EnemyPool::new();
        enemies.push(Enemy::new(Vec2::ZERO, Vec2::ZERO));

        let mut pool = ProjectilePool::new();
        for _ in 0..4 {
            pool.push(Projectile::new(Vec2::ZERO, Vec2::ZERO));
        }

        let mut resolver = CollisionResolver::new(&mut enemies);
        // Three shots kill the enemy; the fourth finds nothing alive
        assert_eq!(pool.update(0.0, Some(&mut resolver)), 3);
        assert_eq!(pool.len(), 1);
        assert!(!enemies.as_slice()[0].is_alive());
    }
}
