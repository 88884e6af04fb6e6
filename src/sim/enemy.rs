//! Enemy pool
//!
//! Owns every live enemy. Motion, wrap and aging happen in [`EnemyPool::update`];
//! dead enemies stay in place until [`EnemyPool::reap`] compacts the pool.

use serde::{Deserialize, Serialize};

use super::entity::Enemy;

/// Ordered collection of enemies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyPool {
    enemies: Vec<Enemy>,
}

impl EnemyPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Move, age and wrap every alive enemy, then drop the dead ones
    pub fn update(&mut self, dt: f32) {
        for enemy in self.enemies.iter_mut().filter(|e| e.is_alive()) {
            enemy.advance(dt);
        }
        self.reap();
    }

    /// Remove dead enemies, keeping survivors in order
    pub fn reap(&mut self) -> usize {
        let before = self.enemies.len();
        self.enemies.retain(Enemy::is_alive);
        before - self.enemies.len()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Enemy> {
        self.enemies.iter_mut()
    }

    pub fn as_slice(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn enemy_at(x: f32, y: f32) -> Enemy {
        Enemy::new(Vec2::new(x, y), Vec2::ZERO)
    }

    #[test]
    fn test_update_wraps_into_world() {
        let mut pool = EnemyPool::new();
        pool.push(enemy_at(5.01, 0.0));
        pool.push(enemy_at(0.0, -5.01));
        pool.update(0.0);

        let positions: Vec<Vec2> = pool.iter().map(|e| e.pos).collect();
        assert_eq!(positions, vec![Vec2::new(-5.0, 0.0), Vec2::new(0.0, 5.0)]);
    }

    #[test]
    fn test_update_integrates_motion() {
        let mut pool = EnemyPool::new();
        pool.push(Enemy::new(Vec2::new(1.0, 1.0), Vec2::new(0.2, -0.1)));
        pool.update(0.5);

        let enemy = &pool.as_slice()[0];
        assert!((enemy.pos - Vec2::new(1.1, 0.95)).length() < 1e-6);
        assert!((enemy.life - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_reap_preserves_order() {
        let mut pool = EnemyPool::new();
        for i in 0..5 {
            pool.push(enemy_at(i as f32, 0.0));
        }
        for (i, enemy) in pool.iter_mut().enumerate() {
            if i % 2 == 1 {
                enemy.take_damage(3);
            }
        }
        assert_eq!(pool.alive_count(), 3);
        assert_eq!(pool.len(), 5);

        assert_eq!(pool.reap(), 2);
        let xs: Vec<f32> = pool.iter().map(|e| e.pos.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_update_reaps_dead() {
        let mut pool = EnemyPool::new();
        pool.push(enemy_at(0.0, 0.0));
        pool.push(enemy_at(1.0, 1.0));
        if let Some(first) = pool.iter_mut().next() {
            first.take_damage(3);
        }
        pool.update(0.016);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.as_slice()[0].pos, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_clear() {
        let mut pool = EnemyPool::new();
        pool.push(enemy_at(0.0, 0.0));
        pool.clear();
        assert!(pool.is_empty());
    }
}
