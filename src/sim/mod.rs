//! Entity simulation module
//!
//! All gameplay logic lives here:
//! - Single-threaded, one step per rendered frame
//! - Every random draw goes through an injectable [`RandomSource`]
//! - Pools keep insertion order; removals never reorder survivors
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod entity;
pub mod fire;
pub mod player;
pub mod projectile;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod view;

pub use collision::{CollisionResolver, HitReport};
pub use enemy::EnemyPool;
pub use entity::{DamageOutcome, Enemy, Projectile, wrap_coord, wrap_position};
pub use fire::{FireController, add_projectile};
pub use player::Player;
pub use projectile::ProjectilePool;
pub use rng::{RandomSource, SimRng};
pub use spawn::SpawnController;
pub use state::{GameState, SimEvent};
pub use tick::{TickInput, tick};
pub use view::{EnemyView, PlayerView, ProjectileView, animation_frame};
