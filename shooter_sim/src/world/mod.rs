//! Path: shooter_sim/src/world/mod.rs
//! Summary: ワールド型（PlayerState, EnemyWorld, BulletWorld, PowerUpWorld, ParticleWorld, GameWorld）

mod bullet;
mod enemy;
mod frame_event;
mod game_loop_control;
mod game_world;
mod particle;
mod player;
mod powerup;

pub use bullet::{
    BulletWorld, OWNER_ENEMY, OWNER_PLAYER, VARIANT_HOMING, VARIANT_SPREAD, VARIANT_STRAIGHT,
    VARIANT_ZIGZAG,
};
pub use enemy::{
    EnemySpawn, EnemyWorld, FormationGrid, FormationSlot, NO_SLOT, STATE_ATTACKING,
    STATE_ENTERING, STATE_FORMATION,
};
pub use frame_event::FrameEvent;
pub use game_loop_control::GameLoopControl;
pub use game_world::{GameWorld, GameWorldInner};
pub use particle::ParticleWorld;
pub use player::{PlayerState, POWER_NONE};
pub use powerup::PowerUpWorld;
