//! Path: shooter_sim/src/lib.rs
//! Summary: モジュール宣言と pub use のみ

pub mod collab;
pub mod config;
pub mod game_logic;
pub mod snapshot;
pub mod world;

pub use collab::{dispatch_audio, AudioSink, InputSource, InputState, NullCollaborators, ScoreStore};
pub use config::SimConfig;
pub use game_logic::physics_step;
pub use snapshot::{build_render_frame, get_save_snapshot, load_save_snapshot, RenderFrame, SaveSnapshot};
pub use world::{
    BulletWorld, EnemyWorld, FormationGrid, FrameEvent, GameLoopControl, GameWorld, GameWorldInner,
    ParticleWorld, PlayerState, PowerUpWorld,
    OWNER_ENEMY, OWNER_PLAYER, VARIANT_HOMING, VARIANT_SPREAD, VARIANT_STRAIGHT, VARIANT_ZIGZAG,
};
