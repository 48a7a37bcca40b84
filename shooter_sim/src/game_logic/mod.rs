//! Path: shooter_sim/src/game_logic/mod.rs
//! Summary: ゲームロジック層（物理ステップと各システム）

pub mod physics_step;
pub mod systems;

pub use physics_step::physics_step;
