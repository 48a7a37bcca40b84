//! Path: shooter_sim/src/game_logic/systems/mod.rs
//! Summary: 各システムモジュールの宣言

pub mod collision;
pub mod effects;
pub mod enemy_ai;
pub mod formation;
pub mod leveling;
pub mod powerups;
pub mod projectiles;
