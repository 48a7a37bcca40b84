//! Path: shooter_core/src/physics/mod.rs
//! Summary: 物理モジュールの再エクスポート（RNG・空間ハッシュ・重なり判定・曲線）

pub mod curve;
pub mod overlap;
pub mod rng;
pub mod spatial_hash;
