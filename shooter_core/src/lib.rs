//! Path: shooter_core/src/lib.rs
//! Summary: ゲームコア共通ロジック（定数・敵/パワーアップテーブル・経路・物理プリミティブ）

pub mod constants;
pub mod entity_params;
pub mod paths;
pub mod physics;
pub mod util;
