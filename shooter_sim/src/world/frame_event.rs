//! Path: shooter_sim/src/world/frame_event.rs
//! Summary: フレーム内で発生したゲームイベント（ホストが毎フレーム drain する）

/// フレーム内で発生したゲームイベント。音・ポップアップ・スコア送信などの
/// 副作用はコアでは行わず、このイベントを通じてコラボレータへ要求する。
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    EnemyKilled { kind: u8, points: u32, x: f32, y: f32 },
    EnemyHit { kind: u8 },
    BulletClash { x: f32, y: f32 },
    PlayerDamaged { lives_left: u32 },
    ShieldBlocked,
    PlayerRespawned,
    PowerUpCollected { kind: u8 },
    PowerUpExpired { kind: u8 },
    BombDetonated { destroyed: u32 },
    WaveStarted { level: u32 },
    LevelCleared { level: u32 },
    GameOver { score: u32 },
}
