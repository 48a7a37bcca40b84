//! Path: shooter_core/src/constants.rs
//! Summary: プレイフィールド・半径・速度・タイマーなどの定数定義

// Playfield (fixed shooter: tall portrait field)
pub const FIELD_WIDTH:  f32 = 600.0;
pub const FIELD_HEIGHT: f32 = 800.0;

/// 画面外判定のマージン（このラインを越えたエンティティは除去対象）
pub const OFFSCREEN_MARGIN: f32 = 100.0;

// Collision radii
pub const PLAYER_RADIUS: f32 = 15.0;
pub const BULLET_RADIUS: f32 = 5.0;
pub const POWERUP_RADIUS: f32 = 12.0;

// Player movement / combat
pub const PLAYER_SPEED:        f32 = 300.0;
pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.35;
pub const PLAYER_BULLET_SPEED: f32 = 480.0;
pub const PLAYER_BULLET_DAMAGE: i32 = 1;
pub const PLAYER_START_LIVES:  u32 = 3;
/// 被弾後の無敵時間（秒）
pub const INVULNERABLE_DURATION: f32 = 2.0;
/// 被弾後の一時シールド表示時間（無敵より長い二次ウィンドウ）
pub const POST_HIT_SHIELD_DURATION: f32 = 3.0;
/// 撃破後のリスポーン待機時間（秒）
pub const RESPAWN_DELAY: f32 = 1.5;

// Enemy combat
pub const ENEMY_BULLET_SPEED: f32 = 220.0;
/// 同時に存在できる敵弾の上限（メモリと衝突コストを抑える）
pub const MAX_ENEMY_BULLETS: usize = 40;
/// 隊列ホバリングの振幅（px）
pub const HOVER_AMPLITUDE: f32 = 3.0;
pub const HOVER_FREQUENCY: f32 = 2.0;
/// 攻撃降下後、隊列スロットへ戻る補間時間（秒）
pub const RETURN_DURATION: f32 = 1.2;

// Pools
pub const PLAYER_BULLET_CAP: usize = 50;
pub const POWERUP_CAP:       usize = 16;
pub const PARTICLE_CAP:      usize = 256;

// Spatial hash cell size（最大エンティティ半径 × 定数のオーダー）
pub const CELL_SIZE: f32 = 100.0;

// Level / wave
/// レベルクリア演出の長さ（秒）
pub const TRANSITION_DURATION: f32 = 2.5;
/// 中盤補充スポーンの最短間隔（秒）
pub const BACKFILL_INTERVAL: f32 = 0.8;
/// アクティブ数がこの値を下回ったら補充を検討する
pub const BACKFILL_THRESHOLD: usize = 6;
/// 一度の補充で湧く最大数
pub const BACKFILL_BATCH: usize = 4;

// Scoring
/// 弾同士の相殺ボーナス
pub const BULLET_CLASH_BONUS: u32 = 10;
/// パワーアップ取得ボーナス
pub const POWERUP_PICKUP_BONUS: u32 = 50;

// Power-up drops
/// 撃破時のドロップ確率（%）
pub const POWERUP_DROP_PERCENT: u32 = 12;
/// ドロップなしがこの撃破数続いたら確定ドロップ
pub const GUARANTEED_DROP_KILLS: u32 = 8;

/// 確率・発射レートの換算基準 FPS（元の 1 フレームあたり確率を秒あたりへ換算）
pub const REFERENCE_FPS: f32 = 60.0;

/// シミュレーションジャンプを防ぐ dt の上限（秒）
pub const MAX_TICK_DT: f32 = 1.0 / 15.0;

/// Frame budget (perf warning threshold)
pub const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

/// パーティクル用 RNG シード（ワールド生成時に使用）
pub const PARTICLE_RNG_SEED: u64 = 67890;
/// シミュレーション既定シード
pub const WORLD_RNG_SEED: u64 = 12345;
