//! Path: shooter_sim/src/world/game_world.rs
//! Summary: ゲームワールド（GameWorldInner, GameWorld）

use super::{
    BulletWorld, EnemyWorld, FormationGrid, FrameEvent, ParticleWorld, PlayerState, PowerUpWorld,
};
use crate::config::SimConfig;
use crate::game_logic::systems::leveling::LevelState;
use shooter_core::constants::PARTICLE_RNG_SEED;
use shooter_core::physics::rng::SimpleRng;
use shooter_core::physics::spatial_hash::SpatialHash;
use std::sync::RwLock;

/// ゲームワールド内部状態。シミュレーションの可変状態はここに集約し、
/// 物理ステップだけが書き込む。
pub struct GameWorldInner {
    pub frame_id:  u32,
    pub config:    SimConfig,
    pub player:    PlayerState,
    pub enemies:   EnemyWorld,
    pub formation: FormationGrid,
    pub bullets:   BulletWorld,
    pub powerups:  PowerUpWorld,
    pub particles: ParticleWorld,
    pub level:     LevelState,
    pub rng:       SimpleRng,

    /// 弾丸用の粗い一様グリッド（毎フレーム再構築）
    pub bullet_grid: SpatialHash,
    /// 近隣クエリ結果の再利用バッファ（毎フレームのヒープアロケーションを回避）
    pub query_buf:   Vec<usize>,

    pub score: u32,
    pub kill_count: u32,
    /// ドロップなしが続いた撃破数（確定ドロップ用）
    pub kills_since_drop: u32,
    /// ゲーム開始からの経過時間（秒）
    pub elapsed_seconds: f32,
    pub game_over: bool,

    /// このフレームで発生したイベント（毎フレーム drain される）
    pub frame_events: Vec<FrameEvent>,
    /// スコアポップアップ [(x, y, value, lifetime)]
    pub score_popups: Vec<(f32, f32, u32, f32)>,

    /// 直近フレームの物理ステップ処理時間（ミリ秒）
    pub last_frame_time_ms: f64,
}

impl GameWorldInner {
    pub fn new(config: SimConfig) -> Self {
        Self {
            frame_id:  0,
            player:    PlayerState::new(&config),
            enemies:   EnemyWorld::new(),
            formation: FormationGrid::empty(),
            bullets:   BulletWorld::new(config.player_bullet_cap, config.max_enemy_bullets),
            powerups:  PowerUpWorld::new(config.powerup_cap),
            particles: ParticleWorld::new(PARTICLE_RNG_SEED, config.particle_cap),
            level:     LevelState::new(),
            rng:       SimpleRng::new(config.rng_seed),
            bullet_grid: SpatialHash::new(config.cell_size),
            query_buf:   Vec::new(),
            score: 0,
            kill_count: 0,
            kills_since_drop: 0,
            elapsed_seconds: 0.0,
            game_over: false,
            frame_events: Vec::new(),
            score_popups: Vec::new(),
            last_frame_time_ms: 0.0,
            config,
        }
    }

    /// ゲームオーバー後の再スタート。設定と RNG シードは引き継ぐ。
    pub fn reset(&mut self) {
        let config = self.config;
        *self = Self::new(config);
    }

    /// スコア加算（単調増加のみ）とポップアップ登録
    pub fn award_points(&mut self, points: u32, x: f32, y: f32) {
        self.score += points;
        self.score_popups.push((x, y - 20.0, points, 0.8));
    }

    /// このフレームのイベントを取り出す
    pub fn drain_frame_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.frame_events)
    }

    /// ホストから渡された生のレベル値でウェーブを仕切り直す。
    /// 不正値は丸められ、次の tick で新しいウェーブが開始される。
    pub fn set_level(&mut self, raw: f64) {
        self.level = LevelState::new();
        self.level.current_level = crate::game_logic::systems::leveling::sanitize_level(raw);
        self.enemies.clear();
        self.formation = FormationGrid::empty();
    }

    /// 座標がプレイフィールド外（マージン込み）か
    pub fn offscreen(&self, x: f32, y: f32, margin: f32) -> bool {
        x < -margin
            || x > self.config.field_width + margin
            || y < -margin
            || y > self.config.field_height + margin
    }
}

/// ゲームワールド（RwLock で保護された内部状態）。
/// 描画スレッドは read、物理ステップは write を取る。
pub struct GameWorld(pub RwLock<GameWorldInner>);

impl GameWorld {
    pub fn new(config: SimConfig) -> Self {
        Self(RwLock::new(GameWorldInner::new(config)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_is_clean() {
        let w = GameWorldInner::new(SimConfig::default());
        assert_eq!(w.score, 0);
        assert_eq!(w.level.current_level, 1);
        assert!(!w.game_over);
        assert_eq!(w.enemies.count, 0);
    }

    #[test]
    fn award_points_is_monotonic() {
        let mut w = GameWorldInner::new(SimConfig::default());
        let mut prev = 0;
        for p in [100, 10, 250] {
            w.award_points(p, 10.0, 10.0);
            assert!(w.score > prev);
            prev = w.score;
        }
        assert_eq!(w.score, 360);
        assert_eq!(w.score_popups.len(), 3);
    }

    #[test]
    fn drain_empties_event_queue() {
        let mut w = GameWorldInner::new(SimConfig::default());
        w.frame_events.push(FrameEvent::WaveStarted { level: 1 });
        let events = w.drain_frame_events();
        assert_eq!(events.len(), 1);
        assert!(w.frame_events.is_empty());
    }

    #[test]
    fn reset_preserves_config() {
        let mut config = SimConfig::default();
        config.rng_seed = 777;
        let mut w = GameWorldInner::new(config);
        w.score = 500;
        w.game_over = true;
        w.reset();
        assert_eq!(w.score, 0);
        assert!(!w.game_over);
        assert_eq!(w.config.rng_seed, 777);
    }

    #[test]
    fn set_level_sanitizes_and_restarts_wave_state() {
        let mut w = GameWorldInner::new(SimConfig::default());
        w.set_level(7.0);
        assert_eq!(w.level.current_level, 7);
        assert_eq!(w.level.total_this_level, 0);
        w.set_level(f64::NAN);
        assert_eq!(w.level.current_level, 1);
        w.set_level(-2.0);
        assert_eq!(w.level.current_level, 1);
    }

    #[test]
    fn offscreen_respects_margin() {
        let w = GameWorldInner::new(SimConfig::default());
        assert!(!w.offscreen(300.0, -50.0, 100.0));
        assert!(w.offscreen(300.0, -150.0, 100.0));
        assert!(w.offscreen(750.0, 400.0, 100.0));
    }
}
