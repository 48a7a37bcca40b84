//! Path: shooter_sim/src/world/player.rs
//! Summary: プレイヤー状態（座標・残機・パワーアップ・各種タイマー）

use crate::config::SimConfig;
use shooter_core::constants::PLAYER_RADIUS;
use shooter_core::entity_params::{
    POWERUP_ID_DOUBLE_SHOT, POWERUP_ID_MULTI_SHOT, POWERUP_ID_RAPID_FIRE, POWERUP_ID_SPEED_BOOST,
};

/// active_power が空のときの値
pub const POWER_NONE: u8 = u8::MAX;

/// プレイヤー状態
pub struct PlayerState {
    pub x:       f32,
    pub y:       f32,
    pub radius:  f32,
    pub lives:   u32,

    /// 被弾後の無敵時間（秒）
    pub invulnerable_timer: f32,
    /// 被弾後に表示される一時シールドの残り時間（無敵より長い二次ウィンドウ）
    pub post_hit_shield_timer: f32,
    /// 撃破からリスポーンまでの待機時間。0 より大きい間は不在扱い
    pub respawn_timer: f32,

    /// 有効な時限パワーアップ（POWERUP_ID_*、なければ POWER_NONE）
    pub active_power: u8,
    pub power_timer:  f32,

    /// シールドは active_power とは独立に持つ（チャージ制 + 時限）
    pub shield_charges: u32,
    pub shield_timer:   f32,

    pub shoot_cooldown: f32,
}

impl PlayerState {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            x: config.field_width / 2.0,
            y: config.field_height - 60.0,
            radius: PLAYER_RADIUS,
            lives: config.player_start_lives,
            invulnerable_timer: 0.0,
            post_hit_shield_timer: 0.0,
            respawn_timer: 0.0,
            active_power: POWER_NONE,
            power_timer: 0.0,
            shield_charges: 0,
            shield_timer: 0.0,
            shoot_cooldown: 0.0,
        }
    }

    /// セッション開始・リスポーン共通のリセット。残機は触らない。
    pub fn respawn(&mut self, config: &SimConfig) {
        self.x = config.field_width / 2.0;
        self.y = config.field_height - 60.0;
        self.invulnerable_timer = config.invulnerable_duration;
        self.post_hit_shield_timer = config.post_hit_shield_duration;
        self.respawn_timer = 0.0;
        self.active_power = POWER_NONE;
        self.power_timer = 0.0;
        self.shield_charges = 0;
        self.shield_timer = 0.0;
        self.shoot_cooldown = 0.0;
    }

    pub fn alive(&self) -> bool {
        self.lives > 0 && self.respawn_timer <= 0.0
    }

    pub fn invulnerable(&self) -> bool {
        self.invulnerable_timer > 0.0
    }

    /// チャージ制シールドか被弾後の一時シールドが有効か
    pub fn shield_active(&self) -> bool {
        (self.shield_charges > 0 && self.shield_timer > 0.0) || self.post_hit_shield_timer > 0.0
    }

    pub fn speed_multiplier(&self) -> f32 {
        if self.active_power == POWERUP_ID_SPEED_BOOST {
            1.5
        } else {
            1.0
        }
    }

    pub fn effective_cooldown(&self, base: f32) -> f32 {
        if self.active_power == POWERUP_ID_RAPID_FIRE {
            base * 0.4
        } else {
            base
        }
    }

    /// 1 回の発射で撃つ弾数（扇状に展開）
    pub fn shots_per_fire(&self) -> usize {
        match self.active_power {
            p if p == POWERUP_ID_DOUBLE_SHOT => 2,
            p if p == POWERUP_ID_MULTI_SHOT => 3,
            _ => 1,
        }
    }

    pub fn tick_timers(&mut self, dt: f32) {
        if self.invulnerable_timer > 0.0 {
            self.invulnerable_timer = (self.invulnerable_timer - dt).max(0.0);
        }
        if self.post_hit_shield_timer > 0.0 {
            self.post_hit_shield_timer = (self.post_hit_shield_timer - dt).max(0.0);
        }
        if self.shoot_cooldown > 0.0 {
            self.shoot_cooldown = (self.shoot_cooldown - dt).max(0.0);
        }
        if self.shield_timer > 0.0 {
            self.shield_timer = (self.shield_timer - dt).max(0.0);
            if self.shield_timer <= 0.0 {
                self.shield_charges = 0;
            }
        }
    }
}
