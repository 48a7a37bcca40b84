//! Path: shooter_core/src/entity_params.rs
//! Summary: 敵・パワーアップの ID ベースパラメータテーブル
//!
//! enum を増やさずに u8 ID でパラメータを参照するテーブルを提供する。
//! 見た目のバリアント（render_kind）とロジックを分離し、描画側は
//! render_kind のルックアップのみで描画する。

/// 敵のパラメータ（ID で参照）
#[derive(Clone, Copy, Debug)]
pub struct EnemyParams {
    pub max_hp:        i32,
    pub points:        u32,
    pub radius:        f32,
    /// 隊列中の発射確率（基準 FPS の 1 フレームあたり）
    pub fire_chance:   f32,
    /// このレベル以降に出現する
    pub unlock_level:  u32,
    pub render_kind:   u8,
    /// パーティクル色 [r, g, b, a]
    pub particle_color: [f32; 4],
}

/// 敵 ID: 0=Drone, 1=Raider, 2=Sentinel, 3=Overseer（ボス格）
pub const ENEMY_ID_DRONE:    u8 = 0;
pub const ENEMY_ID_RAIDER:   u8 = 1;
pub const ENEMY_ID_SENTINEL: u8 = 2;
pub const ENEMY_ID_OVERSEER: u8 = 3;

static ENEMY_TABLE: [EnemyParams; 4] = [
    EnemyParams { max_hp: 1, points: 100,  radius: 15.0, fire_chance: 0.0010, unlock_level: 1, render_kind: 1, particle_color: [0.3, 0.9, 0.4, 1.0] }, // Drone
    EnemyParams { max_hp: 2, points: 250,  radius: 15.0, fire_chance: 0.0016, unlock_level: 2, render_kind: 2, particle_color: [0.9, 0.4, 0.9, 1.0] }, // Raider
    EnemyParams { max_hp: 3, points: 400,  radius: 18.0, fire_chance: 0.0022, unlock_level: 4, render_kind: 3, particle_color: [0.9, 0.7, 0.2, 1.0] }, // Sentinel
    EnemyParams { max_hp: 8, points: 1000, radius: 24.0, fire_chance: 0.0030, unlock_level: 6, render_kind: 4, particle_color: [1.0, 0.2, 0.2, 1.0] }, // Overseer
];

impl EnemyParams {
    /// 不正 ID は Drone にフォールバックする（フレームを落とさない）
    pub fn get(id: u8) -> &'static EnemyParams {
        ENEMY_TABLE
            .get(id as usize)
            .unwrap_or(&ENEMY_TABLE[ENEMY_ID_DRONE as usize])
    }

    pub fn table_len() -> usize {
        ENEMY_TABLE.len()
    }
}

// ─── 行動タグ ───────────────────────────────────────────────

/// レベルで解禁される行動タグ（攻撃パターン選択と発射レートの補正）
pub const BEHAVIOR_NONE:       u8 = 0;
pub const BEHAVIOR_AGGRESSIVE: u8 = 1;
pub const BEHAVIOR_STRAFE:     u8 = 2;
pub const BEHAVIOR_DIVE:       u8 = 3;
pub const BEHAVIOR_EVADE:      u8 = 4;
pub const BEHAVIOR_TELEPORT:   u8 = 5;

/// 行動タグの解禁レベル（インデックス = タグ ID）
pub const BEHAVIOR_UNLOCK_LEVELS: [u32; 6] = [1, 3, 4, 5, 6, 8];

/// 発射確率に掛かる行動タグ補正
pub fn behavior_fire_multiplier(tag: u8) -> f32 {
    match tag {
        BEHAVIOR_AGGRESSIVE => 2.0,
        BEHAVIOR_DIVE => 1.3,
        _ => 1.0,
    }
}

// ─── PowerUpParams ──────────────────────────────────────────

/// パワーアップのパラメータ（ID で参照）
#[derive(Clone, Copy, Debug)]
pub struct PowerUpParams {
    /// 効果持続時間（秒）。0 なら即時効果
    pub duration:    f32,
    /// シールドのチャージ数（シールド以外は 0）
    pub charges:     u32,
    /// ドロップ抽選の重み
    pub drop_weight: u32,
    pub render_kind: u8,
    pub name:        &'static str,
}

pub const POWERUP_ID_RAPID_FIRE:  u8 = 0;
pub const POWERUP_ID_SHIELD:      u8 = 1;
pub const POWERUP_ID_EXTRA_LIFE:  u8 = 2;
pub const POWERUP_ID_DOUBLE_SHOT: u8 = 3;
pub const POWERUP_ID_MULTI_SHOT:  u8 = 4;
pub const POWERUP_ID_SPEED_BOOST: u8 = 5;
pub const POWERUP_ID_BOMB:        u8 = 6;

static POWERUP_TABLE: [PowerUpParams; 7] = [
    PowerUpParams { duration: 9.0,  charges: 0, drop_weight: 20, render_kind: 10, name: "rapid_fire" },
    PowerUpParams { duration: 12.0, charges: 3, drop_weight: 16, render_kind: 11, name: "shield" },
    PowerUpParams { duration: 0.0,  charges: 0, drop_weight: 6,  render_kind: 12, name: "extra_life" },
    PowerUpParams { duration: 8.0,  charges: 0, drop_weight: 18, render_kind: 13, name: "double_shot" },
    PowerUpParams { duration: 8.0,  charges: 0, drop_weight: 12, render_kind: 14, name: "multi_shot" },
    PowerUpParams { duration: 8.0,  charges: 0, drop_weight: 18, render_kind: 15, name: "speed_boost" },
    PowerUpParams { duration: 0.0,  charges: 0, drop_weight: 10, render_kind: 16, name: "bomb" },
];

impl PowerUpParams {
    /// 不正 ID は rapid_fire にフォールバックする
    pub fn get(id: u8) -> &'static PowerUpParams {
        POWERUP_TABLE
            .get(id as usize)
            .unwrap_or(&POWERUP_TABLE[POWERUP_ID_RAPID_FIRE as usize])
    }

    pub fn table_len() -> usize {
        POWERUP_TABLE.len()
    }

    pub fn total_drop_weight() -> u32 {
        POWERUP_TABLE.iter().map(|p| p.drop_weight).sum()
    }

    /// 重み付き抽選で ID を選ぶ（`roll` は `total_drop_weight()` 未満）
    pub fn pick_by_weight(mut roll: u32) -> u8 {
        for (i, p) in POWERUP_TABLE.iter().enumerate() {
            if roll < p.drop_weight {
                return i as u8;
            }
            roll -= p.drop_weight;
        }
        POWERUP_ID_RAPID_FIRE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_params_lookup() {
        assert_eq!(EnemyParams::get(ENEMY_ID_DRONE).max_hp, 1);
        assert_eq!(EnemyParams::get(ENEMY_ID_RAIDER).points, 250);
        assert_eq!(EnemyParams::get(ENEMY_ID_OVERSEER).unlock_level, 6);
    }

    #[test]
    fn invalid_enemy_id_falls_back_to_drone() {
        assert_eq!(EnemyParams::get(200).points, 100);
    }

    #[test]
    fn powerup_weights_cover_all_ids() {
        let total = PowerUpParams::total_drop_weight();
        let mut seen = [false; 7];
        for roll in 0..total {
            seen[PowerUpParams::pick_by_weight(roll) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn shield_has_charges() {
        let p = PowerUpParams::get(POWERUP_ID_SHIELD);
        assert_eq!(p.charges, 3);
        assert!(p.duration > 0.0);
    }

    #[test]
    fn behavior_multiplier_default_is_one() {
        assert!((behavior_fire_multiplier(BEHAVIOR_NONE) - 1.0).abs() < 1e-6);
        assert!(behavior_fire_multiplier(BEHAVIOR_AGGRESSIVE) > 1.0);
    }
}
