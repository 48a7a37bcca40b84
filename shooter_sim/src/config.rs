//! Path: shooter_sim/src/config.rs
//! Summary: シミュレーション設定（構築時に渡すプレーンな設定構造体）

use shooter_core::constants::*;

/// シミュレーション設定。ホストが構築時に渡す。環境変数や CLI は読まない。
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    pub field_width:  f32,
    pub field_height: f32,

    pub player_speed:          f32,
    pub player_shoot_cooldown: f32,
    pub player_bullet_speed:   f32,
    pub player_start_lives:    u32,

    pub enemy_bullet_speed: f32,
    pub max_enemy_bullets:  usize,
    pub player_bullet_cap:  usize,
    pub powerup_cap:        usize,
    pub particle_cap:       usize,

    pub invulnerable_duration:    f32,
    pub post_hit_shield_duration: f32,
    pub respawn_delay:            f32,
    pub transition_duration:      f32,

    pub cell_size: f32,
    pub rng_seed:  u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width:  FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_speed:          PLAYER_SPEED,
            player_shoot_cooldown: PLAYER_SHOOT_COOLDOWN,
            player_bullet_speed:   PLAYER_BULLET_SPEED,
            player_start_lives:    PLAYER_START_LIVES,

            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            max_enemy_bullets:  MAX_ENEMY_BULLETS,
            player_bullet_cap:  PLAYER_BULLET_CAP,
            powerup_cap:        POWERUP_CAP,
            particle_cap:       PARTICLE_CAP,

            invulnerable_duration:    INVULNERABLE_DURATION,
            post_hit_shield_duration: POST_HIT_SHIELD_DURATION,
            respawn_delay:            RESPAWN_DELAY,
            transition_duration:      TRANSITION_DURATION,

            cell_size: CELL_SIZE,
            rng_seed:  WORLD_RNG_SEED,
        }
    }
}
