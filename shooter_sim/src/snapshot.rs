//! Path: shooter_sim/src/snapshot.rs
//! Summary: セーブ用スナップショットと描画用スナップショットの構築
//!
//! 描画側で world.read() を保持する時間を最小化するため、必要な
//! データを RenderFrame にコピーしてからロックを解放する前提の設計。

use crate::world::{GameWorldInner, OWNER_PLAYER, VARIANT_HOMING, VARIANT_ZIGZAG};
use serde::{Deserialize, Serialize};
use shooter_core::entity_params::{EnemyParams, PowerUpParams};

/// ゲーム進行のスナップショット（セーブ/ロード用）。
/// 実体（敵・弾・パーティクル）は保存せず、ロード時はウェーブを
/// 仕切り直す。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSnapshot {
    pub level:           u32,
    pub score:           u32,
    pub lives:           u32,
    pub kill_count:      u32,
    pub elapsed_seconds: f32,
    pub active_power:    u8,
    pub power_timer:     f32,
    pub shield_charges:  u32,
    pub shield_timer:    f32,
}

/// 現在の進行状態をスナップショットに写し取る
pub fn get_save_snapshot(w: &GameWorldInner) -> SaveSnapshot {
    SaveSnapshot {
        level:           w.level.current_level,
        score:           w.score,
        lives:           w.player.lives,
        kill_count:      w.kill_count,
        elapsed_seconds: w.elapsed_seconds,
        active_power:    w.player.active_power,
        power_timer:     w.player.power_timer,
        shield_charges:  w.player.shield_charges,
        shield_timer:    w.player.shield_timer,
    }
}

/// スナップショットを復元する。実体はクリアされ、次の tick で
/// 保存時のレベルのウェーブが開始される。
pub fn load_save_snapshot(w: &mut GameWorldInner, snapshot: &SaveSnapshot) {
    let config = w.config;
    w.reset();

    w.level.current_level = snapshot.level.max(1);
    w.score = snapshot.score;
    w.kill_count = snapshot.kill_count;
    w.elapsed_seconds = snapshot.elapsed_seconds;

    w.player.lives = snapshot.lives.max(1);
    w.player.active_power = snapshot.active_power;
    w.player.power_timer = snapshot.power_timer;
    w.player.shield_charges = snapshot.shield_charges;
    w.player.shield_timer = snapshot.shield_timer;
    w.player.invulnerable_timer = config.invulnerable_duration;
}

/// 描画用スナップショット。(x, y, render_kind, anim_frame) のタプル列。
#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
    pub sprites:   Vec<(f32, f32, u8, u8)>,
    /// (x, y, r, g, b, alpha, size)
    pub particles: Vec<(f32, f32, f32, f32, f32, f32, f32)>,
    /// (x, y, points, 残り寿命)
    pub popups:    Vec<(f32, f32, u32, f32)>,
    pub score:     u32,
    pub lives:     u32,
    pub level:     u32,
    pub shield_charges: u32,
    pub player_invulnerable: bool,
    pub is_transitioning: bool,
    pub game_over: bool,
}

fn bullet_render_kind(owner: u8, variant: u8) -> u8 {
    if owner == OWNER_PLAYER {
        5
    } else {
        match variant {
            VARIANT_ZIGZAG => 7,
            VARIANT_HOMING => 8,
            _ => 6,
        }
    }
}

/// GameWorldInner から RenderFrame を構築する
pub fn build_render_frame(w: &GameWorldInner) -> RenderFrame {
    let anim_frame = ((w.frame_id / 8) % 2) as u8;
    let mut sprites = Vec::with_capacity(
        1 + w.enemies.count + w.bullets.count + w.powerups.count,
    );

    if w.player.alive() {
        sprites.push((w.player.x, w.player.y, 0, anim_frame));
    }

    for i in 0..w.enemies.len() {
        if w.enemies.alive[i] {
            sprites.push((
                w.enemies.positions_x[i],
                w.enemies.positions_y[i],
                EnemyParams::get(w.enemies.kind_ids[i]).render_kind,
                anim_frame,
            ));
        }
    }

    for i in 0..w.bullets.len() {
        if w.bullets.alive[i] {
            sprites.push((
                w.bullets.positions_x[i],
                w.bullets.positions_y[i],
                bullet_render_kind(w.bullets.owner[i], w.bullets.variant[i]),
                0,
            ));
        }
    }

    for i in 0..w.powerups.len() {
        if w.powerups.alive[i] {
            sprites.push((
                w.powerups.positions_x[i],
                w.powerups.positions_y[i],
                PowerUpParams::get(w.powerups.kinds[i]).render_kind,
                anim_frame,
            ));
        }
    }

    let mut particles = Vec::with_capacity(w.particles.count);
    for i in 0..w.particles.len() {
        if !w.particles.alive[i] {
            continue;
        }
        let alpha = (w.particles.lifetime[i] / w.particles.max_lifetime[i]).clamp(0.0, 1.0);
        let c = w.particles.color[i];
        particles.push((
            w.particles.positions_x[i],
            w.particles.positions_y[i],
            c[0], c[1], c[2],
            alpha,
            w.particles.size[i],
        ));
    }

    RenderFrame {
        sprites,
        particles,
        popups: w.score_popups.clone(),
        score: w.score,
        lives: w.player.lives,
        level: w.level.current_level,
        shield_charges: w.player.shield_charges,
        player_invulnerable: w.player.invulnerable(),
        is_transitioning: w.level.is_transitioning,
        game_over: w.game_over,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::InputState;
    use crate::config::SimConfig;
    use crate::game_logic::physics_step;

    #[test]
    fn snapshot_round_trips_progress_through_json() {
        let mut w = GameWorldInner::new(SimConfig::default());
        for _ in 0..120 {
            physics_step(&mut w, 1.0 / 60.0, &InputState::default());
        }
        w.score = 1234;
        w.level.current_level = 3;
        w.player.lives = 2;

        let json = serde_json::to_string(&get_save_snapshot(&w)).unwrap();
        let snapshot: SaveSnapshot = serde_json::from_str(&json).unwrap();

        let mut restored = GameWorldInner::new(SimConfig::default());
        load_save_snapshot(&mut restored, &snapshot);
        assert_eq!(restored.score, 1234);
        assert_eq!(restored.level.current_level, 3);
        assert_eq!(restored.player.lives, 2);
        assert_eq!(restored.enemies.count, 0);

        // 次の tick で保存時のレベルのウェーブが立ち上がる
        physics_step(&mut restored, 1.0 / 60.0, &InputState::default());
        assert!(restored.enemies.count > 0);
        assert_eq!(restored.level.current_level, 3);
    }

    #[test]
    fn load_sanitizes_degenerate_values() {
        let mut w = GameWorldInner::new(SimConfig::default());
        let snapshot = SaveSnapshot {
            level: 0,
            score: 0,
            lives: 0,
            kill_count: 0,
            elapsed_seconds: 0.0,
            active_power: u8::MAX,
            power_timer: 0.0,
            shield_charges: 0,
            shield_timer: 0.0,
        };
        load_save_snapshot(&mut w, &snapshot);
        assert_eq!(w.level.current_level, 1);
        assert_eq!(w.player.lives, 1);
    }

    #[test]
    fn render_frame_copies_live_entities_only() {
        let mut w = GameWorldInner::new(SimConfig::default());
        physics_step(&mut w, 1.0 / 60.0, &InputState::default());
        let frame = build_render_frame(&w);
        // 自機 + 敵（弾・パワーアップはまだ出ていないことが多い）
        assert!(frame.sprites.len() >= 1 + w.enemies.count);
        assert_eq!(frame.level, 1);
        assert!(!frame.game_over);
    }
}
