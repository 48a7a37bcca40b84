//! Path: shooter_sim/src/game_logic/physics_step.rs
//! Summary: 1 tick の物理ステップ。全システムを固定順序で駆動する。
//!
//! 順序: dt クランプ → 遷移 → 自機 → 敵 → 弾丸 → 衝突 →
//! パワーアップタイマー → 補充 → クリア判定 → 演出。

use crate::collab::InputState;
use crate::game_logic::systems::{collision, effects, enemy_ai, formation, powerups, projectiles};
use crate::world::{FrameEvent, GameWorldInner, OWNER_PLAYER, VARIANT_SPREAD, VARIANT_STRAIGHT};
use shooter_core::constants::{FRAME_BUDGET_MS, MAX_TICK_DT, PLAYER_BULLET_DAMAGE};
use std::time::Instant;

/// 扇状射撃の横方向角（rad）
const SPREAD_ANGLE: f32 = 0.22;

/// ワールドを dt 秒進める。dt はスパイク吸収のためクランプされる。
pub fn physics_step(w: &mut GameWorldInner, dt_raw: f32, input: &InputState) {
    let started = Instant::now();
    let dt = dt_raw.clamp(0.0, MAX_TICK_DT);
    if dt <= 0.0 {
        return;
    }

    w.frame_id = w.frame_id.wrapping_add(1);
    w.elapsed_seconds += dt;

    if w.game_over {
        // 決着後は演出だけ更新する
        effects::update_particles(w, dt);
        effects::update_score_popups(w, dt);
        w.last_frame_time_ms = started.elapsed().as_secs_f64() * 1000.0;
        return;
    }

    // 初回 tick またはレベル遷移の完了でウェーブを開始する
    if w.level.is_transitioning {
        if w.level.update_transition(dt, w.config.transition_duration) {
            formation::start_wave(w);
        }
    } else if w.level.total_this_level == 0 {
        formation::start_wave(w);
    }
    w.level.wave_elapsed += dt;

    update_player(w, dt, input);
    let (px, py) = (w.player.x, w.player.y);

    enemy_ai::update_enemies(w, dt, px, py);
    projectiles::update_projectiles(w, dt, px, py);

    collision::rebuild_bullet_grid(w);
    collision::resolve_collisions(w);

    powerups::update_power_timers(w, dt);
    formation::update_backfill(w, dt);

    if !w.level.is_transitioning && w.level.all_cleared(w.enemies.count) {
        let level = w.level.current_level;
        if w.level.start_transition() {
            w.frame_events.push(FrameEvent::LevelCleared { level });
        }
    }

    effects::update_particles(w, dt);
    effects::update_score_popups(w, dt);

    let ms = started.elapsed().as_secs_f64() * 1000.0;
    w.last_frame_time_ms = ms;
    if ms > FRAME_BUDGET_MS {
        log::warn!(
            "PERF: frame {} took {:.2} ms (budget {:.2} ms)",
            w.frame_id, ms, FRAME_BUDGET_MS
        );
    }
}

/// 自機の移動・タイマー・リスポーン・射撃
fn update_player(w: &mut GameWorldInner, dt: f32, input: &InputState) {
    w.player.tick_timers(dt);

    if !w.player.alive() {
        if w.player.lives > 0 && w.player.respawn_timer > 0.0 {
            w.player.respawn_timer -= dt;
            if w.player.respawn_timer <= 0.0 {
                let config = w.config;
                w.player.respawn(&config);
                w.frame_events.push(FrameEvent::PlayerRespawned);
            }
        }
        return;
    }

    let mut dir = 0.0;
    if input.left {
        dir -= 1.0;
    }
    if input.right {
        dir += 1.0;
    }
    w.player.x += dir * w.config.player_speed * w.player.speed_multiplier() * dt;
    w.player.x = w.player.x.clamp(
        w.player.radius,
        w.config.field_width - w.player.radius,
    );

    if (input.fire || input.auto_shoot) && w.player.shoot_cooldown <= 0.0 {
        fire_player_shots(w);
        w.player.shoot_cooldown = w.player.effective_cooldown(w.config.player_shoot_cooldown);
    }
}

/// 現在のパワーアップに応じて 1〜3 発を発射する
fn fire_player_shots(w: &mut GameWorldInner) {
    let speed = w.config.player_bullet_speed;
    let dmg = PLAYER_BULLET_DAMAGE;
    let x = w.player.x;
    let y = w.player.y - w.player.radius;
    match w.player.shots_per_fire() {
        2 => {
            w.bullets.spawn(x - 8.0, y, 0.0, -speed, OWNER_PLAYER, VARIANT_STRAIGHT, dmg, false);
            w.bullets.spawn(x + 8.0, y, 0.0, -speed, OWNER_PLAYER, VARIANT_STRAIGHT, dmg, false);
        }
        3 => {
            // マルチショット中の中央弾のみ貫通
            let (sin, cos) = SPREAD_ANGLE.sin_cos();
            w.bullets.spawn(x, y, 0.0, -speed, OWNER_PLAYER, VARIANT_STRAIGHT, dmg, true);
            w.bullets.spawn(x, y, -speed * sin, -speed * cos, OWNER_PLAYER, VARIANT_SPREAD, dmg, false);
            w.bullets.spawn(x, y, speed * sin, -speed * cos, OWNER_PLAYER, VARIANT_SPREAD, dmg, false);
        }
        _ => {
            w.bullets.spawn(x, y, 0.0, -speed, OWNER_PLAYER, VARIANT_STRAIGHT, dmg, false);
        }
    }
}
