//! Path: shooter_sim/src/game_logic/systems/powerups.rs
//! Summary: パワーアップのドロップ抽選・効果適用・タイマー失効

use crate::game_logic::systems::enemy_ai::release_slot;
use crate::world::{FrameEvent, GameWorldInner, POWER_NONE};
use shooter_core::constants::{GUARANTEED_DROP_KILLS, POWERUP_DROP_PERCENT};
use shooter_core::entity_params::{
    EnemyParams, PowerUpParams, POWERUP_ID_BOMB, POWERUP_ID_EXTRA_LIFE, POWERUP_ID_SHIELD,
};
use shooter_core::util::point_multiplier;

/// 撃破時のドロップ抽選。一定撃破数ドロップなしが続いたら確定で落とす。
pub(crate) fn roll_drop(w: &mut GameWorldInner, x: f32, y: f32) {
    w.kills_since_drop += 1;
    let lucky = w.rng.next_u32() % 100 < POWERUP_DROP_PERCENT;
    if !lucky && w.kills_since_drop < GUARANTEED_DROP_KILLS {
        return;
    }
    w.kills_since_drop = 0;
    let roll = w.rng.next_u32() % PowerUpParams::total_drop_weight();
    let kind = PowerUpParams::pick_by_weight(roll);
    w.powerups.spawn(x, y, kind);
}

/// 取得効果の即時適用。時限効果は active_power を置き換える。
pub(crate) fn apply_powerup(w: &mut GameWorldInner, kind: u8) {
    let params = PowerUpParams::get(kind);
    match kind {
        k if k == POWERUP_ID_EXTRA_LIFE => {
            w.player.lives += 1;
        }
        k if k == POWERUP_ID_SHIELD => {
            w.player.shield_charges = params.charges;
            w.player.shield_timer = params.duration;
        }
        k if k == POWERUP_ID_BOMB => {
            detonate_bomb(w);
        }
        _ => {
            w.player.active_power = kind;
            w.player.power_timer = params.duration;
        }
    }
    w.frame_events.push(FrameEvent::PowerUpCollected { kind });
}

/// ボム: 全アクティブ敵を破壊し、それぞれのスコアを加算する
pub(crate) fn detonate_bomb(w: &mut GameWorldInner) {
    let mult = point_multiplier(w.level.current_level);
    let mut destroyed = 0u32;
    for i in 0..w.enemies.len() {
        if !w.enemies.alive[i] {
            continue;
        }
        let params = EnemyParams::get(w.enemies.kind_ids[i]);
        let points = (params.points as f32 * mult).round() as u32;
        let x = w.enemies.positions_x[i];
        let y = w.enemies.positions_y[i];
        w.award_points(points, x, y);
        w.particles.emit(x, y, 10, params.particle_color);
        release_slot(w, i);
        w.enemies.kill(i);
        w.level.kills_this_level += 1;
        w.kill_count += 1;
        destroyed += 1;
    }
    w.frame_events.push(FrameEvent::BombDetonated { destroyed });
}

/// 時限パワーアップの残り時間を減らし、切れたら通常状態へ戻す
pub(crate) fn update_power_timers(w: &mut GameWorldInner, dt: f32) {
    if w.player.active_power == POWER_NONE {
        return;
    }
    w.player.power_timer -= dt;
    if w.player.power_timer <= 0.0 {
        let kind = w.player.active_power;
        w.player.active_power = POWER_NONE;
        w.player.power_timer = 0.0;
        w.frame_events.push(FrameEvent::PowerUpExpired { kind });
    }
}
