//! Path: shooter_sim/src/game_logic/systems/enemy_ai.rs
//! Summary: 敵状態機械（入場→隊列→攻撃降下）と発射・攻撃引き込み

use crate::world::{
    GameWorldInner, NO_SLOT, OWNER_ENEMY, STATE_ATTACKING, STATE_ENTERING, STATE_FORMATION,
    VARIANT_HOMING, VARIANT_STRAIGHT, VARIANT_ZIGZAG,
};
use shooter_core::constants::{
    HOVER_AMPLITUDE, HOVER_FREQUENCY, OFFSCREEN_MARGIN, RETURN_DURATION,
};
use shooter_core::entity_params::{
    behavior_fire_multiplier, EnemyParams, BEHAVIOR_AGGRESSIVE, BEHAVIOR_EVADE, BEHAVIOR_TELEPORT,
    ENEMY_ID_OVERSEER, ENEMY_ID_SENTINEL,
};
use shooter_core::paths::{attack_path, pick_attack_pattern};
use shooter_core::util::attack_pull_per_sec;

/// 入場経路完了後、スロットへ直線接近する速度（px/s）
const APPROACH_SPEED: f32 = 200.0;
/// 非ループ攻撃経路の終端以降の落下速度（px/s）
const EXIT_SPEED: f32 = 300.0;
/// 攻撃降下中の発射レート倍率
const ATTACK_FIRE_MULTIPLIER: f32 = 4.0;

/// 全敵の状態機械を dt 秒進める。発射・攻撃引き込み・画面外除去を含む。
pub(crate) fn update_enemies(w: &mut GameWorldInner, dt: f32, px: f32, py: f32) {
    let len = w.enemies.len();
    for i in 0..len {
        if !w.enemies.alive[i] {
            continue;
        }

        // 入場スタッガー: 待機が明けるまで経路始点（画面外）に留まる
        if w.enemies.entry_delay[i] > 0.0 {
            w.enemies.entry_delay[i] -= dt;
            continue;
        }

        match w.enemies.state[i] {
            STATE_ENTERING => update_entering(w, i, dt),
            STATE_FORMATION => update_formation(w, i, dt, px, py),
            STATE_ATTACKING => update_attacking(w, i, dt, px, py),
            _ => {}
        }

        // 画面外除去。入場中は経路が画面外から始まるため猶予する。
        if w.enemies.alive[i] && w.enemies.state[i] != STATE_ENTERING {
            let x = w.enemies.positions_x[i];
            let y = w.enemies.positions_y[i];
            if w.offscreen(x, y, OFFSCREEN_MARGIN) {
                release_slot(w, i);
                w.enemies.kill(i);
            }
        }
    }

    pull_one_attacker(w, dt, px, py);
}

fn update_entering(w: &mut GameWorldInner, i: usize, dt: f32) {
    w.enemies.path_elapsed[i] += dt;
    let elapsed = w.enemies.path_elapsed[i];
    if let Some((x, y)) = w.enemies.path[i].sample(elapsed) {
        w.enemies.positions_x[i] = x;
        w.enemies.positions_y[i] = y;
        return;
    }

    // 経路終端からスロットへ直線接近し、1 tick ぶんの移動距離内なら
    // スロットへ正確にスナップして隊列入りする。
    let slot = w.enemies.slot[i];
    let Some((sx, sy)) = w.formation.position(slot) else {
        // スロットを失った個体は隊列に入れない。現在地で隊列扱いにせず除去。
        log::warn!("entering enemy {} has no slot: removing", i);
        w.enemies.kill(i);
        return;
    };
    let x = w.enemies.positions_x[i];
    let y = w.enemies.positions_y[i];
    let dx = sx - x;
    let dy = sy - y;
    let dist = (dx * dx + dy * dy).sqrt();
    let step = APPROACH_SPEED * dt;
    if dist <= step || dist < 1e-3 {
        w.enemies.positions_x[i] = sx;
        w.enemies.positions_y[i] = sy;
        w.enemies.state[i] = STATE_FORMATION;
    } else {
        w.enemies.positions_x[i] = x + dx / dist * step;
        w.enemies.positions_y[i] = y + dy / dist * step;
    }
}

fn update_formation(w: &mut GameWorldInner, i: usize, dt: f32, px: f32, py: f32) {
    if w.enemies.attack_cooldown[i] > 0.0 {
        w.enemies.attack_cooldown[i] -= dt;
    }

    // スロット位置 + 正弦波ホバリング。論理上の占有スロットは変えない。
    if let Some((sx, sy)) = w.formation.position(w.enemies.slot[i]) {
        let amp = if w.enemies.behavior[i] == BEHAVIOR_EVADE {
            HOVER_AMPLITUDE * 3.0
        } else {
            HOVER_AMPLITUDE
        };
        let phase = w.enemies.hover_phase[i];
        let t = w.elapsed_seconds * HOVER_FREQUENCY + phase;
        w.enemies.positions_x[i] = sx + t.sin() * amp;
        w.enemies.positions_y[i] = sy + (t * 0.7).cos() * amp * 0.5;
    }

    try_fire(w, i, dt, px, py, 1.0);
}

fn update_attacking(w: &mut GameWorldInner, i: usize, dt: f32, px: f32, py: f32) {
    if w.enemies.returning[i] {
        // ループ経路完了後の隊列復帰補間
        w.enemies.return_elapsed[i] += dt;
        let t = (w.enemies.return_elapsed[i] / RETURN_DURATION).min(1.0);
        let Some((sx, sy)) = w.formation.position(w.enemies.slot[i]) else {
            w.enemies.kill(i);
            return;
        };
        let fx = w.enemies.return_from_x[i];
        let fy = w.enemies.return_from_y[i];
        w.enemies.positions_x[i] = fx + (sx - fx) * t;
        w.enemies.positions_y[i] = fy + (sy - fy) * t;
        if t >= 1.0 {
            w.enemies.state[i] = STATE_FORMATION;
            // 復帰後のクールダウンは初回より長いレンジから引く
            w.enemies.attack_cooldown[i] = w.rng.next_range(6.0, 12.0);
        }
        return;
    }

    w.enemies.path_elapsed[i] += dt;
    let elapsed = w.enemies.path_elapsed[i];
    if let Some((x, y)) = w.enemies.path[i].sample(elapsed) {
        w.enemies.positions_x[i] = x;
        w.enemies.positions_y[i] = y;
        try_fire(w, i, dt, px, py, ATTACK_FIRE_MULTIPLIER);
        return;
    }

    if w.enemies.path[i].looping {
        w.enemies.returning[i] = true;
        w.enemies.return_elapsed[i] = 0.0;
        w.enemies.return_from_x[i] = w.enemies.positions_x[i];
        w.enemies.return_from_y[i] = w.enemies.positions_y[i];
    } else {
        // 非ループ経路はそのまま画面下へ抜ける（除去は画面外判定）
        w.enemies.positions_y[i] += EXIT_SPEED * dt;
    }
}

/// 発射判定。秒換算した確率で独立に試行し、敵弾の同時数上限を守る。
fn try_fire(w: &mut GameWorldInner, i: usize, dt: f32, px: f32, py: f32, rate_mult: f32) {
    let params = EnemyParams::get(w.enemies.kind_ids[i]);
    let p = params.fire_chance * behavior_fire_multiplier(w.enemies.behavior[i]) * rate_mult;
    if !w.rng.chance_per_frame(p, dt) {
        return;
    }
    if w.bullets.active_count(OWNER_ENEMY) >= w.config.max_enemy_bullets {
        return;
    }

    let ex = w.enemies.positions_x[i];
    let ey = w.enemies.positions_y[i];
    // おおまかに自機方向（下方寄り）を狙う。命中精度は意図的に粗い。
    let dx = px - ex + w.rng.next_range(-30.0, 30.0);
    let dy = (py - ey).max(50.0);
    let dist = (dx * dx + dy * dy).sqrt();
    let speed = w.config.enemy_bullet_speed;
    let variant = match w.enemies.kind_ids[i] {
        k if k == ENEMY_ID_SENTINEL => VARIANT_ZIGZAG,
        k if k == ENEMY_ID_OVERSEER => VARIANT_HOMING,
        _ => VARIANT_STRAIGHT,
    };
    w.bullets.spawn(
        ex,
        ey + params.radius,
        dx / dist * speed,
        dy / dist * speed,
        OWNER_ENEMY,
        variant,
        1,
        false,
    );
}

/// 隊列からの攻撃引き込み。1 tick につき高々 1 体、クールダウンが明けた
/// 隊列メンバーから一様に選ぶ。
fn pull_one_attacker(w: &mut GameWorldInner, dt: f32, px: f32, py: f32) {
    let eligible: Vec<usize> = (0..w.enemies.len())
        .filter(|&i| {
            w.enemies.alive[i]
                && w.enemies.state[i] == STATE_FORMATION
                && w.enemies.attack_cooldown[i] <= 0.0
        })
        .collect();
    if eligible.is_empty() {
        return;
    }

    let p = attack_pull_per_sec(w.level.current_level, w.level.wave_elapsed);
    if !w.rng.chance_per_sec(p, dt) {
        return;
    }

    let i = eligible[w.rng.next_u32() as usize % eligible.len()];

    // テレポート型は降下開始時に左右反転位置へ跳ぶ
    if w.enemies.behavior[i] == BEHAVIOR_TELEPORT {
        w.enemies.positions_x[i] = w.config.field_width - w.enemies.positions_x[i];
    }

    let from = (w.enemies.positions_x[i], w.enemies.positions_y[i]);
    let pattern = pick_attack_pattern(w.enemies.behavior[i], &mut w.rng);
    let path = attack_path(pattern, from, (px, py), w.config.field_height, &mut w.rng);

    w.enemies.state[i] = STATE_ATTACKING;
    w.enemies.path[i] = path;
    w.enemies.path_elapsed[i] = 0.0;
    w.enemies.returning[i] = false;
    // 攻撃的な個体は次の降下までの間隔も短い
    let cd = if w.enemies.behavior[i] == BEHAVIOR_AGGRESSIVE { 0.5 } else { 1.0 };
    w.enemies.attack_cooldown[i] = w.rng.next_range(2.0, 6.0) * cd;
}

/// 占有スロットを返却する（未割当なら no-op）
pub(crate) fn release_slot(w: &mut GameWorldInner, i: usize) {
    let slot = w.enemies.slot[i];
    if slot != NO_SLOT {
        w.formation.release(slot);
        w.enemies.slot[i] = NO_SLOT;
    }
}
