//! Path: shooter_sim/src/game_logic/systems/collision.rs
//! Summary: 空間ハッシュによる広域絞り込みと全ペア種別の衝突解決

use crate::game_logic::systems::enemy_ai::release_slot;
use crate::game_logic::systems::powerups::{apply_powerup, roll_drop};
use crate::world::{FrameEvent, GameWorldInner, OWNER_ENEMY, OWNER_PLAYER};
use shooter_core::constants::{BULLET_CLASH_BONUS, BULLET_RADIUS, POWERUP_PICKUP_BONUS, POWERUP_RADIUS};
use shooter_core::entity_params::EnemyParams;
use shooter_core::physics::overlap::circles_overlap;
use shooter_core::util::point_multiplier;

/// 弾丸グリッドを再構築する（毎 tick、移動後に呼ぶ）
pub(crate) fn rebuild_bullet_grid(w: &mut GameWorldInner) {
    w.bullet_grid.clear();
    for i in 0..w.bullets.len() {
        if w.bullets.alive[i] {
            w.bullet_grid
                .insert(i, w.bullets.positions_x[i], w.bullets.positions_y[i]);
        }
    }
}

/// 1 tick ぶんの衝突解決。順序は弾相殺 → 自弾対敵 → 敵弾対自機 →
/// 敵機対自機 → パワーアップ取得。
pub(crate) fn resolve_collisions(w: &mut GameWorldInner) {
    resolve_bullet_clash(w);
    resolve_player_bullets_vs_enemies(w);
    resolve_enemy_bullets_vs_player(w);
    resolve_enemies_vs_player(w);
    resolve_powerups_vs_player(w);
}

/// 自弾と敵弾の相殺。貫通弾は敵弾を消しつつ生き残る。
fn resolve_bullet_clash(w: &mut GameWorldInner) {
    let len = w.bullets.len();
    let query_r = BULLET_RADIUS * 2.0 + 4.0;
    let mut buf = std::mem::take(&mut w.query_buf);
    for pi in 0..len {
        if !w.bullets.alive[pi] || w.bullets.owner[pi] != OWNER_PLAYER {
            continue;
        }
        let bx = w.bullets.positions_x[pi];
        let by = w.bullets.positions_y[pi];
        w.bullet_grid.query_nearby_into(bx, by, query_r, &mut buf);
        for &ei in buf.iter() {
            if ei == pi || !w.bullets.alive[ei] || w.bullets.owner[ei] != OWNER_ENEMY {
                continue;
            }
            if !circles_overlap(
                bx, by, BULLET_RADIUS,
                w.bullets.positions_x[ei], w.bullets.positions_y[ei], BULLET_RADIUS,
            ) {
                continue;
            }
            w.bullets.kill(ei);
            w.award_points(BULLET_CLASH_BONUS, bx, by);
            w.frame_events.push(FrameEvent::BulletClash { x: bx, y: by });
            w.particles.emit(bx, by, 3, [0.9, 0.9, 0.9, 1.0]);
            if !w.bullets.piercing[pi] {
                w.bullets.kill(pi);
                break;
            }
        }
    }
    w.query_buf = buf;
}

/// 自弾対敵。撃破時はレベル倍率つきスコア・スロット解放・ドロップ抽選。
fn resolve_player_bullets_vs_enemies(w: &mut GameWorldInner) {
    let mult = point_multiplier(w.level.current_level);
    let mut buf = std::mem::take(&mut w.query_buf);
    for i in 0..w.enemies.len() {
        if !w.enemies.alive[i] {
            continue;
        }
        let params = EnemyParams::get(w.enemies.kind_ids[i]);
        let ex = w.enemies.positions_x[i];
        let ey = w.enemies.positions_y[i];
        let query_r = params.radius + BULLET_RADIUS + 4.0;
        w.bullet_grid.query_nearby_into(ex, ey, query_r, &mut buf);
        for &bi in buf.iter() {
            if !w.bullets.alive[bi] || w.bullets.owner[bi] != OWNER_PLAYER {
                continue;
            }
            if !circles_overlap(
                w.bullets.positions_x[bi], w.bullets.positions_y[bi], BULLET_RADIUS,
                ex, ey, params.radius,
            ) {
                continue;
            }
            let dead = w.enemies.damage(i, w.bullets.damage[bi]);
            if !w.bullets.piercing[bi] {
                w.bullets.kill(bi);
            }
            if dead {
                let points = (params.points as f32 * mult).round() as u32;
                destroy_enemy(w, i, points, true);
                break;
            } else {
                w.frame_events.push(FrameEvent::EnemyHit {
                    kind: w.enemies.kind_ids[i],
                });
                w.particles.emit(ex, ey, 2, [1.0, 0.9, 0.3, 1.0]);
            }
        }
    }
    w.query_buf = buf;
}

/// 撃破処理の共通経路。スコア加算は一度だけ、スロット解放も一度だけ。
pub(crate) fn destroy_enemy(w: &mut GameWorldInner, i: usize, points: u32, with_drop: bool) {
    if !w.enemies.alive[i] {
        return;
    }
    let kind = w.enemies.kind_ids[i];
    let x = w.enemies.positions_x[i];
    let y = w.enemies.positions_y[i];
    w.award_points(points, x, y);
    w.frame_events.push(FrameEvent::EnemyKilled { kind, points, x, y });
    w.particles
        .emit(x, y, 8, EnemyParams::get(kind).particle_color);
    release_slot(w, i);
    w.enemies.kill(i);
    w.level.kills_this_level += 1;
    w.kill_count += 1;
    if with_drop {
        roll_drop(w, x, y);
    }
}

/// 自機への被弾処理。シールド → 無敵 → 残機の順に判定する。
/// 戻り値は残機が減ったかどうか。
fn damage_player(w: &mut GameWorldInner) -> bool {
    if w.player.shield_active() {
        if w.player.shield_charges > 0 {
            w.player.shield_charges -= 1;
            if w.player.shield_charges == 0 {
                w.player.shield_timer = 0.0;
            }
        }
        w.frame_events.push(FrameEvent::ShieldBlocked);
        return false;
    }

    w.player.lives = w.player.lives.saturating_sub(1);
    w.frame_events.push(FrameEvent::PlayerDamaged {
        lives_left: w.player.lives,
    });
    w.particles
        .emit(w.player.x, w.player.y, 8, [1.0, 0.15, 0.15, 1.0]);

    if w.player.lives == 0 {
        w.game_over = true;
        w.frame_events.push(FrameEvent::GameOver { score: w.score });
    } else {
        w.player.invulnerable_timer = w.config.invulnerable_duration;
        w.player.post_hit_shield_timer = w.config.post_hit_shield_duration;
        w.player.respawn_timer = w.config.respawn_delay;
    }
    true
}

/// 敵弾対自機。無敵中は判定ごとスキップ。シールドは弾を消費して防ぐ。
fn resolve_enemy_bullets_vs_player(w: &mut GameWorldInner) {
    if !w.player.alive() || w.player.invulnerable() {
        return;
    }
    let px = w.player.x;
    let py = w.player.y;
    let pr = w.player.radius;
    let mut buf = std::mem::take(&mut w.query_buf);
    w.bullet_grid
        .query_nearby_into(px, py, pr + BULLET_RADIUS + 4.0, &mut buf);
    for &bi in buf.iter() {
        if !w.bullets.alive[bi] || w.bullets.owner[bi] != OWNER_ENEMY {
            continue;
        }
        if !circles_overlap(
            w.bullets.positions_x[bi], w.bullets.positions_y[bi], BULLET_RADIUS,
            px, py, pr,
        ) {
            continue;
        }
        w.bullets.kill(bi);
        if damage_player(w) {
            break;
        }
    }
    w.query_buf = buf;
}

/// 敵機対自機の直接衝突。被弾処理に加えて衝突した敵は破壊され
/// スコアが入る。
fn resolve_enemies_vs_player(w: &mut GameWorldInner) {
    if !w.player.alive() || w.player.invulnerable() {
        return;
    }
    let mult = point_multiplier(w.level.current_level);
    for i in 0..w.enemies.len() {
        if !w.enemies.alive[i] {
            continue;
        }
        let params = EnemyParams::get(w.enemies.kind_ids[i]);
        if !circles_overlap(
            w.enemies.positions_x[i], w.enemies.positions_y[i], params.radius,
            w.player.x, w.player.y, w.player.radius,
        ) {
            continue;
        }
        let points = (params.points as f32 * mult).round() as u32;
        destroy_enemy(w, i, points, false);
        if damage_player(w) {
            break;
        }
    }
}

/// パワーアップ取得。効果は即時適用、取得ボーナスつき。
fn resolve_powerups_vs_player(w: &mut GameWorldInner) {
    if !w.player.alive() {
        return;
    }
    for i in 0..w.powerups.len() {
        if !w.powerups.alive[i] {
            continue;
        }
        if !circles_overlap(
            w.powerups.positions_x[i], w.powerups.positions_y[i], POWERUP_RADIUS,
            w.player.x, w.player.y, w.player.radius,
        ) {
            continue;
        }
        let kind = w.powerups.kinds[i];
        w.powerups.kill(i);
        apply_powerup(w, kind);
        w.award_points(POWERUP_PICKUP_BONUS, w.player.x, w.player.y);
    }
}
