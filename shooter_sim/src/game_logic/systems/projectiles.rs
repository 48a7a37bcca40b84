//! Path: shooter_sim/src/game_logic/systems/projectiles.rs
//! Summary: 弾丸・パワーアップの移動更新と画面外カリング

use crate::world::{GameWorldInner, OWNER_ENEMY, VARIANT_HOMING, VARIANT_ZIGZAG};
use shooter_core::constants::OFFSCREEN_MARGIN;

/// zigzag の横揺れ角速度（rad/s）と振幅（px）
const ZIGZAG_FREQ: f32 = 8.0;
const ZIGZAG_AMPLITUDE: f32 = 30.0;
/// homing-lite の追尾強度（1/s）。完全追尾にはしない。
const HOMING_BLEND: f32 = 2.5;

/// 全弾丸を dt 秒進める。バリアント挙動は速度ベクトルの修正として表す。
pub(crate) fn update_projectiles(w: &mut GameWorldInner, dt: f32, px: f32, py: f32) {
    let len = w.bullets.len();
    for i in 0..len {
        if !w.bullets.alive[i] {
            continue;
        }
        w.bullets.age[i] += dt;

        match w.bullets.variant[i] {
            VARIANT_ZIGZAG => {
                // 中心線に沿って前進しつつ横に正弦波で揺れる
                w.bullets.positions_y[i] += w.bullets.velocities_y[i] * dt;
                w.bullets.base_x[i] += w.bullets.velocities_x[i] * dt;
                w.bullets.positions_x[i] = w.bullets.base_x[i]
                    + (w.bullets.age[i] * ZIGZAG_FREQ).sin() * ZIGZAG_AMPLITUDE;
            }
            VARIANT_HOMING if w.bullets.owner[i] == OWNER_ENEMY => {
                // 速度の向きを毎 tick わずかに自機方向へ混ぜる（速さは保つ）
                let vx = w.bullets.velocities_x[i];
                let vy = w.bullets.velocities_y[i];
                let speed = (vx * vx + vy * vy).sqrt().max(1e-3);
                let dx = px - w.bullets.positions_x[i];
                let dy = py - w.bullets.positions_y[i];
                let dist = (dx * dx + dy * dy).sqrt().max(1e-3);
                let blend = (HOMING_BLEND * dt).min(1.0);
                let nvx = vx + (dx / dist * speed - vx) * blend;
                let nvy = vy + (dy / dist * speed - vy) * blend;
                let nspeed = (nvx * nvx + nvy * nvy).sqrt().max(1e-3);
                w.bullets.velocities_x[i] = nvx / nspeed * speed;
                w.bullets.velocities_y[i] = nvy / nspeed * speed;
                w.bullets.positions_x[i] += w.bullets.velocities_x[i] * dt;
                w.bullets.positions_y[i] += w.bullets.velocities_y[i] * dt;
            }
            _ => {
                w.bullets.positions_x[i] += w.bullets.velocities_x[i] * dt;
                w.bullets.positions_y[i] += w.bullets.velocities_y[i] * dt;
            }
        }

        let x = w.bullets.positions_x[i];
        let y = w.bullets.positions_y[i];
        if w.offscreen(x, y, OFFSCREEN_MARGIN / 2.0) {
            w.bullets.kill(i);
        }
    }

    // パワーアップは下方へ漂うだけ
    let plen = w.powerups.len();
    for i in 0..plen {
        if !w.powerups.alive[i] {
            continue;
        }
        w.powerups.positions_y[i] += w.powerups.drift_vy[i] * dt;
        if w.powerups.positions_y[i] > w.config.field_height + OFFSCREEN_MARGIN / 2.0 {
            w.powerups.kill(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::world::{OWNER_PLAYER, VARIANT_STRAIGHT};

    #[test]
    fn constant_velocity_is_framerate_independent() {
        // 同じ 1 秒を 1 tick と 60 tick で刻んでも到達位置が一致する
        let mut a = GameWorldInner::new(SimConfig::default());
        let mut b = GameWorldInner::new(SimConfig::default());
        for w in [&mut a, &mut b] {
            w.bullets
                .spawn(300.0, 700.0, 0.0, -480.0, OWNER_PLAYER, VARIANT_STRAIGHT, 1, false);
        }
        update_projectiles(&mut a, 1.0, 300.0, 740.0);
        for _ in 0..60 {
            update_projectiles(&mut b, 1.0 / 60.0, 300.0, 740.0);
        }
        assert!((a.bullets.positions_y[0] - b.bullets.positions_y[0]).abs() < 0.01);
        assert!((a.bullets.positions_y[0] - 220.0).abs() < 0.01);
    }

    #[test]
    fn offscreen_bullets_return_to_pool() {
        let mut w = GameWorldInner::new(SimConfig::default());
        w.bullets
            .spawn(300.0, 20.0, 0.0, -480.0, OWNER_PLAYER, VARIANT_STRAIGHT, 1, false);
        for _ in 0..60 {
            update_projectiles(&mut w, 1.0 / 60.0, 300.0, 740.0);
        }
        assert_eq!(w.bullets.count, 0);
    }

    #[test]
    fn zigzag_oscillates_around_base_line() {
        let mut w = GameWorldInner::new(SimConfig::default());
        w.bullets
            .spawn(300.0, 100.0, 0.0, 220.0, OWNER_ENEMY, VARIANT_ZIGZAG, 1, false);
        let mut min_x = f32::MAX;
        let mut max_x = f32::MIN;
        for _ in 0..120 {
            update_projectiles(&mut w, 1.0 / 60.0, 300.0, 740.0);
            if w.bullets.alive[0] {
                min_x = min_x.min(w.bullets.positions_x[0]);
                max_x = max_x.max(w.bullets.positions_x[0]);
            }
        }
        assert!(max_x - min_x > ZIGZAG_AMPLITUDE);
        assert!(min_x >= 300.0 - ZIGZAG_AMPLITUDE - 1.0);
        assert!(max_x <= 300.0 + ZIGZAG_AMPLITUDE + 1.0);
    }

    #[test]
    fn homing_bullet_turns_toward_player() {
        let mut w = GameWorldInner::new(SimConfig::default());
        // 真下へ撃たれた弾が、右下の自機へ寄っていく
        w.bullets
            .spawn(100.0, 100.0, 0.0, 220.0, OWNER_ENEMY, VARIANT_HOMING, 1, false);
        for _ in 0..120 {
            update_projectiles(&mut w, 1.0 / 60.0, 500.0, 740.0);
        }
        assert!(w.bullets.velocities_x[0] > 0.0);
        // 速さは不変
        let vx = w.bullets.velocities_x[0];
        let vy = w.bullets.velocities_y[0];
        assert!(((vx * vx + vy * vy).sqrt() - 220.0).abs() < 1.0);
    }

    #[test]
    fn powerups_drift_down_and_cull() {
        let mut w = GameWorldInner::new(SimConfig::default());
        w.powerups.spawn(300.0, 790.0, 0);
        let y0 = w.powerups.positions_y[0];
        update_projectiles(&mut w, 0.1, 300.0, 740.0);
        assert!(w.powerups.positions_y[0] > y0);
        for _ in 0..100 {
            update_projectiles(&mut w, 0.1, 300.0, 740.0);
        }
        assert_eq!(w.powerups.count, 0);
    }
}
