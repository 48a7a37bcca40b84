//! Path: shooter_sim/src/game_logic/systems/effects.rs
//! Summary: 演出系の更新（パーティクル・スコアポップアップ）。ロジックには影響しない。

use crate::world::GameWorldInner;

const PARTICLE_GRAVITY: f32 = 180.0;
const POPUP_RISE_SPEED: f32 = 40.0;

/// パーティクルの移動・重力・寿命消化。アルファは残寿命比で減衰する。
pub(crate) fn update_particles(w: &mut GameWorldInner, dt: f32) {
    for i in 0..w.particles.len() {
        if !w.particles.alive[i] {
            continue;
        }
        w.particles.lifetime[i] -= dt;
        if w.particles.lifetime[i] <= 0.0 {
            w.particles.kill(i);
            continue;
        }
        w.particles.velocities_y[i] += PARTICLE_GRAVITY * dt;
        w.particles.positions_x[i] += w.particles.velocities_x[i] * dt;
        w.particles.positions_y[i] += w.particles.velocities_y[i] * dt;
        let ratio = w.particles.lifetime[i] / w.particles.max_lifetime[i];
        w.particles.color[i][3] = ratio.clamp(0.0, 1.0);
    }
}

/// スコアポップアップはゆっくり上昇しながら消える。(x, y, points, 残り寿命)
pub(crate) fn update_score_popups(w: &mut GameWorldInner, dt: f32) {
    for p in w.score_popups.iter_mut() {
        p.1 -= POPUP_RISE_SPEED * dt;
        p.3 -= dt;
    }
    w.score_popups.retain(|p| p.3 > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    #[test]
    fn particles_expire_after_lifetime() {
        let mut w = GameWorldInner::new(SimConfig::default());
        w.particles.spawn_one(0.0, 0.0, 10.0, 0.0, 0.5, [1.0; 4], 4.0);
        update_particles(&mut w, 0.3);
        assert_eq!(w.particles.count, 1);
        update_particles(&mut w, 0.3);
        assert_eq!(w.particles.count, 0);
    }

    #[test]
    fn particle_alpha_fades_with_remaining_life() {
        let mut w = GameWorldInner::new(SimConfig::default());
        w.particles.spawn_one(0.0, 0.0, 0.0, 0.0, 1.0, [1.0; 4], 4.0);
        update_particles(&mut w, 0.5);
        assert!((w.particles.color[0][3] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn popups_rise_then_vanish() {
        let mut w = GameWorldInner::new(SimConfig::default());
        w.award_points(100, 300.0, 400.0);
        let y0 = w.score_popups[0].1;
        update_score_popups(&mut w, 0.4);
        assert!(w.score_popups[0].1 < y0);
        update_score_popups(&mut w, 0.5);
        assert!(w.score_popups.is_empty());
    }
}
