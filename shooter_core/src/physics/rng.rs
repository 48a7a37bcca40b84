//! Path: shooter_core/src/physics/rng.rs
//! Summary: 決定論的 LCG 乱数ジェネレータと連続時間確率判定

use crate::constants::REFERENCE_FPS;

pub struct SimpleRng(u64);

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    pub fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 / u32::MAX as f32
    }

    /// `[min, max)` の一様乱数
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// 基準 FPS の 1 フレームあたり確率 `p` を dt 秒ぶんの試行に換算して判定する。
    /// `1 - (1-p)^(dt * REFERENCE_FPS)` により、tick サイズに依らず期待レートが揃う。
    pub fn chance_per_frame(&mut self, p: f32, dt: f32) -> bool {
        if p <= 0.0 || dt <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        let scaled = 1.0 - (1.0 - p).powf(dt * REFERENCE_FPS);
        self.next_f32() < scaled
    }

    /// 秒あたり確率 `p` を dt 秒ぶんの試行に換算して判定する
    pub fn chance_per_sec(&mut self, p: f32, dt: f32) -> bool {
        if p <= 0.0 || dt <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return self.next_f32() < (p * dt).min(1.0);
        }
        let scaled = 1.0 - (1.0 - p).powf(dt);
        self.next_f32() < scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_reproducibility() {
        let mut rng = SimpleRng::new(12345);
        let a: Vec<u32> = (0..10).map(|_| rng.next_u32()).collect();
        let mut rng2 = SimpleRng::new(12345);
        let b: Vec<u32> = (0..10).map(|_| rng2.next_u32()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn next_f32_in_range() {
        let mut rng = SimpleRng::new(999);
        for _ in 0..100 {
            let f = rng.next_f32();
            assert!(f >= 0.0 && f <= 1.0);
        }
    }

    #[test]
    fn next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..100 {
            let v = rng.next_range(2.0, 6.0);
            assert!(v >= 2.0 && v < 6.0);
        }
    }

    #[test]
    fn chance_zero_and_one() {
        let mut rng = SimpleRng::new(1);
        assert!(!rng.chance_per_frame(0.0, 1.0 / 60.0));
        assert!(rng.chance_per_frame(1.0, 1.0 / 60.0));
    }

    /// tick を細かく刻んでも大きく刻んでも、発火回数の期待値が揃うこと
    #[test]
    fn chance_rate_is_tick_size_independent() {
        let p = 0.02_f32;
        let total_secs = 200.0_f32;

        let count_with_dt = |seed: u64, dt: f32| -> u32 {
            let mut rng = SimpleRng::new(seed);
            let ticks = (total_secs / dt) as u32;
            (0..ticks).filter(|_| rng.chance_per_frame(p, dt)).count() as u32
        };

        let coarse = count_with_dt(42, 1.0 / 30.0);
        let fine = count_with_dt(43, 1.0 / 120.0);
        // 期待値 ≈ 240 回。統計誤差込みで ±25% に収まること
        let expected = total_secs * p * REFERENCE_FPS;
        for c in [coarse, fine] {
            assert!(
                (c as f32) > expected * 0.75 && (c as f32) < expected * 1.25,
                "count {} vs expected {}",
                c,
                expected
            );
        }
    }
}
