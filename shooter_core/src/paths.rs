//! Path: shooter_core/src/paths.rs
//! Summary: 入場経路テンプレートと攻撃パターンの経路生成

use crate::entity_params::{BEHAVIOR_DIVE, BEHAVIOR_STRAFE};
use crate::physics::curve::{CurveSegment, PiecewisePath};
use crate::physics::rng::SimpleRng;

// ─── 入場経路 ───────────────────────────────────────────────

/// 入場経路テンプレート ID（スポーン順にサイクルして使用する）
pub const ENTRANCE_SWEEP_LEFT:  u8 = 0;
pub const ENTRANCE_SWEEP_RIGHT: u8 = 1;
pub const ENTRANCE_LOOP_DOWN:   u8 = 2;
pub const ENTRANCE_DIRECT_DROP: u8 = 3;
pub const ENTRANCE_TEMPLATE_COUNT: u8 = 4;

/// テンプレートからスロット上空までの入場経路を生成する。
/// 経路は画面外から始まり、スロットの少し上で終わる。残りは直線接近で
/// スロットへスナップする（enemy_ai 側の責務）。
pub fn entrance_path(template: u8, slot: (f32, f32), field_w: f32) -> PiecewisePath {
    let (sx, sy) = slot;
    let approach = (sx, sy - 40.0);
    let segments = match template % ENTRANCE_TEMPLATE_COUNT {
        ENTRANCE_SWEEP_LEFT => vec![CurveSegment {
            p0: (-60.0, -60.0),
            p1: (field_w * 0.45, 140.0),
            p2: (field_w * 0.2, sy + 120.0),
            p3: approach,
            duration: 2.2,
        }],
        ENTRANCE_SWEEP_RIGHT => vec![CurveSegment {
            p0: (field_w + 60.0, -60.0),
            p1: (field_w * 0.55, 140.0),
            p2: (field_w * 0.8, sy + 120.0),
            p3: approach,
            duration: 2.2,
        }],
        ENTRANCE_LOOP_DOWN => vec![
            CurveSegment {
                p0: (sx, -80.0),
                p1: (sx + 150.0, 120.0),
                p2: (sx - 150.0, 260.0),
                p3: (sx, 120.0),
                duration: 1.6,
            },
            CurveSegment::line((sx, 120.0), approach, 0.6),
        ],
        _ => vec![CurveSegment::line((sx, -80.0), approach, 1.6)],
    };
    PiecewisePath { segments, looping: false }
}

// ─── 攻撃パターン ───────────────────────────────────────────

/// 攻撃パターン ID
pub const ATTACK_DIVE:    u8 = 0;
pub const ATTACK_S_CURVE: u8 = 1;
pub const ATTACK_LOOP:    u8 = 2;
pub const ATTACK_PATTERN_COUNT: u8 = 3;

/// 行動タグと乱数から攻撃パターンを選ぶ
pub fn pick_attack_pattern(behavior: u8, rng: &mut SimpleRng) -> u8 {
    match behavior {
        BEHAVIOR_DIVE => ATTACK_DIVE,
        BEHAVIOR_STRAFE => ATTACK_S_CURVE,
        _ => rng.next_u32() as u8 % ATTACK_PATTERN_COUNT,
    }
}

/// 攻撃経路を生成する。制御点は発動時点の自機位置と敵の現在位置から
/// 相対的に決まり、以後再照準はしない。
pub fn attack_path(
    pattern: u8,
    from: (f32, f32),
    player: (f32, f32),
    field_h: f32,
    rng: &mut SimpleRng,
) -> PiecewisePath {
    let (ex, ey) = from;
    let (px, _) = player;
    let jitter = rng.next_range(-40.0, 40.0);
    match pattern % ATTACK_PATTERN_COUNT {
        ATTACK_DIVE => {
            // 自機の現在 x をめがけて一気に画面下へ抜ける
            let bottom = (px + jitter, field_h + 80.0);
            PiecewisePath {
                segments: vec![CurveSegment {
                    p0: from,
                    p1: (ex, ey + 150.0),
                    p2: (px + jitter * 0.5, field_h * 0.6),
                    p3: bottom,
                    duration: 1.8,
                }],
                looping: false,
            }
        }
        ATTACK_S_CURVE => {
            let mid = ((ex + px) / 2.0, field_h * 0.5);
            PiecewisePath {
                segments: vec![
                    CurveSegment {
                        p0: from,
                        p1: (ex - 120.0 + jitter, ey + 120.0),
                        p2: (mid.0 + 140.0, mid.1 - 60.0),
                        p3: mid,
                        duration: 1.2,
                    },
                    CurveSegment {
                        p0: mid,
                        p1: (mid.0 - 140.0, mid.1 + 80.0),
                        p2: (px - jitter, field_h * 0.85),
                        p3: (px, field_h + 80.0),
                        duration: 1.2,
                    },
                ],
                looping: false,
            }
        }
        _ => {
            // ループ: 降下して弧を描き、発動位置付近へ戻る（戻り補間は AI 側）
            let apex = (px + jitter, field_h * 0.55);
            PiecewisePath {
                segments: vec![
                    CurveSegment {
                        p0: from,
                        p1: (ex + 100.0, ey + 180.0),
                        p2: (apex.0 + 120.0, apex.1 - 40.0),
                        p3: apex,
                        duration: 1.4,
                    },
                    CurveSegment {
                        p0: apex,
                        p1: (apex.0 - 160.0, apex.1 + 60.0),
                        p2: (ex - 120.0, ey + 120.0),
                        p3: (ex, ey + 40.0),
                        duration: 1.4,
                    },
                ],
                looping: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_starts_offscreen_ends_above_slot() {
        for t in 0..ENTRANCE_TEMPLATE_COUNT {
            let path = entrance_path(t, (300.0, 100.0), 600.0);
            let (sx, sy) = path.segments[0].p0;
            assert!(
                sy < 0.0 || sx < 0.0 || sx > 600.0,
                "template {} starts on-screen at ({}, {})",
                t,
                sx,
                sy
            );
            let (ex, ey) = path.end_point();
            assert!((ex - 300.0).abs() < 1e-3);
            assert!((ey - 60.0).abs() < 1e-3);
            assert!(!path.looping);
        }
    }

    #[test]
    fn dive_path_exits_bottom() {
        let mut rng = SimpleRng::new(5);
        let path = attack_path(ATTACK_DIVE, (300.0, 100.0), (100.0, 700.0), 800.0, &mut rng);
        assert!(!path.looping);
        assert!(path.end_point().1 > 800.0);
    }

    #[test]
    fn loop_path_returns_near_origin() {
        let mut rng = SimpleRng::new(5);
        let path = attack_path(ATTACK_LOOP, (300.0, 100.0), (100.0, 700.0), 800.0, &mut rng);
        assert!(path.looping);
        let (ex, ey) = path.end_point();
        assert!((ex - 300.0).abs() < 1.0);
        assert!((ey - 140.0).abs() < 1.0);
    }

    #[test]
    fn dive_behavior_always_picks_dive() {
        let mut rng = SimpleRng::new(9);
        for _ in 0..10 {
            assert_eq!(pick_attack_pattern(BEHAVIOR_DIVE, &mut rng), ATTACK_DIVE);
        }
    }
}
