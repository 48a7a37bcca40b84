//! Path: shooter_core/src/physics/curve.rs
//! Summary: 3次ベジェ曲線と区分経路（秒単位タイミング）の評価

/// 3次ベジェ曲線を `t ∈ [0,1]` で評価する
pub fn cubic_bezier(
    p0: (f32, f32),
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    t: f32,
) -> (f32, f32) {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;
    let a = uu * u;
    let b = 3.0 * uu * t;
    let c = 3.0 * u * tt;
    let d = tt * t;
    (
        a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
        a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
    )
}

/// 区分経路の 1 セグメント。`duration` 秒かけて始点から終点まで進む。
#[derive(Clone, Copy, Debug)]
pub struct CurveSegment {
    pub p0: (f32, f32),
    pub p1: (f32, f32),
    pub p2: (f32, f32),
    pub p3: (f32, f32),
    pub duration: f32,
}

impl CurveSegment {
    /// 直線セグメント（制御点を 1/3・2/3 の位置に置く）
    pub fn line(from: (f32, f32), to: (f32, f32), duration: f32) -> Self {
        let p1 = (
            from.0 + (to.0 - from.0) / 3.0,
            from.1 + (to.1 - from.1) / 3.0,
        );
        let p2 = (
            from.0 + (to.0 - from.0) * 2.0 / 3.0,
            from.1 + (to.1 - from.1) * 2.0 / 3.0,
        );
        Self { p0: from, p1, p2, p3: to, duration }
    }

    pub fn eval(&self, t: f32) -> (f32, f32) {
        cubic_bezier(self.p0, self.p1, self.p2, self.p3, t)
    }
}

/// 区分経路。セグメントごとに秒単位でタイミングされる。
#[derive(Clone, Debug, Default)]
pub struct PiecewisePath {
    pub segments: Vec<CurveSegment>,
    /// 経路終端が隊列へ戻るループ経路かどうか
    pub looping: bool,
}

impl PiecewisePath {
    pub fn total_duration(&self) -> f32 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// 経路開始からの経過秒 `elapsed` に対応する位置を返す。
    /// 経路終端を越えていれば `None`（呼び出し側が完了処理を行う）。
    pub fn sample(&self, elapsed: f32) -> Option<(f32, f32)> {
        let mut remaining = elapsed;
        for seg in &self.segments {
            if remaining <= seg.duration {
                let t = if seg.duration > 0.0 {
                    remaining / seg.duration
                } else {
                    1.0
                };
                return Some(seg.eval(t));
            }
            remaining -= seg.duration;
        }
        None
    }

    /// 経路終端の位置（セグメントが空なら原点）
    pub fn end_point(&self) -> (f32, f32) {
        self.segments.last().map(|s| s.p3).unwrap_or((0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bezier_endpoints() {
        let (x0, y0) = cubic_bezier((0.0, 0.0), (10.0, 0.0), (20.0, 10.0), (30.0, 10.0), 0.0);
        assert!((x0 - 0.0).abs() < 1e-5 && (y0 - 0.0).abs() < 1e-5);
        let (x1, y1) = cubic_bezier((0.0, 0.0), (10.0, 0.0), (20.0, 10.0), (30.0, 10.0), 1.0);
        assert!((x1 - 30.0).abs() < 1e-5 && (y1 - 10.0).abs() < 1e-5);
    }

    #[test]
    fn line_segment_is_straight() {
        let seg = CurveSegment::line((0.0, 0.0), (100.0, 0.0), 1.0);
        let (x, y) = seg.eval(0.5);
        assert!((x - 50.0).abs() < 1e-3);
        assert!(y.abs() < 1e-3);
    }

    #[test]
    fn path_sample_walks_segments() {
        let path = PiecewisePath {
            segments: vec![
                CurveSegment::line((0.0, 0.0), (100.0, 0.0), 1.0),
                CurveSegment::line((100.0, 0.0), (100.0, 100.0), 2.0),
            ],
            looping: false,
        };
        assert!((path.total_duration() - 3.0).abs() < 1e-6);

        let (x, _) = path.sample(0.5).unwrap();
        assert!((x - 50.0).abs() < 1e-3);

        let (x2, y2) = path.sample(2.0).unwrap();
        assert!((x2 - 100.0).abs() < 1e-3);
        assert!((y2 - 50.0).abs() < 1e-3);

        assert!(path.sample(3.1).is_none());
        assert_eq!(path.end_point(), (100.0, 100.0));
    }
}
