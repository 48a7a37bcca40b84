//! Path: shooter_core/src/physics/overlap.rs
//! Summary: 円同士・点と矩形の重なり判定

/// 円同士の重なり判定（中心間距離 < 半径和）
pub fn circles_overlap(ax: f32, ay: f32, ar: f32, bx: f32, by: f32, br: f32) -> bool {
    let dx = ax - bx;
    let dy = ay - by;
    let r = ar + br;
    dx * dx + dy * dy < r * r
}

/// 点が矩形内にあるか（UI ヒットテスト用）
pub fn point_in_rect(px: f32, py: f32, x: f32, y: f32, w: f32, h: f32) -> bool {
    px >= x && px <= x + w && py >= y && py <= y + h
}
