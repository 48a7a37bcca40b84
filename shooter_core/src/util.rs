//! Path: shooter_core/src/util.rs
//! Summary: 隊列グリッド寸法・難易度スケーリング・敵タイプ抽選の共通ユーティリティ

use crate::entity_params::{
    EnemyParams, BEHAVIOR_NONE, BEHAVIOR_UNLOCK_LEVELS, ENEMY_ID_DRONE,
};
use crate::physics::rng::SimpleRng;

/// レベルに応じた隊列グリッド（行, 列）。上限あり。
pub fn formation_dims(level: u32) -> (usize, usize) {
    let level = level.max(1);
    let rows = (2 + level as usize / 2).min(5);
    let cols = (6 + level as usize / 3).min(10);
    (rows, cols)
}

/// 撃破スコアに掛かるレベル倍率
pub fn point_multiplier(level: u32) -> f32 {
    1.0 + 0.1 * (level.max(1) - 1) as f32
}

/// 隊列メンバーが攻撃降下に引き込まれる確率（秒あたり、隊列全体で 1 体まで）
pub fn attack_pull_per_sec(level: u32, elapsed_secs: f32) -> f32 {
    let base = 0.20 + 0.05 * (level.max(1) - 1) as f32;
    // 長引いたウェーブは徐々に攻撃的になる
    let ramp = (elapsed_secs / 60.0).min(1.0) * 0.15;
    (base + ramp).min(1.5)
}

/// レベルに応じた敵タイプ抽選。高レベルほど上位タイプの比率が上がる。
pub fn pick_enemy_kind(level: u32, row: usize, rng: &mut SimpleRng) -> u8 {
    let level = level.max(1);
    // 先頭行（画面上側）ほど上位タイプが出やすい
    let tier_bonus = if row == 0 { 1 } else { 0 };
    let unlocked: Vec<u8> = (0..EnemyParams::table_len() as u8)
        .filter(|&id| EnemyParams::get(id).unlock_level <= level + tier_bonus)
        .collect();
    if unlocked.len() <= 1 {
        return ENEMY_ID_DRONE;
    }
    // 下位タイプほど重い重み（上位は控えめに混ざる）
    let weights: Vec<u32> = unlocked
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let rank = unlocked.len() - i;
            (rank * rank) as u32
        })
        .collect();
    let total: u32 = weights.iter().sum();
    let mut roll = rng.next_u32() % total;
    for (i, &w) in weights.iter().enumerate() {
        if roll < w {
            return unlocked[i];
        }
        roll -= w;
    }
    ENEMY_ID_DRONE
}

/// レベルで解禁済みの行動タグから抽選する（多くは無印のまま）
pub fn pick_behavior_tag(level: u32, rng: &mut SimpleRng) -> u8 {
    let level = level.max(1);
    let unlocked: Vec<u8> = BEHAVIOR_UNLOCK_LEVELS
        .iter()
        .enumerate()
        .filter(|&(_, &ul)| ul <= level)
        .map(|(i, _)| i as u8)
        .collect();
    // 70% は無印
    if rng.next_u32() % 10 < 7 || unlocked.len() <= 1 {
        return BEHAVIOR_NONE;
    }
    unlocked[1 + (rng.next_u32() as usize % (unlocked.len() - 1))]
}
