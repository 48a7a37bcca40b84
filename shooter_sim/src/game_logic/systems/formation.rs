//! Path: shooter_sim/src/game_logic/systems/formation.rs
//! Summary: ウェーブ生成（隊列構築・スロット割当・入場スタッガー）と中盤補充

use crate::world::{EnemySpawn, FormationGrid, FrameEvent, GameWorldInner, OWNER_ENEMY};
use shooter_core::constants::{BACKFILL_BATCH, BACKFILL_INTERVAL, BACKFILL_THRESHOLD};
use shooter_core::paths::{entrance_path, ENTRANCE_TEMPLATE_COUNT};
use shooter_core::util::{formation_dims, pick_behavior_tag, pick_enemy_kind};

/// 新しいウェーブを開始する。現在の敵と敵弾を消し、レベルに応じた
/// 隊列グリッドを構築して全スロットに敵を割り当てる。
/// 各敵は入場テンプレートをサイクルで受け取り、開始時刻をずらされる。
pub(crate) fn start_wave(w: &mut GameWorldInner) {
    let level = w.level.current_level;

    // 前ウェーブの残骸を掃除（スロットはグリッドごと作り直す）
    w.enemies.clear();
    w.bullets.clear_owner(OWNER_ENEMY);

    let (rows, cols) = formation_dims(level);
    w.formation = FormationGrid::build(rows, cols, w.config.field_width);

    let mut spawned = 0u32;
    for idx in 0..w.formation.slots.len() {
        if spawn_into_slot(w, idx, spawned) {
            spawned += 1;
        }
    }

    // 経路生成が 1 体も生まなかった場合の最小フォールバック隊列。
    // レベルをクリア不能なまま放置しない。
    if spawned == 0 {
        log::warn!("wave generation produced no enemies: synthesizing fallback row");
        w.formation = FormationGrid::build(1, 4, w.config.field_width);
        for idx in 0..w.formation.slots.len() {
            if spawn_into_slot(w, idx, spawned) {
                spawned += 1;
            }
        }
    }

    w.level.begin_wave(spawned);
    w.frame_events.push(FrameEvent::WaveStarted { level });
    log::debug!("wave started: level={} enemies={}", level, spawned);
}

/// 指定スロットに敵を 1 体スポーンする。スロット占有に失敗したら false。
fn spawn_into_slot(w: &mut GameWorldInner, slot_idx: usize, ordinal: u32) -> bool {
    let level = w.level.current_level;
    let cols = w.formation.cols.max(1);
    let row = slot_idx / cols;

    let Some(slot) = w.formation.slots.get_mut(slot_idx) else {
        return false;
    };
    if slot.taken {
        return false;
    }
    slot.taken = true;
    let slot_pos = (slot.x, slot.y);

    let kind = pick_enemy_kind(level, row, &mut w.rng);
    let behavior = pick_behavior_tag(level, &mut w.rng);
    let template = (ordinal % ENTRANCE_TEMPLATE_COUNT as u32) as u8;
    let cooldown = w.rng.next_range(2.0, 6.0);

    w.enemies.spawn(EnemySpawn {
        kind_id: kind,
        behavior,
        slot: slot_idx,
        path: entrance_path(template, slot_pos, w.config.field_width),
        entry_delay: ordinal as f32 * 0.15,
        hover_phase: ordinal as f32 * 0.7,
        attack_cooldown: cooldown,
    });
    true
}

/// 中盤補充。残存数が閾値を下回り、かつキルノルマが未達の間だけ、
/// レート上限付きで少数を追加スポーンする。
pub(crate) fn update_backfill(w: &mut GameWorldInner, dt: f32) {
    if w.level.is_transitioning || w.game_over {
        return;
    }
    if w.level.backfill_timer > 0.0 {
        w.level.backfill_timer -= dt;
        return;
    }

    let active = w.enemies.count;
    let quota_left = w
        .level
        .total_this_level
        .saturating_sub(w.level.kills_this_level) as usize;
    let needed = quota_left.saturating_sub(active);

    if active >= BACKFILL_THRESHOLD || needed == 0 {
        return;
    }

    let batch = needed.min(BACKFILL_BATCH).min(w.formation.free_count());
    let mut spawned = 0u32;
    for _ in 0..batch {
        let Some(idx) = w.formation.claim_free() else { break };
        // claim_free が占有フラグを立て済みなので一旦戻して共通経路へ
        w.formation.release(idx);
        // スタッガーはバッチ内の序数で短く刻む。セッション累計値を
        // 渡すと入場待機が際限なく伸びる。
        if spawn_into_slot(w, idx, spawned) {
            spawned += 1;
        }
    }
    if spawned > 0 {
        w.level.spawned_this_level += spawned;
        w.level.backfill_timer = BACKFILL_INTERVAL;
        log::debug!("backfilled {} enemies (active={})", spawned, w.enemies.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::world::STATE_ENTERING;

    fn world() -> GameWorldInner {
        GameWorldInner::new(SimConfig::default())
    }

    #[test]
    fn start_wave_fills_every_slot_uniquely() {
        let mut w = world();
        start_wave(&mut w);
        let (rows, cols) = formation_dims(1);
        assert_eq!(w.enemies.count, rows * cols);
        assert_eq!(w.level.total_this_level, (rows * cols) as u32);
        assert_eq!(w.formation.free_count(), 0);

        // スロット割当は一意
        let mut seen = std::collections::HashSet::new();
        for i in 0..w.enemies.len() {
            if w.enemies.alive[i] {
                assert!(seen.insert(w.enemies.slot[i]));
            }
        }
    }

    #[test]
    fn start_wave_emits_event_and_enters_entering() {
        let mut w = world();
        start_wave(&mut w);
        assert!(w
            .frame_events
            .iter()
            .any(|e| matches!(e, FrameEvent::WaveStarted { level: 1 })));
        for i in 0..w.enemies.len() {
            if w.enemies.alive[i] {
                assert_eq!(w.enemies.state[i], STATE_ENTERING);
            }
        }
    }

    #[test]
    fn start_wave_clears_previous_enemies() {
        let mut w = world();
        start_wave(&mut w);
        let first_count = w.enemies.count;
        w.level.current_level = 2;
        start_wave(&mut w);
        assert!(w.enemies.count >= first_count);
        assert_eq!(w.enemies.count, w.level.total_this_level as usize);
    }

    #[test]
    fn backfill_waits_for_low_active_count() {
        let mut w = world();
        start_wave(&mut w);
        update_backfill(&mut w, 0.1);
        // 全員残っている間は補充しない
        assert_eq!(
            w.enemies.count,
            w.level.total_this_level as usize
        );
    }

    #[test]
    fn backfill_replaces_escaped_enemies() {
        let mut w = world();
        start_wave(&mut w);
        // 画面外へ逃げた体で全員を除去（キルにはならない）
        for i in 0..w.enemies.len() {
            if w.enemies.alive[i] {
                let s = w.enemies.slot[i];
                w.formation.release(s);
                w.enemies.kill(i);
            }
        }
        assert_eq!(w.enemies.count, 0);
        w.level.backfill_timer = 0.0;
        update_backfill(&mut w, 0.1);
        assert!(w.enemies.count > 0);
        assert!(w.enemies.count <= BACKFILL_BATCH);
        // レート上限: 直後の再補充はインターバルが空くまで走らない
        let after_first = w.enemies.count;
        update_backfill(&mut w, 0.01);
        assert_eq!(w.enemies.count, after_first);
    }

    #[test]
    fn backfill_stagger_is_short_even_late_in_session() {
        let mut w = world();
        start_wave(&mut w);
        for i in 0..w.enemies.len() {
            if w.enemies.alive[i] {
                let s = w.enemies.slot[i];
                w.formation.release(s);
                w.enemies.kill(i);
            }
        }
        // セッション累計キル数が大きくても入場待機はバッチ内序数ぶんだけ
        w.kill_count = 200;
        w.level.backfill_timer = 0.0;
        update_backfill(&mut w, 0.1);
        assert!(w.enemies.count > 0);
        for i in 0..w.enemies.len() {
            if w.enemies.alive[i] {
                assert!(
                    w.enemies.entry_delay[i] < BACKFILL_BATCH as f32 * 0.15 + 1e-3,
                    "entry_delay={}",
                    w.enemies.entry_delay[i]
                );
            }
        }
    }
}
