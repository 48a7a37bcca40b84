//! Path: shooter_sim/src/world/enemy.rs
//! Summary: 敵 SoA（EnemyWorld）と隊列グリッド（FormationGrid）

use shooter_core::entity_params::EnemyParams;
use shooter_core::physics::curve::PiecewisePath;

/// 敵の状態
pub const STATE_ENTERING:  u8 = 0;
pub const STATE_FORMATION: u8 = 1;
pub const STATE_ATTACKING: u8 = 2;

/// スロット未割当を表す番兵値
pub const NO_SLOT: usize = usize::MAX;

/// 敵 SoA（Structure of Arrays）
pub struct EnemyWorld {
    pub positions_x: Vec<f32>,
    pub positions_y: Vec<f32>,
    pub kind_ids:    Vec<u8>,
    pub hp:          Vec<i32>,
    pub alive:       Vec<bool>,
    pub state:       Vec<u8>,
    /// 行動タグ（BEHAVIOR_*）
    pub behavior:    Vec<u8>,
    /// 割当スロットのインデックス（NO_SLOT なら未割当）
    pub slot:        Vec<usize>,

    /// 入場・攻撃で共用する経路と経過秒
    pub path:         Vec<PiecewisePath>,
    pub path_elapsed: Vec<f32>,
    /// 入場開始までの待機秒（スタッガー）
    pub entry_delay:  Vec<f32>,

    /// 隊列ホバリングの位相（個体ごとに独立）
    pub hover_phase: Vec<f32>,
    /// 攻撃降下のクールダウン（秒）
    pub attack_cooldown: Vec<f32>,
    /// ループ攻撃後、スロットへ戻る補間中か
    pub returning:       Vec<bool>,
    pub return_from_x:   Vec<f32>,
    pub return_from_y:   Vec<f32>,
    pub return_elapsed:  Vec<f32>,

    pub count: usize,
    /// 空きスロットのインデックススタック — O(1) でスロットを取得・返却
    free_list: Vec<usize>,
}

/// 1 体ぶんのスポーンパラメータ
pub struct EnemySpawn {
    pub kind_id:     u8,
    pub behavior:    u8,
    pub slot:        usize,
    pub path:        PiecewisePath,
    pub entry_delay: f32,
    pub hover_phase: f32,
    pub attack_cooldown: f32,
}

impl EnemyWorld {
    pub fn new() -> Self {
        Self {
            positions_x: Vec::new(),
            positions_y: Vec::new(),
            kind_ids:    Vec::new(),
            hp:          Vec::new(),
            alive:       Vec::new(),
            state:       Vec::new(),
            behavior:    Vec::new(),
            slot:        Vec::new(),
            path:         Vec::new(),
            path_elapsed: Vec::new(),
            entry_delay:  Vec::new(),
            hover_phase: Vec::new(),
            attack_cooldown: Vec::new(),
            returning:       Vec::new(),
            return_from_x:   Vec::new(),
            return_from_y:   Vec::new(),
            return_elapsed:  Vec::new(),
            count: 0,
            free_list: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// ENTERING で経路の始点からスポーンする。空きスロットがあれば O(1) で再利用。
    pub fn spawn(&mut self, s: EnemySpawn) -> usize {
        let params = EnemyParams::get(s.kind_id);
        let (x, y) = s
            .path
            .segments
            .first()
            .map(|seg| seg.p0)
            .unwrap_or((0.0, -80.0));
        if let Some(i) = self.free_list.pop() {
            self.positions_x[i] = x;
            self.positions_y[i] = y;
            self.kind_ids[i]    = s.kind_id;
            self.hp[i]          = params.max_hp;
            self.alive[i]       = true;
            self.state[i]       = STATE_ENTERING;
            self.behavior[i]    = s.behavior;
            self.slot[i]        = s.slot;
            self.path[i]         = s.path;
            self.path_elapsed[i] = 0.0;
            self.entry_delay[i]  = s.entry_delay;
            self.hover_phase[i] = s.hover_phase;
            self.attack_cooldown[i] = s.attack_cooldown;
            self.returning[i]       = false;
            self.return_from_x[i]   = 0.0;
            self.return_from_y[i]   = 0.0;
            self.return_elapsed[i]  = 0.0;
            self.count += 1;
            i
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.kind_ids.push(s.kind_id);
            self.hp.push(params.max_hp);
            self.alive.push(true);
            self.state.push(STATE_ENTERING);
            self.behavior.push(s.behavior);
            self.slot.push(s.slot);
            self.path.push(s.path);
            self.path_elapsed.push(0.0);
            self.entry_delay.push(s.entry_delay);
            self.hover_phase.push(s.hover_phase);
            self.attack_cooldown.push(s.attack_cooldown);
            self.returning.push(false);
            self.return_from_x.push(0.0);
            self.return_from_y.push(0.0);
            self.return_elapsed.push(0.0);
            self.count += 1;
            self.len() - 1
        }
    }

    /// 敵を消去してスロットを返却する（冪等）。隊列スロットの解放は呼び出し側。
    pub fn kill(&mut self, i: usize) {
        if i < self.alive.len() && self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }

    /// 既に除去済みの個体へのダメージは no-op（冪等な除去）
    pub fn damage(&mut self, i: usize, amount: i32) -> bool {
        if i >= self.alive.len() || !self.alive[i] {
            return false;
        }
        self.hp[i] -= amount;
        self.hp[i] <= 0
    }

    pub fn clear(&mut self) {
        for i in 0..self.len() {
            self.kill(i);
        }
    }
}

// ─── FormationGrid ──────────────────────────────────────────

/// 隊列の静止位置スロット
#[derive(Clone, Copy, Debug)]
pub struct FormationSlot {
    pub x:     f32,
    pub y:     f32,
    pub taken: bool,
}

/// 隊列グリッド。スロットの占有は高々 1 体。
pub struct FormationGrid {
    pub slots: Vec<FormationSlot>,
    pub rows:  usize,
    pub cols:  usize,
}

impl FormationGrid {
    pub fn empty() -> Self {
        Self { slots: Vec::new(), rows: 0, cols: 0 }
    }

    /// rows × cols のグリッドをフィールド上部に等間隔で構築する
    pub fn build(rows: usize, cols: usize, field_width: f32) -> Self {
        let margin = 60.0;
        let usable = field_width - margin * 2.0;
        let step_x = if cols > 1 { usable / (cols as f32 - 1.0) } else { 0.0 };
        let step_y = 48.0;
        let top = 80.0;
        let mut slots = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let x = if cols > 1 {
                    margin + c as f32 * step_x
                } else {
                    field_width / 2.0
                };
                slots.push(FormationSlot {
                    x,
                    y: top + r as f32 * step_y,
                    taken: false,
                });
            }
        }
        Self { slots, rows, cols }
    }

    /// 未占有スロットを 1 つ確保する
    pub fn claim_free(&mut self) -> Option<usize> {
        let idx = self.slots.iter().position(|s| !s.taken)?;
        self.slots[idx].taken = true;
        Some(idx)
    }

    pub fn release(&mut self, idx: usize) {
        if let Some(s) = self.slots.get_mut(idx) {
            s.taken = false;
        }
    }

    pub fn position(&self, idx: usize) -> Option<(f32, f32)> {
        self.slots.get(idx).map(|s| (s.x, s.y))
    }

    pub fn free_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.taken).count()
    }
}
