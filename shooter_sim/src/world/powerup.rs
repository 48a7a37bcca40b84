//! Path: shooter_sim/src/world/powerup.rs
//! Summary: パワーアップ SoA（PowerUpWorld）。下方へ漂い、取得か画面外で消える。

/// パワーアップ SoA（Structure of Arrays）
pub struct PowerUpWorld {
    pub positions_x: Vec<f32>,
    pub positions_y: Vec<f32>,
    /// 落下速度（px/s、下向き正）
    pub drift_vy:    Vec<f32>,
    pub kinds:       Vec<u8>,
    pub alive:       Vec<bool>,
    pub spawn_seq:   Vec<u64>,

    pub count: usize,
    cap:       usize,
    next_seq:  u64,
    /// 空きスロットのインデックススタック — O(1) でスロットを取得・返却
    free_list: Vec<usize>,
}

impl PowerUpWorld {
    pub fn new(cap: usize) -> Self {
        Self {
            positions_x: Vec::new(),
            positions_y: Vec::new(),
            drift_vy:    Vec::new(),
            kinds:       Vec::new(),
            alive:       Vec::new(),
            spawn_seq:   Vec::new(),
            count: 0,
            cap,
            next_seq: 0,
            free_list: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn spawn(&mut self, x: f32, y: f32, kind: u8) {
        let seq = self.next_seq;
        self.next_seq += 1;

        if self.count >= self.cap {
            // キャップ到達: 最古のアクティブ個体を上書き
            if let Some(oldest) = (0..self.len())
                .filter(|&i| self.alive[i])
                .min_by_key(|&i| self.spawn_seq[i])
            {
                self.positions_x[oldest] = x;
                self.positions_y[oldest] = y;
                self.drift_vy[oldest]    = 70.0;
                self.kinds[oldest]       = kind;
                self.spawn_seq[oldest]   = seq;
                return;
            }
        }

        if let Some(i) = self.free_list.pop() {
            self.positions_x[i] = x;
            self.positions_y[i] = y;
            self.drift_vy[i]    = 70.0;
            self.kinds[i]       = kind;
            self.alive[i]       = true;
            self.spawn_seq[i]   = seq;
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.drift_vy.push(70.0);
            self.kinds.push(kind);
            self.alive.push(true);
            self.spawn_seq.push(seq);
        }
        self.count += 1;
    }

    pub fn kill(&mut self, i: usize) {
        if i < self.alive.len() && self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }
}
