//! Path: shooter_sim/src/game_logic/systems/leveling.rs
//! Summary: レベル・ウェーブ進行状態とレベルクリア遷移

/// 不正なレベル値（NaN・非正・過大）を安全なレベルに丸める。
/// 致命的エラーにはせず、ログを残してレベル 1 に倒す。
pub fn sanitize_level(raw: f64) -> u32 {
    if !raw.is_finite() || raw < 1.0 {
        log::warn!("invalid level {:?}: clamping to 1", raw);
        return 1;
    }
    if raw > 9999.0 {
        log::warn!("level {} out of range: clamping to 9999", raw);
        return 9999;
    }
    raw as u32
}

/// レベル/ウェーブ進行状態。遷移は同時に 1 つだけ。
pub struct LevelState {
    pub current_level: u32,
    pub kills_this_level: u32,
    pub total_this_level: u32,
    pub spawned_this_level: u32,
    pub is_transitioning: bool,
    pub transition_elapsed: f32,
    /// ウェーブ開始からの経過秒（攻撃確率のランプに使用）
    pub wave_elapsed: f32,
    /// 補充スポーンのインターバルタイマー
    pub backfill_timer: f32,
}

impl LevelState {
    pub fn new() -> Self {
        Self {
            current_level: 1,
            kills_this_level: 0,
            total_this_level: 0,
            spawned_this_level: 0,
            is_transitioning: false,
            transition_elapsed: 0.0,
            wave_elapsed: 0.0,
            backfill_timer: 0.0,
        }
    }

    /// ウェーブ開始時のカウンタリセット
    pub fn begin_wave(&mut self, total: u32) {
        self.kills_this_level = 0;
        self.total_this_level = total;
        self.spawned_this_level = total;
        self.wave_elapsed = 0.0;
        self.backfill_timer = 0.0;
    }

    /// レベルクリア遷移を開始する。既に遷移中なら何もしない。
    pub fn start_transition(&mut self) -> bool {
        if self.is_transitioning {
            return false;
        }
        self.is_transitioning = true;
        self.transition_elapsed = 0.0;
        true
    }

    /// 遷移を dt 秒進める。完了した tick でのみ true を返し、レベルを
    /// ちょうど 1 上げる。
    pub fn update_transition(&mut self, dt: f32, duration: f32) -> bool {
        if !self.is_transitioning {
            return false;
        }
        self.transition_elapsed += dt;
        if self.transition_elapsed >= duration {
            self.is_transitioning = false;
            self.current_level += 1;
            return true;
        }
        false
    }

    /// キル数と残存数を併用したクリア判定。ウェーブのスポーンが
    /// 終わる前に誤ってクリア扱いにならないよう、キル数が意図した
    /// 総数へ達していることも要求する。
    pub fn all_cleared(&self, active_enemies: usize) -> bool {
        active_enemies == 0
            && self.total_this_level > 0
            && self.kills_this_level >= self.total_this_level
    }
}
