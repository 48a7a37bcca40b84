//! Path: shooter_sim/src/world/game_loop_control.rs
//! Summary: ゲームループ制御用（pause/resume）リソース

/// ポーズ中は物理ステップ全体を止める。描画側は凍結状態をそのまま
/// 読み続けられる。
pub struct GameLoopControl {
    paused: std::sync::atomic::AtomicBool,
}

impl GameLoopControl {
    pub fn new() -> Self {
        Self {
            paused: std::sync::atomic::AtomicBool::new(false),
        }
    }
    pub fn pause(&self) {
        self.paused.store(true, std::sync::atomic::Ordering::SeqCst);
    }
    pub fn resume(&self) {
        self.paused.store(false, std::sync::atomic::Ordering::SeqCst);
    }
    pub fn is_paused(&self) -> bool {
        self.paused.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl Default for GameLoopControl {
    fn default() -> Self {
        Self::new()
    }
}
