//! Path: shooter_sim/src/collab.rs
//! Summary: コラボレータ境界（音・スコア永続化・入力）。全て不在でも動く。

use crate::world::FrameEvent;

/// 1 tick ぶんのポーリング済み入力状態
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pub left:       bool,
    pub right:      bool,
    pub fire:       bool,
    pub auto_shoot: bool,
}

/// 効果音の再生要求（fire-and-forget、完了は待たない）
pub trait AudioSink {
    fn play(&self, effect: &str, volume: f32);
}

/// ハイスコアの永続化。失敗してもゲーム状態には影響しない。
pub trait ScoreStore {
    fn is_high_score(&self, score: u32) -> bool;
    /// 非同期送信の発火のみ。結果は待たない。
    fn submit(&self, name: &str, score: u32, level: u32);
}

/// ポーリング型の入力コラボレータ。コアは生のイベントを解釈しない。
pub trait InputSource {
    fn poll(&self) -> InputState;
}

/// コラボレータ不在時のヌル実装
pub struct NullCollaborators;

impl AudioSink for NullCollaborators {
    fn play(&self, _effect: &str, _volume: f32) {}
}

impl ScoreStore for NullCollaborators {
    fn is_high_score(&self, _score: u32) -> bool {
        false
    }
    fn submit(&self, _name: &str, _score: u32, _level: u32) {}
}

impl InputSource for NullCollaborators {
    fn poll(&self) -> InputState {
        InputState::default()
    }
}

/// フレームイベントを効果音要求に写像してシンクへ流す。
/// ホストはイベント drain 後にこれを呼ぶだけでよい。
pub fn dispatch_audio<A: AudioSink + ?Sized>(events: &[FrameEvent], sink: &A) {
    for ev in events {
        match ev {
            FrameEvent::EnemyKilled { .. } => sink.play("explosion", 0.8),
            FrameEvent::EnemyHit { .. } => sink.play("hit", 0.4),
            FrameEvent::BulletClash { .. } => sink.play("clash", 0.5),
            FrameEvent::PlayerDamaged { .. } => sink.play("player_hit", 1.0),
            FrameEvent::ShieldBlocked => sink.play("shield", 0.6),
            FrameEvent::PowerUpCollected { .. } => sink.play("powerup", 0.7),
            FrameEvent::BombDetonated { .. } => sink.play("bomb", 1.0),
            FrameEvent::LevelCleared { .. } => sink.play("level_clear", 0.9),
            FrameEvent::GameOver { .. } => sink.play("game_over", 1.0),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSink(RefCell<Vec<String>>);

    impl AudioSink for RecordingSink {
        fn play(&self, effect: &str, _volume: f32) {
            self.0.borrow_mut().push(effect.to_string());
        }
    }

    #[test]
    fn dispatch_maps_events_to_effects() {
        let sink = RecordingSink(RefCell::new(Vec::new()));
        let events = vec![
            FrameEvent::EnemyKilled { kind: 0, points: 100, x: 0.0, y: 0.0 },
            FrameEvent::WaveStarted { level: 2 },
            FrameEvent::ShieldBlocked,
        ];
        dispatch_audio(&events, &sink);
        let played = sink.0.borrow();
        assert_eq!(played.as_slice(), &["explosion", "shield"]);
    }

    #[test]
    fn null_collaborators_are_noops() {
        let null = NullCollaborators;
        null.play("explosion", 1.0);
        null.submit("aaa", 100, 1);
        assert!(!null.is_high_score(u32::MAX));
        assert!(!null.poll().fire);
    }
}
