//! Path: shooter_sim/src/main.rs
//! Summary: ヘッドレス実行バイナリ。合成入力で N tick 回して結果を出力する。
//!
//! レンダラなしでシミュレーションの挙動・性能を確認するための
//! スタンドアロン実行ファイル。`RUST_LOG=debug cargo run` で詳細ログ。

use shooter_sim::{
    build_render_frame, dispatch_audio, physics_step, GameLoopControl, GameWorld, InputState,
    NullCollaborators, SimConfig,
};
use std::time::Instant;

const TICKS: u32 = 60 * 120; // 2 分ぶん
const DT: f32 = 1.0 / 60.0;

/// 合成入力: 常時射撃しつつ左右に往復する
fn scripted_input(tick: u32) -> InputState {
    let phase = (tick / 90) % 4;
    InputState {
        left: phase == 1,
        right: phase == 3,
        fire: false,
        auto_shoot: true,
    }
}

fn main() {
    env_logger::init();

    let audio = NullCollaborators;
    let world = GameWorld::new(SimConfig::default());
    let control = GameLoopControl::new();
    let started = Instant::now();
    let mut worst_ms = 0.0f64;

    for tick in 0..TICKS {
        // ポーズ制御のデモ: 30 秒地点で 1 秒ぶん停止する
        if tick == 60 * 30 {
            control.pause();
        } else if tick == 60 * 31 {
            control.resume();
        }
        if control.is_paused() {
            continue;
        }

        let Ok(mut w) = world.0.write() else {
            log::error!("world lock poisoned: aborting run");
            return;
        };
        physics_step(&mut w, DT, &scripted_input(tick));
        worst_ms = worst_ms.max(w.last_frame_time_ms);

        let events = w.drain_frame_events();
        dispatch_audio(&events, &audio);
        for ev in &events {
            log::debug!("frame {}: {:?}", w.frame_id, ev);
        }

        if w.game_over {
            break;
        }
    }

    let wall = started.elapsed();
    let Ok(w) = world.0.read() else {
        log::error!("world lock poisoned after run");
        return;
    };
    let frame = build_render_frame(&w);
    println!("ticks:      {}", w.frame_id);
    println!("sim time:   {:.1} s", w.elapsed_seconds);
    println!("wall time:  {:.1} ms (worst tick {:.3} ms)", wall.as_secs_f64() * 1000.0, worst_ms);
    println!("level:      {}", w.level.current_level);
    println!("score:      {}", w.score);
    println!("kills:      {}", w.kill_count);
    println!("lives left: {}", w.player.lives);
    println!("sprites:    {}", frame.sprites.len());
    if w.game_over {
        println!("result:     game over");
    } else {
        println!("result:     survived");
    }
}
