mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use invaders::audio::{AudioSink, LogAudio};
use invaders::events::GameEvent;
use invaders::session::{Phase, Session};
use invaders::sim::{self, Input};

use display::Viewport;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so the window is always refreshed
/// before expiry while the key is actually down.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the user quits.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame we sample which keys are still "fresh"
/// (within `HOLD_WINDOW` frames) into the logical held-action set the
/// simulation consumes.  Holding fire is fine; the 500 ms cooldown inside
/// the simulation gates the actual fire rate.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut audio = LogAudio;
    let mut session = Session::new();

    let epoch = Instant::now();
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Enter if session.phase == Phase::NotStarted => {
                            let mut events = Vec::new();
                            session.start(now_ms, &mut events);
                            dispatch(&events, &mut audio);
                            log::info!("game started");
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if session.phase == Phase::GameOver =>
                        {
                            let mut events = Vec::new();
                            session.start(now_ms, &mut events);
                            dispatch(&events, &mut audio);
                            log::info!("game restarted");
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Sample held actions and advance the simulation ────────────────────
        let input = Input {
            left: is_held(&key_frame, &KeyCode::Left, frame)
                || is_held(&key_frame, &KeyCode::Char('a'), frame)
                || is_held(&key_frame, &KeyCode::Char('A'), frame),
            right: is_held(&key_frame, &KeyCode::Right, frame)
                || is_held(&key_frame, &KeyCode::Char('d'), frame)
                || is_held(&key_frame, &KeyCode::Char('D'), frame),
            fire: is_held(&key_frame, &KeyCode::Char(' '), frame),
        };

        let (next, events) = sim::tick(&session, &input, now_ms, &mut rng);
        session = next;
        dispatch(&events, &mut audio);

        let (cols, rows) = terminal::size()?;
        display::render(out, &session, Viewport::new(cols, rows))?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

/// Push simulation events out to the collaborators: cues to the audio sink,
/// the rest to the log (the HUD redraws from state every frame).
fn dispatch(events: &[GameEvent], audio: &mut impl AudioSink) {
    for event in events {
        match *event {
            GameEvent::Cue(cue) => audio.play(cue),
            GameEvent::ScoreChanged(score) => log::debug!("score: {}", score),
            GameEvent::LivesChanged(lives) => log::debug!("lives: {}", lives),
            GameEvent::WaveCleared => log::info!("wave cleared"),
            GameEvent::WaveStarted => log::info!("wave started"),
            GameEvent::GameOver { final_score } => {
                log::info!("game over, final score {}", final_score)
            }
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    // Raw mode owns the screen; send diagnostics elsewhere, e.g.
    //   RUST_LOG=debug invaders 2>invaders.log
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
