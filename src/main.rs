mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use alien_invasion::input::{apply_input, Command, InputEvent, Key, PlayButton};
use alien_invasion::render::draw_frame;
use alien_invasion::{BaseSettings, Game, SessionSignal, TICKS_PER_SECOND};

use display::TerminalSurface;

const FRAME: Duration = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND as u64);

/// Terminals without key-release reporting only send repeated presses
/// while a key is held. A direction key with no press for this long is
/// treated as released. Must exceed the OS initial key-repeat delay
/// (660 ms on a stock X11 server).
const HOLD_WINDOW: Duration = Duration::from_millis(750);

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// Last press/repeat time of each held direction key.
#[derive(Default)]
struct HeldKeys {
    last_seen: HashMap<Key, Instant>,
}

impl HeldKeys {
    fn press(&mut self, key: Key, now: Instant) {
        self.last_seen.insert(key, now);
    }

    fn release(&mut self, key: Key) {
        self.last_seen.remove(&key);
    }

    /// Remove and return every key that has gone quiet.
    fn expire(&mut self, now: Instant) -> Vec<Key> {
        let stale: Vec<Key> = self
            .last_seen
            .iter()
            .filter(|(_, &seen)| now.duration_since(seen) > HOLD_WINDOW)
            .map(|(&key, _)| key)
            .collect();
        for key in &stale {
            self.last_seen.remove(key);
        }
        stale
    }
}

fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => Some(Key::Play),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

/// Turn one raw terminal event into core input events.
fn translate<W: Write>(
    event: Event,
    now: Instant,
    held: &mut HeldKeys,
    surface: &mut TerminalSurface<'_, W>,
) -> Vec<InputEvent> {
    match event {
        Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) => {
            let Some(key) = map_key(code, modifiers) else {
                return Vec::new();
            };
            let is_direction = matches!(key, Key::Left | Key::Right);
            match kind {
                KeyEventKind::Press => {
                    if is_direction {
                        held.press(key, now);
                    }
                    vec![InputEvent::KeyDown(key)]
                }
                // Only directions repeat; a held Space fires once per press.
                KeyEventKind::Repeat if is_direction => {
                    held.press(key, now);
                    vec![InputEvent::KeyDown(key)]
                }
                KeyEventKind::Repeat => Vec::new(),
                KeyEventKind::Release => {
                    held.release(key);
                    vec![InputEvent::KeyUp(key)]
                }
            }
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            let (x, y) = surface.cell_to_field(column, row);
            vec![InputEvent::Click { x, y }]
        }
        Event::Resize(cols, rows) => {
            surface.resize(cols, rows);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Each iteration: drain input, advance the session (at most one simulation
/// tick), draw, then sleep out the rest of the frame. Returns on quit.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> anyhow::Result<()> {
    let button = PlayButton::new(&game.settings.base);
    let size = terminal::size().context("reading terminal size")?;
    let mut surface = TerminalSurface::new(out, size, &game.settings.base);
    let mut held = HeldKeys::default();

    surface.set_pointer_visible(true)?;

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut inputs = Vec::new();
        while let Ok(event) = rx.try_recv() {
            inputs.extend(translate(event, frame_start, &mut held, &mut surface));
        }
        if !keyboard_enhanced {
            inputs.extend(held.expire(frame_start).into_iter().map(InputEvent::KeyUp));
        }
        for input in inputs {
            if apply_input(game, &button, input) == Command::Quit {
                return Ok(());
            }
        }

        game.advance(frame_start);

        for signal in game.drain_signals() {
            if let SessionSignal::PointerVisible(visible) = signal {
                surface.set_pointer_visible(visible)?;
            }
        }

        draw_frame(&mut surface, game, &button)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Validate configuration before touching the terminal.
    let config_path = BaseSettings::config_path();
    let base = BaseSettings::load(&config_path)
        .with_context(|| format!("loading settings from {}", config_path.display()))?;
    let mut game = Game::new(base);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events where the terminal
    // supports them; elsewhere held keys expire after HOLD_WINDOW.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    log::info!("Keyboard enhancement: {keyboard_enhanced}");

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut game, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!("Exiting after {} ticks", game.ticks);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
    }

    fn translate_one(event: Event, held: &mut HeldKeys) -> Vec<InputEvent> {
        let mut sink = Vec::new();
        let mut surface = TerminalSurface::new(&mut sink, (120, 40), &BaseSettings::default());
        translate(event, Instant::now(), held, &mut surface)
    }

    // ── HeldKeys ──────────────────────────────────────────────────────────────

    #[test]
    fn held_key_survives_initial_repeat_delay() {
        let mut held = HeldKeys::default();
        let t0 = Instant::now();
        held.press(Key::Left, t0);
        assert!(held.expire(t0 + Duration::from_millis(660)).is_empty());
    }

    #[test]
    fn quiet_key_expires_once() {
        let mut held = HeldKeys::default();
        let t0 = Instant::now();
        held.press(Key::Right, t0);
        let later = t0 + HOLD_WINDOW + Duration::from_millis(1);
        assert_eq!(held.expire(later), vec![Key::Right]);
        assert!(held.expire(later).is_empty());
    }

    #[test]
    fn repeat_refreshes_hold() {
        let mut held = HeldKeys::default();
        let t0 = Instant::now();
        held.press(Key::Left, t0);
        held.press(Key::Left, t0 + Duration::from_millis(500));
        assert!(held.expire(t0 + HOLD_WINDOW + Duration::from_millis(1)).is_empty());
    }

    #[test]
    fn released_key_never_expires() {
        let mut held = HeldKeys::default();
        let t0 = Instant::now();
        held.press(Key::Left, t0);
        held.release(Key::Left);
        assert!(held.expire(t0 + Duration::from_secs(5)).is_empty());
    }

    // ── translate ─────────────────────────────────────────────────────────────

    #[test]
    fn direction_press_repeat_release() {
        let mut held = HeldKeys::default();
        assert_eq!(
            translate_one(key(KeyCode::Left, KeyEventKind::Press), &mut held),
            vec![InputEvent::KeyDown(Key::Left)]
        );
        assert_eq!(
            translate_one(key(KeyCode::Left, KeyEventKind::Repeat), &mut held),
            vec![InputEvent::KeyDown(Key::Left)]
        );
        assert!(held.last_seen.contains_key(&Key::Left));
        assert_eq!(
            translate_one(key(KeyCode::Left, KeyEventKind::Release), &mut held),
            vec![InputEvent::KeyUp(Key::Left)]
        );
        assert!(held.last_seen.is_empty());
    }

    #[test]
    fn fire_repeat_is_dropped() {
        let mut held = HeldKeys::default();
        assert_eq!(
            translate_one(key(KeyCode::Char(' '), KeyEventKind::Press), &mut held),
            vec![InputEvent::KeyDown(Key::Fire)]
        );
        assert!(translate_one(key(KeyCode::Char(' '), KeyEventKind::Repeat), &mut held).is_empty());
        assert!(held.last_seen.is_empty());
    }

    #[test]
    fn unmapped_key_is_ignored() {
        let mut held = HeldKeys::default();
        assert!(translate_one(key(KeyCode::Char('x'), KeyEventKind::Press), &mut held).is_empty());
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(map_key(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Key::Quit));
        assert_eq!(map_key(KeyCode::Char('c'), KeyModifiers::NONE), None);
    }

    #[test]
    fn click_maps_to_cell_centre() {
        let mut held = HeldKeys::default();
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 60,
            row: 20,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            translate_one(click, &mut held),
            vec![InputEvent::Click { x: 605.0, y: 410.0 }]
        );
    }
}
