use alien_invasion::input::*;
use alien_invasion::session::{Game, SessionState};
use alien_invasion::settings::BaseSettings;

fn setup() -> (Game, PlayButton) {
    let base = BaseSettings::default();
    let button = PlayButton::new(&base);
    (Game::new(base), button)
}

#[test]
fn play_button_is_centred() {
    let (_, button) = setup();
    assert_eq!(button.rect.x, 500.0);
    assert_eq!(button.rect.y, 375.0);
    assert!(button.contains(600.0, 400.0));
    assert!(!button.contains(499.0, 400.0));
    assert_eq!(button.label, "Play");
}

#[test]
fn click_on_button_starts_game() {
    let (mut game, button) = setup();
    let cmd = apply_input(&mut game, &button, InputEvent::Click { x: 600.0, y: 400.0 });
    assert_eq!(cmd, Command::Continue);
    assert_eq!(game.state, SessionState::Active);
}

#[test]
fn click_off_button_does_nothing() {
    let (mut game, button) = setup();
    apply_input(&mut game, &button, InputEvent::Click { x: 10.0, y: 10.0 });
    assert_eq!(game.state, SessionState::Menu);
}

#[test]
fn click_during_play_does_not_restart() {
    let (mut game, button) = setup();
    apply_input(&mut game, &button, InputEvent::KeyDown(Key::Play));
    apply_input(&mut game, &button, InputEvent::KeyDown(Key::Fire));
    apply_input(&mut game, &button, InputEvent::Click { x: 600.0, y: 400.0 });
    assert_eq!(game.store.projectiles.len(), 1);
}

#[test]
fn direction_keys_set_and_clear_intents() {
    let (mut game, button) = setup();
    apply_input(&mut game, &button, InputEvent::KeyDown(Key::Left));
    apply_input(&mut game, &button, InputEvent::KeyDown(Key::Right));
    assert!(game.store.ship.moving_left);
    assert!(game.store.ship.moving_right);

    apply_input(&mut game, &button, InputEvent::KeyUp(Key::Left));
    assert!(!game.store.ship.moving_left);
    assert!(game.store.ship.moving_right);

    apply_input(&mut game, &button, InputEvent::KeyUp(Key::Right));
    assert!(!game.store.ship.moving_right);
}

#[test]
fn fire_only_counts_when_active() {
    let (mut game, button) = setup();
    apply_input(&mut game, &button, InputEvent::KeyDown(Key::Fire));
    assert!(game.store.projectiles.is_empty());

    apply_input(&mut game, &button, InputEvent::KeyDown(Key::Play));
    for _ in 0..5 {
        apply_input(&mut game, &button, InputEvent::KeyDown(Key::Fire));
    }
    assert_eq!(game.store.projectiles.len(), 3);
}

#[test]
fn quit_events() {
    let (mut game, button) = setup();
    assert_eq!(apply_input(&mut game, &button, InputEvent::Quit), Command::Quit);
    assert_eq!(
        apply_input(&mut game, &button, InputEvent::KeyDown(Key::Quit)),
        Command::Quit
    );
    assert_eq!(
        apply_input(&mut game, &button, InputEvent::KeyUp(Key::Fire)),
        Command::Continue
    );
}
