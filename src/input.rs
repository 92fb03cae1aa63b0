/// Translation of discrete input events into ship intents and session
/// commands. The terminal (or any other front end) produces [`InputEvent`]s;
/// nothing here knows where they came from.

use crate::geometry::Rect;
use crate::session::Game;
use crate::settings::BaseSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
    /// Starts a game from the menu or game-over screen, like clicking Play.
    Play,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Window/terminal close request.
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer click in playfield coordinates.
    Click { x: f32, y: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Continue,
    Quit,
}

/// The Play button, centred on the playfield.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayButton {
    pub rect: Rect,
    pub label: &'static str,
}

impl PlayButton {
    pub fn new(base: &BaseSettings) -> Self {
        let x = (base.screen_width - base.button_width) / 2.0;
        let y = (base.screen_height - base.button_height) / 2.0;
        PlayButton {
            rect: Rect::new(x, y, base.button_width, base.button_height),
            label: "Play",
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.rect.contains_point(x, y)
    }
}

/// Apply one event to the game.
pub fn apply_input(game: &mut Game, button: &PlayButton, event: InputEvent) -> Command {
    match event {
        InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => return Command::Quit,
        InputEvent::KeyDown(Key::Left) => game.store.ship.moving_left = true,
        InputEvent::KeyDown(Key::Right) => game.store.ship.moving_right = true,
        InputEvent::KeyUp(Key::Left) => game.store.ship.moving_left = false,
        InputEvent::KeyUp(Key::Right) => game.store.ship.moving_right = false,
        InputEvent::KeyDown(Key::Fire) => {
            game.fire();
        }
        InputEvent::KeyDown(Key::Play) => {
            game.start_game();
        }
        InputEvent::Click { x, y } => {
            if button.contains(x, y) {
                game.start_game();
            }
        }
        InputEvent::KeyUp(_) => {}
    }
    Command::Continue
}
