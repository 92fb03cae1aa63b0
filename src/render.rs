/// Drawing boundary.
///
/// The core knows nothing about pixels or terminals; it issues draw
/// primitives against a [`RenderSurface`] once per loop iteration, strictly
/// after the simulation step has finished.

use crate::geometry::Rect;
use crate::input::PlayButton;
use crate::session::{Game, GameStats};
use crate::settings::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Ship,
    Projectile,
    Enemy,
}

pub trait RenderSurface {
    type Error;

    fn fill_background(&mut self, color: Rgb) -> Result<(), Self::Error>;
    fn draw_sprite(&mut self, kind: SpriteKind, bounds: Rect, color: Rgb) -> Result<(), Self::Error>;
    fn draw_score(&mut self, text: &str) -> Result<(), Self::Error>;
    fn draw_button(&mut self, button: &PlayButton, color: Rgb, text_color: Rgb) -> Result<(), Self::Error>;
    /// Flip/flush the finished frame.
    fn present(&mut self) -> Result<(), Self::Error>;
}

pub fn format_score(stats: &GameStats) -> String {
    format!(
        "Score: {:>6}   Lives: {}   Wave: {}",
        stats.score, stats.lives_remaining, stats.wave
    )
}

/// Render one complete frame: background, projectiles, ship, fleet, score,
/// and the Play button whenever the session is waiting to start.
pub fn draw_frame<S: RenderSurface>(
    surface: &mut S,
    game: &Game,
    button: &PlayButton,
) -> Result<(), S::Error> {
    let base = &game.settings.base;
    surface.fill_background(base.bg_color)?;

    for projectile in &game.store.projectiles {
        surface.draw_sprite(SpriteKind::Projectile, projectile.bounds(), base.projectile_color)?;
    }
    surface.draw_sprite(SpriteKind::Ship, game.store.ship.bounds(), base.ship_color)?;
    for enemy in &game.store.enemies {
        surface.draw_sprite(SpriteKind::Enemy, enemy.bounds(), base.enemy_color)?;
    }

    surface.draw_score(&format_score(&game.stats))?;

    if game.awaiting_start() {
        surface.draw_button(button, base.button_color, base.button_text_color)?;
    }
    surface.present()
}
