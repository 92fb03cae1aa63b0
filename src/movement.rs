/// Per-kind position updates. One call is one logical step; there is no
/// variable time delta.

use crate::entities::{Enemy, Projectile, Ship};
use crate::settings::FleetDirection;

/// Apply the ship's intents. Each bound check uses the box from before the
/// step, so holding both directions in open space leaves the ship in place.
/// A step never carries the ship past either edge.
pub fn move_ship(ship: &mut Ship, speed: f32, playfield_width: f32) {
    let bounds = ship.bounds();
    let max_x = (playfield_width - ship.width).max(0.0);
    let mut dx = 0.0;
    if ship.moving_right && bounds.right() < playfield_width {
        dx += speed;
    }
    if ship.moving_left && bounds.left() > 0.0 {
        dx -= speed;
    }
    ship.x = (ship.x + dx).clamp(0.0, max_x);
}

/// Projectiles travel toward the top of the playfield.
pub fn move_projectiles(projectiles: &mut [Projectile], speed: f32) {
    for projectile in projectiles {
        projectile.y -= speed;
    }
}

pub fn move_enemies(enemies: &mut [Enemy], speed: f32, direction: FleetDirection) {
    let dx = speed * direction.sign();
    for enemy in enemies {
        enemy.x += dx;
    }
}
