/// All game entity types, plus the store that owns them.
///
/// Positions are floats in playfield units. Bounding boxes truncate the
/// horizontal origin so that sub-unit movement accumulates in `x` without
/// nudging the box until a whole unit has been crossed.

use crate::geometry::Rect;
use crate::settings::BaseSettings;

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Independent intents: both may be held at once.
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A ship centred on the bottom edge of the playfield, with no intents.
    pub fn new(base: &BaseSettings) -> Self {
        let mut ship = Ship {
            x: 0.0,
            y: 0.0,
            width: base.ship_width,
            height: base.ship_height,
            moving_left: false,
            moving_right: false,
        };
        ship.center(base);
        ship
    }

    /// Place the ship's midbottom at the playfield's midbottom.
    pub fn center(&mut self, base: &BaseSettings) {
        self.x = (base.screen_width / 2.0).trunc() - (self.width / 2.0).trunc();
        self.y = base.screen_height - self.height;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x.trunc(), self.y, self.width, self.height)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Projectile {
    /// A projectile whose midtop sits on the ship's midtop.
    pub fn from_ship(ship: &Ship, base: &BaseSettings) -> Self {
        let ship_box = ship.bounds();
        let center_x = ship_box.x + (ship_box.width / 2.0).trunc();
        Projectile {
            x: center_x - (base.projectile_width / 2.0).trunc(),
            y: ship_box.top(),
            width: base.projectile_width,
            height: base.projectile_height,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    /// Horizontal origin; accumulates fractional movement.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, base: &BaseSettings) -> Self {
        Enemy {
            x,
            y,
            width: base.enemy_width,
            height: base.enemy_height,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x.trunc(), self.y, self.width, self.height)
    }
}

// ── Entity store ──────────────────────────────────────────────────────────────

/// Owns every live entity. Only mutated inside a tick or a session
/// transition; the renderer reads it afterwards.
#[derive(Clone, Debug)]
pub struct EntityStore {
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
}

impl EntityStore {
    /// A store with a centred ship and no projectiles or enemies.
    pub fn new(base: &BaseSettings) -> Self {
        EntityStore {
            ship: Ship::new(base),
            projectiles: Vec::new(),
            enemies: Vec::new(),
        }
    }

    pub fn clear_projectiles(&mut self) {
        self.projectiles.clear();
    }

    pub fn clear_enemies(&mut self) {
        self.enemies.clear();
    }
}
