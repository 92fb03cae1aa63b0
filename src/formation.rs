/// Fleet layout, edge handling and wave turnover.

use crate::entities::{Enemy, EntityStore};
use crate::settings::{BaseSettings, DynamicSettings, RowPitch, Settings};

/// Top-left origins of every enemy in a freshly built fleet, row by row.
///
/// Starts one enemy in from the top-left corner, steps two enemy widths
/// along a row while there is at least two enemy widths of room left, and
/// stops adding rows three enemy heights above the bottom.
pub fn fleet_layout(base: &BaseSettings) -> Vec<(f32, f32)> {
    let (w, h) = (base.enemy_width, base.enemy_height);
    let row_step = match base.fleet_row_pitch {
        RowPitch::EnemyWidth => 2.0 * w,
        RowPitch::EnemyHeight => 2.0 * h,
    };

    let mut origins = Vec::new();
    let mut y = h;
    while y < base.screen_height - 3.0 * h {
        let mut x = w;
        while x < base.screen_width - 2.0 * w {
            origins.push((x, y));
            x += 2.0 * w;
        }
        y += row_step;
    }
    origins
}

pub fn build_fleet(base: &BaseSettings) -> Vec<Enemy> {
    fleet_layout(base)
        .into_iter()
        .map(|(x, y)| Enemy::new(x, y, base))
        .collect()
}

/// True as soon as one enemy touches either side of the playfield.
pub fn fleet_at_edge(enemies: &[Enemy], playfield_width: f32) -> bool {
    enemies.iter().any(|enemy| {
        let bounds = enemy.bounds();
        bounds.right() >= playfield_width || bounds.left() <= 0.0
    })
}

/// Drop the whole fleet and reverse its direction.
pub fn change_fleet_direction(enemies: &mut [Enemy], dynamic: &mut DynamicSettings, drop: f32) {
    for enemy in enemies.iter_mut() {
        enemy.y += drop;
    }
    dynamic.fleet_direction = dynamic.fleet_direction.reversed();
}

/// Run the once-per-tick edge check. Returns whether the fleet turned.
pub fn check_fleet_edges(enemies: &mut [Enemy], settings: &mut Settings) -> bool {
    if !fleet_at_edge(enemies, settings.base.screen_width) {
        return false;
    }
    change_fleet_direction(enemies, &mut settings.dynamic, settings.base.fleet_drop_speed);
    log::debug!(
        "Fleet reversed, now heading {:?}",
        settings.dynamic.fleet_direction
    );
    true
}

/// The last enemy is gone: wipe projectiles, rebuild, and speed up.
pub fn clear_wave(store: &mut EntityStore, settings: &mut Settings) {
    store.clear_projectiles();
    store.enemies = build_fleet(&settings.base);
    settings.increase_speed();
}
