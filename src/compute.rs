/// The per-tick update pipeline.
///
/// [`step`] advances the entity store by exactly one tick and reports what
/// happened; it never changes the session state itself. The caller (the
/// session) decides what a ship hit means.

use crate::collision::{
    enemy_reached_bottom, remove_offscreen_projectiles, resolve_projectile_hits, ship_collides,
};
use crate::entities::{EntityStore, Projectile};
use crate::formation::{check_fleet_edges, clear_wave};
use crate::movement::{move_enemies, move_projectiles, move_ship};
use crate::settings::Settings;

/// Summary of one simulation tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickOutcome {
    pub enemies_destroyed: usize,
    pub wave_cleared: bool,
    pub fleet_turned: bool,
    /// Direct ship/enemy overlap or an enemy at the bottom edge. Raised at
    /// most once per tick.
    pub ship_hit: bool,
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Spawn a projectile from the ship unless the cap is reached.
pub fn fire_projectile(store: &mut EntityStore, settings: &Settings) -> bool {
    if store.projectiles.len() >= settings.base.projectiles_allowed {
        return false;
    }
    let projectile = Projectile::from_ship(&store.ship, &settings.base);
    store.projectiles.push(projectile);
    true
}

// ── Per-tick step ─────────────────────────────────────────────────────────────

pub fn step(store: &mut EntityStore, settings: &mut Settings) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    // ── 1. Ship ──────────────────────────────────────────────────────────────
    move_ship(
        &mut store.ship,
        settings.dynamic.ship_speed,
        settings.base.screen_width,
    );

    // ── 2. Projectiles: move, cull, resolve hits ─────────────────────────────
    move_projectiles(&mut store.projectiles, settings.dynamic.projectile_speed);
    remove_offscreen_projectiles(&mut store.projectiles);
    outcome.enemies_destroyed =
        resolve_projectile_hits(&mut store.projectiles, &mut store.enemies);

    if store.enemies.is_empty() {
        clear_wave(store, settings);
        outcome.wave_cleared = true;
    }

    // ── 3. Fleet: edges, then movement ───────────────────────────────────────
    outcome.fleet_turned = check_fleet_edges(&mut store.enemies, settings);
    move_enemies(
        &mut store.enemies,
        settings.dynamic.enemy_speed,
        settings.dynamic.fleet_direction,
    );

    // ── 4. Ship hit: direct contact, then an enemy at the bottom ─────────────
    outcome.ship_hit = ship_collides(&store.ship, &store.enemies)
        || enemy_reached_bottom(&store.enemies, settings.base.screen_height);

    outcome
}
