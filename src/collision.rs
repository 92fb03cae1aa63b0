/// Collision checks, all plain axis-aligned bounding-box overlap.

use crate::entities::{Enemy, Projectile, Ship};

/// Drop projectiles that have fully left through the top edge.
pub fn remove_offscreen_projectiles(projectiles: &mut Vec<Projectile>) {
    projectiles.retain(|p| p.bounds().bottom() > 0.0);
}

/// Remove every overlapping projectile/enemy pair and return how many pairs
/// were destroyed.
///
/// Projectiles are resolved in order; each takes the first live enemy it
/// overlaps. An enemy already taken by an earlier projectile is skipped, so
/// neither side is ever removed twice.
pub fn resolve_projectile_hits(projectiles: &mut Vec<Projectile>, enemies: &mut Vec<Enemy>) -> usize {
    let mut killed_enemies = vec![false; enemies.len()];
    let mut used_projectiles = vec![false; projectiles.len()];
    let mut pairs = 0;

    for (pi, projectile) in projectiles.iter().enumerate() {
        let shot = projectile.bounds();
        let hit = enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !killed_enemies[*ei] && shot.overlaps(&enemy.bounds()));
        if let Some((ei, _)) = hit {
            killed_enemies[ei] = true;
            used_projectiles[pi] = true;
            pairs += 1;
        }
    }

    if pairs > 0 {
        let mut killed = killed_enemies.into_iter();
        enemies.retain(|_| !killed.next().unwrap_or(false));
        let mut used = used_projectiles.into_iter();
        projectiles.retain(|_| !used.next().unwrap_or(false));
    }
    pairs
}

pub fn ship_collides(ship: &Ship, enemies: &[Enemy]) -> bool {
    let ship_box = ship.bounds();
    enemies.iter().any(|enemy| ship_box.overlaps(&enemy.bounds()))
}

/// True as soon as one enemy's bottom edge reaches the playfield bottom.
pub fn enemy_reached_bottom(enemies: &[Enemy], playfield_height: f32) -> bool {
    enemies
        .iter()
        .any(|enemy| enemy.bounds().bottom() >= playfield_height)
}
