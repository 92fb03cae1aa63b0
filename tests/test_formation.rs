use alien_invasion::entities::*;
use alien_invasion::formation::*;
use alien_invasion::settings::*;

fn base_1200x800() -> BaseSettings {
    BaseSettings {
        screen_width: 1200.0,
        screen_height: 800.0,
        enemy_width: 40.0,
        enemy_height: 40.0,
        ..BaseSettings::default()
    }
}

// ── fleet_layout ──────────────────────────────────────────────────────────────

#[test]
fn layout_matches_grid_arithmetic() {
    // x: 40, 120, … while x < 1120 → 14 columns
    // y: 40, 120, … while y < 680  → 8 rows
    let origins = fleet_layout(&base_1200x800());
    assert_eq!(origins.len(), 14 * 8);
    assert_eq!(origins.first(), Some(&(40.0, 40.0)));
    assert_eq!(origins.last(), Some(&(1080.0, 600.0)));
}

#[test]
fn layout_rows_are_left_to_right() {
    let origins = fleet_layout(&base_1200x800());
    let first_row: Vec<f32> = origins.iter().take(14).map(|&(x, _)| x).collect();
    assert!(first_row.windows(2).all(|w| w[1] - w[0] == 80.0));
    assert!(origins.iter().take(14).all(|&(_, y)| y == 40.0));
    assert_eq!(origins[14], (40.0, 120.0));
}

#[test]
fn layout_row_pitch_uses_width_by_default() {
    let base = BaseSettings {
        enemy_width: 40.0,
        enemy_height: 30.0,
        ..base_1200x800()
    };
    let origins = fleet_layout(&base);
    // rows start at y=30 and advance by 2 × width
    assert_eq!(origins[0], (40.0, 30.0));
    assert_eq!(origins[14], (40.0, 110.0));
}

#[test]
fn layout_row_pitch_by_height() {
    let base = BaseSettings {
        enemy_width: 40.0,
        enemy_height: 30.0,
        fleet_row_pitch: RowPitch::EnemyHeight,
        ..base_1200x800()
    };
    let origins = fleet_layout(&base);
    assert_eq!(origins[14], (40.0, 90.0));
    // y: 30, 90, … while y < 710 → 12 rows
    assert_eq!(origins.len(), 14 * 12);
}

#[test]
fn build_fleet_uses_enemy_size() {
    let base = base_1200x800();
    let fleet = build_fleet(&base);
    assert_eq!(fleet.len(), 112);
    assert!(fleet.iter().all(|e| e.width == 40.0 && e.height == 40.0));
}

// ── edges ─────────────────────────────────────────────────────────────────────

#[test]
fn fleet_at_edge_left_and_right() {
    let base = base_1200x800();
    let inside = vec![Enemy::new(500.0, 40.0, &base)];
    assert!(!fleet_at_edge(&inside, 1200.0));

    let touching_right = vec![Enemy::new(500.0, 40.0, &base), Enemy::new(1160.0, 40.0, &base)];
    assert!(fleet_at_edge(&touching_right, 1200.0));

    let touching_left = vec![Enemy::new(0.0, 40.0, &base)];
    assert!(fleet_at_edge(&touching_left, 1200.0));
}

#[test]
fn fleet_at_edge_uses_truncated_origin() {
    let base = base_1200x800();
    // 1159.9 truncates to 1159 → right edge 1199, not yet at the edge
    let enemies = vec![Enemy::new(1159.9, 40.0, &base)];
    assert!(!fleet_at_edge(&enemies, 1200.0));
}

#[test]
fn change_direction_drops_every_enemy_once() {
    let base = base_1200x800();
    let mut settings = Settings::new(base.clone());
    let mut enemies = build_fleet(&base);
    change_fleet_direction(&mut enemies, &mut settings.dynamic, 10.0);
    assert_eq!(settings.dynamic.fleet_direction, FleetDirection::Left);
    assert_eq!(enemies[0].y, 50.0);
    assert_eq!(enemies.last().map(|e| e.y), Some(610.0));
}

#[test]
fn check_edges_is_noop_in_open_space() {
    let base = base_1200x800();
    let mut settings = Settings::new(base.clone());
    let mut enemies = build_fleet(&base);
    assert!(!check_fleet_edges(&mut enemies, &mut settings));
    assert_eq!(enemies[0].y, 40.0);
    assert_eq!(settings.dynamic.fleet_direction, FleetDirection::Right);
}

// ── clear_wave ────────────────────────────────────────────────────────────────

#[test]
fn clear_wave_rebuilds_and_speeds_up() {
    let base = base_1200x800();
    let mut settings = Settings::new(base.clone());
    let mut store = EntityStore::new(&base);
    store.projectiles.push(Projectile::from_ship(&store.ship, &base));

    clear_wave(&mut store, &mut settings);

    assert!(store.projectiles.is_empty());
    assert_eq!(store.enemies, build_fleet(&base));
    assert!((settings.dynamic.enemy_speed - 1.1).abs() < 1e-6);
    assert!((settings.dynamic.ship_speed - 1.65).abs() < 1e-6);
    assert!((settings.dynamic.projectile_speed - 2.75).abs() < 1e-6);
}

#[test]
fn clear_wave_speedup_compounds() {
    let base = base_1200x800();
    let mut settings = Settings::new(base.clone());
    let mut store = EntityStore::new(&base);
    let mut last = settings.dynamic.enemy_speed;
    for _ in 0..5 {
        clear_wave(&mut store, &mut settings);
        assert!(settings.dynamic.enemy_speed > last);
        last = settings.dynamic.enemy_speed;
    }
}
