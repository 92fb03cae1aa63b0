//! Session state machine.
//!
//! ```text
//!            start                 ship hit, lives left
//!   Menu ───────────▶ Active ─────────────────────────▶ LifeLostPause
//!                     ▲  │  ◀──────── deadline passed ────────┘
//!                     │  │ ship hit, last life
//!               start │  ▼
//!                   GameOver
//! ```
//!
//! Only `Active` runs the simulation. The pause is a deadline, not a sleep:
//! the loop keeps draining input and drawing frames while it waits.

use std::time::Instant;

use crate::compute::{self, TickOutcome};
use crate::entities::EntityStore;
use crate::formation::build_fleet;
use crate::settings::{BaseSettings, Settings};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Menu,
    Active,
    LifeLostPause { until: Instant },
    GameOver,
}

/// One-shot outputs for the I/O layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionSignal {
    /// Show or hide the pointer. Hidden during play.
    PointerVisible(bool),
    GameStarted,
    PauseStarted { until: Instant },
    Resumed,
    WaveCleared { wave: u32 },
    GameOver,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub lives_remaining: u32,
    /// Drawn on the HUD; nothing awards points yet.
    pub score: u32,
    /// 1-based number of the wave currently on screen.
    pub wave: u32,
}

impl GameStats {
    pub fn new(base: &BaseSettings) -> Self {
        GameStats {
            lives_remaining: base.ship_limit,
            score: 0,
            wave: 1,
        }
    }

    pub fn reset(&mut self, base: &BaseSettings) {
        *self = GameStats::new(base);
    }
}

/// The whole game: tunables, stats, entities, and where the session is.
#[derive(Clone, Debug)]
pub struct Game {
    pub settings: Settings,
    pub stats: GameStats,
    pub store: EntityStore,
    pub state: SessionState,
    /// Simulation ticks run since the process started.
    pub ticks: u64,
    signals: Vec<SessionSignal>,
}

impl Game {
    /// A game sitting on the menu, with a fleet already laid out behind the
    /// Play button.
    pub fn new(base: BaseSettings) -> Self {
        let settings = Settings::new(base);
        let stats = GameStats::new(&settings.base);
        let mut store = EntityStore::new(&settings.base);
        store.enemies = build_fleet(&settings.base);
        Game {
            settings,
            stats,
            store,
            state: SessionState::Menu,
            ticks: 0,
            signals: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// True in the states that show the Play button.
    pub fn awaiting_start(&self) -> bool {
        matches!(self.state, SessionState::Menu | SessionState::GameOver)
    }

    /// Take every signal emitted since the last call.
    pub fn drain_signals(&mut self) -> Vec<SessionSignal> {
        std::mem::take(&mut self.signals)
    }

    // ── Transitions ──────────────────────────────────────────────────────────

    /// Begin a new game from `Menu` or `GameOver`. Ignored otherwise.
    pub fn start_game(&mut self) -> bool {
        if !self.awaiting_start() {
            return false;
        }
        self.settings.initialize_dynamic_settings();
        self.stats.reset(&self.settings.base);
        self.reset_field();
        self.store.ship.moving_left = false;
        self.store.ship.moving_right = false;
        self.state = SessionState::Active;

        log::info!(
            "New game: {} lives, {} enemies",
            self.stats.lives_remaining,
            self.store.enemies.len()
        );
        self.signals.push(SessionSignal::PointerVisible(false));
        self.signals.push(SessionSignal::GameStarted);
        true
    }

    /// React to a ship hit. Only meaningful while `Active`.
    pub fn ship_hit(&mut self, now: Instant) {
        if !self.is_active() {
            return;
        }
        self.stats.lives_remaining = self.stats.lives_remaining.saturating_sub(1);

        if self.stats.lives_remaining > 0 {
            self.reset_field();
            let until = now + self.settings.base.life_lost_pause();
            self.state = SessionState::LifeLostPause { until };
            log::debug!("Ship hit, {} lives left", self.stats.lives_remaining);
            self.signals.push(SessionSignal::PauseStarted { until });
        } else {
            // Entities stay exactly as they were at the moment of the hit.
            self.state = SessionState::GameOver;
            log::info!("Game over on wave {}", self.stats.wave);
            self.signals.push(SessionSignal::PointerVisible(true));
            self.signals.push(SessionSignal::GameOver);
        }
    }

    /// Fire a projectile. Only while `Active` and below the cap.
    pub fn fire(&mut self) -> bool {
        self.is_active() && compute::fire_projectile(&mut self.store, &self.settings)
    }

    /// Advance by one loop iteration: finish an expired pause, then run one
    /// simulation tick if the session is active.
    pub fn advance(&mut self, now: Instant) -> Option<TickOutcome> {
        if let SessionState::LifeLostPause { until } = self.state {
            if now >= until {
                self.state = SessionState::Active;
                self.signals.push(SessionSignal::Resumed);
            }
        }
        if !self.is_active() {
            return None;
        }

        let outcome = compute::step(&mut self.store, &mut self.settings);
        self.ticks += 1;

        if outcome.wave_cleared {
            self.stats.wave += 1;
            log::info!(
                "Wave cleared; wave {} at enemy speed {:.3}",
                self.stats.wave,
                self.settings.dynamic.enemy_speed
            );
            self.signals.push(SessionSignal::WaveCleared {
                wave: self.stats.wave,
            });
        }
        if outcome.ship_hit {
            self.ship_hit(now);
        }
        Some(outcome)
    }

    /// Empty both collections, lay out a fresh fleet, recentre the ship.
    fn reset_field(&mut self) {
        self.store.clear_projectiles();
        self.store.clear_enemies();
        self.store.enemies = build_fleet(&self.settings.base);
        self.store.ship.center(&self.settings.base);
    }
}
