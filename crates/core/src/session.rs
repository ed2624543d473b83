//! Session module - the game state machine
//!
//! `GameSession` ties the board, piece source, palette and scoring policy
//! together. It owns the active piece and drives the tick cycle: gravity
//! pulls the piece down; when a downward move fails the piece locks, full
//! rows clear, score and level update and the next piece spawns, all within
//! the same call. A spawn that collides ends the game.
//!
//! All player input arrives through `apply_intent`; all timing arrives
//! through `advance_tick`. Rejected moves are normal `false` outcomes, never
//! errors. The engine is single-threaded and does no I/O: renderers pull
//! snapshots, input layers push intents.

use crate::board::Board;
use crate::palette::ColorScheme;
use crate::pieces::Piece;
use crate::scoring::{drop_points, gravity_interval_ms, level_for_lines, line_clear_points};
use crate::snapshot::{ActiveSnapshot, SessionSnapshot};
use crate::source::PieceSource;
use blockfall_types::{Intent, PieceSpec, BOARD_HEIGHT, BOARD_WIDTH};

/// Per-session configuration: board size, RNG seed and the active palette.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub width: u8,
    pub height: u8,
    pub seed: u32,
    pub palette: ColorScheme,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: 1,
            palette: ColorScheme::bright(),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    palette: ColorScheme,
    source: PieceSource,
    active: Option<Piece>,
    score: u32,
    level: u32,
    lines: u32,
    /// Elapsed time accumulated against the gravity interval
    gravity_timer_ms: u32,
    started: bool,
    paused: bool,
    game_over: bool,
    /// Set by `Intent::Quit`; an inert session ignores everything
    quit: bool,
}

impl GameSession {
    /// Create a session with the default 10x20 board and bright palette
    pub fn new(seed: u32) -> Self {
        Self::with_config(SessionConfig {
            seed,
            ..SessionConfig::default()
        })
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let source = PieceSource::new(config.seed, config.palette.piece_colors());
        Self {
            board: Board::new(config.width, config.height),
            palette: config.palette,
            source,
            active: None,
            score: 0,
            level: 0,
            lines: 0,
            gravity_timer_ms: 0,
            started: false,
            paused: false,
            game_over: false,
            quit: false,
        }
    }

    /// Start the session and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_next();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score frozen at game over (identical to `score` at all times)
    pub fn final_score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// The committed grid only; the falling piece is not part of it
    pub fn current_field(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Absolute cells of the falling piece, for rendering
    pub fn active_piece_cells(&self) -> Option<[(i8, i8); 4]> {
        self.active.map(|p| p.cells())
    }

    /// The piece the source will deliver next
    pub fn next_preview(&self) -> PieceSpec {
        self.source.peek()
    }

    pub fn palette(&self) -> &ColorScheme {
        &self.palette
    }

    /// Gravity interval at the current level (milliseconds)
    pub fn gravity_interval(&self) -> u32 {
        gravity_interval_ms(self.level)
    }

    /// Place a new piece at the spawn origin, rotation North.
    ///
    /// Returns false and sets game over if the spawn region is occupied.
    pub fn spawn(&mut self, spec: PieceSpec) -> bool {
        let piece = Piece::spawn(spec);
        if !self.board.can_place(&piece.cells()) {
            self.game_over = true;
            self.active = None;
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Draw from the source and spawn
    fn spawn_next(&mut self) -> bool {
        let spec = self.source.draw();
        self.spawn(spec)
    }

    /// Try to move the active piece; commits only a placeable candidate
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let candidate = active.moved(dx, dy);
        if self.board.can_place(&candidate.cells()) {
            self.active = Some(candidate);
            return true;
        }
        false
    }

    /// Try to rotate the active piece. No wall kicks: a candidate that hits
    /// a wall or a committed cell is rejected outright.
    pub(crate) fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let candidate = active.rotated(clockwise);
        if self.board.can_place(&candidate.cells()) {
            self.active = Some(candidate);
            return true;
        }
        false
    }

    /// Soft drop: one immediate downward step, worth one point
    fn soft_drop(&mut self) -> bool {
        let moved = self.try_move(0, 1);
        if moved {
            self.score += drop_points(1, false);
        }
        moved
    }

    /// Hard drop: fall until blocked, then lock immediately
    fn hard_drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        let mut distance: u32 = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        self.score += drop_points(distance, true);
        self.lock_and_resolve();
        true
    }

    /// Lock the active piece, clear full rows, update score/level and spawn
    /// the replacement. Atomic: no intent can observe the intermediate
    /// states.
    fn lock_and_resolve(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        // Locking above the visible top row is a top-out.
        if !self.board.lock_cells(&active.cells(), active.color) {
            self.game_over = true;
        }

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            self.lines += cleared.len() as u32;
            self.level = level_for_lines(self.lines);
            self.score += line_clear_points(cleared.len(), self.level);
        }

        if !self.game_over {
            self.spawn_next();
        }
    }

    /// Row the active piece would lock at if dropped now (for rendering)
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let mut distance: i8 = 0;
        while self
            .board
            .can_place(&active.moved(0, distance + 1).cells())
        {
            distance += 1;
        }
        Some(active.y + distance)
    }

    /// Advance the external clock.
    ///
    /// Accumulates elapsed time against the level-derived gravity interval
    /// and performs every gravity step the elapsed time covers (catch up,
    /// never skip). Does nothing while paused, quit, game over or not yet
    /// started; pausing preserves the accumulator exactly.
    pub fn advance_tick(&mut self, dt_ms: u32) {
        if !self.started || self.paused || self.game_over || self.quit {
            return;
        }
        self.gravity_timer_ms += dt_ms;
        loop {
            let interval = self.gravity_interval();
            if self.gravity_timer_ms < interval {
                break;
            }
            self.gravity_timer_ms -= interval;
            if !self.try_move(0, 1) {
                self.lock_and_resolve();
                if self.game_over {
                    break;
                }
            }
        }
    }

    /// Apply a player intent. Illegal actions are silently rejected; the
    /// return value reports whether state changed.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if self.quit {
            return false;
        }
        if self.game_over {
            // Terminal state: only restart or quit are heard.
            return match intent {
                Intent::Restart => {
                    self.restart();
                    true
                }
                Intent::Quit => {
                    self.quit = true;
                    true
                }
                _ => false,
            };
        }
        match intent {
            Intent::TogglePause => {
                self.paused = !self.paused;
                true
            }
            Intent::Restart => {
                self.restart();
                true
            }
            Intent::Quit => {
                self.quit = true;
                true
            }
            _ if self.paused => false,
            Intent::MoveLeft => self.try_move(-1, 0),
            Intent::MoveRight => self.try_move(1, 0),
            Intent::RotateCw => self.try_rotate(true),
            Intent::RotateCcw => self.try_rotate(false),
            Intent::SoftDrop => self.soft_drop(),
            Intent::HardDrop => self.hard_drop(),
        }
    }

    /// Rebuild the session in place, keeping configuration and deriving the
    /// next seed from the source's current state.
    fn restart(&mut self) {
        let config = SessionConfig {
            width: self.board.width(),
            height: self.board.height(),
            seed: self.source.seed(),
            palette: self.palette.clone(),
        };
        *self = Self::with_config(config);
        self.start();
    }

    /// One-call read-only snapshot for rendering collaborators
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            field: self
                .board
                .cells()
                .iter()
                .map(|cell| cell.unwrap_or(0))
                .collect(),
            active: self.active.map(ActiveSnapshot::from),
            ghost_y: self.ghost_y(),
            next: self.next_preview(),
            paused: self.paused,
            game_over: self.game_over,
            score: self.score,
            level: self.level,
            lines: self.lines,
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
