//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the rules of the falling-block engine. It has
//! **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces an identical game
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: runs in any host (terminal, GUI, headless)
//!
//! # Module structure
//!
//! - [`board`]: the committed grid with collision detection and line clearing
//! - [`pieces`]: tetromino shape tables and the falling piece value type
//! - [`palette`]: ordered color schemes (index 0 = background)
//! - [`source`]: seeded 7-bag piece generation with color assignment
//! - [`scoring`]: classic line-clear points, level rule, gravity pacing
//! - [`session`]: the state machine tying everything together
//! - [`snapshot`]: read-only views for rendering collaborators
//!
//! # Game rules
//!
//! This engine implements the classic ruleset:
//!
//! - **7-bag randomizer**: every piece kind appears once per bag
//! - **Hard-reject rotation**: no wall kicks; an obstructed rotation leaves
//!   the piece as it was
//! - **Immediate lock**: a piece locks the moment gravity fails to move it
//!   down, then full rows clear simultaneously and the next piece spawns
//! - **Classic scoring**: `[40, 100, 300, 1200] x (level + 1)`, level up
//!   every 10 lines, gravity speeds up with level
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::Intent;
//!
//! let mut session = GameSession::new(12345);
//! session.start();
//!
//! session.apply_intent(Intent::MoveRight);
//! session.apply_intent(Intent::RotateCw);
//! session.apply_intent(Intent::HardDrop);
//!
//! // The external clock drives gravity.
//! session.advance_tick(16);
//! assert!(!session.is_game_over());
//! ```

pub mod board;
pub mod palette;
pub mod pieces;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod source;

pub use board::Board;
pub use palette::ColorScheme;
pub use pieces::{shape_cells, Piece};
pub use session::{GameSession, SessionConfig};
pub use snapshot::SessionSnapshot;
pub use source::PieceSource;
