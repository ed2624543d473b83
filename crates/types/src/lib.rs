//! Shared types module - pure data structures and constants
//!
//! This crate defines the fundamental types used across the engine. All types
//! are plain data with no external dependencies, so they are usable from the
//! core logic, tests, and any rendering or input collaborator.
//!
//! # Playfield dimensions
//!
//! The default playfield is the standard Tetris well:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn origin**: (3, 0) for every piece, rotation North
//!
//! Dimensions are configurable per session but immutable once a board is
//! created.
//!
//! # Cells and colors
//!
//! A board cell is `Option<ColorIndex>`: `None` means empty, `Some(i)` holds
//! the palette index the locking piece carried. Index 0 of a palette is the
//! background color, so piece color indices always lie in
//! `[1, palette_len - 1]`.
//!
//! # Gravity intervals by level
//!
//! Gravity speeds up with level (milliseconds per forced row):
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 1000ms |
//! | 1 | 800ms |
//! | 2 | 650ms |
//! | 3 | 500ms |
//! | 4 | 400ms |
//! | 5 | 320ms |
//! | 6 | 250ms |
//! | 7 | 200ms |
//! | 8 | 160ms |
//! | 9+ | 120ms floor |

/// Default board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity intervals by level (milliseconds)
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// Line clear scoring (Classic rules), indexed by rows cleared at once
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Level increases every this many total cleared lines
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All piece kinds, in bag order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (wraps West -> North)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (wraps North -> West)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Player intents - the only mutation entry point into a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDrop,
    HardDrop,
    TogglePause,
    Restart,
    Quit,
}

/// Index into a color scheme; piece indices are always >= 1
pub type ColorIndex = u8;

/// Cell on the board (None = empty, Some = locked with a palette color)
pub type Cell = Option<ColorIndex>;

/// An sRGB color in a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Specification of a piece to spawn: shape family plus palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSpec {
    pub kind: PieceKind,
    pub color: ColorIndex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cw_cycle() {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::North);
    }

    #[test]
    fn test_rotation_ccw_inverts_cw() {
        for r in [
            Rotation::North,
            Rotation::East,
            Rotation::South,
            Rotation::West,
        ] {
            assert_eq!(r.rotate_cw().rotate_ccw(), r);
            assert_eq!(r.rotate_ccw().rotate_cw(), r);
        }
    }

    #[test]
    fn test_all_kinds_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in PieceKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_line_scores_monotonic() {
        for w in LINE_SCORES.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn test_drop_intervals_monotonic() {
        for w in DROP_INTERVALS.windows(2) {
            assert!(w[0] >= w[1]);
        }
        assert!(DROP_INTERVAL_FLOOR_MS <= DROP_INTERVALS[DROP_INTERVALS.len() - 1]);
    }
}
