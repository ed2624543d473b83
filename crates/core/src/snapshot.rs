use crate::pieces::Piece;
use blockfall_types::{ColorIndex, PieceKind, PieceSpec, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub color: ColorIndex,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            color: value.color,
        }
    }
}

/// Read-only view of a session for rendering collaborators.
///
/// `field` holds the committed grid row-major as palette indices, 0 for
/// empty; the falling piece is reported separately in `active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub width: u8,
    pub height: u8,
    pub field: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: PieceSpec,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl SessionSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
