//! Pieces module - tetromino shapes and the falling piece value type
//!
//! Shapes are a tagged-variant table: (kind, rotation) -> four cell offsets
//! inside a 4x4 template anchored at the piece origin. The table is total
//! over every declared combination, so shape lookup can never fail.
//!
//! `Piece` is an immutable value; `moved` and `rotated` return candidates
//! without validating them. Legality is decided in one place, by the board's
//! collision predicate, so geometry stays separate from rules. There is no
//! wall-kick correction: a rotation candidate is placed as-is or rejected.

use blockfall_types::{ColorIndex, PieceKind, PieceSpec, Rotation};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [CellOffset; 4];

/// Spawn origin for new pieces (x, y), rotation North
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn shape_cells(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => i_shape(rotation),
        PieceKind::O => o_shape(rotation),
        PieceKind::T => t_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::L => l_shape(rotation),
    }
}

fn i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        // N: horizontal, centered on row 1
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        // E: vertical, right-aligned
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        // S: horizontal, centered on row 2
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        // W: vertical, left-aligned
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// O piece is the same for all rotations
fn o_shape(_rotation: Rotation) -> PieceShape {
    [(1, 0), (2, 0), (1, 1), (2, 1)]
}

fn t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// The active falling piece: shape family, rotation state, grid origin and
/// the palette color index it will lock with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub color: ColorIndex,
}

impl Piece {
    /// Create a piece at the spawn origin, rotation North
    pub fn spawn(spec: PieceSpec) -> Self {
        Self {
            kind: spec.kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
            color: spec.color,
        }
    }

    /// Get the shape offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        shape_cells(self.kind, self.rotation)
    }

    /// Absolute occupied cells: origin + shape
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut cells = self.shape();
        for cell in &mut cells {
            cell.0 += self.x;
            cell.1 += self.y;
        }
        cells
    }

    /// New piece with the origin shifted. Does not validate bounds.
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// New piece advanced one rotation state (wrap-around). Does not
    /// validate legality.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        Self { rotation, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn test_every_shape_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let shape = shape_cells(kind, rotation);
                for (i, a) in shape.iter().enumerate() {
                    for b in shape.iter().skip(i + 1) {
                        assert_ne!(a, b, "duplicate cell in {:?} {:?}", kind, rotation);
                    }
                }
            }
        }
    }

    #[test]
    fn test_shapes_fit_template() {
        // Every offset stays inside the 4x4 template.
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                for (dx, dy) in shape_cells(kind, rotation) {
                    assert!((0..4).contains(&dx), "{:?} {:?}", kind, rotation);
                    assert!((0..4).contains(&dy), "{:?} {:?}", kind, rotation);
                }
            }
        }
    }

    #[test]
    fn test_o_shape_rotation_invariant() {
        let north = shape_cells(PieceKind::O, Rotation::North);
        for rotation in ROTATIONS {
            assert_eq!(shape_cells(PieceKind::O, rotation), north);
        }
    }

    #[test]
    fn test_i_piece_shapes() {
        assert_eq!(
            shape_cells(PieceKind::I, Rotation::North),
            [(0, 1), (1, 1), (2, 1), (3, 1)]
        );
        assert_eq!(
            shape_cells(PieceKind::I, Rotation::East),
            [(2, 0), (2, 1), (2, 2), (2, 3)]
        );
    }

    #[test]
    fn test_spawn_piece() {
        let piece = Piece::spawn(PieceSpec {
            kind: PieceKind::T,
            color: 3,
        });
        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.rotation, Rotation::North);
        assert_eq!((piece.x, piece.y), SPAWN_POSITION);
        assert_eq!(piece.color, 3);
    }

    #[test]
    fn test_absolute_cells() {
        let piece = Piece::spawn(PieceSpec {
            kind: PieceKind::O,
            color: 1,
        });
        // O at spawn origin (3, 0) occupies columns 4-5.
        assert_eq!(piece.cells(), [(4, 0), (5, 0), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_moved_is_pure() {
        let piece = Piece::spawn(PieceSpec {
            kind: PieceKind::L,
            color: 2,
        });
        let shifted = piece.moved(-2, 3);
        assert_eq!((shifted.x, shifted.y), (1, 3));
        // Original untouched; no bounds check even off-grid.
        assert_eq!((piece.x, piece.y), SPAWN_POSITION);
        let off = piece.moved(-10, 0);
        assert_eq!(off.x, -7);
    }

    #[test]
    fn test_rotated_wraps() {
        let piece = Piece::spawn(PieceSpec {
            kind: PieceKind::J,
            color: 1,
        });
        let mut r = piece;
        for _ in 0..4 {
            r = r.rotated(true);
        }
        assert_eq!(r, piece);
        assert_eq!(piece.rotated(true).rotated(false), piece);
    }
}
