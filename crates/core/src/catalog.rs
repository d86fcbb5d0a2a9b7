//! Piece catalog: the seven falling shapes as static offset patterns.
//!
//! Each shape is three cells relative to an origin cell (the origin itself
//! is always part of the shape), a rotation symmetry order, and a display
//! color. The color value is what gets written into occupied grid cells.

use blockfall_types::PieceKind;

/// Offset of one cell relative to the piece origin.
pub type CellOffset = (i8, i8);

/// Immutable catalog entry for one piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    /// Number of distinct orientations: 1, 2, or 4.
    pub symmetry: u8,
    /// Cells relative to the origin. The origin is implicitly cell four.
    pub offsets: [CellOffset; 3],
    /// Palette index, doubles as the occupancy value on the grid.
    pub color: u8,
}

/// Shape table, indexed by `PieceKind` discriminant.
const SHAPES: [ShapeDef; 7] = [
    // I: vertical bar through the origin
    ShapeDef {
        symmetry: 2,
        offsets: [(0, -1), (0, 1), (0, 2)],
        color: 6,
    },
    // L
    ShapeDef {
        symmetry: 4,
        offsets: [(0, -1), (0, 1), (1, 1)],
        color: 5,
    },
    // J
    ShapeDef {
        symmetry: 4,
        offsets: [(0, -1), (0, 1), (-1, 1)],
        color: 9,
    },
    // S
    ShapeDef {
        symmetry: 2,
        offsets: [(0, -1), (1, 0), (1, 1)],
        color: 8,
    },
    // Z
    ShapeDef {
        symmetry: 2,
        offsets: [(0, -1), (-1, 0), (-1, 1)],
        color: 11,
    },
    // O
    ShapeDef {
        symmetry: 1,
        offsets: [(0, 1), (1, 0), (1, 1)],
        color: 10,
    },
    // T
    ShapeDef {
        symmetry: 4,
        offsets: [(0, -1), (1, 0), (-1, 0)],
        color: 2,
    },
];

/// Look up the catalog entry for a piece kind. Infallible: every kind has
/// exactly one entry.
pub fn shape_def(kind: PieceKind) -> &'static ShapeDef {
    &SHAPES[kind as usize]
}
