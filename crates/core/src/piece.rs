//! Piece instance: a catalog shape placed on the grid.
//!
//! Pieces are cheap `Copy` values. Moves never mutate a piece in place;
//! every proposed transform builds a candidate instance that the session
//! tests against the board before it replaces the current one.

use blockfall_types::{PieceKind, SPAWN_X, SPAWN_Y};

use crate::catalog::shape_def;

/// A placed piece: kind, origin in grid coordinates, rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Interpreted modulo the shape's symmetry order.
    pub rotation: u8,
}

impl Piece {
    /// A fresh piece at the spawn coordinate, unrotated.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
            rotation: 0,
        }
    }

    /// The grid value this piece writes into cells it occupies.
    pub fn color(&self) -> u8 {
        shape_def(self.kind).color
    }

    /// Absolute grid cells covered by this piece: the origin plus the three
    /// catalog offsets, each offset rotated by `(dx, dy) -> (-dy, dx)`
    /// applied `rotation mod symmetry` times.
    pub fn cells(&self) -> [(i8, i8); 4] {
        let def = shape_def(self.kind);
        let steps = self.rotation % def.symmetry;

        let mut cells = [(self.x, self.y); 4];
        for (cell, &(mut dx, mut dy)) in cells[1..].iter_mut().zip(def.offsets.iter()) {
            for _ in 0..steps {
                (dx, dy) = (-dy, dx);
            }
            *cell = (self.x + dx, self.y + dy);
        }
        cells
    }

    /// Candidate translated by `(dx, dy)`.
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate rotated one step. The stored state stays normalized to the
    /// shape's symmetry order.
    pub fn rotated(&self) -> Self {
        let symmetry = shape_def(self.kind).symmetry;
        Self {
            rotation: (self.rotation + 1) % symmetry,
            ..*self
        }
    }
}
