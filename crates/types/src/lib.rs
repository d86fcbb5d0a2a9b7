//! Shared constants and plain data types.
//!
//! Everything here is pure data with no dependencies, usable from the core
//! simulation, the input mapping, and the terminal renderer alike.

/// Playable field dimensions (visible cells).
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Full grid dimensions including the wall margin and hidden spawn rows.
///
/// Walls fill column 0, the last column, and the last row. The four rows
/// above the visible window give freshly spawned pieces room to enter.
pub const GRID_WIDTH: usize = BOARD_WIDTH + 2;
pub const GRID_HEIGHT: usize = BOARD_HEIGHT + 5;

/// Offsets from grid coordinates to the visible window.
pub const VISIBLE_COL_OFFSET: usize = 1;
pub const VISIBLE_ROW_OFFSET: usize = 4;

/// Cell value stamped into wall cells. Any nonzero value is occupied; the
/// value doubles as the palette index used for display.
pub const WALL: u8 = 1;

/// Spawn coordinate for new pieces, in grid coordinates.
pub const SPAWN_X: i8 = 5;
pub const SPAWN_Y: i8 = 1;

/// Gravity pulls the piece down one row every this many frames.
pub const GRAVITY_INTERVAL_FRAMES: u64 = 30;

/// Rows a hard drop offsets the piece by, tested all-or-nothing.
pub const HARD_DROP_ROWS: i8 = 10;

/// Fixed frame length of the main loop, in milliseconds (~60 FPS).
pub const TICK_MS: u64 = 16;

/// The seven piece kinds. Discriminants index the shape catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    J,
    S,
    Z,
    O,
    T,
}

impl PieceKind {
    /// All kinds, in catalog order. Uniform random spawning draws from this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::O,
        PieceKind::T,
    ];
}

/// Discrete per-press gameplay actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAction {
    Rotate,
    MoveLeft,
    MoveRight,
    MoveDown,
    HardDrop,
}

/// Actions pressed during one frame, consumed by the session once per tick.
///
/// The session applies at most one of these per tick, in priority order
/// rotate > left > right > down > drop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub rotate: bool,
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub drop: bool,
}

impl FrameInput {
    /// Record a pressed action for this frame.
    pub fn press(&mut self, action: PlayAction) {
        match action {
            PlayAction::Rotate => self.rotate = true,
            PlayAction::MoveLeft => self.left = true,
            PlayAction::MoveRight => self.right = true,
            PlayAction::MoveDown => self.down = true,
            PlayAction::HardDrop => self.drop = true,
        }
    }

    pub fn any(&self) -> bool {
        self.rotate || self.left || self.right || self.down || self.drop
    }
}

/// Top-level scenes of the process loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Title,
    Play,
    GameOver,
}
