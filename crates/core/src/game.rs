//! Game session: one board, one active piece, a per-frame update.
//!
//! The falling piece is always committed to the grid between updates. Every
//! proposed move follows the same protocol: erase the current piece, test
//! the candidate, commit whichever side won. Strict ordering inside a tick
//! (erase before test, test before commit) is the whole concurrency story;
//! nothing here blocks or spans frames.

use blockfall_types::{FrameInput, GRAVITY_INTERVAL_FRAMES, HARD_DROP_ROWS};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;

/// One run of the game: grid, falling piece, and the playing/over flag.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    piece: Piece,
    rng: SimpleRng,
    active: bool,
}

impl Game {
    /// New session with a freshly spawned piece already on the board.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut board = Board::new();
        let piece = Piece::spawn(rng.next_kind());
        board.commit(&piece);
        Self {
            board,
            piece,
            rng,
            active: true,
        }
    }

    /// Wipe the board and start over with a fresh piece. Used on restart
    /// after a game over; the RNG stream continues where it left off.
    pub fn reset(&mut self) {
        self.board.reset();
        self.piece = Piece::spawn(self.rng.next_kind());
        self.board.commit(&self.piece);
        self.active = true;
    }

    /// False once a spawn failed; the session is over until `reset`.
    pub fn active(&self) -> bool {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// One simulation step. `frame` comes from the caller's frame clock and
    /// gates gravity; `input` holds the actions pressed this frame.
    pub fn update(&mut self, frame: u64, input: &FrameInput) {
        if !self.active {
            return;
        }

        if let Some(candidate) = self.requested_move(input) {
            if candidate != self.piece {
                self.try_replace(candidate);
            }
        }

        if frame % GRAVITY_INTERVAL_FRAMES == 0 {
            self.apply_gravity();
        }
    }

    /// At most one input action per tick, in priority order.
    fn requested_move(&self, input: &FrameInput) -> Option<Piece> {
        if input.rotate {
            Some(self.piece.rotated())
        } else if input.left {
            Some(self.piece.shifted(-1, 0))
        } else if input.right {
            Some(self.piece.shifted(1, 0))
        } else if input.down {
            Some(self.piece.shifted(0, 1))
        } else if input.drop {
            // Literal fixed offset: the whole move stands or falls on the
            // target position, it does not settle to the deepest legal row.
            Some(self.piece.shifted(0, HARD_DROP_ROWS))
        } else {
            None
        }
    }

    /// Erase-test-commit. The current piece comes off the grid first so its
    /// own cells cannot block the candidate; on rejection it goes back
    /// unchanged.
    fn try_replace(&mut self, candidate: Piece) -> bool {
        self.board.erase(&self.piece);
        if self.board.is_legal(&candidate) {
            self.board.commit(&candidate);
            self.piece = candidate;
            true
        } else {
            self.board.commit(&self.piece);
            false
        }
    }

    /// One-row descent; a rejected descent means the piece has landed.
    fn apply_gravity(&mut self) {
        if !self.try_replace(self.piece.shifted(0, 1)) {
            self.lock_and_respawn();
        }
    }

    /// The piece is already re-committed at its resting position: sweep
    /// completed rows, then bring in the next piece. A blocked spawn ends
    /// the session with the board left as-is for display.
    fn lock_and_respawn(&mut self) {
        self.board.clear_completed_rows();

        let piece = Piece::spawn(self.rng.next_kind());
        if self.board.is_legal(&piece) {
            self.board.commit(&piece);
            self.piece = piece;
        } else {
            self.active = false;
        }
    }
}
