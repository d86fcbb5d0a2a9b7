//! Board integration tests: walls, legality, commit/erase, row clearing.

use blockfall::core::{Board, Piece};
use blockfall::types::{
    PieceKind, BOARD_HEIGHT, BOARD_WIDTH, GRID_HEIGHT, GRID_WIDTH, VISIBLE_ROW_OFFSET, WALL,
};

/// Grid row of the lowest visible row.
const FLOOR: i8 = (VISIBLE_ROW_OFFSET + BOARD_HEIGHT - 1) as i8;

#[test]
fn test_new_board_walls_and_empty_interior() {
    let board = Board::new();

    for y in 0..GRID_HEIGHT as i8 {
        assert_eq!(board.cell(0, y), Some(WALL));
        assert_eq!(board.cell(GRID_WIDTH as i8 - 1, y), Some(WALL));
    }
    for x in 0..GRID_WIDTH as i8 {
        assert_eq!(board.cell(x, GRID_HEIGHT as i8 - 1), Some(WALL));
    }
    assert_eq!(board.occupied_visible(), 0);
}

#[test]
fn test_spawned_bar_is_legal_on_empty_board() {
    let board = Board::new();
    assert!(board.is_legal(&Piece::spawn(PieceKind::I)));
}

#[test]
fn test_every_spawn_is_legal_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        assert!(board.is_legal(&Piece::spawn(kind)), "{:?}", kind);
    }
}

#[test]
fn test_is_legal_against_walls_and_stack() {
    let mut board = Board::new();

    // Overlapping the left wall column.
    let on_wall = Piece {
        kind: PieceKind::O,
        x: 0,
        y: 10,
        rotation: 0,
    };
    assert!(!board.is_legal(&on_wall));

    // Overlapping the floor wall row.
    let on_floor = Piece {
        kind: PieceKind::O,
        x: 4,
        y: GRID_HEIGHT as i8 - 1,
        rotation: 0,
    };
    assert!(!board.is_legal(&on_floor));

    // Overlapping stacked content.
    let parked = Piece {
        kind: PieceKind::O,
        x: 4,
        y: 10,
        rotation: 0,
    };
    board.commit(&parked);
    assert!(!board.is_legal(&parked));

    // One column over is free.
    assert!(board.is_legal(&parked.shifted(2, 0)));
}

#[test]
fn test_commit_then_erase_restores_grid() {
    let mut board = Board::new();
    board.set(8, FLOOR, 5);
    let before = board.clone();

    let piece = Piece {
        kind: PieceKind::T,
        x: 5,
        y: 12,
        rotation: 3,
    };
    board.commit(&piece);
    assert_ne!(board, before);

    board.erase(&piece);
    assert_eq!(board, before);
}

#[test]
fn test_gap_fill_clears_row_and_shifts() {
    let mut board = Board::new();

    // Fill the floor row except one gap at column 3.
    for x in 1..=BOARD_WIDTH as i8 {
        if x != 3 {
            board.set(x, FLOOR, 6);
        }
    }
    // A marker two rows above, and one directly above the gap column.
    board.set(5, FLOOR - 1, 9);

    // Drop a vertical bar into the gap: its lowest cell lands on the floor
    // row and completes it.
    let bar = Piece {
        kind: PieceKind::I,
        x: 3,
        y: FLOOR - 2,
        rotation: 0,
    };
    assert!(board.is_legal(&bar));
    board.commit(&bar);

    let occupied_before = board.occupied_visible();
    assert_eq!(board.clear_completed_rows(), 1);

    // Exactly one interior row's worth of cells disappeared.
    assert_eq!(board.occupied_visible(), occupied_before - BOARD_WIDTH);

    // Rows above shifted down: the marker sits one row lower now.
    assert_eq!(board.cell(5, FLOOR), Some(9));
    assert_eq!(board.cell(5, FLOOR - 1), Some(0));
    // The bar's three surviving cells followed it down one row.
    assert_eq!(board.cell(3, FLOOR), Some(bar.color()));
    assert_eq!(board.cell(3, FLOOR - 3), Some(0));

    // Topmost visible row is empty.
    for x in 1..=BOARD_WIDTH as i8 {
        assert_eq!(board.cell(x, VISIBLE_ROW_OFFSET as i8), Some(0));
    }

    // And no completed row remains.
    assert_eq!(board.clear_completed_rows(), 0);
}

#[test]
fn test_double_clear_counts_both_rows() {
    let mut board = Board::new();
    for gy in [FLOOR, FLOOR - 1] {
        for x in 1..=BOARD_WIDTH as i8 {
            board.set(x, gy, 10);
        }
    }
    assert_eq!(board.clear_completed_rows(), 2);
    assert_eq!(board.occupied_visible(), 0);
}

#[test]
fn test_walls_survive_clearing() {
    let mut board = Board::new();
    for x in 1..=BOARD_WIDTH as i8 {
        board.set(x, FLOOR, 6);
    }
    board.clear_completed_rows();

    for y in 0..GRID_HEIGHT as i8 {
        assert_eq!(board.cell(0, y), Some(WALL), "left wall at row {}", y);
        assert_eq!(
            board.cell(GRID_WIDTH as i8 - 1, y),
            Some(WALL),
            "right wall at row {}",
            y
        );
    }
}

#[test]
fn test_reset_after_play() {
    let mut board = Board::new();
    board.commit(&Piece::spawn(PieceKind::Z));
    board.set(4, FLOOR, 11);

    board.reset();
    assert_eq!(board, Board::new());
}
