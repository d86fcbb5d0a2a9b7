//! Scene views: map the board and scene state into a framebuffer.
//!
//! Pure, no I/O. The falling piece is always committed into the grid, so
//! drawing the visible window draws the piece too; no separate overlay pass
//! is needed.

use blockfall_core::Board;
use blockfall_types::{Scene, BOARD_HEIGHT, BOARD_WIDTH};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 16-entry cell palette. Grid cell values are palette indices, so an
/// occupied cell's value picks its hue directly.
const CELL_COLORS: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x1d, 0x2b, 0x53),
    Rgb::new(0x7e, 0x25, 0x53),
    Rgb::new(0x00, 0x87, 0x51),
    Rgb::new(0xab, 0x52, 0x36),
    Rgb::new(0x5f, 0x57, 0x4f),
    Rgb::new(0xc2, 0xc3, 0xc7),
    Rgb::new(0xff, 0xf1, 0xe8),
    Rgb::new(0xff, 0x00, 0x4d),
    Rgb::new(0xff, 0xa3, 0x00),
    Rgb::new(0xff, 0xec, 0x27),
    Rgb::new(0x00, 0xe4, 0x36),
    Rgb::new(0x29, 0xad, 0xff),
    Rgb::new(0x83, 0x76, 0x9c),
    Rgb::new(0xff, 0x77, 0xa8),
    Rgb::new(0xff, 0xcc, 0xaa),
];

/// Palette lookup for a cell value.
pub fn cell_color(value: u8) -> Rgb {
    CELL_COLORS[(value & 0x0f) as usize]
}

/// Renders the three scenes into a framebuffer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame of the given scene.
    pub fn render_into(
        &self,
        board: &Board,
        scene: Scene,
        frame: u64,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        match scene {
            Scene::Title => self.draw_title(frame, viewport, fb),
            Scene::Play => self.draw_playfield(board, viewport, fb),
            Scene::GameOver => {
                self.draw_playfield(board, viewport, fb);
                self.draw_game_over(viewport, fb);
            }
        }
    }

    /// Top-left corner of the playfield frame (border included), centered in
    /// the viewport.
    fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    fn draw_playfield(&self, board: &Board, viewport: Viewport, fb: &mut FrameBuffer) {
        let (start_x, start_y) = self.frame_origin(viewport);
        let board_w = BOARD_WIDTH as u16 * self.cell_w;
        let board_h = BOARD_HEIGHT as u16 * self.cell_h;

        self.draw_border(fb, start_x, start_y, board_w + 2, board_h + 2);

        let empty = CellStyle::new(Rgb::new(80, 80, 90), Rgb::new(20, 20, 28));

        let mut cells = [[0u8; BOARD_WIDTH]; BOARD_HEIGHT];
        board.write_visible(&mut cells);

        for (row, row_cells) in cells.iter().enumerate() {
            for (col, &value) in row_cells.iter().enumerate() {
                let style = if value == 0 {
                    empty
                } else {
                    let color = cell_color(value);
                    CellStyle::new(color, color)
                };
                fb.fill_rect(
                    start_x + 1 + col as u16 * self.cell_w,
                    start_y + 1 + row as u16 * self.cell_h,
                    self.cell_w,
                    self.cell_h,
                    ' ',
                    style,
                );
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        for dx in 1..w.saturating_sub(1) {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h.saturating_sub(1) {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_title(&self, frame: u64, viewport: Viewport, fb: &mut FrameBuffer) {
        // Color cycles with the frame counter, one palette entry per frame.
        let cycle = CellStyle::new(cell_color((frame % 16) as u8), Rgb::new(0, 0, 0));
        let plain = CellStyle::new(Rgb::new(180, 180, 180), Rgb::new(0, 0, 0));

        put_centered(fb, viewport.height / 3, "B L O C K F A L L", cycle);
        put_centered(fb, viewport.height * 2 / 3, "- PRESS ENTER -", plain);
    }

    fn draw_game_over(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        let (_, start_y) = self.frame_origin(viewport);
        let alarm = CellStyle::new(cell_color(8), Rgb::new(0, 0, 0));
        let plain = CellStyle::new(Rgb::new(180, 180, 180), Rgb::new(0, 0, 0));

        put_centered(fb, start_y.saturating_sub(1), "GAME OVER", alarm);
        put_centered(
            fb,
            viewport.height.saturating_sub(2),
            "- PRESS ENTER -",
            plain,
        );
    }
}

fn put_centered(fb: &mut FrameBuffer, y: u16, s: &str, style: CellStyle) {
    let x = (fb.width() as usize).saturating_sub(s.chars().count()) / 2;
    fb.put_str(x as u16, y, s, style);
}
