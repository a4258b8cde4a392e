//! GameView: maps a `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board and both previews are drawn by the core through the
//! [`Surface`] trait; each view is a [`CellSurface`] window onto the
//! framebuffer that scales board cells to `cell_w` x `cell_h` characters and
//! clips anything outside its bounds (rows above the board included).

use crate::core::render::{Paint, Surface};
use crate::core::{Game, Stat};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::input::{MenuItem, OptionsMenu, Preferences};
use crate::palette::Palette;
use crate::types::{PieceColor, Theme, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_SIZE};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Everything one frame shows
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub game: &'a Game,
    pub prefs: &'a Preferences,
    pub menu: &'a OptionsMenu,
}

/// A rectangular window of the framebuffer addressed in board cells.
pub struct CellSurface<'a> {
    fb: &'a mut FrameBuffer,
    /// Terminal position of cell (0, 0)
    left: u16,
    top: u16,
    cols: u8,
    rows: u8,
    cell_w: u16,
    cell_h: u16,
    palette: &'a Palette,
    empty: Cell,
}

impl CellSurface<'_> {
    fn contains(&self, x: i16, y: i16) -> bool {
        x >= 0 && y >= 0 && x < self.cols as i16 && y < self.rows as i16
    }

    fn paint(&mut self, x: i16, y: i16, cell: Cell) {
        if !self.contains(x, y) {
            return;
        }
        let px = self.left + (x as u16) * self.cell_w;
        let py = self.top + (y as u16) * self.cell_h;
        self.fb
            .fill_rect(px, py, self.cell_w, self.cell_h, cell.ch, cell.style);
    }
}

impl Surface for CellSurface<'_> {
    fn fill_cell(&mut self, x: i8, y: i8, color: PieceColor, paint: Paint) {
        let style = CellStyle::plain(self.palette.piece(color), self.palette.well);
        let cell = match paint {
            Paint::Solid => style.bold().cell('█'),
            Paint::Outline => style.dim().cell('░'),
        };
        self.paint(x as i16, y as i16, cell);
    }

    fn clear_region(&mut self, x: i8, y: i8, width: u8, height: u8) {
        let empty = self.empty;
        for cy in y as i16..y as i16 + height as i16 {
            for cx in x as i16..x as i16 + width as i16 {
                self.paint(cx, cy, empty);
            }
        }
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Options box width in columns
const OPTIONS_W: u16 = 36;

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, scene: &Scene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        let palette = Palette::for_theme(scene.prefs.theme);

        fb.resize(viewport.width, viewport.height);
        fb.clear(palette.screen_style().cell(' '));

        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        fb.draw_box(start_x, start_y, frame_w, frame_h, palette.border_style());
        {
            let mut surface = CellSurface {
                fb: &mut *fb,
                left: start_x + 1,
                top: start_y + 1,
                cols: BOARD_WIDTH,
                rows: BOARD_HEIGHT,
                cell_w: self.cell_w,
                cell_h: self.cell_h,
                palette,
                empty: palette.dot_style().cell('·'),
            };
            surface.clear_region(0, 0, BOARD_WIDTH, BOARD_HEIGHT);
            scene.game.board().draw(&mut surface);
        }

        let preview_w = (PREVIEW_SIZE as u16) * self.cell_w + 2;
        let preview_h = (PREVIEW_SIZE as u16) * self.cell_h + 2;
        let board = scene.game.board();

        // NEXT and stats to the right of the board.
        let panel_x = start_x + frame_w + 2;
        if panel_x + preview_w <= viewport.width {
            let mut surface = self.preview(fb, palette, panel_x, start_y, "NEXT");
            board.draw_next(&mut surface);

            let stats_y = start_y + 1 + preview_h + 1;
            self.draw_stats(fb, scene.game, palette, panel_x, stats_y);
        }

        // HOLD to the left.
        if start_x >= preview_w + 2 {
            let hold_x = start_x - preview_w - 2;
            let mut surface = self.preview(fb, palette, hold_x, start_y, "HOLD");
            board.draw_hold(&mut surface);
        }

        if scene.menu.is_open() {
            self.draw_options(fb, scene, palette, viewport);
        } else if scene.game.is_paused() {
            self.draw_banner(fb, palette, start_x, start_y, frame_w, frame_h, "PAUSED", "O options");
        } else if scene.game.is_over() {
            self.draw_banner(
                fb,
                palette,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "GAME OVER",
                "ENTER new game",
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    /// Titled preview box at (x, y); returns the surface for its inside.
    fn preview<'a>(
        &self,
        fb: &'a mut FrameBuffer,
        palette: &'a Palette,
        x: u16,
        y: u16,
        title: &str,
    ) -> CellSurface<'a> {
        let w = (PREVIEW_SIZE as u16) * self.cell_w + 2;
        let h = (PREVIEW_SIZE as u16) * self.cell_h + 2;
        fb.put_str(x, y, title, palette.label_style());
        fb.draw_box(x, y + 1, w, h, palette.border_style());
        CellSurface {
            fb,
            left: x + 1,
            top: y + 2,
            cols: PREVIEW_SIZE,
            rows: PREVIEW_SIZE,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            palette,
            empty: CellStyle::plain(palette.dot, palette.well).cell(' '),
        }
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, game: &Game, palette: &Palette, x: u16, y: u16) {
        let account = game.account();
        let mut y = y;
        for stat in Stat::ALL {
            fb.put_str(x, y, stat_label(stat), palette.label_style());
            fb.put_u32(x, y + 1, stat.read(account), palette.value_style());
            y += 3;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        palette: &Palette,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        hint: &str,
    ) {
        let mid_y = start_y + frame_h / 2;
        for (dy, text) in [(0, title), (1, hint)] {
            let text_w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(text_w) / 2;
            let style = if dy == 0 {
                palette.overlay_style()
            } else {
                palette.overlay_style().dim()
            };
            fb.put_str(x, mid_y + dy, text, style);
        }
    }

    fn draw_options(&self, fb: &mut FrameBuffer, scene: &Scene<'_>, palette: &Palette, viewport: Viewport) {
        let w = OPTIONS_W.min(viewport.width);
        let h = (MenuItem::ALL.len() as u16 + 5).min(viewport.height);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        let style = palette.overlay_style();
        let plain = CellStyle { bold: false, ..style };
        fb.fill_rect(x, y, w, h, ' ', style);
        fb.draw_box(x, y, w, h, style);
        fb.put_str(x + 2, y + 1, "OPTIONS", style);

        let menu = scene.menu;
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let row = y + 3 + i as u16;
            let marker = if menu.cursor() == i { "> " } else { "  " };
            let col = fb.put_str(x + 2, row, marker, style);
            match *item {
                MenuItem::Bind(action) => {
                    fb.put_str(col, row, action.label(), plain);
                    let key = if menu.capturing() == Some(action) {
                        "press any key"
                    } else {
                        scene.prefs.keys.get(action)
                    };
                    fb.put_str(col + 12, row, key, style);
                }
                MenuItem::ToggleTheme => {
                    fb.put_str(col, row, "Theme", plain);
                    fb.put_str(col + 12, row, theme_name(scene.prefs.theme), style);
                }
                MenuItem::RevertDefaults => {
                    fb.put_str(col, row, "Revert to defaults", plain);
                }
            }
        }
    }
}

fn stat_label(stat: Stat) -> &'static str {
    match stat {
        Stat::Score => "SCORE",
        Stat::Lines => "LINES",
        Stat::Level => "LEVEL",
        Stat::Combo => "COMBO",
    }
}

fn theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}
