//! Colors per theme.

use crate::fb::{CellStyle, Rgb};
use crate::types::{PieceColor, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background around the board
    pub screen: Rgb,
    /// Inside of the board and preview boxes
    pub well: Rgb,
    pub border: Rgb,
    /// Empty-cell dot
    pub dot: Rgb,
    pub label: Rgb,
    pub value: Rgb,
    pub overlay_fg: Rgb,
    pub overlay_bg: Rgb,
}

const LIGHT: Palette = Palette {
    screen: Rgb::new(245, 245, 245),
    well: Rgb::new(225, 225, 230),
    border: Rgb::new(60, 60, 70),
    dot: Rgb::new(185, 185, 195),
    label: Rgb::new(30, 30, 40),
    value: Rgb::new(70, 70, 80),
    overlay_fg: Rgb::new(255, 255, 255),
    overlay_bg: Rgb::new(50, 50, 60),
};

const DARK: Palette = Palette {
    screen: Rgb::new(0, 0, 0),
    well: Rgb::new(30, 30, 40),
    border: Rgb::new(200, 200, 200),
    dot: Rgb::new(90, 90, 100),
    label: Rgb::new(220, 220, 220),
    value: Rgb::new(200, 200, 200),
    overlay_fg: Rgb::new(255, 255, 255),
    overlay_bg: Rgb::new(0, 0, 0),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn piece(&self, color: PieceColor) -> Rgb {
        match color {
            PieceColor::Cyan => Rgb::new(80, 220, 220),
            PieceColor::Blue => Rgb::new(80, 120, 220),
            PieceColor::Orange => Rgb::new(255, 165, 0),
            PieceColor::Yellow => Rgb::new(240, 220, 80),
            PieceColor::Green => Rgb::new(100, 220, 120),
            PieceColor::Purple => Rgb::new(200, 120, 220),
            PieceColor::Red => Rgb::new(220, 80, 80),
        }
    }

    pub fn screen_style(&self) -> CellStyle {
        CellStyle::plain(self.label, self.screen)
    }

    pub fn border_style(&self) -> CellStyle {
        CellStyle::plain(self.border, self.screen)
    }

    pub fn dot_style(&self) -> CellStyle {
        CellStyle::plain(self.dot, self.well).dim()
    }

    pub fn label_style(&self) -> CellStyle {
        CellStyle::plain(self.label, self.screen).bold()
    }

    pub fn value_style(&self) -> CellStyle {
        CellStyle::plain(self.value, self.screen)
    }

    pub fn overlay_style(&self) -> CellStyle {
        CellStyle::plain(self.overlay_fg, self.overlay_bg).bold()
    }
}
