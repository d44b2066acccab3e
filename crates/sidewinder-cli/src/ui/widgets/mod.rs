use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{board_display::*, cell_display::*, session_display::*, stats_display::*};

mod board_display;
mod cell_display;
mod session_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    pub const CANARY: Color = Color::Rgb(238, 230, 0);
    pub const GRASS: Color = Color::Rgb(23, 160, 23);
    pub const FOREST: Color = Color::Rgb(31, 70, 31);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::CANARY);
    pub const SNAKE_HEAD: Style = bg_only(color::FOREST);
    pub const SNAKE_BODY: Style = bg_only(color::GRASS);
    pub const APPLE: Style = bg_only(color::RED);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
