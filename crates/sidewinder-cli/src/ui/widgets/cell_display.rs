use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::Widget,
};
use sidewinder_engine::Tile;

use crate::ui::widgets::style;

/// A single board cell, drawn as a flat colored block.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
}

impl CellDisplay {
    pub const fn new(style: Style) -> Self {
        Self { style }
    }

    /// Terminal columns per board cell. Two columns keep cells square-ish.
    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_tile(tile: Tile) -> Self {
        match tile {
            Tile::Empty => Self::new(style::EMPTY),
            Tile::SnakeHead => Self::new(style::SNAKE_HEAD),
            Tile::SnakeBody => Self::new(style::SNAKE_BODY),
            Tile::Apple => Self::new(style::APPLE),
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, self.style);
    }
}
