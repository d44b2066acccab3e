use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};
use sidewinder_engine::TileGrid;

use crate::ui::widgets::CellDisplay;

/// The playable interior of the board.
///
/// The surrounding [`BlockWidget`] border doubles as the wall ring, so the
/// widget itself renders only interior tiles.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    tiles: TileGrid,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(tiles: TileGrid) -> Self {
        Self { tiles, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        u16::from(self.tiles.interior_size()) * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::from(self.tiles.interior_size()) * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let interior = usize::from(self.tiles.interior_size());
        let vertical =
            Layout::vertical((0..interior).map(|_| Constraint::Length(CellDisplay::height())));
        let horizontal =
            Layout::horizontal((0..interior).map(|_| Constraint::Length(CellDisplay::width())));

        let row_areas = vertical.split(area);
        for (row_area, row) in iter::zip(row_areas.iter().copied(), self.tiles.rows()) {
            let cell_areas = horizontal.split(row_area);
            for (cell_area, tile) in iter::zip(cell_areas.iter().copied(), row.iter().copied()) {
                CellDisplay::from_tile(tile).render(cell_area, buf);
            }
        }
    }
}
