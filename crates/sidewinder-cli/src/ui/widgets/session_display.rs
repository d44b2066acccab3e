use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};
use sidewinder_engine::{GameSession, SessionState};

use crate::ui::widgets::{BoardDisplay, StatsDisplay, color, style};

/// The whole session view: stats panel, board, and state popup.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = match self.session.session_state() {
            SessionState::Playing => color::WHITE,
            SessionState::Paused => color::YELLOW,
            SessionState::GameOver => color::RED,
            SessionState::Won => color::GREEN,
        };

        let game_board = BoardDisplay::new(self.session.tile_grid()).block(
            Block::bordered()
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let session_stats = StatsDisplay::new(self.session).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::symmetric(1, 0))
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [stats_column, board_column] = Layout::horizontal([
            Constraint::Length(session_stats.width()),
            Constraint::Length(game_board.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(session_stats.height())]).areas(stats_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(board_column);

        let game_board_width = game_board.width();
        session_stats.render(stats_area, buf);
        game_board.render(board_area, buf);

        let popup = match self.session.session_state() {
            SessionState::Playing => None,
            SessionState::Paused => {
                Some(("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW)))
            }
            SessionState::GameOver => {
                Some(("GAME OVER!!", Style::new().fg(color::WHITE).bg(color::RED)))
            }
            SessionState::Won => {
                Some(("YOU WIN!!", Style::new().fg(color::BLACK).bg(color::GREEN)))
            }
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area =
                board_area.centered(Constraint::Length(game_board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
