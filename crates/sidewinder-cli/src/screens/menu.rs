use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Text},
};
use sidewinder_engine::{Grid, SpawnSeed};

use crate::{
    screens::GameScreen,
    tui::{Runtime, Screen, ScreenTransition},
    ui::widgets::style,
};

/// The title screen. Holds the session settings and starts games from them.
#[derive(Debug)]
pub struct MenuScreen {
    grid: Grid,
    seed: Option<SpawnSeed>,
}

impl MenuScreen {
    pub fn new(grid: Grid, seed: Option<SpawnSeed>) -> Self {
        Self { grid, seed }
    }
}

impl Screen for MenuScreen {
    fn on_active(&mut self, runtime: &mut Runtime) {
        // Nothing moves here; just wait for input.
        runtime.set_tick_interval(None);
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        if let Some(key) = event.as_key_event() {
            match key.code {
                KeyCode::Enter => {
                    return ScreenTransition::Push(Box::new(GameScreen::new(self.grid, self.seed)));
                }
                KeyCode::Char('q') | KeyCode::Esc => return ScreenTransition::Exit,
                _ => {}
            }
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, _runtime: &mut Runtime) {}

    fn draw(&self, frame: &mut Frame) {
        let mut lines = vec![
            Line::styled("S I D E W I N D E R", style::DEFAULT),
            Line::raw(""),
            Line::raw(format!("BOARD  {0} x {0}", self.grid.size())),
        ];
        if let Some(seed) = self.seed {
            lines.push(Line::raw(format!("SEED   {seed}")));
        }
        lines.push(Line::raw(""));
        lines.push(Line::raw("Press Enter to start"));
        let text = Text::from(lines).centered();

        let help_text = Text::from("Controls: Enter (Start) | Q (Quit)")
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        let text_area = main_area.centered(
            Constraint::Length(40),
            Constraint::Length(u16::try_from(text.height()).unwrap()),
        );
        frame.render_widget(text, text_area);
        frame.render_widget(help_text, help_area);
    }
}
