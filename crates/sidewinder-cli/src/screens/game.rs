use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};
use sidewinder_engine::{Direction, GameSession, Grid, SessionState, SpawnSeed};

use crate::{
    tui::{Runtime, Screen, ScreenTransition},
    ui::widgets::SessionDisplay,
};

#[derive(Debug)]
pub struct GameScreen {
    session: GameSession,
    grid: Grid,
    seed: Option<SpawnSeed>,
}

impl GameScreen {
    pub fn new(grid: Grid, seed: Option<SpawnSeed>) -> Self {
        let session = match seed {
            Some(seed) => GameSession::with_seed(grid, seed),
            None => GameSession::new(grid),
        };
        Self {
            session,
            grid,
            seed,
        }
    }

    /// Keeps the runtime timer in sync with the session: one tick per step
    /// while playing, no ticks otherwise.
    fn apply_tick_interval(&self, runtime: &mut Runtime) {
        let interval = self
            .session
            .session_state()
            .is_playing()
            .then(|| self.session.step_interval());
        runtime.set_tick_interval(interval);
    }
}

impl Screen for GameScreen {
    fn on_active(&mut self, runtime: &mut Runtime) {
        self.apply_tick_interval(runtime);
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        let is_playing = self.session.session_state().is_playing();
        let is_paused = self.session.session_state().is_paused();
        let is_ended = matches!(
            self.session.session_state(),
            SessionState::GameOver | SessionState::Won
        );
        let can_toggle_pause = is_playing || is_paused;

        if let Some(key) = event.as_key_event() {
            match key.code {
                KeyCode::Up | KeyCode::Char('w') if is_playing => {
                    _ = self.session.try_steer(Direction::Up);
                }
                KeyCode::Down | KeyCode::Char('s') if is_playing => {
                    _ = self.session.try_steer(Direction::Down);
                }
                KeyCode::Left | KeyCode::Char('a') if is_playing => {
                    _ = self.session.try_steer(Direction::Left);
                }
                KeyCode::Right | KeyCode::Char('d') if is_playing => {
                    _ = self.session.try_steer(Direction::Right);
                }
                KeyCode::Char('p') if can_toggle_pause => {
                    self.session.toggle_pause();
                    self.apply_tick_interval(runtime);
                }
                KeyCode::Char('r') if is_ended => {
                    return ScreenTransition::Replace(Box::new(GameScreen::new(
                        self.grid, self.seed,
                    )));
                }
                KeyCode::Char('q') => return ScreenTransition::Pop,
                _ => {}
            }
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, runtime: &mut Runtime) {
        self.session.step();
        // Eating an apple may raise the level; a death stops the timer.
        self.apply_tick_interval(runtime);
    }

    fn draw(&self, frame: &mut Frame) {
        let session_display = SessionDisplay::new(&self.session);
        let help_text = match self.session.session_state() {
            SessionState::Playing => "Controls: ← ↑ → ↓ / A W D S (Steer) | P (Pause) | Q (Menu)",
            SessionState::Paused => "Controls: P (Resume) | Q (Menu)",
            SessionState::GameOver | SessionState::Won => "Controls: R (Restart) | Q (Menu)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(help_text, help_area);
    }
}
