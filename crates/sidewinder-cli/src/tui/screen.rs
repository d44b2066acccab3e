use std::fmt;

use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::{App, Runtime};

/// Individual screen in the application.
///
/// # Lifecycle
///
/// 1. **Created** - Screen is constructed
/// 2. **[`on_active`]** - Screen becomes active (foreground)
/// 3. **Active** - Screen handles events, updates, and draws
/// 4. **Dropped** - Screen is removed from the stack (Pop/Replace/Exit)
///
/// A pushed-over screen stays in the stack and gets [`on_active`] again
/// when the screen above it pops.
///
/// # Runtime Configuration
///
/// Screens configure the [`Runtime`] tick interval in [`on_active`], and
/// may re-apply it from [`handle_event`] or [`update`] whenever their pace
/// changes.
///
/// [`on_active`]: Self::on_active
/// [`handle_event`]: Self::handle_event
/// [`update`]: Self::update
pub trait Screen: fmt::Debug {
    /// Called when this screen becomes active (foreground).
    ///
    /// This is called:
    ///
    /// - On app startup (for the initial screen)
    /// - When this screen is pushed and becomes active
    /// - When popping back to this screen (returning from a child screen)
    ///
    /// Use this to configure [`Runtime`] settings for this screen.
    fn on_active(&mut self, runtime: &mut Runtime);

    /// Handles terminal events and returns transition.
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) -> ScreenTransition;

    /// Updates screen state (called on each tick).
    fn update(&mut self, runtime: &mut Runtime);

    /// Renders the screen.
    fn draw(&self, frame: &mut Frame);
}

/// Screen transition result from event handling.
#[derive(Debug)]
pub enum ScreenTransition {
    /// Stay in the current screen.
    Stay,

    /// Push a new screen on top of the current one.
    ///
    /// The current screen stays in the stack and is reactivated when the
    /// new screen pops.
    Push(Box<dyn Screen>),

    /// Pop the current screen and return to the previous one.
    Pop,

    /// Replace the current screen with a new one.
    Replace(Box<dyn Screen>),

    /// Exit the application.
    Exit,
}

/// Screen stack manager that implements App.
#[derive(Debug)]
pub struct ScreenStack<'a> {
    screens: Vec<Box<dyn Screen + 'a>>,
    should_exit: bool,
}

impl<'a> ScreenStack<'a> {
    /// Creates a new screen stack with an initial screen.
    #[must_use]
    pub fn new(initial: Box<dyn Screen + 'a>) -> Self {
        Self {
            screens: vec![initial],
            should_exit: false,
        }
    }

    /// Applies a screen transition.
    fn apply_transition(&mut self, runtime: &mut Runtime, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}

            ScreenTransition::Push(mut new_screen) => {
                new_screen.on_active(runtime);
                self.screens.push(new_screen);
            }

            ScreenTransition::Pop => {
                self.screens.pop();
                if let Some(prev_screen) = self.screens.last_mut() {
                    prev_screen.on_active(runtime);
                }
            }

            ScreenTransition::Replace(mut new_screen) => {
                self.screens.pop();
                new_screen.on_active(runtime);
                self.screens.push(new_screen);
            }

            ScreenTransition::Exit => {
                self.screens.clear();
                self.should_exit = true;
            }
        }
    }
}

impl App for ScreenStack<'_> {
    fn init(&mut self, runtime: &mut Runtime) {
        if let Some(screen) = self.screens.last_mut() {
            screen.on_active(runtime);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit || self.screens.is_empty()
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        if let Some(current) = self.screens.last_mut() {
            let transition = current.handle_event(runtime, &event);
            self.apply_transition(runtime, transition);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        if let Some(current) = self.screens.last() {
            current.draw(frame);
        }
    }

    fn update(&mut self, runtime: &mut Runtime) {
        if let Some(current) = self.screens.last_mut() {
            current.update(runtime);
        }
    }
}
