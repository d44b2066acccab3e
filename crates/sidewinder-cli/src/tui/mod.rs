pub use self::{
    app::App,
    runtime::Runtime,
    screen::{Screen, ScreenStack, ScreenTransition},
};

mod app;
mod event;
mod event_loop;
mod runtime;
mod screen;
