pub use self::{game::GameScreen, menu::MenuScreen};

mod game;
mod menu;
