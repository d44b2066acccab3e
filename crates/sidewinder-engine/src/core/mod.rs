pub use self::{cell::*, grid::*, tile::*};

pub(crate) mod cell;
pub(crate) mod grid;
pub(crate) mod tile;
