//! Data model for the input roll.

mod cell;
mod column;
mod geometry;
mod media;
mod pointer;
mod selection;

pub use cell::*;
pub use column::*;
pub use geometry::*;
pub use media::*;
pub use pointer::*;
pub use selection::*;
