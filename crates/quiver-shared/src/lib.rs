// quiver-shared — support library linked into client, server, renderer and game

#![allow(clippy::needless_range_loop, clippy::manual_range_contains)]

pub mod info;
pub mod math;
pub mod parse;
pub mod plane;
pub mod strings;
pub mod swap;
