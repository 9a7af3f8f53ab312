#[macro_use] extern crate failure;
extern crate gl;

pub mod debug;
pub mod render_gl;
