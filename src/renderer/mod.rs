//! Rendering module
//!
//! `scene` builds a backend-independent draw list from the session; the
//! macroquad backend turns it into pixels.

pub mod macroquad_backend;
pub mod scene;
pub mod shapes;

pub use macroquad_backend::{MacroquadInput, MacroquadRenderer};
pub use scene::{DrawCommand, Scene, Sprite, SpriteKind, build_scene};
