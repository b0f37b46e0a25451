//! Platform abstraction layer
//!
//! The simulation talks to the outside world only through these traits:
//! - Input: a boolean key snapshot per tick
//! - Rendering: draw a built scene, then present it
//! - Text: title and instructions on the start screen
//! - Audio: one-shot effects and the music loop
//!
//! `driver::App` runs one frame against them; `clock::FrameClock` paces it.

pub mod clock;
pub mod driver;

pub use clock::FrameClock;
pub use driver::App;

use glam::Vec2;

use crate::audio::SoundEffect;
use crate::renderer::scene::{DrawCommand, Scene, Sprite};
use crate::sim::TickInput;

/// Source of per-tick input
pub trait InputProvider {
    /// Snapshot of the keys and window events for this tick
    fn poll(&mut self) -> TickInput;
}

/// Draws text with its top edge centred on `anchor`
pub trait TextRenderer {
    fn draw_text(&mut self, text: &str, size: u16, anchor: Vec2);
}

/// Draws a scene to the screen
pub trait Renderer: TextRenderer {
    /// Fill the frame with black
    fn clear(&mut self);
    /// Draw the full-screen backdrop
    fn draw_background(&mut self);
    /// Draw one entity sprite
    fn draw_sprite(&mut self, sprite: &Sprite);
    /// Show the finished frame
    fn present(&mut self) {}

    /// Replay a scene's commands in order
    fn render(&mut self, scene: &Scene) {
        for command in &scene.commands {
            match command {
                DrawCommand::Clear => self.clear(),
                DrawCommand::Background => self.draw_background(),
                DrawCommand::Sprite(sprite) => self.draw_sprite(sprite),
                DrawCommand::Text { text, size, anchor } => self.draw_text(text, *size, *anchor),
            }
        }
    }
}

/// Sound output
pub trait AudioPlayer {
    /// Fire a one-shot effect
    fn play(&mut self, effect: SoundEffect);
    /// Start the looping background track
    fn start_music(&mut self);
    /// Stop the background track
    fn stop_music(&mut self);
}

/// Audio sink that plays nothing (no device, or audio failed to load)
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioPlayer for NullAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("(silent) {:?}", effect);
    }

    fn start_music(&mut self) {}

    fn stop_music(&mut self) {}
}
