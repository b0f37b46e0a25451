//! macroquad window backend: drawing and keyboard input
//!
//! The play area is stretched to the window, so the simulation keeps its
//! own coordinates whatever the window size.

use glam::Vec2;
use macroquad::prelude as mq;

use super::scene::{Sprite, SpriteKind};
use super::shapes::{self, Star};
use crate::platform::{InputProvider, Renderer, TextRenderer};
use crate::sim::{DirectionKeys, TickInput};
use crate::tuning::Tuning;

/// Stars in the backdrop
const STAR_COUNT: usize = 160;

const HULL_COLOR: mq::Color = mq::Color::new(0.55, 0.75, 1.0, 1.0);
const HULL_EDGE: mq::Color = mq::Color::new(0.9, 0.95, 1.0, 1.0);
const FLAME_COLOR: mq::Color = mq::Color::new(1.0, 0.55, 0.15, 0.9);
const ROCK_COLOR: mq::Color = mq::Color::new(0.45, 0.38, 0.33, 1.0);
const ROCK_EDGE: mq::Color = mq::Color::new(0.7, 0.62, 0.55, 1.0);

/// Draws scenes with macroquad's immediate-mode shapes
pub struct MacroquadRenderer {
    stars: Vec<Star>,
    area: Vec2,
    scale: Vec2,
}

impl MacroquadRenderer {
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let area = Vec2::new(tuning.width, tuning.height);
        Self {
            stars: shapes::starfield(seed, STAR_COUNT, area),
            area,
            scale: Vec2::ONE,
        }
    }

    #[inline]
    fn to_screen(&self, p: Vec2) -> mq::Vec2 {
        mq::vec2(p.x * self.scale.x, p.y * self.scale.y)
    }

    /// Play-area length to window pixels, along the horizontal axis
    #[inline]
    fn to_screen_len(&self, len: f32) -> f32 {
        len * self.scale.x
    }

    fn draw_polygon(&self, points: &[Vec2], center: Vec2, fill: mq::Color, edge: mq::Color) {
        let c = self.to_screen(center);
        for (i, p) in points.iter().enumerate() {
            let a = self.to_screen(*p);
            let b = self.to_screen(points[(i + 1) % points.len()]);
            mq::draw_triangle(c, a, b, fill);
            mq::draw_line(a.x, a.y, b.x, b.y, 1.5, edge);
        }
    }
}

impl TextRenderer for MacroquadRenderer {
    fn draw_text(&mut self, text: &str, size: u16, anchor: Vec2) {
        let dims = mq::measure_text(text, None, size, 1.0);
        let top = self.to_screen(anchor);
        // draw_text positions the baseline; offset_y is the ascent
        mq::draw_text(text, top.x - dims.width / 2.0, top.y + dims.offset_y, size as f32, mq::WHITE);
    }
}

impl Renderer for MacroquadRenderer {
    fn clear(&mut self) {
        self.scale = Vec2::new(
            mq::screen_width() / self.area.x,
            mq::screen_height() / self.area.y,
        );
        mq::clear_background(mq::BLACK);
    }

    fn draw_background(&mut self) {
        for star in &self.stars {
            let p = self.to_screen(star.pos);
            let b = star.brightness;
            mq::draw_circle(p.x, p.y, self.to_screen_len(star.radius), mq::Color::new(b, b, b * 1.1, 1.0));
        }
    }

    fn draw_sprite(&mut self, sprite: &Sprite) {
        let center = sprite.rect.center();
        match sprite.kind {
            SpriteKind::Ship => {
                let [f1, f2, f3] = shapes::ship_flame(&sprite.rect, sprite.angle, sprite.thrust);
                mq::draw_triangle(self.to_screen(f1), self.to_screen(f2), self.to_screen(f3), FLAME_COLOR);
                let hull = shapes::ship_hull(&sprite.rect, sprite.angle);
                self.draw_polygon(&hull, center, HULL_COLOR, HULL_EDGE);
            }
            SpriteKind::Asteroid { id } => {
                let outline = shapes::asteroid_outline(id, &sprite.rect, sprite.angle);
                self.draw_polygon(&outline, center, ROCK_COLOR, ROCK_EDGE);
            }
        }
    }
}

/// Reads the arrow keys, space, and window-close requests
///
/// `macroquad::prelude::prevent_quit` must be called at startup so a close
/// request reaches `poll` instead of killing the process.
#[derive(Debug, Default)]
pub struct MacroquadInput;

impl InputProvider for MacroquadInput {
    fn poll(&mut self) -> TickInput {
        use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

        TickInput {
            keys: DirectionKeys {
                left: is_key_down(KeyCode::Left),
                right: is_key_down(KeyCode::Right),
                up: is_key_down(KeyCode::Up),
                down: is_key_down(KeyCode::Down),
            },
            start: is_key_down(KeyCode::Space),
            quit: mq::is_quit_requested() || is_key_pressed(KeyCode::Escape),
        }
    }
}
