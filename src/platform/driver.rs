//! Per-frame driver
//!
//! The host owns the event loop and calls `App::run_frame` once per frame.
//! Every frame is one synchronous pass:
//! poll input -> tick -> audio side effects -> render -> present.

use super::clock::FrameClock;
use super::{AudioPlayer, InputProvider, Renderer};
use crate::audio::SoundEffect;
use crate::renderer::build_scene;
use crate::settings::Settings;
use crate::sim::{Flow, GameEvent, Session, tick};

/// Application context: the session plus the clock that paces it
pub struct App {
    pub session: Session,
    pub clock: FrameClock,
}

impl App {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            session: Session::new(seed, settings.tuning.clone()),
            clock: FrameClock::new(settings.fps),
        }
    }

    /// Startup side effects: the music runs from here until quit
    pub fn start(&mut self, audio: &mut (impl AudioPlayer + ?Sized)) {
        log::info!("Avoider running (seed {})", self.session.seed);
        audio.start_music();
    }

    /// Run one frame without pacing
    pub fn frame(
        &mut self,
        input: &mut (impl InputProvider + ?Sized),
        renderer: &mut (impl Renderer + ?Sized),
        audio: &mut (impl AudioPlayer + ?Sized),
    ) -> Flow {
        let snapshot = input.poll();
        let flow = tick(&mut self.session, &snapshot);

        for event in &self.session.events {
            match event {
                GameEvent::ShipDestroyed { .. } => audio.play(SoundEffect::Explosion),
                GameEvent::QuitRequested => audio.stop_music(),
                GameEvent::RoundStarted { .. } | GameEvent::AsteroidRespawned { .. } => {}
            }
        }

        if flow == Flow::Quit {
            return flow;
        }

        renderer.render(&build_scene(&self.session));
        renderer.present();
        flow
    }

    /// Run one frame, then wait out the rest of the frame budget
    pub fn run_frame(
        &mut self,
        input: &mut (impl InputProvider + ?Sized),
        renderer: &mut (impl Renderer + ?Sized),
        audio: &mut (impl AudioPlayer + ?Sized),
    ) -> Flow {
        let flow = self.frame(input, renderer, audio);
        if flow == Flow::Continue {
            let dt = self.clock.tick();
            if self.clock.is_late(dt) {
                log::debug!(
                    "Frame {} ran long: {:?} (budget {:?})",
                    self.clock.frames(),
                    dt,
                    self.clock.budget()
                );
            }
        }
        flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::TextRenderer;
    use crate::renderer::{Sprite, SpriteKind};
    use crate::sim::{Asteroid, Rect, SessionState, SpawnEdge, TickInput};
    use glam::Vec2;
    use std::collections::VecDeque;

    /// Replays a fixed input script, then idles
    struct Scripted(VecDeque<TickInput>);

    impl InputProvider for Scripted {
        fn poll(&mut self) -> TickInput {
            self.0.pop_front().unwrap_or_default()
        }
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        presents: usize,
    }

    impl TextRenderer for Recorder {
        fn draw_text(&mut self, text: &str, _size: u16, _anchor: Vec2) {
            self.calls.push(format!("text:{text}"));
        }
    }

    impl Renderer for Recorder {
        fn clear(&mut self) {
            self.calls.push("clear".into());
        }

        fn draw_background(&mut self) {
            self.calls.push("background".into());
        }

        fn draw_sprite(&mut self, sprite: &Sprite) {
            self.calls.push(match sprite.kind {
                SpriteKind::Ship => "ship".into(),
                SpriteKind::Asteroid { id } => format!("asteroid:{id}"),
            });
        }

        fn present(&mut self) {
            self.presents += 1;
        }
    }

    #[derive(Default)]
    struct Speaker {
        effects: Vec<SoundEffect>,
        music_on: bool,
    }

    impl AudioPlayer for Speaker {
        fn play(&mut self, effect: SoundEffect) {
            self.effects.push(effect);
        }

        fn start_music(&mut self) {
            self.music_on = true;
        }

        fn stop_music(&mut self) {
            self.music_on = false;
        }
    }

    fn app() -> App {
        App::new(&Settings::default(), 4242)
    }

    fn start() -> TickInput {
        TickInput {
            start: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_start_screen_frame() {
        let mut app = app();
        let mut input = Scripted(VecDeque::new());
        let mut renderer = Recorder::default();
        let mut audio = Speaker::default();

        app.start(&mut audio);
        assert!(audio.music_on);

        assert_eq!(app.frame(&mut input, &mut renderer, &mut audio), Flow::Continue);
        assert_eq!(
            renderer.calls,
            vec![
                "clear",
                "background",
                "text:AVOIDER",
                "text:Arrow keys to survive!",
                "text:Press the space key to begin",
            ]
        );
        assert_eq!(renderer.presents, 1);
    }

    #[test]
    fn test_playing_frame_draws_entities_in_order() {
        let mut app = app();
        let mut input = Scripted(VecDeque::from([start()]));
        let mut renderer = Recorder::default();
        let mut audio = Speaker::default();

        app.frame(&mut input, &mut renderer, &mut audio);
        assert_eq!(app.session.state, SessionState::Playing);

        let mut expected = vec!["clear".to_string(), "background".into(), "ship".into()];
        expected.extend(app.session.registry.asteroids.iter().map(|a| format!("asteroid:{}", a.id)));
        assert_eq!(renderer.calls, expected);
    }

    #[test]
    fn test_collision_plays_explosion_once() {
        let mut app = app();
        let mut renderer = Recorder::default();
        let mut audio = Speaker::default();
        app.frame(&mut Scripted(VecDeque::from([start()])), &mut renderer, &mut audio);

        // Put an asteroid on the ship, the rest far away
        let ship_center = app.session.registry.ship.rect.center();
        for (i, asteroid) in app.session.registry.asteroids.iter_mut().enumerate() {
            let rect = if i == 0 {
                Rect::centered(ship_center, Vec2::new(40.0, 40.0))
            } else {
                Rect::new(-5_000.0, 0.0, 40.0, 40.0)
            };
            *asteroid = Asteroid::new(asteroid.id, rect, 20.0, 1, SpawnEdge::Left);
        }

        let mut idle = Scripted(VecDeque::new());
        app.frame(&mut idle, &mut renderer, &mut audio);
        assert_eq!(app.session.state, SessionState::Over);
        assert_eq!(audio.effects, vec![SoundEffect::Explosion]);

        // Start screen frames after the crash stay silent
        app.frame(&mut idle, &mut renderer, &mut audio);
        app.frame(&mut idle, &mut renderer, &mut audio);
        assert_eq!(audio.effects.len(), 1);
        assert_eq!(app.session.state, SessionState::Over);
    }

    #[test]
    fn test_quit_skips_render_and_stops_music() {
        let mut app = app();
        let mut renderer = Recorder::default();
        let mut audio = Speaker::default();
        app.start(&mut audio);

        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        let flow = app.run_frame(&mut Scripted(VecDeque::from([quit])), &mut renderer, &mut audio);
        assert_eq!(flow, Flow::Quit);
        assert!(renderer.calls.is_empty());
        assert!(!audio.music_on);
        assert_eq!(app.clock.frames(), 0);
    }

    #[test]
    fn test_run_frame_paces() {
        let settings = Settings {
            fps: 500,
            ..Default::default()
        };
        let mut app = App::new(&settings, 1);
        let mut input = Scripted(VecDeque::new());
        let mut renderer = Recorder::default();
        let mut audio = Speaker::default();

        for _ in 0..3 {
            assert_eq!(app.run_frame(&mut input, &mut renderer, &mut audio), Flow::Continue);
        }
        assert_eq!(app.clock.frames(), 3);
        assert_eq!(renderer.presents, 3);
    }
}
