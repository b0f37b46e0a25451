//! Avoider entry point
//!
//! Opens the window, prepares audio and runs the frame loop until quit.

use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::{Conf, next_frame, prevent_quit};

use avoider::Settings;
use avoider::audio::AudioManager;
use avoider::consts::{HEIGHT, WIDTH};
use avoider::platform::{App, AudioPlayer, NullAudio};
use avoider::renderer::{MacroquadInput, MacroquadRenderer};
use avoider::sim::Flow;

fn window_conf() -> Conf {
    Conf {
        window_title: "Avoider".to_owned(),
        window_width: WIDTH as i32,
        window_height: HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Seed from the wall clock when the settings don't pin one
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Avoider starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(time_seed);
    log::info!("Game initialized with seed: {}", seed);

    // Deliver window-close as input instead of exiting mid-frame
    prevent_quit();

    let mut audio: Box<dyn AudioPlayer> = match AudioManager::load(&settings).await {
        Ok(audio) => Box::new(audio),
        Err(e) => {
            log::warn!("Audio disabled: {}", e);
            Box::new(NullAudio)
        }
    };
    let mut input = MacroquadInput;
    let mut renderer = MacroquadRenderer::new(seed, &settings.tuning);
    let mut app = App::new(&settings, seed);

    app.start(audio.as_mut());
    loop {
        if app.run_frame(&mut input, &mut renderer, audio.as_mut()) == Flow::Quit {
            break;
        }
        next_frame().await;
    }

    log::info!(
        "Avoider exiting after {} frames, {} rounds",
        app.clock.frames(),
        app.session.rounds
    );
}
