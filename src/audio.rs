//! Audio system
//!
//! Procedurally generated sound - no external files needed! Clips are
//! synthesized into PCM at startup, wrapped as WAV and handed to macroquad.

use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound, stop_sound};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use crate::error::AudioError;
use crate::platform::AudioPlayer;
use crate::settings::Settings;

/// Sample rate of every synthesized clip
pub const SAMPLE_RATE: u32 = 22_050;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ship hit by an asteroid
    Explosion,
}

// === Sound generators ===

/// Explosion - noisy boom with a falling sawtooth underneath
pub fn synth_explosion() -> Vec<f32> {
    let len = (SAMPLE_RATE as f32 * 0.7) as usize;
    let mut rng = Pcg32::seed_from_u64(0xB00);
    let mut lowpassed = 0.0f32;
    let mut phase = 0.0f32;

    (0..len)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let env = (-t * 6.0).exp();

            // Noise, darkening as it decays
            let noise: f32 = rng.random_range(-1.0..1.0);
            let cutoff = 0.35 * (-t * 3.0).exp() + 0.03;
            lowpassed += (noise - lowpassed) * cutoff;

            // 100 Hz -> 30 Hz sweep
            let freq = 30.0 + 70.0 * (-t * 5.0).exp();
            phase = (phase + freq / SAMPLE_RATE as f32).fract();
            let saw = 2.0 * phase - 1.0;

            // Short high crack at the very start
            let crack = if t < 0.1 {
                (TAU * 1500.0 * t).sin().signum() * (1.0 - t / 0.1) * 0.2
            } else {
                0.0
            };

            ((lowpassed * 0.9 + saw * 0.45) * env + crack).clamp(-1.0, 1.0)
        })
        .collect()
}

/// Background loop - minor arpeggio over a soft bass, four bars
pub fn synth_music() -> Vec<f32> {
    // A minor, F, C, G (root frequencies in Hz)
    const CHORDS: [[f32; 3]; 4] = [
        [220.00, 261.63, 329.63],
        [174.61, 220.00, 261.63],
        [261.63, 329.63, 392.00],
        [196.00, 246.94, 293.66],
    ];
    const BAR_SECS: f32 = 1.6;
    const STEPS_PER_BAR: usize = 8;

    let bar_len = (SAMPLE_RATE as f32 * BAR_SECS) as usize;
    let step_len = bar_len / STEPS_PER_BAR;
    let mut out = Vec::with_capacity(bar_len * CHORDS.len());

    for chord in CHORDS {
        for i in 0..bar_len {
            let t = i as f32 / SAMPLE_RATE as f32;
            let step = (i / step_len).min(STEPS_PER_BAR - 1);
            let in_step = (i % step_len) as f32 / step_len as f32;

            // Arpeggio up and back down, an octave above the chord
            let note = chord[[0, 1, 2, 1][step % 4]] * 2.0;
            let pluck = (-in_step * 5.0).exp() * (in_step * 200.0).min(1.0);
            let arp = triangle(note * t) * pluck * 0.25;

            // Bass with a short fade at both ends of the bar
            let edge = (i.min(bar_len - i) as f32 / 400.0).min(1.0);
            let bass = (TAU * chord[0] / 2.0 * t).sin() * 0.3 * edge;

            out.push((arp + bass).clamp(-1.0, 1.0));
        }
    }
    out
}

/// Triangle wave for a phase measured in cycles
fn triangle(cycles: f32) -> f32 {
    let p = cycles.fract();
    1.0 - 4.0 * (p - 0.5).abs()
}

/// Wrap mono samples in a 16-bit PCM WAV container
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, AudioError> {
    if samples.is_empty() {
        return Err(AudioError::EmptyClip("no samples"));
    }

    let data_len = (samples.len() * 2) as u32;
    let mut out = Vec::with_capacity(44 + data_len as usize);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
    out.extend_from_slice(&2u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for s in samples {
        let v = (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        out.extend_from_slice(&v.to_le_bytes());
    }

    Ok(out)
}

async fn load_clip(name: &'static str, samples: &[f32]) -> Result<Sound, AudioError> {
    let bytes = encode_wav(samples, SAMPLE_RATE).map_err(|_| AudioError::EmptyClip(name))?;
    load_sound_from_bytes(&bytes)
        .await
        .map_err(|e| AudioError::Load(format!("{name}: {e:?}")))
}

/// Audio manager for the game
pub struct AudioManager {
    explosion: Sound,
    music: Sound,
    sfx_volume: f32,
    music_volume: f32,
    music_playing: bool,
}

impl AudioManager {
    /// Synthesize and load every clip
    pub async fn load(settings: &Settings) -> Result<Self, AudioError> {
        let explosion = load_clip("explosion", &synth_explosion()).await?;
        let music = load_clip("music", &synth_music()).await?;
        log::info!("Audio ready");
        Ok(Self {
            explosion,
            music,
            sfx_volume: settings.effective_sfx_volume(),
            music_volume: settings.effective_music_volume(),
            music_playing: false,
        })
    }
}

impl AudioPlayer for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        let sound = match effect {
            SoundEffect::Explosion => &self.explosion,
        };
        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: self.sfx_volume,
            },
        );
    }

    fn start_music(&mut self) {
        if self.music_playing || self.music_volume <= 0.0 {
            return;
        }
        play_sound(
            &self.music,
            PlaySoundParams {
                looped: true,
                volume: self.music_volume,
            },
        );
        self.music_playing = true;
    }

    fn stop_music(&mut self) {
        if self.music_playing {
            stop_sound(&self.music);
            self.music_playing = false;
        }
    }
}
