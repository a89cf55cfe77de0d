//! Audio playback - clips are queued into a ring buffer drained by the cpal callback

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Producer, RingBuffer};

use shannon_demo::io::AudioClip;

/// Seconds of audio the queue can hold
const QUEUE_SECONDS: usize = 4;
/// Playback attenuation applied on top of the clip normalization
const PLAYBACK_GAIN: f32 = 0.5;

/// Output stream plus the producer side of its sample queue
pub struct Player {
    /// Kept alive for as long as playback should run
    _stream: cpal::Stream,
    producer: Producer<f32>,
    device_rate: u32,
}

impl Player {
    /// Open the default output device
    pub fn open() -> EyreResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let device_rate = config.sample_rate().0;
        let channels = config.channels() as usize;

        let (producer, mut consumer) =
            RingBuffer::<f32>::new(device_rate as usize * QUEUE_SECONDS);

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    // Mono to all channels, silence once the queue runs dry
                    for frame in data.chunks_mut(channels) {
                        let sample = consumer.pop().unwrap_or(0.0);
                        frame.fill(sample);
                    }
                },
                |err| log::error!("audio stream error: {}", err),
                None,
            )
            .wrap_err("failed to build output stream")?;
        stream.play().wrap_err("failed to start output stream")?;

        log::info!("audio output at {} Hz, {} channels", device_rate, channels);

        Ok(Self {
            _stream: stream,
            producer,
            device_rate,
        })
    }

    /// Queue `clip`, looped `repeats` times, at the device rate.
    ///
    /// Returns the number of samples queued; anything that does not fit in
    /// the queue is dropped.
    pub fn play(&mut self, clip: &AudioClip, repeats: u32) -> usize {
        let rendered = clip.looped(repeats).resampled(self.device_rate);
        let mut queued = 0;
        for &sample in &rendered.samples {
            if self.producer.push(sample * PLAYBACK_GAIN).is_err() {
                log::warn!(
                    "playback queue full, dropped {} samples",
                    rendered.len() - queued
                );
                break;
            }
            queued += 1;
        }
        queued
    }
}
