use crate::{
    CoreError, CoreResult, Cue, MediaTrigger,
    audio::{CueBank, Voice},
};

use std::{
    panic::Location,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    thread::JoinHandle,
};

use cpal::{
    Device, FromSample, Sample, SampleFormat, SizedSample, Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};

/// Plays the phase cues on the default output device.
///
/// The cpal stream lives on its own thread for the lifetime of the player,
/// so the player itself is `Send` and `trigger` never touches the device.
pub struct ChimePlayer {
    voice: Arc<Mutex<Voice>>,
    healthy: Arc<AtomicBool>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl ChimePlayer {
    /// Open the default output device and start a silent stream.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Playback`] if no output device is available or
    /// the stream cannot be started.
    #[track_caller]
    #[instrument]
    pub fn new(volume: f32) -> CoreResult<Self> {
        let voice = Arc::new(Mutex::new(Voice::new(volume)));
        let healthy = Arc::new(AtomicBool::new(true));
        let (ready_tx, ready_rx) = mpsc::channel::<CoreResult<u32>>();
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let thread_voice = Arc::clone(&voice);
        let thread_healthy = Arc::clone(&healthy);

        let thread = std::thread::Builder::new()
            .name("flash-sketch-audio".to_string())
            .spawn(move || {
                let (stream, sample_rate) = match open_stream(thread_voice, thread_healthy) {
                    Ok(opened) => opened,
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };

                let _ = ready_tx.send(Ok(sample_rate));

                // Blocks until the player drops its sender.
                let _ = shutdown_rx.recv();
                drop(stream);
                debug!("Audio output stream closed");
            })
            .map_err(|e| CoreError::Playback {
                reason: format!("Failed to spawn audio thread: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        match ready_rx.recv() {
            Ok(Ok(sample_rate)) => {
                info!(sample_rate, volume, "ChimePlayer initialized");
                Ok(Self {
                    voice,
                    healthy,
                    shutdown_tx: Some(shutdown_tx),
                    thread: Some(thread),
                })
            }
            Ok(Err(e)) => {
                let _ = thread.join();
                Err(e)
            }
            Err(_) => {
                let _ = thread.join();
                Err(CoreError::Playback {
                    reason: "Audio thread exited before the stream was ready".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    #[track_caller]
    fn try_trigger(&self, cue: Cue) -> CoreResult<()> {
        if !self.healthy.load(Ordering::Acquire) {
            return Err(CoreError::Playback {
                reason: "Output stream reported an error".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // Recover from lock poison; the cursor is plain data and still usable.
        let mut voice = self.voice.lock().unwrap_or_else(|e| {
            error!("Voice lock poisoned, recovering: {}", e);
            e.into_inner()
        });

        if voice.is_playing() {
            debug!(cue = %cue, "Restarting cue over one still sounding");
        }
        voice.restart(cue);

        Ok(())
    }
}

impl MediaTrigger for ChimePlayer {
    fn trigger(&self, cue: Cue) {
        if let Err(e) = self.try_trigger(cue) {
            warn!(cue = %cue, error = %e, "Cue playback failed");
        }
    }
}

impl Drop for ChimePlayer {
    fn drop(&mut self) {
        drop(self.shutdown_tx.take());
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!("Audio thread panicked");
            }
        }
    }
}

#[track_caller]
fn open_stream(voice: Arc<Mutex<Voice>>, healthy: Arc<AtomicBool>) -> CoreResult<(Stream, u32)> {
    let host = cpal::default_host();

    let device = host
        .default_output_device()
        .ok_or_else(|| CoreError::Playback {
            reason: "No output device found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let supported = device
        .default_output_config()
        .map_err(|e| CoreError::Playback {
            reason: format!("Failed to get output config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let sample_format = supported.sample_format();
    let config: StreamConfig = supported.into();
    let sample_rate = config.sample_rate;
    let bank = CueBank::render(sample_rate);

    debug!(
        sample_rate,
        channels = config.channels,
        sample_format = ?sample_format,
        "Opening output stream"
    );

    let stream = match sample_format {
        SampleFormat::F32 => build_stream::<f32>(&device, &config, voice, healthy, bank)?,
        SampleFormat::I16 => build_stream::<i16>(&device, &config, voice, healthy, bank)?,
        SampleFormat::U16 => build_stream::<u16>(&device, &config, voice, healthy, bank)?,
        other => {
            return Err(CoreError::Playback {
                reason: format!("Unsupported sample format: {:?}", other),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    stream.play().map_err(|e| CoreError::Playback {
        reason: format!("Failed to start stream: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok((stream, sample_rate))
}

#[track_caller]
fn build_stream<S>(
    device: &Device,
    config: &StreamConfig,
    voice: Arc<Mutex<Voice>>,
    healthy: Arc<AtomicBool>,
    bank: CueBank,
) -> CoreResult<Stream>
where
    S: SizedSample + FromSample<f32>,
{
    let channels = usize::from(config.channels).max(1);

    device
        .build_output_stream(
            config,
            move |data: &mut [S], _: &cpal::OutputCallbackInfo| {
                let mut voice = voice.lock().unwrap_or_else(|e| e.into_inner());
                for frame in data.chunks_mut(channels) {
                    frame.fill(S::from_sample(voice.next_sample(&bank)));
                }
            },
            move |err| {
                healthy.store(false, Ordering::Release);
                error!("Audio output stream error: {}", err);
            },
            None,
        )
        .map_err(|e| CoreError::Playback {
            reason: format!("Failed to build stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}
