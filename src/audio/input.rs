//! Microphone recorder backed by cpal
//!
//! Samples are collected in memory while the session is live and written to
//! a WAV clip when the session is finalized.

use super::wav::{downsample, write_wav};
use super::{CaptureSession, Permission, QualityPreset, Recorder, RecordingOptions};
use crate::{LiveChatError, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Stream, StreamConfig};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub struct MicRecorder {
    device: Option<Device>,
    config: Option<StreamConfig>,
    output_dir: PathBuf,
    options: RecordingOptions,
}

impl MicRecorder {
    /// Create a recorder on the default input device, writing clips to `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let host = cpal::default_host();
        let device = host.default_input_device();

        if let Some(device) = &device {
            info!(
                "Using input device: {}",
                device.name().unwrap_or_else(|_| "Unknown".to_string())
            );
        } else {
            warn!("No input device available");
        }

        Self {
            device,
            config: None,
            output_dir: output_dir.into(),
            options: RecordingOptions::default(),
        }
    }

    fn device(&self) -> Result<&Device> {
        self.device
            .as_ref()
            .ok_or_else(|| LiveChatError::AudioDeviceError("No input device available".into()))
    }
}

impl Recorder for MicRecorder {
    fn request_permission(&mut self) -> Permission {
        // Desktop hosts gate access when the input config is queried
        let Ok(device) = self.device() else {
            return Permission::Denied;
        };

        match device.default_input_config() {
            Ok(supported) => {
                self.config = Some(supported.into());
                Permission::Granted
            }
            Err(e) => {
                warn!("Microphone not accessible: {}", e);
                Permission::Denied
            }
        }
    }

    fn configure(&mut self, options: &RecordingOptions) -> Result<()> {
        if options.allow_in_silent_mode {
            debug!("Silent-mode recording has no effect on this host");
        }
        self.options = options.clone();
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    fn start(&mut self, quality: QualityPreset) -> Result<Box<dyn CaptureSession>> {
        let device = self.device()?;
        let config = match &self.config {
            Some(config) => config.clone(),
            None => device
                .default_input_config()
                .map_err(|e| {
                    LiveChatError::AudioDeviceError(format!("Failed to get input config: {}", e))
                })?
                .into(),
        };

        let channels = config.channels as usize;
        let sample_rate = config.sample_rate.0;
        let samples = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&samples);

        let err_fn = |err| {
            error!("Audio input stream error: {}", err);
        };

        let stream = device
            .build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    let mut sink = sink.lock();
                    if channels == 1 {
                        sink.extend_from_slice(data);
                    } else {
                        // Average all channels to create mono
                        sink.extend(
                            data.chunks(channels)
                                .map(|frame| frame.iter().sum::<f32>() / channels as f32),
                        );
                    }
                },
                err_fn,
                None,
            )
            .map_err(|e| {
                LiveChatError::CaptureError(format!("Failed to build input stream: {}", e))
            })?;

        stream.play().map_err(|e| {
            LiveChatError::CaptureError(format!("Failed to start input stream: {}", e))
        })?;

        info!("Audio recording started: {}Hz, {} channel(s)", sample_rate, channels);

        Ok(Box::new(MicSession {
            stream,
            samples,
            sample_rate,
            quality,
            path: self.output_dir.join(format!("clip-{}.wav", Uuid::new_v4())),
        }))
    }
}

struct MicSession {
    stream: Stream,
    samples: Arc<Mutex<Vec<f32>>>,
    sample_rate: u32,
    quality: QualityPreset,
    path: PathBuf,
}

impl CaptureSession for MicSession {
    fn stop_and_finalize(self: Box<Self>) -> Result<Option<PathBuf>> {
        let MicSession {
            stream,
            samples,
            sample_rate,
            quality,
            path,
        } = *self;

        stream.pause().map_err(|e| {
            LiveChatError::CaptureError(format!("Failed to stop input stream: {}", e))
        })?;
        drop(stream);

        let captured = std::mem::take(&mut *samples.lock());
        if captured.is_empty() {
            info!("Audio recording stopped with no samples");
            return Ok(None);
        }

        let (captured, rate) = match quality.target_sample_rate() {
            Some(target) => downsample(&captured, sample_rate, target),
            None => (captured, sample_rate),
        };

        info!(
            "Audio recording stopped: {:.1}s captured",
            captured.len() as f32 / rate as f32
        );

        write_wav(&path, &captured, rate)?;
        Ok(Some(path))
    }

    fn discard(self: Box<Self>) {
        if let Err(e) = self.stream.pause() {
            warn!("Failed to stop input stream: {}", e);
        }
        let dropped = std::mem::take(&mut *self.samples.lock()).len();
        debug!("Discarded {} unsent samples", dropped);
    }
}
