//! Background wiring for the voice path
//!
//! The UI thread never waits on the network: finalized clips are sent over a
//! channel to the exchange worker, which runs each exchange as its own task
//! on a dedicated tokio runtime.

use crate::integration::config::ChatConfig;
use crate::speech::{CommandSpeech, SilentSpeech, SpeechOutput};
use crate::voice::VoiceExchangeClient;
use crate::{LiveChatError, Result};
use crossbeam_channel::{unbounded, Sender};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

/// Build the speech output described by the configuration
pub fn build_speech(config: &ChatConfig) -> Arc<dyn SpeechOutput> {
    if !config.speech.enabled {
        return Arc::new(SilentSpeech);
    }

    let speech = match &config.speech.command {
        Some(program) => CommandSpeech::new(program.clone()),
        None => CommandSpeech::platform_default(),
    };
    info!("Speech output via {}", speech.program());
    Arc::new(speech.with_args(config.speech.args.clone()))
}

/// Clips are recorded for exactly one upload
async fn remove_clip(clip: &Path) {
    match tokio::fs::remove_file(clip).await {
        Ok(()) => debug!("Removed clip {}", clip.display()),
        Err(e) => warn!("Failed to remove clip {}: {}", clip.display(), e),
    }
}

/// Runs voice exchanges off the UI thread
pub struct ExchangeWorker {
    clip_tx: Sender<PathBuf>,
    thread: JoinHandle<()>,
}

impl ExchangeWorker {
    /// Start the worker thread and its runtime
    pub fn spawn(client: VoiceExchangeClient) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("voice-exchange-rt")
            .enable_all()
            .build()
            .map_err(|e| LiveChatError::ConfigError(format!("Failed to build runtime: {}", e)))?;

        let (clip_tx, clip_rx) = unbounded::<PathBuf>();

        let thread = thread::Builder::new()
            .name("voice-exchange".to_string())
            .spawn(move || {
                info!("Voice exchange worker started ({})", client.endpoint());
                let mut tasks = Vec::new();

                while let Ok(clip) = clip_rx.recv() {
                    debug!("Exchanging clip {}", clip.display());
                    let client = client.clone();
                    tasks.push(runtime.spawn(async move {
                        client.exchange(&clip).await;
                        remove_clip(&clip).await;
                    }));
                    tasks.retain(|task| !task.is_finished());
                }

                // Let in-flight uploads finish before the runtime goes away
                runtime.block_on(async {
                    for task in tasks {
                        let _ = task.await;
                    }
                });
                info!("Voice exchange worker stopped");
            })?;

        Ok(Self { clip_tx, thread })
    }

    /// Sender used by the capture flow to dispatch clips
    pub fn sender(&self) -> Sender<PathBuf> {
        self.clip_tx.clone()
    }

    /// Stop accepting clips and wait for pending exchanges.
    ///
    /// Blocks until every other sender handed out by `sender()` is dropped.
    pub fn shutdown(self) {
        drop(self.clip_tx);
        let _ = self.thread.join();
    }
}
