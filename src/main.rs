use anyhow::{Context, Result};
use eframe::egui;
use livechat::integration::{build_speech, ChatConfig, ExchangeWorker};
use livechat::messages::ConversationStore;
use livechat::ui::{AppState, LiveChatApp};
use livechat::voice::VoiceExchangeClient;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "livechat=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting livechat");

    let config = ChatConfig::discover().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    info!("Voice endpoint: {}", config.voice_chat_url());

    let store = ConversationStore::with_greeting(config.greeting());
    let speech = build_speech(&config);

    let client = VoiceExchangeClient::from_config(&config, store.clone(), speech.clone())
        .context("Failed to create HTTP client")?;
    let worker = ExchangeWorker::spawn(client).context("Failed to start exchange worker")?;

    let state = AppState::new(store, speech);

    #[cfg(feature = "audio-io")]
    let state = state.with_voice(
        Box::new(livechat::audio::MicRecorder::new(config.clip_dir())),
        config.recording.clone(),
        worker.sender(),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([320.0, 400.0])
            .with_title("GPT Live"),
        ..Default::default()
    };

    eframe::run_native(
        "livechat",
        options,
        Box::new(move |cc| Ok(Box::new(LiveChatApp::new(cc, state, Some(worker))))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))
}
