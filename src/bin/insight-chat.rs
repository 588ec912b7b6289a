use anyhow::Result;
use dioxus::prelude::*;
use insight_chat::gui::{
    components::ChatWindow, config_manager::ConfigManager, install_global_service, utils,
    AnalyticsChatService,
};

fn app() -> Element {
    rsx! {
        div {
            class: "app",
            style: "
                height: 100vh;
                margin: 0;
                padding: 0;
                overflow: hidden;
                background: #f0f2f5;
                font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            ",

            ChatWindow {}
        }
    }
}

fn main() -> Result<()> {
    let config = ConfigManager::new()?.load_config()?;
    let _log_guard = utils::init_logging(&config.log)?;

    tracing::info!("🎬 Starting Insight Chat - admin analytics assistant");
    tracing::debug!(base_url = %config.api.base_url, "📡 Analytics backend configured");

    let service = AnalyticsChatService::from_config(&config)?;
    install_global_service(service);

    // Dioxus manages its own tokio runtime; no #[tokio::main] here.
    dioxus::launch(app);

    tracing::info!("👋 Insight Chat shutting down");
    Ok(())
}
