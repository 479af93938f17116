//! Transfer / status / process / full

use anyhow::{Context, Result};

use mortality_relay::config::Config;
use mortality_relay::domain::ports::{BatchEventSink, QueueClient};
use mortality_relay::domain::value_objects::QueueAction;
use mortality_relay::infrastructure::JsonEventSink;
use mortality_relay::presentation::create_orchestrator;

use crate::ui::context::UiContext;
use crate::ui::sink::ConsoleBatchSink;

pub fn cmd_run(action: QueueAction, config: &Config, ui: &UiContext) -> Result<bool> {
    let source = if action.needs_source() {
        Some(
            config
                .source_selection()
                .context("invalid source configuration")?,
        )
    } else {
        None
    };
    let orchestrator = create_orchestrator(config).context("invalid queue configuration")?;

    tracing::info!(
        action = action.as_str(),
        queue = %orchestrator.queue().describe(),
        "starting"
    );

    let sink: Box<dyn BatchEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleBatchSink::new(*ui, action == QueueAction::Transfer))
    };

    let report = orchestrator.run_action(action, source.as_ref(), sink.as_ref())?;
    Ok(report.is_success())
}
