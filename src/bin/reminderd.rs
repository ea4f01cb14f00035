//! TaskLoad reminder daemon.
//!
//! Wires configuration, the candidate store, the mail-gateway notifier and
//! the scheduler together, then runs until Ctrl-C. The API process owns
//! record CRUD; this process only dispatches reminders.

use std::sync::Arc;

use anyhow::Result;
use log::info;

use taskload::{
    get_backend_version, get_features, Config, MailGatewayNotifier, MemoryStore,
    ReminderDispatcher, ReminderScheduler, SystemClock,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Deployment config lives in config.env; a plain .env works too
    dotenvy::from_filename("config.env").ok();
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!(
        "Starting TaskLoad reminder daemon v{}...",
        get_backend_version()
    );
    for feature in get_features() {
        info!("  feature: {} v{}", feature.name, feature.version);
    }

    // Stand-in store until the daemon is attached to the record store the
    // API process writes to; anything implementing ReminderStore plugs in
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(MailGatewayNotifier::new(&config)?);
    let dispatcher = ReminderDispatcher::new(store, notifier, Arc::new(SystemClock));

    let scheduler = ReminderScheduler::start(dispatcher, config.poll_interval);
    info!(
        "🚀 Reminder dispatch running (polling every {}s)",
        config.poll_interval.as_secs()
    );

    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received, shutting down...");

    // Lets any in-flight dispatch cycle finish before the process exits
    scheduler.stop().await;
    info!("Shutdown complete");

    Ok(())
}
