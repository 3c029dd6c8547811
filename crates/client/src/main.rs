//! Office simulation binary.
//!
//! Loads the office, spawns a buddy and plays a scripted day headlessly.
//!
//! # Examples
//!
//! ```bash
//! # Assign work on tick 60, end it on tick 600
//! OFFICE_TICKS=900 OFFICE_WORK_AT=60 OFFICE_BREAK_AT=600 cargo run -p office-client
//! ```

use anyhow::Result;
use office_client::{OfficeConfig, build_office, run};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = OfficeConfig::from_env();
    tracing::info!("Starting office simulation");
    tracing::debug!(?config, "configuration loaded");

    let mut office = build_office(&config)?;
    run(&mut office, &config);

    for buddy in office.buddies() {
        tracing::info!(
            buddy = %buddy.id(),
            coord = %buddy.coord(),
            lock = %buddy.lock(),
            at_desk = buddy.is_at_desk(),
            "final state"
        );
    }
    tracing::info!("Simulation finished after {} ticks", office.current_tick());
    Ok(())
}
