//! Address Book - Main entry point
//!
//! Wires the command router to stdin/stdout. Logs go to stderr so stdout
//! only carries what the user should read.

use address_book::{session, CommandRouter, Config};
use anyhow::Result;
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can apply
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting address book session");

    let mut router = CommandRouter::new();
    if let Err(e) = session::run(BufReader::new(stdin()), stdout(), &mut router, &config).await {
        error!("Session I/O failed: {}", e);
        return Err(e.into());
    }

    info!(contacts = router.book().len(), "Address book session finished");
    Ok(())
}
