use std::sync::Arc;

use tnb_core::{config::Config, service::NotesService};

#[tokio::main]
async fn main() -> Result<(), tnb_core::Error> {
    tnb_core::logging::init("tnb")?;

    let cfg = Arc::new(Config::load()?);
    let notes = Arc::new(NotesService::open(&cfg)?);

    tnb_telegram::router::run_polling(cfg, notes)
        .await
        .map_err(|e| tnb_core::Error::External(format!("telegram bot failed: {e}")))?;

    tracing::info!("notes bot stopped");
    Ok(())
}
