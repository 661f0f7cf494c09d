use anyhow::Result;
use reqwest::blocking::Client;
use sodaiscraper::{extract, fetch, output};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) fetch the fee page ───────────────────────────────────────
    let client = Client::new();
    let html = fetch::fetch_item_page(&client)?;
    info!(bytes = html.len(), "fetched {}", fetch::ITEM_PAGE_URL);

    // ─── 3) extract fee records ──────────────────────────────────────
    let extraction = extract::extract_fee_records(&html)?;
    if extraction.skipped_rows > 0 {
        warn!(
            skipped = extraction.skipped_rows,
            "dropped rows with fewer than four cells; page layout may have changed"
        );
    }
    info!(records = extraction.records.len(), "extracted fee table");

    // ─── 4) write CSV ────────────────────────────────────────────────
    output::write_csv(output::OUTPUT_FILE, &extraction.records)?;
    info!("wrote {}", output::OUTPUT_FILE);

    Ok(())
}
