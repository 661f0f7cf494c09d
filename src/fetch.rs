// src/fetch.rs

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

/// Fee listing page for household bulky waste, Shinagawa ward.
pub static ITEM_PAGE_URL: &str = "https://shinagawa-sodai.com/receipts/home/item";

/// GET the fee page and return its body as decoded text.
pub fn fetch_item_page(client: &Client) -> Result<String> {
    let url = Url::parse(ITEM_PAGE_URL)?;
    debug!(url = %url, "requesting fee page");
    let body = client
        .get(url.as_str())
        .send()
        .with_context(|| format!("failed to reach {ITEM_PAGE_URL}"))?
        .error_for_status()?
        .text()
        .context("failed to read fee page body")?;
    Ok(body)
}
