//! Fetches the daily temperature CSV with the browser `fetch` API.
//!
//! The load happens once per page. Any failure (network, HTTP status, bad
//! header) is returned to the caller, which logs it and draws nothing.

use anyhow::{anyhow, bail, Context};
use thm_core::heatmap::{Heatmap, HeatmapConfig};
use thm_core::record;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Turn a rejected promise value into an error message.
fn js_error(value: JsValue) -> anyhow::Error {
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => anyhow!("{}", String::from(err.message())),
        None => anyhow!("{:?}", value),
    }
}

/// Last path segment of `url`, without query or fragment.
pub fn dataset_name(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(url)
}

/// GET `url` and return the body as text.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global `window`"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)
        .with_context(|| format!("failed to fetch {}", url))?;
    let response: Response = response.dyn_into().map_err(js_error)?;

    if !response.ok() {
        bail!(
            "HTTP error fetching {}: {} {}",
            url,
            response.status(),
            response.status_text()
        );
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)
        .context("failed to read response body")?;
    body.as_string()
        .ok_or_else(|| anyhow!("response body from {} was not text", url))
}

/// Fetch, parse and aggregate the dataset at `url`.
pub async fn load_heatmap(url: &str, config: HeatmapConfig) -> anyhow::Result<Heatmap> {
    log::info!("[THM] loader: Fetching {}", url);
    let csv_data = fetch_text(url).await?;
    let records = record::parse_csv(&csv_data).context("failed to parse temperature CSV")?;
    Ok(Heatmap::new(&records, config))
}
