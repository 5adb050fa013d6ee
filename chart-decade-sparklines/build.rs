//! Build script for chart-decade-sparklines.
//!
//! Resolves the location of the daily temperature CSV at compile time and
//! writes it to OUT_DIR so it can be embedded via `include_str!`.
//! Set `THM_DATA_URL` to point the page at another copy of the dataset.

use std::env;
use std::fs;
use std::path::Path;

const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/xiameng552180/CSCE-679-Data-Visualization-Assignment2/main/temperature_daily.csv";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let data_url = env::var("THM_DATA_URL")
        .ok()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string());

    if !data_url.starts_with("https://") && !data_url.starts_with("http://") {
        println!(
            "cargo:warning=THM_DATA_URL {} is relative; it will resolve against the page URL",
            data_url
        );
    }

    fs::write(Path::new(&out_dir).join("data_url.txt"), &data_url).unwrap();

    println!("cargo:rerun-if-env-changed=THM_DATA_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
