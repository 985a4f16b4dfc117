//! Dominant color sampling for card icons.
//!
//! An icon's dominant color is the arithmetic mean of its pixel RGB values.
//! Sampling never fails outward: every fetch, decode, or read-back problem
//! collapses to the white fallback so a broken icon still renders as a
//! neutral, readable card.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use image::RgbaImage;
use tokio::task::JoinSet;
use tracing::debug;

use crate::color::{FALLBACK_COLOR, Rgb};

fn http_agent() -> ureq::Agent {
    // Single attempt per sample; no retry and no deadline beyond the
    // transport's own.
    ureq::AgentBuilder::new().build()
}

fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    let response = http_agent().get(url).call()?;
    let mut bytes = Vec::new();
    response.into_reader().read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Fetch and decode the raster image `locator` names.
///
/// Locators with an http(s) scheme go over the network without credentials;
/// anything else is read from the local filesystem.
fn load_icon(locator: &str) -> Result<RgbaImage> {
    let bytes = if locator.starts_with("http://") || locator.starts_with("https://") {
        fetch_remote(locator).with_context(|| format!("fetching {locator}"))?
    } else {
        std::fs::read(Path::new(locator)).with_context(|| format!("reading {locator}"))?
    };
    if bytes.is_empty() {
        bail!("empty image payload for {locator}");
    }
    let img = image::load_from_memory(&bytes).with_context(|| format!("decoding {locator}"))?;
    Ok(img.to_rgba8())
}

/// Arithmetic mean of the RGB channels across every pixel, floored per
/// channel. The alpha channel is ignored. `None` for a zero-pixel buffer.
pub fn average_color(img: &RgbaImage) -> Option<Rgb> {
    let mut accum = [0u64; 3];
    let mut count = 0u64;
    for pixel in img.pixels() {
        for (channel, sum) in accum.iter_mut().enumerate() {
            *sum += u64::from(pixel[channel]);
        }
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(Rgb::new(
        (accum[0] / count) as u8,
        (accum[1] / count) as u8,
        (accum[2] / count) as u8,
    ))
}

/// Sample the dominant color of the icon at `locator`.
///
/// Resolves to the canonical `rgb(r, g, b)` string on success and to
/// `#ffffff` on any failure; it never errors. Each call is independent: no
/// caching, no deduplication, one load attempt. The blocking fetch and
/// decode run on the blocking thread pool.
pub async fn dominant_color(locator: &str) -> String {
    let owned = locator.to_string();
    let decoded = tokio::task::spawn_blocking(move || load_icon(&owned)).await;
    match decoded {
        Ok(Ok(img)) => match average_color(&img) {
            Some(rgb) => rgb.to_string(),
            None => {
                debug!(icon = locator, "icon decoded to an empty pixel buffer");
                FALLBACK_COLOR.to_string()
            }
        },
        Ok(Err(err)) => {
            debug!(icon = locator, error = %err, "icon sample failed");
            FALLBACK_COLOR.to_string()
        }
        Err(err) => {
            debug!(icon = locator, error = %err, "icon sample task aborted");
            FALLBACK_COLOR.to_string()
        }
    }
}

/// Sample every icon in `locators` with at most `max_in_flight` loads
/// running at once, keyed by locator in the result.
///
/// Individual failures surface as the fallback color entry, never as an
/// error; completion order is irrelevant to the caller.
pub async fn sample_all(locators: &[String], max_in_flight: usize) -> HashMap<String, String> {
    let mut colors = HashMap::with_capacity(locators.len());
    let mut queue = locators.iter();
    let mut tasks: JoinSet<(String, String)> = JoinSet::new();
    let cap = max_in_flight.max(1);

    loop {
        while tasks.len() < cap {
            let Some(locator) = queue.next() else {
                break;
            };
            let locator = locator.clone();
            tasks.spawn(async move {
                let color = dominant_color(&locator).await;
                (locator, color)
            });
        }
        match tasks.join_next().await {
            Some(Ok((locator, color))) => {
                colors.insert(locator, color);
            }
            Some(Err(err)) => {
                debug!(error = %err, "sample task aborted");
            }
            None => break,
        }
    }
    colors
}
