//! # Paperboard Entry Point
//!
//! Fetches weather and bus departures, renders the board and writes the
//! BMP. Network failures never stop a render: whatever could not be
//! fetched shows up as placeholder text.
//!
//! ```text
//! paperboard [--config PATH] [--output PATH] [--ascii] [--offline]
//! ```
//!
//! - `--ascii` prints a terminal preview instead of writing the file
//! - `--offline` skips the network entirely

use anyhow::{bail, Context};
use chrono::Utc;
use log::{info, warn};
use paperboard_lib::{
    composer,
    config::Config,
    fallback, transit,
    weather::{self, Conditions},
    DisplayData,
};
use std::{env, fs, path::PathBuf};

/// Terminal preview cell size: 8x16 board pixels per character.
const PREVIEW_CELL: (u32, u32) = (8, 16);

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    ascii: bool,
    offline: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                args.config = Some(iter.next().context("--config needs a path")?.into());
            }
            "--output" => {
                args.output = Some(iter.next().context("--output needs a path")?.into());
            }
            "--ascii" => args.ascii = true,
            "--offline" => args.offline = true,
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

/// Fetch everything concurrently and reduce it to a complete record.
async fn gather(config: &Config) -> anyhow::Result<DisplayData> {
    let client = reqwest::Client::builder()
        .timeout(config.network.timeout())
        .build()
        .context("building HTTP client")?;

    let now_ms = Utc::now().timestamp_millis();
    let (weather, north, south) = tokio::join!(
        weather::fetch(&client, &config.location),
        transit::fetch(&client, &config.transit.north_stop, now_ms),
        transit::fetch(&client, &config.transit.south_stop, now_ms),
    );

    let conditions = weather
        .map_err(|e| warn!("Weather fetch failed: {e}"))
        .ok();
    let north = north.unwrap_or_else(|e| {
        warn!("North stop {} fetch failed: {e}", config.transit.north_stop);
        Vec::new()
    });
    let south = south.unwrap_or_else(|e| {
        warn!("South stop {} fetch failed: {e}", config.transit.south_stop);
        Vec::new()
    });

    Ok(resolve(config, conditions.as_ref(), &north, &south))
}

fn resolve(
    config: &Config,
    conditions: Option<&Conditions>,
    north: &[i64],
    south: &[i64],
) -> DisplayData {
    let zone = config.location.zone();
    let now = Utc::now();
    if let Some(c) = conditions {
        if !fallback::offset_agrees(&zone, c, now) {
            warn!(
                "Forecast offset {}s does not match {}; showing times in {}",
                c.utc_offset_seconds, config.location.timezone, zone
            );
        }
    }
    fallback::resolve(
        conditions,
        north,
        south,
        &config.location.city,
        now.with_timezone(&zone),
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };

    let data = if args.offline {
        info!("Offline mode: rendering placeholders");
        resolve(&config, None, &[], &[])
    } else {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(gather(&config))?
    };
    info!(
        "Rendering {} | north {} / {} | south {} / {}",
        data.weather.temperature,
        data.north_bus.next,
        data.north_bus.after,
        data.south_bus.next,
        data.south_bus.after
    );

    if args.ascii {
        let canvas = composer::compose_canvas(&data);
        print!("{}", canvas.to_ascii(PREVIEW_CELL.0, PREVIEW_CELL.1));
        return Ok(());
    }

    let bytes = composer::compose(&data);
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.path));
    fs::write(&output, &bytes).with_context(|| format!("writing {}", output.display()))?;
    info!("Wrote {} bytes to {}", bytes.len(), output.display());

    Ok(())
}
