mod json;
mod options;

use altitude::{Client, ClientConfig};
use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;
use options::{Cli, Request};
use slope::{SlopeField, TileRecord};
use std::io::{BufRead, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::init();

    // Nothing reaches stdout until every lookup has succeeded.
    let report = run(&cli)?;
    std::io::stdout().lock().write_all(report.as_bytes())?;
    Ok(())
}

/// Runs the full estimation and returns everything destined for
/// stdout.
fn run(cli: &Cli) -> Result<String> {
    let request = match &cli.request {
        Some(values) => Request::try_from(values.as_slice())?,
        None => read_request()?,
    };

    let client = Client::new(ClientConfig {
        appid: cli.appid.clone(),
        endpoint: cli.endpoint.clone(),
        timeout: cli.timeout(),
    })?;

    let field = SlopeField::builder()
        .center(request.center)
        .count(request.precision)
        .radius(request.radius_m)
        .build(&client)?;
    let mut report = format_field(&field);

    if !cli.no_json {
        info!("sampling tile grid around {:?}", request.center);
        let tiles: Vec<TileRecord> = slope::tiles::sample(request.center, &client)?;
        let doc = json::Document::new(request.center, &tiles);
        report.push_str(&doc.render(cli.compact)?);
        report.push('\n');
    }

    Ok(report)
}

fn read_request() -> Result<Request> {
    eprint!("Enter latitude, longitude, precision, radius (space separated): ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(anyhow!("no input on stdin"));
    }
    line.parse()
}

fn format_field(field: &SlopeField) -> String {
    let mut out = String::new();
    for sample in &field.samples {
        let elevation = sample
            .elevation_m
            .map_or_else(|| "None".to_owned(), |elev| elev.to_string());
        out.push_str(&format!(
            "{}, {:.6}, {:.6}, {}, {:.6}, {:.6}\n",
            sample.index + 1,
            sample.coord.y,
            sample.coord.x,
            elevation,
            sample.slope.magnitude,
            sample.slope.bearing_deg,
        ));
    }
    out.push_str(&format!(
        "Average Slope Vector: {:.6}, {:.6}\n",
        field.average.magnitude, field.average.bearing_deg
    ));
    out
}
