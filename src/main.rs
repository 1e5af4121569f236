//! Environment-driven entry point: read a CSV, run one batch against the
//! configured provider, stream progress as JSON lines on stdout, and
//! write the augmented CSV next to a final summary line.

use std::sync::Arc;

use anyhow::{bail, Context};

use geofill::shared::utils::init_logger;
use geofill::{
    augment_table, build_items, BatchMode, BatchRequest, BatchService, ColumnSelection,
    CoordinateFormat, CsvTable, JsonLineSink, ProviderConfig, ProviderKind, RouteInputMode,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let input = require_env("GEOFILL_INPUT")?;
    let output = env_or("GEOFILL_OUTPUT", "geofill_output.csv");
    let mode = parse_mode(&env_or("GEOFILL_MODE", "geocode"))?;

    let config = ProviderConfig {
        kind: parse_provider(&env_or("GEOFILL_PROVIDER", "mapbox"))?,
        api_key: env_or("GEOFILL_API_KEY", ""),
        app_id: env_or("GEOFILL_APP_ID", ""),
        credential: env_or("GEOFILL_CREDENTIAL", ""),
        token_url: env_or("GEOFILL_TOKEN_URL", ""),
        geocode_url: env_or("GEOFILL_GEOCODE_URL", ""),
        route_url: env_or("GEOFILL_ROUTE_URL", ""),
    };

    let selection = ColumnSelection {
        address: optional_env("GEOFILL_ADDRESS_COLUMN"),
        coordinate: optional_env("GEOFILL_COORDINATE_COLUMN"),
        lat: optional_env("GEOFILL_LAT_COLUMN"),
        lng: optional_env("GEOFILL_LNG_COLUMN"),
        origin: optional_env("GEOFILL_ORIGIN_COLUMN"),
        destination: optional_env("GEOFILL_DESTINATION_COLUMN"),
    };

    let coordinate_format = match env_or("GEOFILL_DELIMITER_MODE", "auto").as_str() {
        "fixed" => CoordinateFormat::fixed(env_or("GEOFILL_DELIMITER", ",")),
        _ => CoordinateFormat::default(),
    };
    let route_input_mode = match env_or("GEOFILL_ROUTE_INPUT", "address").as_str() {
        "coordinate" => RouteInputMode::Coordinate,
        _ => RouteInputMode::Address,
    };

    let mut table =
        CsvTable::from_path(&input).with_context(|| format!("reading dataset {}", input))?;
    let items = build_items(&table, mode, &selection)?;

    let request = BatchRequest {
        mode,
        route_input_mode,
        coordinate_format,
        config,
        items,
    };

    let service = BatchService::new()?;
    let sink = Arc::new(JsonLineSink::new(std::io::stdout()));
    let report = service.execute(&request, sink).await?;

    augment_table(&mut table, mode, &report.outcomes);
    table
        .write_path(&output)
        .with_context(|| format!("writing augmented dataset {}", output))?;

    println!("{}", serde_json::to_string(&report.summary)?);
    Ok(())
}

fn require_env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{} must be set", name))
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_mode(value: &str) -> anyhow::Result<BatchMode> {
    Ok(match value {
        "geocode" => BatchMode::Geocode,
        "reverse" => BatchMode::Reverse,
        "route" => BatchMode::Route,
        other => bail!("unknown mode '{}'; expected geocode, reverse or route", other),
    })
}

fn parse_provider(value: &str) -> anyhow::Result<ProviderKind> {
    Ok(match value {
        "mapbox" => ProviderKind::Mapbox,
        "here" => ProviderKind::Here,
        "custom" => ProviderKind::Custom,
        other => bail!("unknown provider '{}'; expected mapbox, here or custom", other),
    })
}
