use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use fire_advisory_core::advisory::area_filter::filter_fire_centres_with;
use fire_advisory_core::advisory::FuelTypeRow;
use fire_advisory_core::core_types::{FireCentreStats, ZoneAreaSummary};
use fire_advisory_core::{
    build_zone_reports, group_area_summaries, validate_zone, AdvisoryConfig, AdvisoryText,
    RunParameters, RunType, ZoneAreaSummaries, ZoneReport,
};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fire behaviour advisory report for one model run
#[derive(Parser, Debug)]
#[command(name = "fire-advisory-demo")]
#[command(
    about = "Zone-level fire behaviour advisories from fuel type statistics",
    long_about = None
)]
struct Args {
    /// JSON file: fire centre name -> zone id -> fuel type and wind statistics
    input: PathBuf,

    /// JSON file: list of per-threshold zone area summaries
    #[arg(short, long)]
    summaries: Option<PathBuf>,

    /// TOML file overriding advisory thresholds and colours
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model run type (forecast or actual)
    #[arg(long, default_value = "forecast")]
    run_type: RunType,

    /// Date the statistics describe (YYYY-MM-DD), defaults to today
    #[arg(long)]
    for_date: Option<NaiveDate>,

    /// Only report this zone id
    #[arg(short, long)]
    zone: Option<i64>,

    /// Print reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Report data problems found in the statistics
    #[arg(short, long)]
    validate: bool,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "info";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = args
        .config
        .as_deref()
        .map(AdvisoryConfig::from_file)
        .transpose()
        .context("loading advisory configuration")?
        .unwrap_or_default();

    let now = Utc::now();
    let for_date = args.for_date.unwrap_or_else(|| now.date_naive());
    let run = RunParameters::new(args.run_type, now, for_date);

    let centres: FireCentreStats = read_json(&args.input)?;
    let summaries: ZoneAreaSummaries = args
        .summaries
        .as_deref()
        .map(read_json::<Vec<ZoneAreaSummary>>)
        .transpose()?
        .map(group_area_summaries)
        .unwrap_or_default();
    info!(
        fire_centres = centres.len(),
        zones_with_summaries = summaries.len(),
        "Loaded model run statistics"
    );

    if args.validate {
        print_validation(&centres, args.zone);
    }

    let mut reports = build_zone_reports(&centres, &summaries, &config);
    if let Some(zone_id) = args.zone {
        reports.retain(|r| r.zone_id == zone_id);
        if reports.is_empty() {
            bail!("zone {zone_id} not found in {}", args.input.display());
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let filtered = filter_fire_centres_with(&centres, &config);
    println!("=== Fire Behaviour Advisories ===");
    println!(
        "{} run for {}{}\n",
        run.run_type,
        run.for_date,
        if run.is_future_date() { " (forecast day)" } else { "" }
    );

    for report in &reports {
        let Some(zone) = filtered
            .get(&report.fire_centre_name)
            .and_then(|zones| zones.get(&report.zone_id))
        else {
            continue;
        };
        let zone_name = format!("Zone {}", report.zone_id);
        println!("--- {} / {} ---", report.fire_centre_name, zone_name);
        let text = AdvisoryText::new(&zone_name, report.status, zone)
            .with_fire_centre(&report.fire_centre_name)
            .with_next_day_cutoff(config.next_day_cutoff)
            .render();
        println!("{text}\n");
        if report.status.is_some() {
            print_fuel_table(report);
        }
    }

    let flagged = reports.iter().filter(|r| r.status.is_some()).count();
    println!("=== {} of {} zones under advisory or warning ===", flagged, reports.len());
    Ok(())
}

fn print_fuel_table(report: &ZoneReport) {
    if report.fuel_types.is_empty() {
        return;
    }
    println!("Fuel  | Area (km²) | % of zone | Critical hours");
    println!("------|------------|-----------|---------------------");
    for row in &report.fuel_types {
        println!(
            "{:5} | {:10.1} | {:9.1} | {}",
            row.code,
            *row.area / 1.0e6,
            *row.percent_of_zone,
            critical_hours_cell(row)
        );
    }
    println!();
}

fn critical_hours_cell(row: &FuelTypeRow) -> String {
    row.critical_hours_text
        .as_ref()
        .map_or_else(|| "-".to_string(), |[start, end]| format!("{start} - {end}"))
}

fn print_validation(centres: &FireCentreStats, only_zone: Option<i64>) {
    let mut zones: Vec<_> = centres
        .iter()
        .flat_map(|(centre, zones)| zones.iter().map(move |(id, zone)| (centre, *id, zone)))
        .filter(|(_, id, _)| only_zone.is_none() || only_zone == Some(*id))
        .collect();
    zones.sort_by(|a, b| a.0.cmp(b.0).then(a.1.cmp(&b.1)));

    println!("=== Data Validation ===");
    let mut total = 0;
    for (centre, zone_id, zone) in zones {
        for issue in validate_zone(zone) {
            println!("  {centre} / Zone {zone_id}: {issue}");
            total += 1;
        }
    }
    if total == 0 {
        println!("  No problems found");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_default_filter_shows_progress_lines() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_sample_data_loads() {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let centres: FireCentreStats = read_json(&data.join("zone_stats.json")).unwrap();
        let summaries: Vec<ZoneAreaSummary> = read_json(&data.join("area_summaries.json")).unwrap();
        let config = AdvisoryConfig::from_file(data.join("advisory.toml")).unwrap();

        let reports = build_zone_reports(&centres, &group_area_summaries(summaries), &config);
        assert_eq!(reports.len(), 3);
        assert!(reports.iter().any(|r| r.status.is_some()));
    }
}
