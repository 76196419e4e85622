
pub mod analytics_core;
pub mod config;
pub mod reader;
pub mod writer;

use {
    analytics_core::{validate, AnalyticsEngine},
    config::Config,
};

pub fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr so the output file and any piped stdout stay clean.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_args(&args);

    log::info!("🚀 Starting donorflow...");
    log::info!("   input:      {}", config.input_path.display());
    log::info!("   percentile: {}", config.percentile_path.display());
    log::info!("   output:     {}", config.output_path.display());

    let percentile = config::load_percentile(&config.percentile_path);
    let raw_records = reader::load_transactions(&config.input_path);

    // Single pass, strictly in input order. Donor state and bucket state
    // live inside the engine for exactly this run.
    let mut engine = AnalyticsEngine::new(percentile);
    let mut snapshots = Vec::new();
    let mut invalid = 0usize;
    for record in &raw_records {
        match validate(record) {
            Some(tx) => snapshots.extend(engine.process(tx)),
            None => invalid += 1,
        }
    }

    log::info!(
        "✅ Processed {} records ({} structurally invalid), {} snapshots emitted",
        raw_records.len(),
        invalid,
        snapshots.len()
    );

    if let Err(err) = writer::write_snapshots(&config.output_path, &snapshots) {
        log::error!("❌ Failed to write output: {}", err);
        std::process::exit(1);
    }
}
