use anyhow::Result;
use clap::Parser;

mod config;
mod data;
mod graph;
mod pipeline;
mod ranking;
mod storage;
mod viz;

use config::DeriveConfig;
use pipeline::Derivation;

#[derive(Parser, Debug)]
#[clap(
    name = "pathway-network-analyzer",
    about = "Career pathway network analysis of football player data"
)]
struct Cli {
    /// Path to input CSV file with player-season records
    #[clap(long)]
    input: String,

    /// Output directory for results
    #[clap(long, default_value = "pathway_results")]
    output_dir: String,

    /// Career-stage category defining the cohort
    #[clap(long, default_value = config::DEFAULT_TARGET_CATEGORY)]
    target_category: String,

    /// Only count seasons played below this age
    #[clap(long, default_value_t = config::DEFAULT_AGE_THRESHOLD)]
    age_threshold: u32,

    /// Minimum distinct players for a competition to be kept
    #[clap(long, default_value_t = config::DEFAULT_MIN_PLAYERS)]
    min_players: u32,

    /// Minimum total played minutes for a competition to be kept
    #[clap(long, default_value_t = config::DEFAULT_MIN_MINUTES)]
    min_minutes: u64,

    /// Competition name to exclude from the pathway
    #[clap(long, default_value = config::DEFAULT_EXCLUDED_COMPETITION)]
    excluded_competition: String,

    /// Competition-type tag that qualifies a season row
    #[clap(long, default_value = config::DEFAULT_COMPETITION_TYPE)]
    competition_type: String,

    /// Number of leagues to report in the log
    #[clap(long, default_value = "5")]
    top: usize,

    /// Skip visualization data export
    #[clap(long)]
    skip_viz: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    log::info!("Starting career pathway analysis");
    log::info!("Input: {}", args.input);
    log::info!("Output: {}", args.output_dir);

    let derive_config = DeriveConfig::new(
        args.target_category,
        args.age_threshold,
        args.min_players,
        args.min_minutes,
        args.excluded_competition,
        args.competition_type,
    );

    // Create output directory
    std::fs::create_dir_all(&args.output_dir)?;

    // 1. Load data
    let ingest = data::csv::load_player_data(&args.input)?;

    log::info!(
        "Loaded {} season records ({} rows skipped)",
        ingest.records.len(),
        ingest.skipped_rows
    );

    // 2. Category overview across the full dataset
    let overview = pipeline::category_overview(&ingest.records);

    // 3. Derive the pathway network
    match pipeline::derive_pathways(&ingest.records, &derive_config) {
        Derivation::EmptyCohort => {
            log::warn!(
                "No players found who reached the '{}' category",
                derive_config.target_category
            );
            storage::save_no_data(
                "empty-cohort",
                "no player matches the target category",
                &args.output_dir,
            )?;
        }
        Derivation::NoSignificantCompetitions => {
            log::warn!("No competitions passed the significance thresholds");
            storage::save_no_data(
                "no-significant-competitions",
                "all competitions were pruned by the participation thresholds",
                &args.output_dir,
            )?;
        }
        Derivation::Complete(analysis) => {
            log::info!(
                "Derived network with {} competitions and {} connections",
                analysis.graph.node_count(),
                analysis.graph.edge_count()
            );

            for (position, row) in ranking::top_k(&analysis.ranking, args.top).iter().enumerate() {
                log::info!(
                    "#{}: {} (connections: {}, players: {})",
                    position + 1,
                    row.league,
                    row.total_weight,
                    row.player_count
                );
            }

            // 4. Save results
            storage::save_results(&analysis, &overview, ingest.skipped_rows, &args.output_dir)?;

            // 5. Generate visualization data if requested
            if !args.skip_viz {
                viz::generate_visualizations(&analysis, &args.output_dir)?;
            }
        }
    }

    log::info!("Analysis complete. Results saved to {}", args.output_dir);

    Ok(())
}
