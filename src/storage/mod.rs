//! Results persistence module

use crate::pipeline::{CategoryStats, PathwayAnalysis};
use anyhow::Result;
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Save derivation results to the specified directory
pub fn save_results(
    analysis: &PathwayAnalysis,
    overview: &[CategoryStats],
    skipped_rows: usize,
    output_dir: &str,
) -> Result<()> {
    log::info!(
        "Saving network with {} competitions and {} connections to {}",
        analysis.graph.node_count(),
        analysis.graph.edge_count(),
        output_dir
    );

    fs::create_dir_all(output_dir)?;

    save_summary(analysis, skipped_rows, output_dir)?;
    save_ranking(analysis, output_dir)?;
    save_network(analysis, output_dir)?;
    save_overview(overview, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Write a status-only summary for the empty outcomes, so the rendering
/// layer can distinguish them from a populated result.
pub fn save_no_data(status: &str, message: &str, output_dir: &str) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let summary = json!({
        "status": status,
        "message": message,
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save summary information
fn save_summary(analysis: &PathwayAnalysis, skipped_rows: usize, output_dir: &str) -> Result<()> {
    log::info!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let graph = &analysis.graph;
    let summary = json!({
        "status": "complete",
        "graph_stats": {
            "competition_count": graph.node_count(),
            "connection_count": graph.edge_count(),
            "total_edge_weight": graph.total_weight(),
            "avg_weighted_degree": if graph.node_count() > 0 {
                2.0 * graph.total_weight() as f64 / graph.node_count() as f64
            } else {
                0.0
            },
        },
        "pipeline_stats": {
            "cohort_size": analysis.cohort_size,
            "qualifying_rows": analysis.qualifying_rows,
            "skipped_rows": skipped_rows,
        }
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save the full connectivity ranking
fn save_ranking(analysis: &PathwayAnalysis, output_dir: &str) -> Result<()> {
    log::info!("Saving connectivity ranking");

    let path = Path::new(output_dir).join("ranking.json");
    let mut file = File::create(path)?;

    file.write_all(to_string_pretty(&analysis.ranking)?.as_bytes())?;

    Ok(())
}

/// Save the network with enumerable nodes and edges.
///
/// Edge endpoints are resolved to competition names so the file stands on
/// its own for graph-drawing tools.
fn save_network(analysis: &PathwayAnalysis, output_dir: &str) -> Result<()> {
    log::info!("Saving network structure");

    let path = Path::new(output_dir).join("network.json");
    let mut file = File::create(path)?;

    let graph = &analysis.graph;
    let network = json!({
        "nodes": graph.nodes.iter().map(|node| {
            json!({
                "name": node.name.clone(),
                "size": node.player_count,
            })
        }).collect::<Vec<_>>(),
        "edges": graph.edges.iter().map(|edge| {
            json!({
                "source": graph.nodes[edge.source as usize].name.clone(),
                "target": graph.nodes[edge.target as usize].name.clone(),
                "weight": edge.weight,
            })
        }).collect::<Vec<_>>(),
    });

    file.write_all(to_string_pretty(&network)?.as_bytes())?;

    Ok(())
}

/// Save the per-category playing-time overview
fn save_overview(overview: &[CategoryStats], output_dir: &str) -> Result<()> {
    log::info!("Saving category overview");

    let path = Path::new(output_dir).join("category_overview.json");
    let mut file = File::create(path)?;

    file.write_all(to_string_pretty(overview)?.as_bytes())?;

    Ok(())
}
