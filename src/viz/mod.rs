//! Visualization data export module

use crate::pipeline::PathwayAnalysis;
use crate::ranking;
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Export visualization data for the pathway network.
///
/// Writes data files for external graph-drawing tools plus a static HTML
/// report; node positioning is left entirely to the consumer.
pub fn generate_visualizations(analysis: &PathwayAnalysis, output_dir: &str) -> Result<()> {
    log::info!(
        "Generating visualization data for {} competitions",
        analysis.graph.node_count()
    );

    let viz_dir = Path::new(output_dir).join("visualizations");
    fs::create_dir_all(&viz_dir)?;

    generate_network_data(analysis, &viz_dir)?;
    generate_html_report(analysis, &viz_dir)?;

    log::info!("Visualization data generated successfully");

    Ok(())
}

/// Generate GraphML and CSV files for visualization tools
fn generate_network_data(analysis: &PathwayAnalysis, viz_dir: &Path) -> Result<()> {
    log::info!("Generating network data files");

    let graph = &analysis.graph;

    // GraphML with node sizes and edge weights
    let graphml_path = viz_dir.join("pathway_network.graphml");
    let mut file = File::create(graphml_path)?;

    writeln!(file, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        file,
        "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">"
    )?;
    writeln!(
        file,
        "  <key id=\"label\" for=\"node\" attr.name=\"label\" attr.type=\"string\"/>"
    )?;
    writeln!(
        file,
        "  <key id=\"size\" for=\"node\" attr.name=\"size\" attr.type=\"int\"/>"
    )?;
    writeln!(
        file,
        "  <key id=\"weight\" for=\"edge\" attr.name=\"weight\" attr.type=\"int\"/>"
    )?;
    writeln!(file, "  <graph id=\"G\" edgedefault=\"undirected\">")?;

    for (index, node) in graph.nodes.iter().enumerate() {
        writeln!(file, "    <node id=\"n{}\">", index)?;
        writeln!(
            file,
            "      <data key=\"label\">{}</data>",
            xml_escape(&node.name)
        )?;
        writeln!(file, "      <data key=\"size\">{}</data>", node.player_count)?;
        writeln!(file, "    </node>")?;
    }

    for (edge_id, edge) in graph.edges.iter().enumerate() {
        writeln!(
            file,
            "    <edge id=\"e{}\" source=\"n{}\" target=\"n{}\">",
            edge_id, edge.source, edge.target
        )?;
        writeln!(file, "      <data key=\"weight\">{}</data>", edge.weight)?;
        writeln!(file, "    </edge>")?;
    }

    writeln!(file, "  </graph>")?;
    writeln!(file, "</graphml>")?;

    // CSV files with node and edge data
    let nodes_path = viz_dir.join("nodes.csv");
    let mut nodes_file = File::create(nodes_path)?;

    writeln!(nodes_file, "competition,players")?;
    for node in &graph.nodes {
        writeln!(nodes_file, "{},{}", csv_escape(&node.name), node.player_count)?;
    }

    let edges_path = viz_dir.join("edges.csv");
    let mut edges_file = File::create(edges_path)?;

    writeln!(edges_file, "source,target,weight")?;
    for edge in &graph.edges {
        writeln!(
            edges_file,
            "{},{},{}",
            csv_escape(&graph.nodes[edge.source as usize].name),
            csv_escape(&graph.nodes[edge.target as usize].name),
            edge.weight
        )?;
    }

    Ok(())
}

/// Generate a static HTML report with the top-5 ranking
fn generate_html_report(analysis: &PathwayAnalysis, viz_dir: &Path) -> Result<()> {
    log::info!("Generating HTML report");

    let index_path = viz_dir.join("index.html");
    let mut index_file = File::create(index_path)?;

    writeln!(index_file, "<!DOCTYPE html>")?;
    writeln!(index_file, "<html lang=\"en\">")?;
    writeln!(index_file, "<head>")?;
    writeln!(index_file, "  <meta charset=\"UTF-8\">")?;
    writeln!(index_file, "  <title>Career Pathway Network</title>")?;
    writeln!(index_file, "  <style>")?;
    writeln!(
        index_file,
        "    body {{ font-family: Arial, sans-serif; margin: 20px; }}"
    )?;
    writeln!(index_file, "    h1, h2 {{ color: #333; }}")?;
    writeln!(
        index_file,
        "    table {{ border-collapse: collapse; margin-top: 10px; }}"
    )?;
    writeln!(
        index_file,
        "    th, td {{ border: 1px solid #ddd; padding: 8px 12px; text-align: left; }}"
    )?;
    writeln!(
        index_file,
        "    .stats {{ margin-top: 20px; background-color: #f9f9f9; padding: 15px; border-radius: 5px; }}"
    )?;
    writeln!(index_file, "  </style>")?;
    writeln!(index_file, "</head>")?;
    writeln!(index_file, "<body>")?;
    writeln!(index_file, "  <h1>Career Pathway Network</h1>")?;

    writeln!(index_file, "  <div class=\"stats\">")?;
    writeln!(index_file, "    <h2>Summary Statistics</h2>")?;
    writeln!(
        index_file,
        "    <p>Competitions: {}</p>",
        analysis.graph.node_count()
    )?;
    writeln!(
        index_file,
        "    <p>Connections: {}</p>",
        analysis.graph.edge_count()
    )?;
    writeln!(
        index_file,
        "    <p>Total Connection Weight: {}</p>",
        analysis.graph.total_weight()
    )?;
    writeln!(
        index_file,
        "    <p>Cohort Size: {} players</p>",
        analysis.cohort_size
    )?;
    writeln!(index_file, "  </div>")?;

    writeln!(
        index_file,
        "  <h2>Top 5 Leagues Based on Connections and Weights</h2>"
    )?;
    writeln!(index_file, "  <table>")?;
    writeln!(
        index_file,
        "    <tr><th>League</th><th>Total Connections (Weights)</th><th>Players (Node Size)</th></tr>"
    )?;

    for row in ranking::top_k(&analysis.ranking, 5) {
        writeln!(
            index_file,
            "    <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            xml_escape(&row.league),
            row.total_weight,
            row.player_count
        )?;
    }

    writeln!(index_file, "  </table>")?;
    writeln!(index_file, "</body>")?;
    writeln!(index_file, "</html>")?;

    Ok(())
}

/// Escape a competition name for XML/HTML text content
fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Quote a CSV field when it contains a delimiter or quote
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_escaped_for_markup_and_csv() {
        assert_eq!(xml_escape("A & B <C>"), "A &amp; B &lt;C&gt;");
        assert_eq!(csv_escape("1. Liga, Gruppe 1"), "\"1. Liga, Gruppe 1\"");
        assert_eq!(csv_escape("Super League"), "Super League");
    }
}
