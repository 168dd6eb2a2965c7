use std::{error::Error, fs::File, io::BufReader, path::PathBuf};

use clap::Parser;
use log::info;
use path_trace::{calculate_path, graphs::Graph, stream_steps, NodeId};

/// Finds the shortest path between two nodes of a graph stored as JSON and
/// optionally prints every step of the search, one JSON object per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph snapshot in JSON
    #[arg(short, long)]
    graph: PathBuf,
    /// Name or numeric id of the start node
    #[arg(short, long)]
    source: String,
    /// Name or numeric id of the destination node
    #[arg(short, long)]
    target: String,
    /// Print the step trace
    #[arg(long)]
    steps: bool,
}

fn resolve(graph: &Graph, key: &str) -> Result<NodeId, String> {
    if let Some(node) = graph.node_by_name(key) {
        return Ok(node.id);
    }
    key.parse()
        .ok()
        .map(NodeId)
        .filter(|id| graph.contains_node(*id))
        .ok_or_else(|| format!("no node named or numbered {:?}", key))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let reader = BufReader::new(File::open(&args.graph)?);
    let graph: Graph = serde_json::from_reader(reader)?;
    info!(
        "read graph with {} nodes and {} edges",
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    let source = resolve(&graph, &args.source)?;
    let target = resolve(&graph, &args.target)?;

    if args.steps {
        for step in stream_steps(&graph, source, target) {
            println!("{}", serde_json::to_string(&step?)?);
        }
    }

    let result = calculate_path(&graph, source, target)?;
    if result.path_found {
        let names: Vec<_> = result
            .node_path
            .iter()
            .map(|id| graph.node(*id).map_or_else(|| id.to_string(), |node| node.name.clone()))
            .collect();
        println!("{} (cost {})", names.join(" -> "), result.total_cost);
    } else {
        println!("no path from {} to {}", args.source, args.target);
    }
    info!("search took {:?}", result.elapsed);

    Ok(())
}
