use std::{error::Error, time::Duration};

use clap::Parser;
use indicatif::ParallelProgressIterator;
use log::info;
use path_trace::{
    calculate_path,
    graphs::graph_functions::{random_graph, random_request, validate_path},
    search::collect_steps,
    utility::get_progressbar,
    AlgorithmStep,
};
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

/// Builds a random graph and checks for `queries` random pairs that the step
/// trace ends with the same answer as the one-shot search, and that every
/// found path is a valid walk of the reported cost.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 1_000)]
    vertices: u64,
    #[arg(short, long, default_value_t = 4_000)]
    edges: u64,
    #[arg(short, long, default_value_t = 1_000)]
    queries: u64,
    #[arg(short, long, default_value_t = 100)]
    max_weight: u32,
    /// Seed for the random number generator, random if not set
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let graph = random_graph(&mut rng, args.vertices, args.edges, args.max_weight);
    let requests: Vec<_> = (0..args.queries)
        .filter_map(|_| random_request(&graph, &mut rng))
        .collect();
    info!("generated {} requests", requests.len());

    let bar = get_progressbar("Validating", requests.len() as u64);
    let results = requests
        .par_iter()
        .progress_with(bar)
        .map(|&(source, destination)| -> Result<(Duration, bool), String> {
            let result = calculate_path(&graph, source, destination).map_err(|e| e.to_string())?;
            validate_path(&graph, source, destination, &result)?;

            let steps = collect_steps(&graph, source, destination).map_err(|e| e.to_string())?;
            match steps.last() {
                Some(AlgorithmStep::Complete {
                    path_found,
                    node_path,
                    total_cost,
                }) if *path_found == result.path_found
                    && *node_path == result.node_path
                    && *total_cost == result.total_cost => {}
                _ => {
                    return Err(format!(
                        "trace and search disagree for {} -> {}",
                        source, destination
                    ))
                }
            }

            Ok((result.elapsed, result.path_found))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let found = results.iter().filter(|(_, found)| *found).count();
    let average = average_time(results.iter().map(|(elapsed, _)| *elapsed));

    println!(
        "All correct. {} of {} queries found a path, {:?} per query on average",
        found,
        results.len(),
        average
    );

    Ok(())
}

fn average_time(times: impl ExactSizeIterator<Item = Duration>) -> Duration {
    let count = times.len().max(1) as u128;
    let total: Duration = times.sum();
    Duration::from_nanos(u64::try_from(total.as_nanos() / count).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_flag() {
        let args = Args::try_parse_from(["validate_random", "--vertices", "10", "-e", "20"]).unwrap();
        assert_eq!(args.vertices, 10);
        assert_eq!(args.edges, 20);
        assert!(Args::try_parse_from(["validate_random", "--nodes", "10"]).is_err());
    }

    #[test]
    fn average_of_query_times() {
        let times = vec![Duration::from_millis(1), Duration::from_millis(3)];
        assert_eq!(average_time(times.into_iter()), Duration::from_millis(2));
        assert_eq!(average_time(Vec::<Duration>::new().into_iter()), Duration::ZERO);
    }
}
