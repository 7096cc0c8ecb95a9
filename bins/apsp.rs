use fast_apsp::utils::format_distance;
use fast_apsp::{DistanceGraph, DistanceMatrix, GraphError};
use log::info;
use std::env;
use std::path::Path;
use std::time::Instant;

fn print_help(program: &str) {
    println!("All-pairs shortest distances (Floyd-Warshall)");
    println!();
    println!("Usage: {} [OPTIONS] [graph.dimacs]", program);
    println!();
    println!("Without a graph file the built-in 4-vertex demo graph is used.");
    println!();
    println!("Options:");
    println!("  --from <u> --to <v>  Print only the distance from u to v (0-based)");
    println!("  --parallel           Relax rows in parallel (needs the `parallel` feature)");
    println!("  --json               Print the distance matrix as JSON, null for unreachable");
    println!("  -h, --help           Show this help");
    println!();
    println!("Logging is controlled with RUST_LOG, e.g. RUST_LOG=debug.");
}

fn demo_graph() -> DistanceGraph {
    DistanceGraph::from_edges(
        4,
        vec![
            (0, 1, 5.0),
            (0, 2, 3.0),
            (1, 2, 2.0),
            (1, 3, 6.0),
            (2, 3, 7.0),
        ],
    )
}

fn usage_error(program: &str, message: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!("Try '{} --help' for more information.", program);
    std::process::exit(1);
}

fn parse_vertex(program: &str, flag: &str, value: Option<&String>) -> usize {
    match value.map(|v| v.parse::<usize>()) {
        Some(Ok(vertex)) => vertex,
        Some(Err(_)) => usage_error(program, &format!("{} expects a vertex index", flag)),
        None => usage_error(program, &format!("{} needs a value", flag)),
    }
}

#[cfg(feature = "parallel")]
fn compute(graph: &DistanceGraph, parallel: bool) -> DistanceMatrix {
    if parallel {
        fast_apsp::shortest_distances_parallel(graph)
    } else {
        graph.shortest_distances()
    }
}

#[cfg(not(feature = "parallel"))]
fn compute(graph: &DistanceGraph, parallel: bool) -> DistanceMatrix {
    if parallel {
        log::warn!("built without the `parallel` feature, running sequentially");
    }
    graph.shortest_distances()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "apsp".to_string());
    let program = program.as_str();
    let args: Vec<String> = args.collect();

    let mut parallel = false;
    let mut json_output = false;
    let mut from: Option<usize> = None;
    let mut to: Option<usize> = None;
    let mut graph_path: Option<&str> = None;

    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help(program);
                std::process::exit(0);
            }
            "--parallel" => parallel = true,
            "--json" => json_output = true,
            "--from" => from = Some(parse_vertex(program, "--from", rest.next())),
            "--to" => to = Some(parse_vertex(program, "--to", rest.next())),
            flag if flag.starts_with("--") => {
                usage_error(program, &format!("unknown option {}", flag))
            }
            path => {
                if graph_path.is_some() {
                    usage_error(program, "multiple graph files specified");
                }
                graph_path = Some(path);
            }
        }
    }

    if from.is_some() || to.is_some() {
        if from.is_none() || to.is_none() {
            usage_error(program, "--from and --to must be given together");
        }
        if json_output || parallel {
            usage_error(program, "--json and --parallel apply to the full matrix, not --from/--to");
        }
    }

    let graph = match graph_path {
        Some(path) => {
            let start = Instant::now();
            let graph = DistanceGraph::from_dimacs_file(Path::new(path))?;
            info!(
                "loaded {}: {} vertices, {} edges in {:?}",
                path,
                graph.vertex_count(),
                graph.edge_count(),
                start.elapsed()
            );
            graph
        }
        None => {
            info!("no graph file given, using the demo graph");
            demo_graph()
        }
    };

    if let (Some(start), Some(end)) = (from, to) {
        // an out-of-range index is a usage error, not "no path"
        match graph.try_shortest_distance(start, end) {
            Ok(distance) => println!(
                "Shortest distance from {} to {}: {}",
                start,
                end,
                format_distance(distance)
            ),
            Err(err @ GraphError::InvalidVertexIndex { .. }) => {
                usage_error(program, &err.to_string())
            }
            Err(err) => return Err(err.into()),
        }
    } else {
        let dist = compute(&graph, parallel);
        if json_output {
            println!("{}", serde_json::to_string_pretty(&dist.finite_rows())?);
        } else {
            println!("Adjacency matrix:");
            print!("{}", graph);
            println!();
            println!("Shortest distances between all pairs:");
            print!("{}", dist);
        }
    }

    Ok(())
}
