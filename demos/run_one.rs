use delta_stepping::{delta_stepping, load_edge_list, validate, DeltaSteppingConfig, Edge, Graph};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn random_graph(n: u32, avg_degree: u32, max_weight: u64, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let edges: Vec<Edge> = (0..n)
        .flat_map(|u| (0..avg_degree).map(move |_| u))
        .map(|u| Edge::new(u, rng.gen_range(0..n), rng.gen_range(0..=max_weight)))
        .collect();
    Graph::from_edges(n as usize, edges).expect("generated endpoints are in range")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.iter().any(|a| a == "--help") {
        eprintln!("usage: run_one <edge-list-file> | run_one --random <n> <avg-degree> <seed>");
        eprintln!("       delta/source/infinity come from SSSP_DELTA, SSSP_SOURCE, SSSP_INFINITY");
        std::process::exit(1);
    }
    let config = DeltaSteppingConfig::from_env()?;
    let graph = if args[1] == "--random" {
        let n: u32 = args.get(2).and_then(|v| v.parse().ok()).unwrap_or(1000);
        let deg: u32 = args.get(3).and_then(|v| v.parse().ok()).unwrap_or(4);
        let seed: u64 = args.get(4).and_then(|v| v.parse().ok()).unwrap_or(42);
        random_graph(n, deg, 3 * config.delta, seed)
    } else {
        load_edge_list(&args[1])?.with_min_vertices(config.source as usize + 1).into_graph()?
    };

    let sp = delta_stepping(&graph, config)?;
    let report = validate(&graph, &sp);
    if !report.is_ok() {
        eprintln!("Error: {} vertices disagree with the baseline", report.mismatches.len());
    }
    eprintln!(
        "n={} m={} relax={} light={} heavy={} buckets={} settled={}",
        graph.vertex_count(), graph.edge_count(), sp.stats.relaxations, sp.stats.light_relaxations,
        sp.stats.heavy_relaxations, sp.stats.buckets_visited, sp.stats.settled
    );
    println!("{}", sp.to_json()?);
    Ok(())
}
