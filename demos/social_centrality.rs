//! Centrality report for a synthetic social network
//!
//! Showcases:
//! - Largest-component extraction from a noisy edge list
//! - Degree, closeness and betweenness over the component
//! - Top-N table, summaries and histogram data
//!
//! Run with: `RUST_LOG=socnet_centrality=debug cargo run --example social_centrality`

#![allow(clippy::cast_possible_truncation)]

use anyhow::{Context, Result};
use socnet_centrality::{analyze_async, CentralityConfig, Metric};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Communities of friends, linked through a handful of well-connected users
fn synthetic_network(communities: u32, size: u32) -> Vec<(String, String)> {
    let user = |c: u32, i: u32| format!("c{c:02}-user{i:03}");
    let mut edges = Vec::new();
    let mut rng_state = 42_u64;

    for c in 0..communities {
        for i in 0..size {
            for _ in 0..3 {
                rng_state = rng_state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                let friend = ((rng_state >> 33) % u64::from(size)) as u32;
                edges.push((user(c, i), user(c, friend)));
            }
        }
        // Community hub talks to the next community's hub
        edges.push((user(c, 0), user((c + 1) % communities, 0)));
    }

    // A detached pair that the component filter drops
    edges.push(("loner-a".to_string(), "loner-b".to_string()));
    edges
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into()))
        .try_init();

    let edges = synthetic_network(8, 60);
    let config = CentralityConfig::default().with_top_n(10);

    let report = analyze_async(edges, config)
        .await
        .context("centrality analysis failed")?;

    println!(
        "input: {} nodes, {} edges; largest component: {} nodes, {} edges\n",
        report.input_nodes,
        report.input_edges,
        report.graph.num_nodes(),
        report.graph.num_edges()
    );

    println!("{:<16} {:>8} {:>10} {:>12}", "user", "degree", "closeness", "betweenness");
    for (label, degree, closeness, betweenness) in report.top_rows() {
        println!("{label:<16} {degree:>8.4} {closeness:>10.4} {betweenness:>12.1}");
    }

    println!();
    for (name, summary) in [
        ("closeness", report.top_closeness),
        ("betweenness", report.top_betweenness),
    ] {
        println!(
            "top-{} {name}: mean {:.4}, median {:.4}, stddev {:.4}",
            report.top_nodes.len(),
            summary.mean,
            summary.median,
            summary.stddev
        );
    }

    for metric in Metric::ALL {
        let hist = report
            .histogram(metric)
            .with_context(|| format!("histogram for {}", metric.name()))?;
        println!("\n{} histogram", metric.name());
        for (i, count) in hist.counts.iter().enumerate() {
            println!(
                "  [{:>10.4}, {:>10.4}) {}",
                hist.edges[i],
                hist.edges[i + 1],
                "#".repeat((*count).min(60))
            );
        }
    }

    Ok(())
}
