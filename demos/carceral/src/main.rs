//! carceral: demonstration run of the carceral contagion model.
//!
//! Runs the default community (100 people, 3 relationships each, 10 in
//! prison at month 0) or the parameters in the JSON file given as the first
//! argument, then prints the monthly population table.
//!
//! ```text
//! cargo run -p carceral --release -- params.json
//! ```

use std::env;
use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use cc_agent::IncarcerationState;
use cc_core::ModelParams;
use cc_sim::{LogObserver, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const SIM_MONTHS:   u64 = 120; // ten years
const LOG_INTERVAL: u64 = 12;
const TABLE_EVERY:  usize = 6;

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_logging() -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l:<5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn load_params() -> Result<ModelParams> {
    let Some(path) = env::args().nth(1) else {
        return Ok(ModelParams::default());
    };
    let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let params = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    info!("loaded parameters from {path}");
    Ok(params)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging()?;
    let params = load_params()?;

    println!("=== carceral contagion ===");
    println!(
        "Population: {}  |  Mean degree: {}  |  Outbreak: {}  |  Race: {}  |  Seed: {}",
        params.population_size,
        params.avg_degree,
        params.initial_outbreak_size,
        params.race,
        params.seed
    );
    println!();

    // 1. Build.
    let mut sim = SimBuilder::new(params).build()?;
    println!(
        "Network: {} nodes, {} ties (mean degree {:.2})",
        sim.network().node_count(),
        sim.network().edge_count(),
        sim.network().mean_degree()
    );
    println!("Sentence: {}", sim.sentence());
    println!();

    // 2. Run.
    let t0 = Instant::now();
    sim.run_observed(SIM_MONTHS, &mut LogObserver::new(LOG_INTERVAL));
    let elapsed = t0.elapsed();
    println!("Simulation complete in {:.3} s at {}", elapsed.as_secs_f64(), sim.clock());
    println!();

    // 3. Monthly table.
    println!(
        "{:<8} {:>14} {:>14} {:>14}",
        "Month",
        IncarcerationState::Incarcerated,
        IncarcerationState::Susceptible,
        IncarcerationState::Released
    );
    println!("{}", "-".repeat(53));
    let snapshots = sim.collector().snapshots();
    let last = snapshots.len().saturating_sub(1);
    for (month, counts) in snapshots.iter().enumerate() {
        if month % TABLE_EVERY != 0 && month != last {
            continue;
        }
        println!(
            "{:<8} {:>14} {:>14} {:>14}",
            month, counts.incarcerated, counts.susceptible, counts.released
        );
    }
    println!();

    // 4. Final readout.
    println!("Months Passed: {}", sim.month().0);
    println!("{}", sim.counts());

    Ok(())
}
