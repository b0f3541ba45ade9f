//! Command-line driver: insertion-sort random values into a buffer and
//! report how long it took and whether the result is ordered.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use ownbuf::policy::Policy;
use ownbuf::run_policy;
use ownbuf::sort::SortConfig;

#[derive(Parser)]
#[command(name = "ownbuf")]
#[command(about = "Insertion-sort random values into a fixed-size buffer")]
struct Args {
    /// Number of values to generate and sort
    count: usize,

    /// Buffer ownership policy: deep-copy, unique, shared or manual
    #[arg(short, long, default_value_t = Policy::Manual)]
    policy: Policy,

    /// Run every policy in turn on the same values
    #[arg(long, conflicts_with = "policy")]
    all: bool,

    /// Inclusive upper bound for generated values
    #[arg(long, default_value_t = SortConfig::DEFAULT_MAX_VALUE)]
    max_value: u32,

    /// RNG seed (drawn at random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = SortConfig::new(args.count).with_max_value(args.max_value);
    // One seed for the whole invocation, so --all compares like with like.
    let seed = args.seed.unwrap_or_else(|| config.resolve_seed());
    config.seed = Some(seed);
    info!("seed {seed}");

    let policies = if args.all {
        Policy::ALL.to_vec()
    } else {
        vec![args.policy]
    };

    let mut failures = 0;
    for policy in policies {
        let report = run_policy(policy, &config)
            .with_context(|| format!("{policy} buffer run failed"))?;
        println!(
            "Time to store {} values in {} buffer = {:.6} s",
            report.count,
            policy,
            report.elapsed.as_secs_f64()
        );
        match &report.verification {
            Ok(()) => println!("Values were correctly ordered"),
            Err(err) => {
                eprintln!("{policy}: {err}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} run(s) produced unordered values");
    }
    Ok(())
}
