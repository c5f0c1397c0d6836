// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use tritri::harness::{self, BenchConfig};

/// Times pairwise triangle-triangle classification over random batches.
#[derive(Debug, Parser)]
#[command(name = "tritri-bench", version, about)]
struct Args {
    /// Triangles per batch
    #[arg(long, default_value_t = 10_000)]
    triangles: usize,

    /// Triangles of the second batch tested against the whole first batch
    #[arg(long, default_value_t = 1_000)]
    rounds: usize,

    /// Seed for the random batches, drawn at random when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Spread rounds across threads
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let config = BenchConfig::new(args.triangles, args.rounds, seed, args.parallel)
        .context("invalid benchmark configuration")?;
    debug!("{config:?}");

    let report = harness::run(&config);
    info!(
        "seed {}: generated in {:?}, classified {} pairs in {:?} ({:.1} ns/pair)",
        seed,
        report.generation,
        config.pairs(),
        report.classification,
        report.nanos_per_pair()
    );
    for (code, count) in report.histogram.iter() {
        info!("{code} {count}");
    }
    Ok(())
}
