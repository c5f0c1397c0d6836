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

//! Random-batch driver for timing the intersection test.
//!
//! Two batches of random triangles in the unit cube are generated from a seed;
//! each of the first `rounds` triangles of the second batch is classified
//! against every triangle of the first batch, and the result codes are tallied.

use std::time::{Duration, Instant};

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use thiserror::Error;

use crate::geometry::{
    tri_tri_intersect::TriTriIntersectionResult, triangle::EdgeTriangle, vector::Vector3,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one triangle per batch is required")]
    NoTriangles,
    #[error("{rounds} rounds need at least as many triangles per batch, got {triangles}")]
    TooManyRounds { rounds: usize, triangles: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub triangles: usize,
    pub rounds: usize,
    pub seed: u64,
    pub parallel: bool,
}

impl BenchConfig {
    pub fn new(
        triangles: usize,
        rounds: usize,
        seed: u64,
        parallel: bool,
    ) -> Result<BenchConfig, ConfigError> {
        if triangles == 0 {
            return Err(ConfigError::NoTriangles);
        }
        if rounds > triangles {
            return Err(ConfigError::TooManyRounds { rounds, triangles });
        }
        Ok(BenchConfig {
            triangles,
            rounds,
            seed,
            parallel,
        })
    }

    pub fn pairs(&self) -> u64 {
        self.triangles as u64 * self.rounds as u64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriangleBatch {
    triangles: Vec<EdgeTriangle<f64>>,
}

impl TriangleBatch {
    /// `count` triangles with every vertex coordinate uniform in `[0, 1)`.
    pub fn random<R: Rng>(rng: &mut R, count: usize) -> TriangleBatch {
        let triangles = (0..count)
            .map(|_| {
                let [a, b, c] = std::array::from_fn(|_| random_point(rng));
                EdgeTriangle::from_vertices(&a, &b, &c)
            })
            .collect();
        TriangleBatch { triangles }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn as_slice(&self) -> &[EdgeTriangle<f64>] {
        &self.triangles
    }
}

fn random_point<R: Rng>(rng: &mut R) -> Vector3<f64> {
    Vector3::new(rng.random(), rng.random(), rng.random())
}

/// Tally of [`TriTriIntersectionResult::code`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; 24],
}

impl Histogram {
    #[inline(always)]
    pub fn record(&mut self, result: TriTriIntersectionResult) {
        self.counts[result.code() as usize] += 1;
    }

    pub fn count(&self, code: u8) -> u64 {
        self.counts.get(code as usize).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn intersecting(&self) -> u64 {
        self.total() - self.count(0)
    }

    /// Codes seen at least once, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count != 0)
            .map(|(code, count)| (code as u8, *count))
    }

    pub fn merge(mut self, other: Histogram) -> Histogram {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct BenchReport {
    pub config: BenchConfig,
    pub generation: Duration,
    pub classification: Duration,
    pub histogram: Histogram,
}

impl BenchReport {
    pub fn nanos_per_pair(&self) -> f64 {
        match self.config.pairs() {
            0 => 0.0,
            pairs => self.classification.as_nanos() as f64 / pairs as f64,
        }
    }
}

/// Classifies each of the first `rounds` triangles of `second` against all of `first`.
pub fn classify(first: &TriangleBatch, second: &TriangleBatch, rounds: usize) -> Histogram {
    let mut histogram = Histogram::default();
    for b in second.as_slice().iter().take(rounds) {
        for a in first.as_slice() {
            histogram.record(a.intersect(b));
        }
    }
    histogram
}

/// Same tally as [`classify`], one rayon task per round.
pub fn classify_parallel(first: &TriangleBatch, second: &TriangleBatch, rounds: usize) -> Histogram {
    let rounds = rounds.min(second.len());
    second.as_slice()[..rounds]
        .par_iter()
        .map(|b| {
            let mut histogram = Histogram::default();
            for a in first.as_slice() {
                histogram.record(a.intersect(b));
            }
            histogram
        })
        .reduce(Histogram::default, Histogram::merge)
}

pub fn run(config: &BenchConfig) -> BenchReport {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let first = TriangleBatch::random(&mut rng, config.triangles);
    let second = TriangleBatch::random(&mut rng, config.triangles);
    let generation = start.elapsed();
    debug!(
        "generated 2 x {} triangles from seed {} in {:?}",
        config.triangles, config.seed, generation
    );

    let start = Instant::now();
    let histogram = if config.parallel {
        classify_parallel(&first, &second, config.rounds)
    } else {
        classify(&first, &second, config.rounds)
    };
    let classification = start.elapsed();

    BenchReport {
        config: *config,
        generation,
        classification,
        histogram,
    }
}
