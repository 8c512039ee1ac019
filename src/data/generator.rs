use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::dataset::{Dataset, JsonEdge};
use crate::{Error, Result};

/// Seed used by the command line tool when none is given
pub const DEFAULT_SEED: u64 = 42;

/// Shape of one dataset in the standard suite
#[derive(Debug, Clone, Copy)]
pub struct SuiteEntry {
    pub name: &'static str,
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub density: f64,
    pub allow_cycles: bool,
}

/// Three small, three medium and three large datasets
pub const STANDARD_SUITE: [SuiteEntry; 9] = [
    SuiteEntry { name: "small_1", min_vertices: 6, max_vertices: 8, density: 0.12, allow_cycles: false },
    SuiteEntry { name: "small_2", min_vertices: 7, max_vertices: 10, density: 0.18, allow_cycles: true },
    SuiteEntry { name: "small_3", min_vertices: 6, max_vertices: 10, density: 0.28, allow_cycles: true },
    SuiteEntry { name: "medium_1", min_vertices: 10, max_vertices: 14, density: 0.08, allow_cycles: false },
    SuiteEntry { name: "medium_2", min_vertices: 12, max_vertices: 18, density: 0.12, allow_cycles: true },
    SuiteEntry { name: "medium_3", min_vertices: 14, max_vertices: 20, density: 0.20, allow_cycles: true },
    SuiteEntry { name: "large_1", min_vertices: 20, max_vertices: 30, density: 0.04, allow_cycles: false },
    SuiteEntry { name: "large_2", min_vertices: 25, max_vertices: 40, density: 0.08, allow_cycles: true },
    SuiteEntry { name: "large_3", min_vertices: 30, max_vertices: 50, density: 0.16, allow_cycles: true },
];

/// Generates random directed datasets with weights in `1..=9`.
///
/// The random source is owned by the generator, so two generators built from
/// the same seed produce identical datasets.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    rng: StdRng,
}

impl DatasetGenerator {
    pub fn new(seed: u64) -> Self {
        DatasetGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_rng(rng: StdRng) -> Self {
        DatasetGenerator { rng }
    }

    /// Generates a dataset with `n` vertices.
    ///
    /// Each ordered pair `u != v` gets an edge with probability `density`.
    /// With `allow_cycles`, up to three rings of 2 to 4 vertices are wired in
    /// both directions to seed strongly connected groups. The source (vertex 0)
    /// always gets an outgoing edge when `n > 1`, and no `(u, v)` pair appears
    /// twice.
    pub fn generate(&mut self, n: usize, density: f64, allow_cycles: bool) -> Result<Dataset> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidArgument(format!(
                "density must lie in [0, 1], got {}",
                density
            )));
        }

        let mut dataset = Dataset::new(n);
        if n == 0 {
            return Ok(dataset);
        }

        let mut pairs = HashSet::new();
        let mut edges = Vec::new();

        for u in 0..n {
            for v in 0..n {
                if u == v {
                    continue;
                }
                if self.rng.gen::<f64>() < density {
                    let w = self.weight();
                    pairs.insert((u, v));
                    edges.push(JsonEdge::new(u, v, w));
                }
            }
        }

        if allow_cycles {
            let groups = (n / 6).max(1).min(3);
            for _ in 0..groups {
                let size = (self.rng.gen_range(0..(n / 6).max(2)) + 2).clamp(2, 4);
                let base = self.rng.gen_range(0..(n + 1).saturating_sub(size).max(1));
                for i in 0..size {
                    let a = (base + i) % n;
                    let b = (base + (i + 1) % size) % n;
                    // Rings wrapped onto a single vertex would only add self-loops.
                    if a == b {
                        continue;
                    }
                    if pairs.insert((a, b)) {
                        let w = self.weight();
                        edges.push(JsonEdge::new(a, b, w));
                    }
                    if pairs.insert((b, a)) {
                        let w = self.weight();
                        edges.push(JsonEdge::new(b, a, w));
                    }
                }
            }
        }

        let source = dataset.source();
        if n > 1 && !edges.iter().any(|edge| edge.u == source) {
            let w = self.weight();
            edges.push(JsonEdge::new(source, 1, w));
        }

        debug!(
            "Generated dataset n={} density={} cycles={} edges={}",
            n,
            density,
            allow_cycles,
            edges.len()
        );
        dataset.edges = edges;
        Ok(dataset)
    }

    /// Generates every dataset of [`STANDARD_SUITE`] in order
    pub fn standard_suite(&mut self) -> Result<Vec<(&'static str, Dataset)>> {
        STANDARD_SUITE
            .iter()
            .map(|entry| {
                let n = self.rng.gen_range(entry.min_vertices..=entry.max_vertices);
                let dataset = self.generate(n, entry.density, entry.allow_cycles)?;
                Ok((entry.name, dataset))
            })
            .collect()
    }

    /// Writes the standard suite into `dir` as `<name>.json`, creating the directory if needed
    pub fn write_standard_suite(&mut self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(STANDARD_SUITE.len());
        for (name, dataset) in self.standard_suite()? {
            let path = dir.join(format!("{}.json", name));
            dataset.save(&path)?;
            written.push(path);
        }
        Ok(written)
    }

    fn weight(&mut self) -> u64 {
        self.rng.gen_range(1..=9)
    }
}
