use crate::config::AssessConfig;
use crate::corpus::CharStream;
use crate::error::KgResult;
use crate::geometry::RowSpec;
use crate::layout::Layout;
use crate::metrics::{trackers, MetricContext, Report};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Runs one layout against the fixed set of built-in trackers: streams a
/// corpus through all of them in a single pass and collects one report per
/// tracker.
///
/// Every `run_on` call constructs fresh tracker instances, so no state leaks
/// between runs.
pub struct Assessment {
    layout: Layout,
    config: AssessConfig,
    results: Vec<Report>,
}

impl Assessment {
    pub fn new(grid_spec: &[RowSpec], key_placement: &str) -> KgResult<Self> {
        Ok(Self::from_layout(Layout::new(grid_spec, key_placement)?))
    }

    pub fn from_layout(layout: Layout) -> Self {
        Self {
            layout,
            config: AssessConfig::default(),
            results: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: AssessConfig) -> Self {
        self.config = config;
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Streams `source` character by character through every tracker in
    /// lock-step: each character is delivered to all trackers before the
    /// next is read. Newlines travel as literal characters; they have no
    /// coordinate on the layout and are skipped by the trackers themselves.
    pub fn run_on<R: BufRead>(&mut self, source: R) -> KgResult<&[Report]> {
        let ctx = MetricContext::new(&self.layout, &self.config)?;
        let mut metrics = trackers::built_in();
        for metric in metrics.iter_mut() {
            metric.init(&ctx)?;
        }

        let mut n_chars = 0u64;
        for key in CharStream::new(source) {
            let key = key?;
            n_chars += 1;
            for metric in metrics.iter_mut() {
                metric.evaluate(&ctx, key);
            }
        }
        debug!("evaluated {} characters across {} trackers", n_chars, metrics.len());

        self.results = metrics.iter().map(|m| m.report()).collect();
        Ok(&self.results)
    }

    pub fn run_on_path<P: AsRef<Path>>(&mut self, path: P) -> KgResult<&[Report]> {
        let file = File::open(path)?;
        self.run_on(BufReader::new(file))
    }

    /// Reports from the last run, in tracker-declaration order. Empty before
    /// the first run.
    pub fn results(&self) -> &[Report] {
        &self.results
    }

    /// Structured multi-line rendering of every report.
    pub fn full_report(&self) -> String {
        self.results
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// All metric values flattened across trackers, in declaration order.
    /// Index-aligned with [`flat_keys`](Self::flat_keys).
    pub fn flat_values(&self) -> Vec<f64> {
        self.results
            .iter()
            .flat_map(|r| r.entries.iter().map(|(_, v)| *v))
            .collect()
    }

    /// The metric keys matching [`flat_values`](Self::flat_values), used as
    /// a header row.
    pub fn flat_keys(&self) -> Vec<&'static str> {
        self.results
            .iter()
            .flat_map(|r| r.entries.iter().map(|(k, _)| *k))
            .collect()
    }
}
