//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. All methods have empty defaults, so an observer only
//! implements the callbacks it cares about.

use crate::graph::similarity::SimilarityGraph;
use crate::pagerank::PageRankResult;
use crate::types::Sentence;
use std::time::{Duration, Instant};

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_VECTORIZE: &str = "vectorize";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

/// Timing and size information for one finished stage
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StageReport {
    /// Wall-clock time spent in the stage
    pub elapsed: Duration,
    /// Graph nodes, when the stage produced a graph
    pub nodes: Option<usize>,
    /// Graph edges, when the stage produced a graph
    pub edges: Option<usize>,
    /// PageRank iterations, for the rank stage
    pub iterations: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }
}

/// Builder for [`StageReport`]s that carry more than a duration
#[derive(Debug, Clone, Copy)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn nodes(mut self, nodes: usize) -> Self {
        self.report.nodes = Some(nodes);
        self
    }

    pub fn edges(mut self, edges: usize) -> Self {
        self.report.edges = Some(edges);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.report.iterations = Some(iterations);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Measures one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Callbacks fired by [`super::runner::Pipeline::run`]
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_graph(&mut self, _graph: &SimilarityGraph) {}

    fn on_rank(&mut self, _result: &PageRankResult) {}
}

/// Observer that ignores every callback
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that emits a `tracing` event per finished stage
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl PipelineObserver for TracingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        tracing::debug!(
            stage,
            elapsed_us = report.elapsed.as_micros() as u64,
            nodes = report.nodes,
            edges = report.edges,
            iterations = report.iterations,
            "stage finished"
        );
    }

    fn on_sentences(&mut self, sentences: &[Sentence]) {
        tracing::debug!(count = sentences.len(), "segmented input");
    }
}
