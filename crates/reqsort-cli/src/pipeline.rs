//! Stage orchestration: collect, extract, order, write.
//!
//! Each stage returns an owned value or an error and the first error ends the
//! run, so nothing is written unless every earlier stage succeeded.

use std::path::{Path, PathBuf};

use reqsort_graph::{CycleCheck, DependencyGraph, FileId, GraphError, SortOrder, sort_by_name};
use reqsort_scan::{
    Collection, DependencyExtractor, Extraction, FileCollector, OutputWriter, Runtime, ScanError,
    WriteSummary, resolve_output,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::SortMode;
use crate::config::ReqsortConfig;

/// Any failure of a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub root: PathBuf,
    /// Relative paths are taken relative to the canonical root.
    pub output: PathBuf,
    pub mode: SortMode,
    pub cycle_check: CycleCheck,
    pub follow_links: bool,
}

impl From<&ReqsortConfig> for RunConfig {
    fn from(config: &ReqsortConfig) -> Self {
        Self {
            root: config.root.clone(),
            output: config.output.clone(),
            mode: config.mode,
            cycle_check: config.cycle_check,
            follow_links: config.follow_links,
        }
    }
}

/// Collected files and their extracted requirements.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub collection: Collection,
    pub extraction: Extraction,
}

impl Analysis {
    pub fn root(&self) -> &Path {
        &self.collection.root
    }

    /// Build the dependency graph over the collected files.
    pub fn graph(&self) -> Result<DependencyGraph<'_>, GraphError> {
        DependencyGraph::build(&self.collection.files, &self.extraction.dependencies)
    }

    /// Order the files according to `mode`.
    pub fn order(&self, mode: SortMode, check: CycleCheck) -> Result<SortOrder, GraphError> {
        match mode {
            SortMode::Name => Ok(sort_by_name(&self.collection.files, self.root())),
            SortMode::Topology => self.graph()?.sort(check),
        }
    }

    pub fn relative(&self, file: &FileId) -> String {
        file.relative_to(self.root())
    }
}

/// A successful run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    #[serde(skip)]
    pub root: PathBuf,
    pub mode: SortMode,
    /// Root-relative paths in output order.
    pub files: Vec<String>,
    pub output: PathBuf,
    pub bytes: usize,
}

/// Graph statistics of a successful check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub files: usize,
    pub requirements: usize,
    pub edges: usize,
    /// Files that require nothing.
    pub leaves: usize,
    /// Root-relative paths of the files no other file requires.
    pub top_level: Vec<String>,
}

/// Collect and extract without ordering.
pub fn analyze(runtime: &dyn Runtime, config: &RunConfig) -> Result<Analysis, PipelineError> {
    let collection = FileCollector::new(runtime)
        .follow_links(config.follow_links)
        .exclude(config.output.clone())
        .collect(&config.root)?;

    let extraction = DependencyExtractor::new(runtime).extract(&collection)?;

    Ok(Analysis {
        collection,
        extraction,
    })
}

/// Run every stage and write the output file.
pub fn run(runtime: &dyn Runtime, config: &RunConfig) -> Result<RunReport, PipelineError> {
    let analysis = analyze(runtime, config)?;

    let order = analysis.order(config.mode, config.cycle_check)?;
    debug!(mode = ?config.mode, files = order.len(), "Files ordered");

    let output = resolve_output(runtime, analysis.root(), &config.output);
    let WriteSummary { path, bytes, .. } =
        OutputWriter::new(runtime).write(&output, &analysis.extraction.sources, &order)?;

    let files: Vec<String> = order
        .files(&analysis.collection.files)
        .map(|file| analysis.relative(file))
        .collect();

    info!(files = files.len(), mode = config.mode.label(), "Run complete");

    Ok(RunReport {
        root: analysis.collection.root,
        mode: config.mode,
        files,
        output: path,
        bytes,
    })
}

/// Validate requirements and sort topologically without writing anything.
pub fn check(runtime: &dyn Runtime, config: &RunConfig) -> Result<CheckSummary, PipelineError> {
    let analysis = analyze(runtime, config)?;
    let graph = analysis.graph()?;
    graph.sort(config.cycle_check)?;

    let top_level = (0..graph.len())
        .filter(|&index| graph.dependents(index).is_empty())
        .map(|index| analysis.relative(&analysis.collection.files[index]))
        .collect();

    Ok(CheckSummary {
        files: graph.len(),
        requirements: analysis.extraction.dependencies.requirement_count(),
        edges: graph.edge_count(),
        leaves: graph.leaves().len(),
        top_level,
    })
}
