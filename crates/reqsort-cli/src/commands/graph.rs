//! Graph command implementation.

use std::path::Path;

use petgraph::dot::{Config, Dot};
use reqsort_graph::DependencyGraph;
use reqsort_scan::NativeRuntime;
use serde_json::json;

use crate::cli::{GraphArgs, GraphFormat};
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::pipeline::{self, RunConfig};

/// Execute the graph command.
///
/// Prints the requirement graph on stdout. An edge `a -> b` means `a`
/// requires `b`. Cycles are not an error here: the graph is printed as is.
pub fn execute(args: GraphArgs) -> Result<()> {
    let config = utils::load_config(&args.source, None)?;
    let run_config = RunConfig::from(&config);

    let analysis = pipeline::analyze(&NativeRuntime, &run_config)
        .map_err(|err| utils::report_failure(&err, &config.root))?;
    let graph = analysis
        .graph()
        .map_err(|err| utils::report_failure(&err.into(), analysis.root()))?;

    let rendered = match args.format {
        GraphFormat::Dot => render_dot(&graph, analysis.root()),
        GraphFormat::Json => serde_json::to_string_pretty(&render_json(&graph, analysis.root()))
            .context("Failed to encode graph")?,
    };
    println!("{rendered}");
    Ok(())
}

/// Render the graph in Graphviz DOT, labelling nodes with root-relative paths.
pub fn render_dot(graph: &DependencyGraph<'_>, root: &Path) -> String {
    let labelled = graph
        .to_petgraph()
        .map(|_, file| file.relative_to(root), |_, _| "");
    format!("{}", Dot::with_config(&labelled, &[Config::EdgeNoLabel]))
}

/// Render the graph as `{ "files": [...], "edges": [[from, to], ...] }`.
pub fn render_json(graph: &DependencyGraph<'_>, root: &Path) -> serde_json::Value {
    let files: Vec<String> = graph
        .files()
        .iter()
        .map(|file| file.relative_to(root))
        .collect();

    let mut edges = Vec::with_capacity(graph.edge_count());
    for from in 0..graph.len() {
        for to in graph.dependencies(from) {
            edges.push([files[from].as_str(), files[to].as_str()]);
        }
    }

    json!({ "files": files, "edges": edges })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqsort_graph::{DependencyMap, FileId, FileSet};

    fn fixture() -> (FileSet, DependencyMap) {
        let a = FileId::new("/p/a.txt").unwrap();
        let z = FileId::new("/p/z.txt").unwrap();
        let files = FileSet::new([a.clone(), z.clone()]).unwrap();
        let mut deps = DependencyMap::new();
        deps.push(a, z);
        (files, deps)
    }

    #[test]
    fn test_render_json() {
        let (files, deps) = fixture();
        let graph = DependencyGraph::build(&files, &deps).unwrap();
        let value = render_json(&graph, Path::new("/p"));

        assert_eq!(value["files"], json!(["a.txt", "z.txt"]));
        assert_eq!(value["edges"], json!([["a.txt", "z.txt"]]));
    }

    #[test]
    fn test_render_dot_labels_relative_paths() {
        let (files, deps) = fixture();
        let graph = DependencyGraph::build(&files, &deps).unwrap();
        let dot = render_dot(&graph, Path::new("/p"));

        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("\"a.txt\""));
        assert!(dot.contains("\"z.txt\""));
        assert!(dot.contains("0 -> 1"));
    }
}
