use clap::ValueEnum;
use reqsort_graph::CycleCheck;
use serde::{Deserialize, Serialize};

/// How the collected files are ordered
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Lexicographic by root-relative path
    ///
    /// Requirements are still validated but do not affect the order.
    #[value(name = "name")]
    Name,

    /// Every file after the files it requires
    ///
    /// Fails when the requirements form a cycle.
    #[default]
    #[value(name = "topology")]
    Topology,
}

impl SortMode {
    /// Upper-case label used in the order header.
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Name => "NAME",
            SortMode::Topology => "TOPOLOGY",
        }
    }
}

/// Which back-edges the topological sort reports as cycles
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum CycleCheckArg {
    /// Any edge back into the current descent path
    #[value(name = "strict")]
    Strict,

    /// Only edges back to the file the descent started from
    ///
    /// Cycles that do not pass through that file go unreported and the
    /// resulting order may break them.
    #[value(name = "origin")]
    Origin,
}

impl From<CycleCheckArg> for CycleCheck {
    fn from(arg: CycleCheckArg) -> Self {
        match arg {
            CycleCheckArg::Strict => CycleCheck::Strict,
            CycleCheckArg::Origin => CycleCheck::Origin,
        }
    }
}

/// Output format of `reqsort graph`
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum GraphFormat {
    /// Graphviz DOT
    #[default]
    #[value(name = "dot")]
    Dot,

    /// `{ "files": [...], "edges": [[from, to], ...] }`
    #[value(name = "json")]
    Json,
}
