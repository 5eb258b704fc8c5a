//! Graph input: named families or a JSON edge list.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use topembed::api::{families, Graph};

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct GraphArgs {
    /// Named family: kN, kP,Q, cN, mN (Möbius ladder on 2N vertices), wagner, petersen
    #[arg(long)]
    pub family: Option<String>,
    /// JSON file `{"vertices": n, "edges": [[u, v], ...]}`
    #[arg(long)]
    pub edges: Option<PathBuf>,
}

impl GraphArgs {
    /// Label for logs and provenance.
    pub fn label(&self) -> String {
        match (&self.family, &self.edges) {
            (Some(f), _) => f.clone(),
            (None, Some(p)) => p.display().to_string(),
            (None, None) => String::from("-"),
        }
    }

    pub fn load(&self) -> Result<Graph> {
        match (&self.family, &self.edges) {
            (Some(name), _) => parse_family(name),
            (None, Some(path)) => {
                let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
                let list: EdgeList = serde_json::from_slice(&raw)
                    .with_context(|| format!("parsing edge list {}", path.display()))?;
                list.into_graph()
            }
            (None, None) => bail!("either --family or --edges is required"),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct EdgeList {
    pub vertices: usize,
    pub edges: Vec<(usize, usize)>,
}

impl EdgeList {
    pub fn into_graph(self) -> Result<Graph> {
        Ok(Graph::from_edges(self.vertices, &self.edges)?)
    }
}

fn number(s: &str, name: &str) -> Result<usize> {
    s.parse()
        .with_context(|| format!("bad size {s:?} in family {name:?}"))
}

/// `k5`, `k3,3`, `c7`, `m4`, `wagner`, `petersen` (case-insensitive).
pub fn parse_family(name: &str) -> Result<Graph> {
    let lower = name.trim().to_ascii_lowercase();
    let g = match lower.as_str() {
        "petersen" => families::petersen(),
        "wagner" | "v8" => families::wagner(),
        _ => {
            let (kind, rest) = lower.split_at(lower.chars().next().map_or(0, char::len_utf8));
            match (kind, rest.split_once(',')) {
                ("k", Some((p, q))) => {
                    families::complete_bipartite(number(p, name)?, number(q, name)?)
                }
                ("k", None) => families::complete(number(rest, name)?),
                ("c", None) => {
                    let n = number(rest, name)?;
                    if n < 3 {
                        bail!("cycle needs at least 3 vertices, got {n}");
                    }
                    families::cycle(n)
                }
                ("m", None) => {
                    let n = number(rest, name)?;
                    if n < 2 {
                        bail!("Möbius ladder needs n >= 2, got {n}");
                    }
                    families::mobius_ladder(n)
                }
                _ => bail!("unknown graph family {name:?}"),
            }
        }
    };
    Ok(g)
}
