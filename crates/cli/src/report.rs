//! JSON views of engine results.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use topembed::api::{
    all_facial_walks, euler_genus, CrossingVertex, EmbeddedGraph, FacialWalk, KuratowskiWitness,
};

use crate::provenance::write_sidecar;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct EdgeView {
    pub id: usize,
    pub ends: [usize; 2],
    pub signal: i8,
}

#[derive(Serialize, Debug)]
pub struct EmbeddingView {
    pub vertices: usize,
    pub edges: Vec<EdgeView>,
    pub rotations: Vec<Vec<usize>>,
    pub euler_genus: usize,
}

impl From<&EmbeddedGraph> for EmbeddingView {
    fn from(eg: &EmbeddedGraph) -> Self {
        let g = eg.graph();
        Self {
            vertices: g.num_vertices(),
            edges: g
                .edges()
                .map(|e| {
                    let (u, v) = g.endpoints(e);
                    EdgeView {
                        id: e.0,
                        ends: [u.0, v.0],
                        signal: eg.signal(e).value(),
                    }
                })
                .collect(),
            rotations: g
                .vertices()
                .map(|v| eg.rotation(v).iter().map(|e| e.0).collect())
                .collect(),
            euler_genus: euler_genus(eg),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct StepView {
    pub edge: usize,
    pub from: usize,
    pub orientation: i8,
}

pub fn face_views(eg: &EmbeddedGraph) -> Vec<Vec<StepView>> {
    all_facial_walks(eg)
        .iter()
        .map(|walk: &FacialWalk| {
            walk.steps
                .iter()
                .map(|s| StepView {
                    edge: s.edge.0,
                    from: s.from.0,
                    orientation: s.orientation.value(),
                })
                .collect()
        })
        .collect()
}

#[derive(Serialize, Debug)]
pub struct CrossingView {
    pub vertex: usize,
    pub first: [usize; 2],
    pub second: [usize; 2],
}

impl From<&CrossingVertex> for CrossingView {
    fn from(c: &CrossingVertex) -> Self {
        Self {
            vertex: c.vertex.0,
            first: c.first.map(|e| e.0),
            second: c.second.map(|e| e.0),
        }
    }
}

pub fn witness_edges(w: &KuratowskiWitness) -> Vec<usize> {
    w.edges.iter().map(|e| e.0).collect()
}

#[derive(Serialize, Debug)]
pub struct PlanarReport {
    pub planar: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<EmbeddingView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness: Option<Vec<usize>>,
}

#[derive(Serialize, Debug)]
pub struct XnumberReport {
    pub max_k: usize,
    pub crossing_number: Option<usize>,
    pub crossings: Vec<CrossingView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawing: Option<EmbeddingView>,
}

#[derive(Serialize, Debug)]
pub struct ProjectiveReport {
    pub projective: bool,
    pub crossed: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<EmbeddingView>,
}

/// Verdict from a projected embedding; its negative edges are the crossed set.
pub fn projective_report(eg: Option<&EmbeddedGraph>) -> ProjectiveReport {
    match eg {
        Some(eg) => ProjectiveReport {
            projective: true,
            crossed: eg.negative_edges().iter().map(|e| e.0).collect(),
            embedding: Some(EmbeddingView::from(eg)),
        },
        None => ProjectiveReport {
            projective: false,
            crossed: Vec::new(),
            embedding: None,
        },
    }
}

#[derive(Serialize, Debug)]
pub struct FacesReport {
    pub surface: &'static str,
    pub euler_genus: Option<usize>,
    pub faces: Vec<Vec<StepView>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub witness: Vec<usize>,
}

/// Where and under which name a report goes.
pub struct Target<'a> {
    pub out: Option<&'a Path>,
    pub command: &'a str,
    pub input: &'a str,
}

/// Print `value` as JSON, or write it to `out` plus a provenance sidecar.
pub fn emit<T: Serialize>(value: &T, target: &Target<'_>, params: Value) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let Some(out) = target.out else {
        println!("{json}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
    let sidecar = write_sidecar(out, target.command, target.input, params)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "report written");
    Ok(())
}
