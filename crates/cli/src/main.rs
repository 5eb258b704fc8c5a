use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use topembed::api::*;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod input;
mod provenance;
mod report;

use input::GraphArgs;
use report::{
    emit, face_views, projective_report, witness_edges, CrossingView, EmbeddingView, FacesReport,
    PlanarReport, Target, XnumberReport,
};

#[derive(Parser)]
#[command(name = "topembed")]
#[command(about = "Planarity, crossing number, and projective embeddings of small graphs")]
#[command(version = topembed::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Plane embedding or Kuratowski witness
    Planar {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Smallest crossing number up to --max-k, with a planar drawing
    Xnumber {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long, default_value_t = 2)]
        max_k: usize,
        /// Try every disjoint edge pair at the last level, not just witness pairs
        #[arg(long)]
        all_pairs: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Planar double cover search and the projected projective embedding
    Projective {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long, default_value_t = CoverCfg::default().seed)]
        seed: u64,
        #[arg(long)]
        max_crossed: Option<usize>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Facial walks of a plane or projective embedding
    Faces {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long, default_value_t = CoverCfg::default().seed)]
        seed: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Planar { graph, out } => planar(&graph, out),
        Action::Xnumber {
            graph,
            max_k,
            all_pairs,
            out,
        } => xnumber_cmd(&graph, max_k, all_pairs, out),
        Action::Projective {
            graph,
            seed,
            max_crossed,
            out,
        } => projective(&graph, CoverCfg { seed, max_crossed }, out),
        Action::Faces { graph, seed, out } => faces(&graph, seed, out),
        Action::Report => report(),
    }
}

fn planar(args: &GraphArgs, out: Option<PathBuf>) -> Result<()> {
    let input = args.label();
    let g = args.load()?;
    tracing::info!(input, n = g.num_vertices(), m = g.num_edges(), "planar");
    let report = match plane_embedding(&PathAddition, g) {
        Ok(eg) => PlanarReport {
            planar: true,
            embedding: Some(EmbeddingView::from(&eg)),
            witness: None,
        },
        Err(err) => PlanarReport {
            planar: false,
            embedding: None,
            witness: Some(witness_edges(&err.witness)),
        },
    };
    let target = Target {
        out: out.as_deref(),
        command: "planar",
        input: &input,
    };
    emit(&report, &target, json!({}))
}

fn xnumber_cmd(args: &GraphArgs, max_k: usize, all_pairs: bool, out: Option<PathBuf>) -> Result<()> {
    let input = args.label();
    let g = args.load()?;
    tracing::info!(input, max_k, all_pairs, "xnumber");
    let cfg = XCfg {
        use_witness_pairs: !all_pairs,
    };
    let drawing = crossing_number(&PathAddition, &g, max_k, cfg);
    let report = match &drawing {
        Some(d) => XnumberReport {
            max_k,
            crossing_number: Some(d.crossings.len()),
            crossings: d.crossings.iter().map(CrossingView::from).collect(),
            drawing: Some(EmbeddingView::from(&d.embedding)),
        },
        None => XnumberReport {
            max_k,
            crossing_number: None,
            crossings: Vec::new(),
            drawing: None,
        },
    };
    let target = Target {
        out: out.as_deref(),
        command: "xnumber",
        input: &input,
    };
    emit(&report, &target, json!({ "max_k": max_k, "all_pairs": all_pairs }))
}

fn projective(args: &GraphArgs, cfg: CoverCfg, out: Option<PathBuf>) -> Result<()> {
    let input = args.label();
    let g = args.load()?;
    tracing::info!(input, seed = cfg.seed, max_crossed = ?cfg.max_crossed, "projective");
    let report = projective_report(find_projective_embedding(&PathAddition, &g, cfg).as_ref());
    let target = Target {
        out: out.as_deref(),
        command: "projective",
        input: &input,
    };
    emit(
        &report,
        &target,
        json!({ "seed": cfg.seed, "max_crossed": cfg.max_crossed }),
    )
}

fn faces(args: &GraphArgs, seed: u64, out: Option<PathBuf>) -> Result<()> {
    let input = args.label();
    let g = args.load()?;
    tracing::info!(input, seed, "faces");
    let cfg = CoverCfg {
        seed,
        max_crossed: None,
    };
    let surface = classify(&PathAddition, &g, cfg);
    let (name, faces, witness) = match &surface {
        SurfaceEmbedding::Planar(eg) => ("planar", face_views(eg), Vec::new()),
        SurfaceEmbedding::ProjectivePlanar(eg) => ("projective", face_views(eg), Vec::new()),
        SurfaceEmbedding::Unknown(w) => ("unknown", Vec::new(), witness_edges(w)),
    };
    let report = FacesReport {
        surface: name,
        euler_genus: surface.euler_genus(),
        faces,
        witness,
    };
    let target = Target {
        out: out.as_deref(),
        command: "faces",
        input: &input,
    };
    emit(&report, &target, json!({ "seed": seed }))
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": topembed::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
