use anyhow::Result;
use clap::{Parser, Subcommand};
use planar::cfg::RIGHT_REL_TOL;
use planar::{area, Circle, GeomCfg, Shape, Triangle};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod batch;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Areas of circles and triangles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the reference areas (circle r=5, triangle 3-4-5)
    Demo,
    /// Compute the area of a single shape
    Area {
        #[command(subcommand)]
        shape: ShapeArg,
        /// Print a JSON record instead of plain text
        #[arg(long, global = true)]
        json: bool,
    },
    /// Check whether a triangle is right-angled
    Right {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
        #[arg(long, default_value_t = RIGHT_REL_TOL)]
        rel_tol: f64,
    },
    /// Evaluate a JSON array of shape records; writes rows plus a provenance sidecar
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = RIGHT_REL_TOL)]
        rel_tol: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ShapeArg {
    Circle {
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },
    Triangle {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo(),
        Action::Area { shape, json } => area_cmd(shape, json),
        Action::Right { a, b, c, rel_tol } => right(a, b, c, rel_tol),
        Action::Batch {
            input,
            out,
            rel_tol,
        } => {
            let cfg = GeomCfg {
                right_rel_tol: rel_tol,
            };
            batch::run(&input, &out, cfg).map(|_| ())
        }
        Action::Report => report(),
    }
}

fn demo() -> Result<()> {
    let circle = Circle::new(5.0)?;
    let tri = Triangle::new(3.0, 4.0, 5.0)?;
    println!("Circle r=5 area: {}", area(&circle));
    println!("Triangle 3-4-5 area: {}", area(&tri));
    println!("Is 3-4-5 right-angled? {}", tri.is_right());
    Ok(())
}

fn build(shape: &ShapeArg) -> Result<Box<dyn Shape>> {
    let built: Box<dyn Shape> = match *shape {
        ShapeArg::Circle { radius } => Box::new(Circle::new(radius)?),
        ShapeArg::Triangle { a, b, c } => Box::new(Triangle::new(a, b, c)?),
    };
    Ok(built)
}

fn area_cmd(shape: ShapeArg, json: bool) -> Result<()> {
    let built = build(&shape)?;
    let value = area(&built);
    tracing::info!(kind = built.kind(), area = value, "area");
    if json {
        let obj = serde_json::json!({ "kind": built.kind(), "area": value });
        println!("{}", serde_json::to_string(&obj)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

fn right(a: f64, b: f64, c: f64, rel_tol: f64) -> Result<()> {
    let tri = Triangle::new(a, b, c)?;
    let is_right = tri.is_right_with(rel_tol);
    tracing::info!(%tri, rel_tol, is_right, "right");
    println!("{is_right}");
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::header();
    obj["default_right_rel_tol"] = serde_json::json!(RIGHT_REL_TOL);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
