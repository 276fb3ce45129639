//! Batch evaluation of shape records read from JSON.
//!
//! Input: a JSON array of records, e.g.
//! `[{"kind": "circle", "radius": 5}, {"kind": "triangle", "sides": [3, 4, 5]}]`.
//! Output: one row per record, carrying either the area or the rejection
//! message. A bad record never aborts the batch.

use anyhow::{anyhow, bail, Context, Result};
use planar::{area_of, Circle, GeomCfg, GeometryError, Shape, Triangle};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::provenance::{write_sidecar, Payload};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ShapeRecord {
    pub kind: String,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub sides: Option<[f64; 3]>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AreaRow {
    pub index: usize,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_right: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub ok: usize,
    pub rejected: usize,
}

/// Build the shape a record describes. Unknown kinds are `UnsupportedType`.
fn build(record: &ShapeRecord) -> Result<Box<dyn Shape>> {
    match record.kind.as_str() {
        "circle" => {
            let r = record
                .radius
                .ok_or_else(|| anyhow!("circle record needs `radius`"))?;
            Ok(Box::new(Circle::new(r)?))
        }
        "triangle" => {
            let [a, b, c] = record
                .sides
                .ok_or_else(|| anyhow!("triangle record needs `sides`"))?;
            Ok(Box::new(Triangle::new(a, b, c)?))
        }
        other => Err(GeometryError::unsupported(other).into()),
    }
}

fn right_angle(record: &ShapeRecord, cfg: GeomCfg) -> Option<bool> {
    let [a, b, c] = record.sides?;
    Triangle::new(a, b, c).ok().map(|t| t.is_right_cfg(cfg))
}

pub fn evaluate(records: &[ShapeRecord], cfg: GeomCfg) -> (Vec<AreaRow>, Summary) {
    let mut summary = Summary::default();
    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let computed = build(record).and_then(|shape| area_of(&shape).map_err(Into::into));
            let mut row = AreaRow {
                index,
                kind: record.kind.clone(),
                area: None,
                is_right: None,
                error: None,
            };
            match computed {
                Ok(area) => {
                    summary.ok += 1;
                    row.area = Some(area);
                    if record.kind == "triangle" {
                        row.is_right = right_angle(record, cfg);
                    }
                }
                Err(err) => {
                    summary.rejected += 1;
                    tracing::warn!(index, kind = %record.kind, error = %err, "record rejected");
                    row.error = Some(err.to_string());
                }
            }
            row
        })
        .collect();
    (rows, summary)
}

/// Read records from `input`, write rows to `out` plus a provenance sidecar.
pub fn run(input: &Path, out: &Path, cfg: GeomCfg) -> Result<Summary> {
    let raw = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let records: Vec<ShapeRecord> = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing shape records from {}", input.display()))?;
    if records.is_empty() {
        bail!("{} contains no shape records", input.display());
    }
    let (rows, summary) = evaluate(&records, cfg);
    tracing::info!(
        records = records.len(),
        ok = summary.ok,
        rejected = summary.rejected,
        "batch evaluated"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(json!({
        "input": input.to_string_lossy(),
        "right_rel_tol": cfg.right_rel_tol,
    }))
    .with_counts(json!({"ok": summary.ok, "rejected": summary.rejected}));
    let prov = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "batch written");
    Ok(summary)
}
