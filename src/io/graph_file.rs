//! Graph and coefficient tables.
//!
//! # Graph files
//!
//! One row per DOF in ascending global-ID order:
//!
//! ```text
//! <gid> [<label>] <onAxis> <theta> <r> <n1> ... <nN>
//! ```
//!
//! The label column (1 = srp, 2 = stp) only appears in the merged `sp` table.
//! Theta (rad) and r (km) are printed with 20 decimals.
//!
//! # Coefficient files
//!
//! ```text
//! <gid> <c1> ... <cN>
//! ```
//!
//! with one decimal per coefficient.

use std::fs;
use std::io::Write;
use std::path::Path;

use super::MeshIoError;
use crate::mesh::{CoeffTable, DofKind, DofTable, MeshError, StencilGraph};
use crate::types::PolarPoint;

/// Write one graph table. `table` supplies coordinates, flags and labels.
pub fn write_graph<W: Write, const N: usize>(
    w: &mut W,
    table: &DofTable,
    graph: &StencilGraph<N>,
) -> Result<(), MeshIoError> {
    if table.len() != graph.len() {
        return Err(MeshError::invariant(format!(
            "{} table has {} entries but the graph has {} rows",
            table.pool(),
            table.len(),
            graph.len()
        ))
        .into());
    }

    for ((gid, entry), (_, neighbors)) in table.iter().zip(graph.iter()) {
        write!(w, "{}", gid)?;
        if table.has_labels() {
            write!(w, " {}", entry.label())?;
        }
        write!(
            w,
            " {} {:.20} {:.20}",
            u8::from(entry.on_axis),
            entry.point.theta,
            entry.point.r
        )?;
        for n in neighbors {
            write!(w, " {}", n)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Write one coefficient table.
pub fn write_coeffs<W: Write, const N: usize>(
    w: &mut W,
    coeffs: &CoeffTable<N>,
) -> Result<(), MeshIoError> {
    for (gid, row) in coeffs.iter() {
        write!(w, "{}", gid)?;
        for &c in row {
            // never print -0.0
            let c = if c == 0.0 { 0.0 } else { c };
            write!(w, " {:.1}", c)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// One parsed row of a graph file.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphRow {
    pub gid: usize,
    /// Stress kind from the label column, if the file has one
    pub label: Option<DofKind>,
    pub on_axis: bool,
    pub point: PolarPoint,
    pub neighbors: Vec<usize>,
}

/// Read a graph file with `num_neighbors` neighbour columns.
pub fn read_graph_file(
    path: &Path,
    with_labels: bool,
    num_neighbors: usize,
) -> Result<Vec<GraphRow>, MeshIoError> {
    let content = fs::read_to_string(path)?;
    parse_graph(&content, with_labels, num_neighbors)
}

/// Parse graph rows from a string.
///
/// Every row must have exactly the expected number of columns and rows must
/// be numbered `0, 1, 2, ...` in order.
pub fn parse_graph(
    content: &str,
    with_labels: bool,
    num_neighbors: usize,
) -> Result<Vec<GraphRow>, MeshIoError> {
    let expected = 4 + usize::from(with_labels) + num_neighbors;
    let mut rows = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_no = line_num + 1;
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != expected {
            return Err(MeshIoError::parse(
                line_no,
                format!("expected {} columns, found {}", expected, parts.len()),
            ));
        }

        let gid = parse_gid(parts[0], rows.len(), line_no)?;
        let mut col = 1;

        let label = if with_labels {
            let kind = parts[col]
                .parse::<u8>()
                .ok()
                .and_then(DofKind::from_label)
                .ok_or_else(|| {
                    MeshIoError::parse(line_no, format!("invalid label: {}", parts[col]))
                })?;
            col += 1;
            Some(kind)
        } else {
            None
        };

        let on_axis = match parts[col] {
            "0" => false,
            "1" => true,
            other => {
                let message = format!("invalid on-axis flag: {}", other);
                return Err(MeshIoError::parse(line_no, message));
            }
        };
        let theta = parse_f64(parts[col + 1], "theta", line_no)?;
        let r = parse_f64(parts[col + 2], "radius", line_no)?;

        let neighbors = parts[col + 3..]
            .iter()
            .map(|s| {
                s.parse::<usize>().map_err(|_| {
                    MeshIoError::parse(line_no, format!("invalid neighbour id: {}", s))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(GraphRow {
            gid,
            label,
            on_axis,
            point: PolarPoint::new(theta, r),
            neighbors,
        });
    }

    Ok(rows)
}

/// Read a coefficient file with `num_coeffs` columns, indexed by gid.
pub fn read_coeff_file(path: &Path, num_coeffs: usize) -> Result<Vec<Vec<f64>>, MeshIoError> {
    let content = fs::read_to_string(path)?;
    parse_coeffs(&content, num_coeffs)
}

/// Parse coefficient rows from a string.
pub fn parse_coeffs(content: &str, num_coeffs: usize) -> Result<Vec<Vec<f64>>, MeshIoError> {
    let mut rows = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_no = line_num + 1;
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != num_coeffs + 1 {
            return Err(MeshIoError::parse(
                line_no,
                format!("expected {} columns, found {}", num_coeffs + 1, parts.len()),
            ));
        }
        parse_gid(parts[0], rows.len(), line_no)?;

        let coeffs = parts[1..]
            .iter()
            .map(|s| parse_f64(s, "coefficient", line_no))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(coeffs);
    }

    Ok(rows)
}

fn parse_gid(s: &str, expected: usize, line_no: usize) -> Result<usize, MeshIoError> {
    let gid = s
        .parse::<usize>()
        .map_err(|_| MeshIoError::parse(line_no, format!("invalid gid: {}", s)))?;
    if gid != expected {
        return Err(MeshIoError::parse(
            line_no,
            format!("expected gid {}, found {}", expected, gid),
        ));
    }
    Ok(gid)
}

fn parse_f64(s: &str, what: &str, line_no: usize) -> Result<f64, MeshIoError> {
    s.parse::<f64>()
        .map_err(|_| MeshIoError::parse(line_no, format!("invalid {}: {}", what, s)))
}
