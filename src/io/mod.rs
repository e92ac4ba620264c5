//! Text files consumed by the wave-propagation solver.
//!
//! A generated mesh is written as a set of whitespace-delimited tables into
//! one directory, conventionally named `mesh<nr>x<nth>`:
//!
//! | grouping | files |
//! |---|---|
//! | both | `mesh_info.dat` |
//! | two-group | `graph_vp.dat`, `coeff_vp.dat`, `graph_sp.dat` |
//! | three-group | `graph_vpsrp.dat`, `graph_vpstp.dat`, `coeff_vpsrp.dat`, `coeff_vpstp.dat`, `graph_srp.dat`, `graph_stp.dat` |
//!
//! Files are overwritten on every run and are byte-identical for identical
//! inputs. See [`graph_file`] and [`mesh_info`] for the row layouts.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use shaw_mesh::config::MeshConfig;
//! use shaw_mesh::io::{mesh_directory, write_mesh_files};
//! use shaw_mesh::mesh::PolarMesh;
//!
//! let config = MeshConfig::default().with_resolution(361, 101);
//! let mesh = PolarMesh::generate(&config)?;
//! let dir = mesh_directory(Path::new("."), config.resolution)?;
//! write_mesh_files(&mesh, &dir)?;
//! # Ok::<(), shaw_mesh::io::MeshIoError>(())
//! ```

pub mod graph_file;
pub mod mesh_info;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::mesh::{DofPool, MeshError, MeshGraphs, PolarMesh};
use crate::types::PolarResolution;

pub use graph_file::{
    GraphRow, parse_coeffs, parse_graph, read_coeff_file, read_graph_file, write_coeffs,
    write_graph,
};
pub use mesh_info::{MeshInfo, parse_mesh_info, read_mesh_info};

/// Name of the metadata file.
pub const MESH_INFO_FILE: &str = "mesh_info.dat";

/// Error type for mesh file operations.
#[derive(Debug, Error)]
pub enum MeshIoError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed row
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Required key absent from `mesh_info.dat`
    #[error("Missing key in mesh info: {0}")]
    MissingKey(String),

    /// The mesh itself is invalid or inconsistent
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl MeshIoError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// File name of the graph table `graph_<name>.dat`.
pub fn graph_file_name(name: &str) -> String {
    format!("graph_{}.dat", name)
}

/// File name of the coefficient table `coeff_<name>.dat`.
pub fn coeff_file_name(name: &str) -> String {
    format!("coeff_{}.dat", name)
}

/// `<parent>/mesh<nr>x<nth>`, created if missing.
pub fn mesh_directory(parent: &Path, resolution: PolarResolution) -> Result<PathBuf, MeshIoError> {
    let dir = parent.join(format!("mesh{}x{}", resolution.n_r(), resolution.n_theta()));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Create `dir/name`, fill it through `fill`, and record its path.
fn write_file<F>(
    dir: &Path,
    name: &str,
    written: &mut Vec<PathBuf>,
    fill: F,
) -> Result<(), MeshIoError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), MeshIoError>,
{
    let path = dir.join(name);
    let mut writer = BufWriter::new(File::create(&path)?);
    fill(&mut writer)?;
    writer.flush()?;
    written.push(path);
    Ok(())
}

/// Write every file of `mesh` into `dir`, which is created if missing.
///
/// Returns the written paths in write order.
pub fn write_mesh_files(mesh: &PolarMesh, dir: &Path) -> Result<Vec<PathBuf>, MeshIoError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let mesh_info = MeshInfo::from_mesh(mesh);
    write_file(dir, MESH_INFO_FILE, &mut written, |w| mesh_info.write(w))?;

    let table = |pool: DofPool| {
        mesh.dof_table(pool).ok_or_else(|| {
            MeshError::invariant(format!("{} mesh has no {} table", mesh.grouping(), pool))
        })
    };

    match mesh.graphs() {
        MeshGraphs::TwoGroups(g) => {
            let vp = table(DofPool::Vp)?;
            let sp = table(DofPool::Sp)?;
            write_file(dir, &graph_file_name("vp"), &mut written, |w| {
                write_graph(w, vp, &g.vp)
            })?;
            write_file(dir, &coeff_file_name("vp"), &mut written, |w| {
                write_coeffs(w, &g.vp_coeffs)
            })?;
            write_file(dir, &graph_file_name("sp"), &mut written, |w| {
                write_graph(w, sp, &g.sp)
            })?;
        }
        MeshGraphs::ThreeGroups(g) => {
            let vp = table(DofPool::Vp)?;
            let srp = table(DofPool::Srp)?;
            let stp = table(DofPool::Stp)?;
            write_file(dir, &graph_file_name("vpsrp"), &mut written, |w| {
                write_graph(w, vp, &g.vp_srp)
            })?;
            write_file(dir, &graph_file_name("vpstp"), &mut written, |w| {
                write_graph(w, vp, &g.vp_stp)
            })?;
            write_file(dir, &coeff_file_name("vpsrp"), &mut written, |w| {
                write_coeffs(w, &g.vp_srp_coeffs)
            })?;
            write_file(dir, &coeff_file_name("vpstp"), &mut written, |w| {
                write_coeffs(w, &g.vp_stp_coeffs)
            })?;
            write_file(dir, &graph_file_name("srp"), &mut written, |w| {
                write_graph(w, srp, &g.srp)
            })?;
            write_file(dir, &graph_file_name("stp"), &mut written, |w| {
                write_graph(w, stp, &g.stp)
            })?;
        }
    }

    info!("Wrote {} mesh files to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeshConfig;
    use crate::mesh::VarGrouping;
    use tempfile::tempdir;

    #[test]
    fn test_mesh_directory_name() {
        let tmp = tempdir().unwrap();
        let dir = mesh_directory(tmp.path(), PolarResolution::new(4, 3)).unwrap();
        assert!(dir.ends_with("mesh3x4"));
        assert!(dir.is_dir());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(graph_file_name("vpsrp"), "graph_vpsrp.dat");
        assert_eq!(coeff_file_name("vp"), "coeff_vp.dat");
    }

    #[test]
    fn test_write_two_group_files() {
        let tmp = tempdir().unwrap();
        let mesh = PolarMesh::generate(&MeshConfig::default().with_resolution(4, 3)).unwrap();
        let written = write_mesh_files(&mesh, tmp.path()).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "mesh_info.dat",
                "graph_vp.dat",
                "coeff_vp.dat",
                "graph_sp.dat",
            ]
        );
    }

    #[test]
    fn test_write_three_group_files() {
        let tmp = tempdir().unwrap();
        let config = MeshConfig::default()
            .with_resolution(4, 3)
            .with_grouping(VarGrouping::ThreeGroups);
        let mesh = PolarMesh::generate(&config).unwrap();
        let written = write_mesh_files(&mesh, tmp.path()).unwrap();
        assert_eq!(written.len(), 7);
        assert!(tmp.path().join("graph_vpstp.dat").is_file());
        assert!(!tmp.path().join("graph_vp.dat").exists());
    }
}
