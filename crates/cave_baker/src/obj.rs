//! Wavefront OBJ export.
//!
//! Positions only; face indices are 1-based as the format requires.

use anyhow::{Context, Result};
use cave_mesh::MeshOutput;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `mesh` as a single named OBJ object.
pub fn write_obj<W: Write>(mut out: W, name: &str, mesh: &MeshOutput) -> std::io::Result<()> {
	writeln!(out, "o {name}")?;
	for [x, y, z] in &mesh.vertices {
		writeln!(out, "v {x} {y} {z}")?;
	}
	for [a, b, c] in mesh.triangles() {
		writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
	}
	out.flush()
}

/// Create `path` and write `mesh` into it.
pub fn save_obj(path: &Path, name: &str, mesh: &MeshOutput) -> Result<()> {
	let file = File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
	write_obj(BufWriter::new(file), name, mesh)
		.with_context(|| format!("Failed to write: {}", path.display()))
}
