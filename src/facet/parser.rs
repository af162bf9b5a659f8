//! Line-oriented reader for ASCII facet files.

use std::io;
use std::path::{Path, PathBuf};

use bevy::log::{debug, info, warn};
use bevy::math::Vec3;
use thiserror::Error;

use super::triangle::{HeightRange, Triangle};

/// Errors that can occur when reading a facet source.
#[derive(Error, Debug)]
pub enum FacetSourceError {
    #[error("Facet file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read facet file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of parsing a facet source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedMesh {
    /// Well-formed triangles in source order.
    pub triangles: Vec<Triangle>,
    /// Height range over every vertex line, including those of dropped facets.
    pub height_range: HeightRange,
    /// Number of facets dropped for not having exactly three vertices.
    pub dropped_facets: usize,
}

impl ParsedMesh {
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Incremental facet parser.
///
/// Feed lines with [`push_line`](Self::push_line) and collect the result with
/// [`finish`](Self::finish). Unrecognized lines are ignored.
#[derive(Default)]
pub struct FacetParser {
    normal: Vec3,
    slots: [Vec3; 3],
    // Keeps counting past 3 so oversized facets are rejected too.
    vertex_count: usize,
    mesh: ParsedMesh,
}

impl FacetParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one line of input.
    pub fn push_line(&mut self, line: &str) {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("facet") if tokens.next() == Some("normal") => {
                self.normal = parse_vec3(tokens).unwrap_or(Vec3::ZERO);
                self.vertex_count = 0;
            }
            Some("vertex") => {
                let Some(vertex) = parse_vec3(tokens) else {
                    return;
                };
                if let Some(slot) = self.slots.get_mut(self.vertex_count) {
                    *slot = vertex;
                }
                self.vertex_count += 1;
                self.mesh.height_range.include(vertex.z);
            }
            Some("endfacet") => {
                if self.vertex_count == 3 {
                    self.mesh
                        .triangles
                        .push(Triangle::new(self.normal, self.slots));
                } else {
                    self.mesh.dropped_facets += 1;
                }
                self.vertex_count = 0;
            }
            _ => {}
        }
    }

    /// Number of triangles accepted so far.
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangles.len()
    }

    pub fn finish(self) -> ParsedMesh {
        self.mesh
    }
}

fn parse_vec3<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<Vec3> {
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    let z = tokens.next()?.parse().ok()?;
    Some(Vec3::new(x, y, z))
}

/// Parse facets from a sequence of lines.
pub fn parse_facets<'a>(lines: impl IntoIterator<Item = &'a str>) -> ParsedMesh {
    let mut parser = FacetParser::new();
    for line in lines {
        parser.push_line(line);
    }
    parser.finish()
}

/// Parse facets from an in-memory string.
pub fn parse_facets_str(source: &str) -> ParsedMesh {
    parse_facets(source.lines())
}

/// Read and parse a facet file.
///
/// Invalid UTF-8 is replaced rather than rejected, so a binary file yields
/// an empty mesh instead of an error.
pub fn try_load_facets(path: impl AsRef<Path>) -> Result<ParsedMesh, FacetSourceError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FacetSourceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => FacetSourceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mesh = parse_facets_str(&String::from_utf8_lossy(&bytes));

    info!(
        "Parsed {} facets from {} (height {:.2} to {:.2})",
        mesh.triangle_count(),
        path.display(),
        mesh.height_range.min,
        mesh.height_range.max,
    );
    if mesh.dropped_facets > 0 {
        debug!(
            "Dropped {} malformed facets from {}",
            mesh.dropped_facets,
            path.display()
        );
    }

    Ok(mesh)
}

/// Read and parse a facet file, yielding an empty mesh if it cannot be read.
pub fn load_facets(path: impl AsRef<Path>) -> ParsedMesh {
    try_load_facets(path).unwrap_or_else(|e| {
        warn!("{}; continuing with an empty mesh", e);
        ParsedMesh::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = "\
solid test
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid test
";

    #[test]
    fn test_single_facet() {
        let mesh = parse_facets_str(SINGLE);

        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles[0].normal, Vec3::Z);
        assert_eq!(mesh.triangles[0].vertices[1], Vec3::X);
        assert_eq!(mesh.height_range, HeightRange::new(0.0, 0.0));
        assert_eq!(mesh.dropped_facets, 0);
    }

    #[test]
    fn test_two_vertex_facet_dropped() {
        let source = "\
facet normal 0 0 1
vertex 0 0 0
vertex 1 0 0
endfacet
facet normal 1 0 0
vertex 0 0 0
vertex 0 1 0
vertex 0 1 5
endfacet
";
        let mesh = parse_facets_str(source);

        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles[0].normal, Vec3::X);
        assert_eq!(mesh.dropped_facets, 1);
    }

    #[test]
    fn test_four_vertex_facet_dropped() {
        let source = "\
facet normal 0 0 1
vertex 0 0 0
vertex 1 0 0
vertex 0 1 0
vertex 1 1 0
endfacet
";
        let mesh = parse_facets_str(source);
        assert!(mesh.is_empty());
        assert_eq!(mesh.dropped_facets, 1);
    }

    #[test]
    fn test_dropped_vertices_still_widen_range() {
        let source = "\
facet normal 0 0 1
vertex 0 0 -2
endfacet
";
        let mesh = parse_facets_str(source);
        assert!(mesh.is_empty());
        assert_eq!(mesh.height_range, HeightRange::new(-2.0, -2.0));
    }

    #[test]
    fn test_repeated_endfacet_emits_once() {
        let source = format!("{}endfacet\n", SINGLE);
        let mesh = parse_facets_str(&source);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_unparsable_vertex_skipped() {
        let source = "\
facet normal 0 0 1
vertex 0 0 0
vertex 1 0 oops
vertex 1 0 0
vertex 0 1 0
endfacet
";
        let mesh = parse_facets_str(source);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles[0].vertices[1], Vec3::X);
    }

    #[test]
    fn test_unparsable_normal_resets_to_zero() {
        let source = "\
facet normal a b c
vertex 0 0 0
vertex 1 0 0
vertex 0 1 0
endfacet
";
        let mesh = parse_facets_str(source);
        assert_eq!(mesh.triangles[0].normal, Vec3::ZERO);
    }

    #[test]
    fn test_scientific_notation() {
        let source = "\
facet normal 0.000000e+00 0.000000e+00 1.000000e+00
vertex 1.5e+01 0 2.5e-01
vertex 0 0 0
vertex 0 1 0
endfacet
";
        let mesh = parse_facets_str(source);
        assert_eq!(mesh.triangles[0].vertices[0], Vec3::new(15.0, 0.0, 0.25));
    }

    #[test]
    fn test_empty_input() {
        let mesh = parse_facets_str("");
        assert!(mesh.is_empty());
        assert!(mesh.height_range.is_empty());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let mesh = load_facets("definitely/not/a/real/file.stl");
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_missing_file_error_kind() {
        let result = try_load_facets("definitely/not/a/real/file.stl");
        assert!(matches!(result, Err(FacetSourceError::NotFound { .. })));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join("bevy_facade_parser_test.stl");
        std::fs::write(&path, SINGLE).unwrap();

        let mesh = try_load_facets(&path).unwrap();
        assert_eq!(mesh.triangle_count(), 1);

        std::fs::remove_file(&path).ok();
    }
}
