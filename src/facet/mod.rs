//! ASCII facet (STL) parsing.
//!
//! Reads `facet normal` / `vertex` / `endfacet` records into [`Triangle`]s
//! and tracks the vertical extent of the model while doing so. Malformed
//! facets are dropped and unreadable sources produce an empty mesh.

mod parser;
mod triangle;

pub use parser::{
    FacetParser, FacetSourceError, ParsedMesh, load_facets, parse_facets, parse_facets_str,
    try_load_facets,
};
pub use triangle::{HeightRange, Triangle};
