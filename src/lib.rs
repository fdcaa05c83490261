//! Parser for CodeWalker drawable-dictionary XML exports
//!
//! Turns the text of a `.ydd.xml` export into render-ready geometry data:
//! contiguous per-attribute buffers (positions, normals, tangents, UV
//! channels), a flat index list, and shader/texture metadata.
//!
//! The parse is a pure transformation of one UTF-8 string into one
//! [`Drawable`] value; reading files and rendering the result are the
//! caller's business.
//!
//! ```no_run
//! let xml = std::fs::read_to_string("prop_bench_01.ydd.xml").unwrap();
//! let drawable = codewalker_drawable::parse_drawable(&xml).unwrap();
//! for geometry in &drawable.geometries {
//!     println!("{} vertices", geometry.vertices.len() / 3);
//! }
//! ```

pub mod drawable;
pub mod error;
pub mod parse_xml;

pub use drawable::{
    parse_drawable, parse_drawable_with_quality, Drawable, GeometryItem, LayoutOffsets,
    ModelQuality, Shader, ShaderGroup, ShaderParameters, TextureDictionaryItem, VertexAttribute,
};
pub use error::DrawableError;
pub use parse_xml::{parse_xml_str, XmlNode};
