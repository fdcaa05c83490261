//! Drawable extraction from CodeWalker XML exports
//!
//! This module turns a parsed document tree into the final [`Drawable`]
//! value: document-level checks first, then per-geometry decoding, then the
//! shader group.
//!
//! # Submodules
//! - `types` - Output data model
//! - `layout` - Vertex layout offset computation
//! - `vertices` - Vertex record decoding and attribute scattering
//! - `indices` - Index buffer decoding
//! - `shaders` - Shader group and texture dictionary extraction

pub mod indices;
pub mod layout;
pub mod shaders;
pub mod types;
pub mod vertices;

use crate::error::DrawableError;
use crate::parse_xml::{parse_xml_str, XmlNode};
use log::debug;
use rayon::prelude::*;

pub use layout::{LayoutOffsets, VertexAttribute};
pub use types::{
    Drawable, GeometryItem, ModelQuality, Shader, ShaderGroup, ShaderParameters,
    TextureDictionaryItem,
};

/// Candidate tag names for raw buffer text, tried in order. Which one the
/// exporter writes depends on its settings; the first present one wins.
const DATA_NODE_CANDIDATES: [&str; 2] = ["Data", "Data2"];

/// Parses a CodeWalker drawable-dictionary XML export at the high
/// model-quality tier.
pub fn parse_drawable(xml: &str) -> Result<Drawable, DrawableError> {
    parse_drawable_with_quality(xml, ModelQuality::High)
}

/// Parses a CodeWalker drawable-dictionary XML export at the given
/// model-quality tier.
///
/// Document-level requirements are checked before any geometry is decoded,
/// so a structurally invalid export is rejected without buffer allocation.
/// Any error aborts the parse; no partial [`Drawable`] is returned.
pub fn parse_drawable_with_quality(
    xml: &str,
    quality: ModelQuality,
) -> Result<Drawable, DrawableError> {
    let root = parse_xml_str(xml)?;

    let name = drawable_name(&root)?;
    let model_items = drawable_model_items(&root, quality)?;

    if root.descendant("ShaderGroup").is_none() {
        return Err(DrawableError::NoShaderGroup);
    }
    if model_items.is_empty() {
        return Err(DrawableError::NoDrawableModels);
    }

    let geometries = parse_geometries(&root)?;
    let shader_group = shaders::parse_shader_group(&root)?;

    debug!(
        "parsed drawable '{}': {} geometries, {} shaders",
        name,
        geometries.len(),
        shader_group.shaders.len()
    );

    Ok(Drawable {
        name,
        geometries,
        shader_group,
    })
}

/// Name of the first drawable entry in the dictionary.
fn drawable_name(root: &XmlNode) -> Result<String, DrawableError> {
    let item = root.descendant("Item").ok_or(DrawableError::MissingName)?;
    let name = item.descendant("Name").ok_or(DrawableError::MissingName)?;
    Ok(name.text_content.trim().to_string())
}

/// Drawable-model items of the container for the requested quality tier.
fn drawable_model_items<'a>(
    root: &'a XmlNode,
    quality: ModelQuality,
) -> Result<Vec<&'a XmlNode>, DrawableError> {
    let tag = quality
        .models_tag()
        .ok_or(DrawableError::UnsupportedQuality(quality))?;

    let models = root
        .descendant(tag)
        .ok_or(DrawableError::NoDrawableModels)?;

    Ok(models.descendants("Item"))
}

/// Decodes every geometry item under the first Geometries element.
///
/// Items only read their own subtree and write their own buffers, so they
/// decode in parallel; the first error wins and aborts the parse.
fn parse_geometries(root: &XmlNode) -> Result<Vec<GeometryItem>, DrawableError> {
    let container = root
        .descendant("Geometries")
        .ok_or(DrawableError::GeometriesNotFound)?;

    container
        .descendants("Item")
        .into_par_iter()
        .map(parse_geometry_item)
        .collect()
}

fn parse_geometry_item(geometry: &XmlNode) -> Result<GeometryItem, DrawableError> {
    let shader_index = geometry
        .descendant("ShaderIndex")
        .and_then(|n| n.text_content.trim().parse::<u32>().ok())
        .unwrap_or(0);

    let offsets = layout::parse_layout_offsets(geometry)?;
    if offsets.position.is_none() || offsets.tex_coords[0].is_none() {
        return Err(DrawableError::RequiredAttributeMissing);
    }

    let records = vertices::decode_vertex_records(geometry)?;
    let indices = indices::decode_indices(geometry)?;

    Ok(vertices::scatter_attributes(
        &records,
        &offsets,
        shader_index,
        indices,
    ))
}

/// Raw buffer text node under a VertexBuffer or IndexBuffer element, using
/// the exporter's two alternate locations.
pub(crate) fn buffer_data_node(buffer: &XmlNode) -> Option<&XmlNode> {
    DATA_NODE_CANDIDATES
        .iter()
        .find_map(|candidate| buffer.child(candidate))
}
