//! Vertex record decoding and attribute scattering
//!
//! The exported vertex buffer is whitespace-delimited text: one line per
//! vertex, one numeric token per field. Records are decoded into rows of
//! `f32` and then scattered into one contiguous buffer per attribute, sized
//! once from the record count.

use crate::drawable::layout::LayoutOffsets;
use crate::drawable::types::GeometryItem;
use crate::error::DrawableError;
use crate::parse_xml::XmlNode;

/// Decodes the raw vertex-buffer text of a geometry item into numeric
/// records, one per non-empty line.
///
/// Tokens that do not parse as a number become NaN, matching what the
/// exporter-facing tooling has always produced; only the tangent scatter
/// filters them (see [`scatter_attributes`]).
pub fn decode_vertex_records(geometry: &XmlNode) -> Result<Vec<Vec<f32>>, DrawableError> {
    let data = geometry
        .descendant("VertexBuffer")
        .and_then(super::buffer_data_node)
        .ok_or(DrawableError::VertexBufferNotFound)?;

    let records = data
        .text_content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|token| token.parse::<f32>().unwrap_or(f32::NAN))
                .collect()
        })
        .collect();

    Ok(records)
}

/// Scatters decoded vertex records into per-attribute buffers.
///
/// Buffer shapes for `N` records:
/// - `vertices`: `3 * N`, from the Position offset
/// - `uvs[0]`: `2 * N`, from the TexCoord0 offset
/// - `uvs[1..]`: `2 * N` allocated per TexCoord1-4 layout field, left
///   unpopulated (the exporter's extra UV sets have not been needed yet)
/// - `normals`: `3 * N` when the layout has a Normal field
/// - `tangents`: `4 * N`, always allocated; a record whose four tangent
///   values include a NaN leaves that vertex's slot zeroed
///
/// Colour and blend fields only shift offsets and are never extracted.
///
/// The caller guarantees Position and TexCoord0 offsets are present; see
/// the required-field check in the assembler.
pub fn scatter_attributes(
    records: &[Vec<f32>],
    offsets: &LayoutOffsets,
    shader_index: u32,
    indices: Vec<u32>,
) -> GeometryItem {
    let count = records.len();

    let mut vertices = vec![0.0f32; count * 3];
    let mut uvs = vec![vec![0.0f32; count * 2]];
    for channel in 1..offsets.tex_coords.len() {
        if offsets.tex_coords[channel].is_some() {
            uvs.push(vec![0.0f32; count * 2]);
        }
    }
    let mut tangents = vec![0.0f32; count * 4];
    let mut normals = offsets.normal.map(|_| vec![0.0f32; count * 3]);

    for (i, record) in records.iter().enumerate() {
        if let Some(offset) = offsets.position {
            copy_fields(record, offset, &mut vertices[i * 3..i * 3 + 3]);
        }
        if let Some(offset) = offsets.tex_coords[0] {
            copy_fields(record, offset, &mut uvs[0][i * 2..i * 2 + 2]);
        }
        if let (Some(offset), Some(normals)) = (offsets.normal, normals.as_mut()) {
            copy_fields(record, offset, &mut normals[i * 3..i * 3 + 3]);
        }
        if let Some(offset) = offsets.tangent {
            // The exporter sometimes emits NaN tangent components; such
            // records keep the zeroed slot rather than a partial write.
            if let Some(tangent) = record.get(offset..offset + 4) {
                if tangent.iter().all(|value| !value.is_nan()) {
                    tangents[i * 4..i * 4 + 4].copy_from_slice(tangent);
                }
            }
        }
    }

    GeometryItem {
        shader_index,
        vertices,
        uvs,
        normals,
        tangents,
        indices,
    }
}

/// Copies `dst.len()` values starting at `offset` from the record, or as
/// many as the record holds past the offset.
fn copy_fields(record: &[f32], offset: usize, dst: &mut [f32]) {
    let end = record.len().min(offset + dst.len());
    if let Some(src) = record.get(offset..end) {
        dst[..src.len()].copy_from_slice(src);
    }
}
