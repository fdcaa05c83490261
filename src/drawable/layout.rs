//! Vertex layout interpretation
//!
//! A geometry's `VertexBuffer > Layout` element lists attribute fields in
//! order. Each field has a fixed width in numeric values; walking the list
//! with a running cursor yields the field offset of every attribute within a
//! vertex record.

use crate::error::DrawableError;
use crate::parse_xml::XmlNode;

/// The fixed set of vertex attributes a layout may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAttribute {
    Position,
    BlendWeights,
    BlendIndices,
    Normal,
    Colour0,
    Colour1,
    TexCoord0,
    TexCoord1,
    TexCoord2,
    TexCoord3,
    TexCoord4,
    Tangent,
}

impl VertexAttribute {
    /// Maps a layout element tag to its attribute, or `None` for unknown
    /// tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Position" => Some(VertexAttribute::Position),
            "BlendWeights" => Some(VertexAttribute::BlendWeights),
            "BlendIndices" => Some(VertexAttribute::BlendIndices),
            "Normal" => Some(VertexAttribute::Normal),
            "Colour0" => Some(VertexAttribute::Colour0),
            "Colour1" => Some(VertexAttribute::Colour1),
            "TexCoord0" => Some(VertexAttribute::TexCoord0),
            "TexCoord1" => Some(VertexAttribute::TexCoord1),
            "TexCoord2" => Some(VertexAttribute::TexCoord2),
            "TexCoord3" => Some(VertexAttribute::TexCoord3),
            "TexCoord4" => Some(VertexAttribute::TexCoord4),
            "Tangent" => Some(VertexAttribute::Tangent),
            _ => None,
        }
    }

    /// Number of numeric values this attribute occupies in a vertex record.
    pub fn field_width(self) -> usize {
        match self {
            VertexAttribute::Position => 3,     // Vector3
            VertexAttribute::BlendWeights => 4, // Color4
            VertexAttribute::BlendIndices => 4, // Color4
            VertexAttribute::Normal => 3,       // Vector3
            VertexAttribute::Colour0 => 4,      // Color4
            VertexAttribute::Colour1 => 4,      // Color4
            VertexAttribute::TexCoord0 => 2,    // Vector2
            VertexAttribute::TexCoord1 => 2,    // Vector2
            VertexAttribute::TexCoord2 => 2,    // Vector2
            VertexAttribute::TexCoord3 => 2,    // Vector2
            VertexAttribute::TexCoord4 => 2,    // Vector2
            VertexAttribute::Tangent => 4,      // Vector4
        }
    }
}

/// Field offsets of each attribute within a vertex record, and the total
/// record stride. An attribute absent from the layout is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOffsets {
    pub position: Option<usize>,
    pub blend_weights: Option<usize>,
    pub blend_indices: Option<usize>,
    pub normal: Option<usize>,
    pub colour0: Option<usize>,
    pub colour1: Option<usize>,
    /// One slot per TexCoord0-4 channel.
    pub tex_coords: [Option<usize>; 5],
    pub tangent: Option<usize>,
    /// Total numeric values per vertex record.
    pub stride: usize,
}

impl LayoutOffsets {
    fn set(&mut self, attribute: VertexAttribute, offset: usize) {
        match attribute {
            VertexAttribute::Position => self.position = Some(offset),
            VertexAttribute::BlendWeights => self.blend_weights = Some(offset),
            VertexAttribute::BlendIndices => self.blend_indices = Some(offset),
            VertexAttribute::Normal => self.normal = Some(offset),
            VertexAttribute::Colour0 => self.colour0 = Some(offset),
            VertexAttribute::Colour1 => self.colour1 = Some(offset),
            VertexAttribute::TexCoord0 => self.tex_coords[0] = Some(offset),
            VertexAttribute::TexCoord1 => self.tex_coords[1] = Some(offset),
            VertexAttribute::TexCoord2 => self.tex_coords[2] = Some(offset),
            VertexAttribute::TexCoord3 => self.tex_coords[3] = Some(offset),
            VertexAttribute::TexCoord4 => self.tex_coords[4] = Some(offset),
            VertexAttribute::Tangent => self.tangent = Some(offset),
        }
    }
}

/// Computes attribute offsets from a geometry item's layout descriptor.
///
/// Fails with [`DrawableError::LayoutNotFound`] when the geometry has no
/// `VertexBuffer > Layout` element, and with
/// [`DrawableError::UnknownLayoutField`] on the first field name outside the
/// known attribute set.
pub fn parse_layout_offsets(geometry: &XmlNode) -> Result<LayoutOffsets, DrawableError> {
    let layout = geometry
        .descendant("VertexBuffer")
        .and_then(|vb| vb.child("Layout"))
        .ok_or(DrawableError::LayoutNotFound)?;

    let mut offsets = LayoutOffsets::default();
    let mut current_offset = 0;

    for field in &layout.children {
        let attribute = VertexAttribute::from_tag(&field.name)
            .ok_or_else(|| DrawableError::UnknownLayoutField(field.name.clone()))?;
        offsets.set(attribute, current_offset);
        current_offset += attribute.field_width();
    }

    offsets.stride = current_offset;
    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_xml::parse_xml_str;

    fn geometry(layout_fields: &str) -> XmlNode {
        parse_xml_str(&format!(
            "<Item><VertexBuffer><Layout>{layout_fields}</Layout>\
             <Data>0 0 0</Data></VertexBuffer></Item>"
        ))
        .unwrap()
    }

    #[test]
    fn offsets_accumulate_field_widths_in_descriptor_order() {
        let geometry = geometry("<Position/><Normal/><Colour0/><TexCoord0/><Tangent/>");
        let offsets = parse_layout_offsets(&geometry).unwrap();

        assert_eq!(offsets.position, Some(0));
        assert_eq!(offsets.normal, Some(3));
        assert_eq!(offsets.colour0, Some(6));
        assert_eq!(offsets.tex_coords[0], Some(10));
        assert_eq!(offsets.tangent, Some(12));
        assert_eq!(offsets.stride, 16);
    }

    #[test]
    fn full_attribute_set_covers_every_width() {
        let geometry = geometry(
            "<Position/><BlendWeights/><BlendIndices/><Normal/><Colour0/><Colour1/>\
             <TexCoord0/><TexCoord1/><TexCoord2/><TexCoord3/><TexCoord4/><Tangent/>",
        );
        let offsets = parse_layout_offsets(&geometry).unwrap();

        assert_eq!(offsets.blend_weights, Some(3));
        assert_eq!(offsets.blend_indices, Some(7));
        assert_eq!(offsets.colour1, Some(18));
        assert_eq!(offsets.tex_coords, [Some(22), Some(24), Some(26), Some(28), Some(30)]);
        assert_eq!(offsets.tangent, Some(32));
        assert_eq!(offsets.stride, 36);
    }

    #[test]
    fn unknown_field_name_is_fatal_and_named() {
        let geometry = geometry("<Position/><Wobble/><TexCoord0/>");
        let err = parse_layout_offsets(&geometry).unwrap_err();
        assert_eq!(err, DrawableError::UnknownLayoutField("Wobble".to_string()));
    }

    #[test]
    fn missing_layout_descriptor_is_fatal() {
        let geometry =
            parse_xml_str("<Item><VertexBuffer><Data>0</Data></VertexBuffer></Item>").unwrap();
        let err = parse_layout_offsets(&geometry).unwrap_err();
        assert_eq!(err, DrawableError::LayoutNotFound);
    }

    #[test]
    fn absent_attributes_stay_none() {
        let geometry = geometry("<Position/><TexCoord0/>");
        let offsets = parse_layout_offsets(&geometry).unwrap();

        assert_eq!(offsets.normal, None);
        assert_eq!(offsets.tangent, None);
        assert_eq!(offsets.tex_coords[1], None);
        assert_eq!(offsets.stride, 5);
    }
}
