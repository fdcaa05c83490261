//! Index buffer decoding

use crate::error::DrawableError;
use crate::parse_xml::XmlNode;

/// Decodes the raw index-buffer text of a geometry item into a flat index
/// list.
///
/// Tokens that do not parse as an integer become 0, in line with the
/// no-per-token-recovery policy of the vertex decoder. The list length is
/// deliberately not checked against the vertex count; some exports disagree
/// and downstream consumers tolerate it.
pub fn decode_indices(geometry: &XmlNode) -> Result<Vec<u32>, DrawableError> {
    let data = geometry
        .descendant("IndexBuffer")
        .and_then(super::buffer_data_node)
        .ok_or(DrawableError::IndexBufferNotFound)?;

    let indices = data
        .text_content
        .split_whitespace()
        .map(|token| token.parse::<u32>().unwrap_or(0))
        .collect();

    Ok(indices)
}
