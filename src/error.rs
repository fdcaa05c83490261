//! Error taxonomy for drawable parsing
//!
//! Every failure is a distinct named condition. Any error aborts the parse of
//! the whole document; the caller decides whether to skip the file and move
//! on to the next one.

use crate::drawable::ModelQuality;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawableError {
    /// Input is not well-formed XML.
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    /// No drawable item or no Name element found.
    #[error("drawable name not found")]
    MissingName,

    /// Only the high model-quality tier is implemented.
    #[error("model quality tier {0:?} is not implemented")]
    UnsupportedQuality(ModelQuality),

    /// The quality-tier container is absent or holds zero drawable models.
    #[error("no drawable models found for the selected quality tier")]
    NoDrawableModels,

    /// No ShaderGroup element anywhere in the document.
    #[error("ShaderGroup element not found")]
    NoShaderGroup,

    /// No Geometries element under the drawable models.
    #[error("Geometries element not found")]
    GeometriesNotFound,

    /// A geometry item has no vertex layout descriptor.
    #[error("vertex layout not found for geometry item")]
    LayoutNotFound,

    /// A layout field name outside the known attribute set.
    #[error("unknown vertex layout field: {0}")]
    UnknownLayoutField(String),

    /// The layout lacks a Position or TexCoord0 field.
    #[error("required layout fields missing: Position and TexCoord0 must both be present")]
    RequiredAttributeMissing,

    /// Neither Data nor Data2 exists under the geometry's VertexBuffer.
    #[error("vertex buffer data not found for geometry item")]
    VertexBufferNotFound,

    /// Neither Data nor Data2 exists under the geometry's IndexBuffer.
    #[error("index buffer data not found for geometry item")]
    IndexBufferNotFound,

    /// The ShaderGroup has no Shaders container.
    #[error("Shaders element not found in ShaderGroup")]
    ShadersNotFound,
}

impl From<quick_xml::Error> for DrawableError {
    fn from(err: quick_xml::Error) -> Self {
        DrawableError::MalformedXml(err.to_string())
    }
}
