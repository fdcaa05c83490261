//! Output data model for parsed drawables
//!
//! All types are plain values built fresh per parse call and never mutated
//! afterwards. Fields that may be absent in the export are `Option`, never
//! sentinel values.

use serde::Serialize;

/// Model-quality tier of a drawable's mesh data.
///
/// CodeWalker exports carry one container per tier (`DrawableModelsHigh`,
/// `DrawableModelsMedium`, ...). Only the high tier is implemented; selecting
/// any other tier is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelQuality {
    High,
    Medium,
    Low,
    VeryLow,
}

impl ModelQuality {
    /// Tag name of the drawable-models container for this tier, if the tier
    /// is implemented.
    pub(crate) fn models_tag(self) -> Option<&'static str> {
        match self {
            ModelQuality::High => Some("DrawableModelsHigh"),
            _ => None,
        }
    }
}

/// A parsed drawable: one or more geometry items plus the shared
/// shader/material metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Drawable {
    pub name: String,
    pub geometries: Vec<GeometryItem>,
    pub shader_group: ShaderGroup,
}

/// One mesh within a drawable, with its own vertex/index buffers.
///
/// `N` below is the vertex count of this item (the number of non-empty lines
/// in the exported vertex data).
#[derive(Debug, Clone, Serialize)]
pub struct GeometryItem {
    /// Index into [`ShaderGroup::shaders`]. Passed through as exported;
    /// not validated against the shader list bounds.
    pub shader_index: u32,
    /// Positions, `3 * N` values (xyz per vertex).
    pub vertices: Vec<f32>,
    /// UV channels, `2 * N` values each. Channel 0 is always present; one
    /// extra channel is allocated per TexCoord1-4 field in the layout, but
    /// those channels are not yet populated from the vertex data.
    pub uvs: Vec<Vec<f32>>,
    /// Normals, `3 * N` values, present only when the layout has a Normal
    /// field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normals: Option<Vec<f32>>,
    /// Tangents, `4 * N` values. Always allocated; vertices whose exported
    /// tangent contains a NaN component keep the zeroed slot.
    pub tangents: Vec<f32>,
    /// Triangle indices as exported. Length is not cross-checked against the
    /// vertex count.
    pub indices: Vec<u32>,
}

/// Shaders and optional texture dictionary shared by a drawable.
#[derive(Debug, Clone, Serialize)]
pub struct ShaderGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture_dictionary: Option<Vec<TextureDictionaryItem>>,
    pub shaders: Vec<Shader>,
}

/// One embedded-texture entry of the texture dictionary.
///
/// `usage` and `format` are both read from the item's `Texture` child; that
/// is what the exporter-facing code has always done, so it is kept as-is.
#[derive(Debug, Clone, Serialize)]
pub struct TextureDictionaryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// One shader of the shader group.
#[derive(Debug, Clone, Serialize)]
pub struct Shader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ShaderParameters>,
}

/// The fixed set of named sampler bindings a shader may carry. Each value is
/// the bound texture name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShaderParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diffuse_sampler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bump_sampler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_sampler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_sampler: Option<String>,
}
