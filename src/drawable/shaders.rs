//! Shader group and texture dictionary extraction

use crate::drawable::types::{Shader, ShaderGroup, ShaderParameters, TextureDictionaryItem};
use crate::error::DrawableError;
use crate::parse_xml::XmlNode;

/// Extracts the shader group from the document root.
///
/// The texture dictionary is optional; the `Shaders` container is not.
/// Missing child fields on individual entries never fail, they stay `None`.
pub fn parse_shader_group(root: &XmlNode) -> Result<ShaderGroup, DrawableError> {
    let group = root
        .descendant("ShaderGroup")
        .ok_or(DrawableError::NoShaderGroup)?;

    let texture_dictionary = group
        .descendant("TextureDictionary")
        .map(parse_texture_dictionary);

    let shaders_el = group
        .descendant("Shaders")
        .ok_or(DrawableError::ShadersNotFound)?;

    let shaders = shaders_el
        .children
        .iter()
        .filter(|n| n.name == "Item")
        .map(parse_shader)
        .collect();

    Ok(ShaderGroup {
        texture_dictionary,
        shaders,
    })
}

fn parse_texture_dictionary(dictionary: &XmlNode) -> Vec<TextureDictionaryItem> {
    dictionary
        .descendants("Item")
        .into_iter()
        .map(|item| TextureDictionaryItem {
            name: item.child_text("Name").map(str::to_string),
            // Usage and format have always been read from the same Texture
            // child; kept as-is until the exporter says otherwise.
            usage: item.child_text("Texture").map(str::to_string),
            format: item.child_text("Texture").map(str::to_string),
            filename: item.child_text("FileName").map(str::to_string),
        })
        .collect()
}

fn parse_shader(item: &XmlNode) -> Shader {
    Shader {
        name: item.child_text("Name").map(str::to_string),
        parameters: item.child("Parameters").map(parse_shader_parameters),
    }
}

fn parse_shader_parameters(parameters: &XmlNode) -> ShaderParameters {
    ShaderParameters {
        diffuse_sampler: sampler_texture(parameters, "DiffuseSampler"),
        bump_sampler: sampler_texture(parameters, "BumpSampler"),
        spec_sampler: sampler_texture(parameters, "SpecSampler"),
        volume_sampler: sampler_texture(parameters, "VolumeSampler"),
    }
}

/// Texture name bound to the parameter item whose `name` attribute matches
/// the given sampler.
fn sampler_texture(parameters: &XmlNode, sampler: &str) -> Option<String> {
    parameters
        .descendants("Item")
        .into_iter()
        .find(|item| item.attributes.get("name").map(|s| s.as_str()) == Some(sampler))
        .and_then(|item| item.child_text("Name"))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_xml::parse_xml_str;

    fn shader_group(inner: &str) -> ShaderGroup {
        let root = parse_xml_str(&format!("<Drawable><ShaderGroup>{inner}</ShaderGroup></Drawable>"))
            .unwrap();
        parse_shader_group(&root).unwrap()
    }

    #[test]
    fn sampler_bindings_resolve_by_name_attribute() {
        let group = shader_group(
            r#"<Shaders><Item>
                 <Name>normal_spec</Name>
                 <Parameters>
                   <Item name="DiffuseSampler" type="Texture"><Name>diff_tex</Name></Item>
                   <Item name="BumpSampler" type="Texture"><Name>bump_tex</Name></Item>
                   <Item name="SpecularFactor" type="Vector"><Value x="40" /></Item>
                 </Parameters>
               </Item></Shaders>"#,
        );

        assert_eq!(group.shaders.len(), 1);
        let shader = &group.shaders[0];
        assert_eq!(shader.name.as_deref(), Some("normal_spec"));
        let parameters = shader.parameters.as_ref().unwrap();
        assert_eq!(parameters.diffuse_sampler.as_deref(), Some("diff_tex"));
        assert_eq!(parameters.bump_sampler.as_deref(), Some("bump_tex"));
        assert_eq!(parameters.spec_sampler, None);
        assert_eq!(parameters.volume_sampler, None);
    }

    #[test]
    fn shader_without_parameters_block_keeps_parameters_absent() {
        let group = shader_group("<Shaders><Item><Name>default</Name></Item></Shaders>");
        assert_eq!(group.shaders[0].parameters.as_ref().map(|_| ()), None);
    }

    #[test]
    fn texture_dictionary_entries_tolerate_missing_children() {
        let group = shader_group(
            r#"<TextureDictionary>
                 <Item><Name>tex_a</Name><Texture>DXT1</Texture><FileName>tex_a.dds</FileName></Item>
                 <Item><Name>tex_b</Name></Item>
               </TextureDictionary>
               <Shaders />"#,
        );

        let dictionary = group.texture_dictionary.unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary[0].filename.as_deref(), Some("tex_a.dds"));
        assert_eq!(dictionary[0].usage.as_deref(), Some("DXT1"));
        assert_eq!(dictionary[0].format.as_deref(), Some("DXT1"));
        assert_eq!(dictionary[1].filename, None);
        assert_eq!(dictionary[1].usage, None);
    }

    #[test]
    fn texture_dictionary_is_optional() {
        let group = shader_group("<Shaders><Item><Name>s</Name></Item></Shaders>");
        assert!(group.texture_dictionary.is_none());
    }

    #[test]
    fn missing_shaders_container_is_fatal() {
        let root = parse_xml_str(
            "<Drawable><ShaderGroup><TextureDictionary /></ShaderGroup></Drawable>",
        )
        .unwrap();
        assert_eq!(
            parse_shader_group(&root).unwrap_err(),
            DrawableError::ShadersNotFound
        );
    }
}
