//! CLI tool for inspecting a CodeWalker drawable export without a renderer
//!
//! Usage:
//!   cargo run --release --bin drawable_info -- <xml_file> [options]
//!
//! Options:
//!   --json      Dump the full parsed drawable as JSON
//!   --quality <high|medium|low|verylow>  Model-quality tier (default: high)

use std::env;
use std::fs;

use anyhow::Context;
use codewalker_drawable::{parse_drawable_with_quality, ModelQuality};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <xml_file> [options]", args[0]);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --json                                Dump the parsed drawable as JSON");
        eprintln!("  --quality <high|medium|low|verylow>   Model-quality tier (default: high)");
        return Ok(());
    }

    let xml_path = &args[1];

    let mut as_json = false;
    let mut quality = ModelQuality::High;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                as_json = true;
            }
            "--quality" => {
                i += 1;
                if i < args.len() {
                    quality = match args[i].as_str() {
                        "high" => ModelQuality::High,
                        "medium" => ModelQuality::Medium,
                        "low" => ModelQuality::Low,
                        "verylow" => ModelQuality::VeryLow,
                        other => anyhow::bail!("unknown quality tier '{}'", other),
                    };
                }
            }
            other => anyhow::bail!("unknown option '{}'", other),
        }
        i += 1;
    }

    let xml = fs::read_to_string(xml_path)
        .with_context(|| format!("failed to read {}", xml_path))?;
    let drawable = parse_drawable_with_quality(&xml, quality)
        .with_context(|| format!("failed to parse {}", xml_path))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&drawable)?);
        return Ok(());
    }

    println!("Drawable: {}", drawable.name);
    println!("Geometries: {}", drawable.geometries.len());
    for (i, geometry) in drawable.geometries.iter().enumerate() {
        println!(
            "  [{}] shader {}: {} vertices, {} indices, {} uv channel(s), normals: {}",
            i,
            geometry.shader_index,
            geometry.vertices.len() / 3,
            geometry.indices.len(),
            geometry.uvs.len(),
            if geometry.normals.is_some() { "yes" } else { "no" },
        );
    }

    println!("Shaders: {}", drawable.shader_group.shaders.len());
    for shader in &drawable.shader_group.shaders {
        let name = shader.name.as_deref().unwrap_or("<unnamed>");
        match &shader.parameters {
            Some(parameters) => {
                let mut samplers = Vec::new();
                if let Some(texture) = &parameters.diffuse_sampler {
                    samplers.push(format!("diffuse={}", texture));
                }
                if let Some(texture) = &parameters.bump_sampler {
                    samplers.push(format!("bump={}", texture));
                }
                if let Some(texture) = &parameters.spec_sampler {
                    samplers.push(format!("spec={}", texture));
                }
                if let Some(texture) = &parameters.volume_sampler {
                    samplers.push(format!("volume={}", texture));
                }
                println!("  {}: {}", name, samplers.join(", "));
            }
            None => println!("  {}: <no parameters>", name),
        }
    }

    if let Some(dictionary) = &drawable.shader_group.texture_dictionary {
        println!("Texture dictionary: {} entries", dictionary.len());
        for entry in dictionary {
            println!(
                "  {} ({})",
                entry.name.as_deref().unwrap_or("<unnamed>"),
                entry.filename.as_deref().unwrap_or("no file"),
            );
        }
    }

    Ok(())
}
