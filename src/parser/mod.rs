use std::str::FromStr;

use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    align::fold_alignment,
    error::{OptionsError, Result},
    CompressionOptions, GltfExportOptions, Options,
};

use document::Document;

mod document;

const KNOWN_KEYS: &[&str] = &[
    "input",
    "output",
    "format",
    "verbose",
    "report",
    "list",
    "joinVertices",
    "stripNormals",
    "stripTexCoords",
    "swizzle",
    "scale",
    "flipUV",
    "translate",
    "matrix",
    "alignX",
    "alignY",
    "alignZ",
    "gltfx",
    "compression",
];

impl Options {
    /// Populates the options from a JSON document.
    ///
    /// Plain values fall back to their defaults when missing. `translate` and
    /// `matrix` are only replaced when present, and the `gltfx` and
    /// `compression` groups are left untouched when their key is missing.
    ///
    /// Parsing stops at the first malformed value; fields read before it keep
    /// their new values.
    pub fn from_document(&mut self, doc: &Value) -> Result<()> {
        self.populate(doc).inspect_err(|err| {
            debug!(error = %err, "Rejected options document");
        })?;

        trace!(options = ?self, "Resolved options");
        Ok(())
    }

    /// Parses JSON text into a fresh set of options.
    pub fn from_json_str(text: &str) -> Result<Options> {
        let doc: Value = serde_json::from_str(text)
            .map_err(|err| OptionsError::MalformedConfiguration(err.to_string()))?;

        let mut options = Options::default();
        options.from_document(&doc)?;
        Ok(options)
    }

    fn populate(&mut self, doc: &Value) -> Result<()> {
        let doc = Document::new(doc, None)?;

        for key in doc.keys().filter(|key| !KNOWN_KEYS.contains(key)) {
            debug!(key, "Ignoring unknown option");
        }

        doc.assign_with_fallback("input", &mut self.input, String::new())?;
        doc.assign_with_fallback("output", &mut self.output, String::new())?;
        doc.assign_with_fallback("format", &mut self.format, String::new())?;
        doc.assign_with_fallback("verbose", &mut self.verbose, false)?;
        doc.assign_with_fallback("report", &mut self.report, false)?;
        doc.assign_with_fallback("list", &mut self.list, false)?;
        doc.assign_with_fallback("joinVertices", &mut self.join_vertices, false)?;
        doc.assign_with_fallback("stripNormals", &mut self.strip_normals, false)?;
        doc.assign_with_fallback("stripTexCoords", &mut self.strip_tex_coords, false)?;

        let transform = &mut self.transform;
        doc.assign_with_fallback("swizzle", &mut transform.swizzle, String::new())?;
        doc.assign_number_with_fallback("scale", &mut transform.scale, 1.0)?;
        doc.assign_with_fallback("flipUV", &mut self.flip_uv, false)?;

        doc.assign_sequence_if_present("translate", &mut transform.translate)?;
        doc.assign_sequence_if_present("matrix", &mut transform.matrix)?;

        transform.align_x = fold_alignment(doc.get("alignX")?);
        transform.align_y = fold_alignment(doc.get("alignY")?);
        transform.align_z = fold_alignment(doc.get("alignZ")?);

        doc.group_if_present("gltfx", |gltfx| populate_gltfx(gltfx, &mut self.gltfx))?;
        doc.group_if_present("compression", |compression| {
            populate_compression(compression, &mut self.compression)
        })?;

        Ok(())
    }
}

fn populate_gltfx(doc: &Document, gltfx: &mut GltfExportOptions) -> Result<()> {
    let defaults = GltfExportOptions::default();

    doc.assign_number_with_fallback(
        "metallicFactor",
        &mut gltfx.metallic_factor,
        defaults.metallic_factor,
    )?;
    doc.assign_number_with_fallback(
        "roughnessFactor",
        &mut gltfx.roughness_factor,
        defaults.roughness_factor,
    )?;
    doc.assign_with_fallback("diffuseMap", &mut gltfx.diffuse_map, defaults.diffuse_map)?;
    doc.assign_with_fallback("occlusionMap", &mut gltfx.occlusion_map, defaults.occlusion_map)?;
    doc.assign_with_fallback("emissiveMap", &mut gltfx.emissive_map, defaults.emissive_map)?;
    doc.assign_with_fallback(
        "metallicRoughnessMap",
        &mut gltfx.metallic_roughness_map,
        defaults.metallic_roughness_map,
    )?;
    doc.assign_with_fallback("zoneMap", &mut gltfx.zone_map, defaults.zone_map)?;
    doc.assign_with_fallback("normalMap", &mut gltfx.normal_map, defaults.normal_map)?;
    doc.assign_with_fallback(
        "objectSpaceNormals",
        &mut gltfx.object_space_normals,
        defaults.object_space_normals,
    )?;
    doc.assign_with_fallback("embedMaps", &mut gltfx.embed_maps, defaults.embed_maps)?;
    doc.assign_with_fallback(
        "useCompression",
        &mut gltfx.use_compression,
        defaults.use_compression,
    )?;

    Ok(())
}

fn populate_compression(doc: &Document, compression: &mut CompressionOptions) -> Result<()> {
    let defaults = CompressionOptions::default();

    doc.assign_with_fallback(
        "compressionLevel",
        &mut compression.compression_level,
        defaults.compression_level,
    )?;
    doc.assign_with_fallback(
        "positionQuantizationBits",
        &mut compression.position_quantization_bits,
        defaults.position_quantization_bits,
    )?;
    doc.assign_with_fallback(
        "texCoordsQuantizationBits",
        &mut compression.tex_coords_quantization_bits,
        defaults.tex_coords_quantization_bits,
    )?;
    doc.assign_with_fallback(
        "normalsQuantizationBits",
        &mut compression.normals_quantization_bits,
        defaults.normals_quantization_bits,
    )?;
    doc.assign_with_fallback(
        "genericQuantizationBits",
        &mut compression.generic_quantization_bits,
        defaults.generic_quantization_bits,
    )?;

    Ok(())
}

impl FromStr for Options {
    type Err = OptionsError;

    fn from_str(text: &str) -> Result<Self> {
        Options::from_json_str(text)
    }
}
