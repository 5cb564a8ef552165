use serde_json::{json, Map, Value};

use crate::Options;

impl Options {
    /// Serializes the options into a JSON document, leaving out values that
    /// are at their defaults. `verbose` is always written.
    ///
    /// The emissive, metallic-roughness and zone maps are never written, nor
    /// are the metallic and roughness factors or the per-axis alignment, so
    /// they do not survive a round trip through the document form. Alignment
    /// reads back as [`Align::None`](crate::Align::None).
    pub fn to_document(&self) -> Value {
        let mut result = Map::new();
        result.insert("verbose".to_owned(), json!(self.verbose));

        insert_str(&mut result, "input", &self.input);
        insert_str(&mut result, "output", &self.output);
        insert_str(&mut result, "format", &self.format);
        insert_flag(&mut result, "report", self.report);
        insert_flag(&mut result, "list", self.list);
        insert_flag(&mut result, "joinVertices", self.join_vertices);
        insert_flag(&mut result, "stripNormals", self.strip_normals);
        insert_flag(&mut result, "stripTexCoords", self.strip_tex_coords);
        insert_flag(&mut result, "flipUV", self.flip_uv);

        let transform = &self.transform;
        insert_str(&mut result, "swizzle", &transform.swizzle);
        if transform.scale != 1.0 {
            result.insert("scale".to_owned(), json!(transform.scale));
        }
        if transform.has_translation() {
            result.insert("translate".to_owned(), json!(transform.translate));
        }
        if transform.has_matrix() {
            result.insert("matrix".to_owned(), json!(transform.matrix));
        }

        let gltfx = &self.gltfx;
        let mut gltfx_doc = Map::new();
        insert_flag(&mut gltfx_doc, "useCompression", gltfx.use_compression);
        insert_str(&mut gltfx_doc, "diffuseMap", &gltfx.diffuse_map);
        insert_str(&mut gltfx_doc, "occlusionMap", &gltfx.occlusion_map);
        insert_str(&mut gltfx_doc, "normalMap", &gltfx.normal_map);
        insert_flag(&mut gltfx_doc, "objectSpaceNormals", gltfx.object_space_normals);
        insert_flag(&mut gltfx_doc, "embedMaps", gltfx.embed_maps);

        if !gltfx_doc.is_empty() {
            result.insert("gltfx".to_owned(), Value::Object(gltfx_doc));
        }

        if gltfx.use_compression {
            let mut compression = Map::new();
            compression.insert(
                "compressionLevel".to_owned(),
                json!(self.compression.compression_level),
            );
            for (key, bits) in self.compression.quantization_bits() {
                if bits > 0 {
                    compression.insert(key.to_owned(), json!(bits));
                }
            }

            result.insert("compression".to_owned(), Value::Object(compression));
        }

        Value::Object(result)
    }

    pub fn to_json_string(&self) -> String {
        self.to_document().to_string()
    }

    pub fn to_json_string_pretty(&self) -> String {
        // A `Value` only holds string keys, so pretty printing it cannot fail.
        serde_json::to_string_pretty(&self.to_document()).unwrap_or_default()
    }
}

fn insert_str(doc: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        doc.insert(key.to_owned(), Value::from(value));
    }
}

fn insert_flag(doc: &mut Map<String, Value>, key: &str, value: bool) {
    if value {
        doc.insert(key.to_owned(), Value::Bool(true));
    }
}
