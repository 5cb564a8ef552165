use speedy::{Readable, Writable};

/// Material and packaging settings for the glTF exporter.
#[derive(Debug, Clone, PartialEq, Readable, Writable)]
pub struct GltfExportOptions {
    pub metallic_factor: f32,
    pub roughness_factor: f32,

    pub diffuse_map: String,
    pub occlusion_map: String,
    pub emissive_map: String,
    pub metallic_roughness_map: String,
    pub zone_map: String,
    pub normal_map: String,

    pub object_space_normals: bool,
    pub embed_maps: bool,
    /// Enables Draco compression with the settings in [`crate::CompressionOptions`].
    pub use_compression: bool,
}

impl Default for GltfExportOptions {
    fn default() -> Self {
        GltfExportOptions {
            metallic_factor: 0.1,
            roughness_factor: 0.8,

            diffuse_map: String::new(),
            occlusion_map: String::new(),
            emissive_map: String::new(),
            metallic_roughness_map: String::new(),
            zone_map: String::new(),
            normal_map: String::new(),

            object_space_normals: false,
            embed_maps: false,
            use_compression: false,
        }
    }
}
