use speedy::{Readable, Writable};

pub use align::{fold_alignment, Align};
pub use compression::CompressionOptions;
pub use error::{OptionsError, Result};
pub use gltfx::GltfExportOptions;
pub use transform::TransformOptions;

mod align;
mod compression;
mod error;
mod gltfx;
mod parser;
mod transform;
mod writer;

/// Every tunable of one mesh pipeline run.
///
/// Built with [`Options::default`] and filled in from a JSON document with
/// [`Options::from_document`]. [`Options::to_document`] writes it back out.
#[derive(Debug, Clone, PartialEq, Readable, Writable)]
pub struct Options {
    pub input: String,
    pub output: String,
    pub format: String,

    pub verbose: bool,
    pub report: bool,
    pub list: bool,
    pub join_vertices: bool,
    pub strip_normals: bool,
    pub strip_tex_coords: bool,
    pub flip_uv: bool,

    pub transform: TransformOptions,
    pub gltfx: GltfExportOptions,
    pub compression: CompressionOptions,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            input: String::new(),
            output: String::new(),
            format: String::new(),

            verbose: false,
            report: false,
            list: false,
            join_vertices: false,
            strip_normals: false,
            strip_tex_coords: false,
            flip_uv: false,

            transform: TransformOptions::default(),
            gltfx: GltfExportOptions::default(),
            compression: CompressionOptions::default(),
        }
    }
}
