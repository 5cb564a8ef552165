use speedy::{Readable, Writable};

/// Draco encoder settings. Only used when
/// [`GltfExportOptions::use_compression`](crate::GltfExportOptions::use_compression) is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Readable, Writable)]
pub struct CompressionOptions {
    /// 0 (fastest) to 10 (smallest).
    pub compression_level: u32,
    pub position_quantization_bits: u32,
    pub tex_coords_quantization_bits: u32,
    pub normals_quantization_bits: u32,
    pub generic_quantization_bits: u32,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        CompressionOptions {
            compression_level: 7,
            position_quantization_bits: 14,
            tex_coords_quantization_bits: 12,
            normals_quantization_bits: 10,
            generic_quantization_bits: 8,
        }
    }
}

impl CompressionOptions {
    /// Quantization bits keyed by their document name. Zero means the channel is not quantized.
    pub fn quantization_bits(&self) -> [(&'static str, u32); 4] {
        [
            ("positionQuantizationBits", self.position_quantization_bits),
            ("texCoordsQuantizationBits", self.tex_coords_quantization_bits),
            ("normalsQuantizationBits", self.normals_quantization_bits),
            ("genericQuantizationBits", self.generic_quantization_bits),
        ]
    }
}
