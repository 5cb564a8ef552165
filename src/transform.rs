use glam::{Mat4, Vec3};
use speedy::{Readable, Writable};

use crate::align::Align;

/// Geometry transform applied to the mesh before export.
#[derive(Debug, Clone, PartialEq, Readable, Writable)]
pub struct TransformOptions {
    /// Axis remapping code, e.g. `"xzy"`.
    pub swizzle: String,
    pub scale: f32,
    pub translate: [f32; 3],
    /// Column-major.
    pub matrix: [f32; 16],

    pub align_x: Align,
    pub align_y: Align,
    pub align_z: Align,
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions {
            swizzle: String::new(),
            scale: 1.0,
            translate: [0.0; 3],
            matrix: Mat4::IDENTITY.to_cols_array(),

            align_x: Align::None,
            align_y: Align::None,
            align_z: Align::None,
        }
    }
}

impl TransformOptions {
    pub fn translation(&self) -> Vec3 {
        Vec3::from_array(self.translate)
    }

    pub fn set_translation(&mut self, translation: Vec3) {
        self.translate = translation.to_array();
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array(&self.matrix)
    }

    pub fn set_matrix(&mut self, matrix: Mat4) {
        self.matrix = matrix.to_cols_array();
    }

    pub fn has_translation(&self) -> bool {
        self.translation() != Vec3::ZERO
    }

    pub fn has_matrix(&self) -> bool {
        self.matrix() != Mat4::IDENTITY
    }

    pub fn alignment(&self) -> [Align; 3] {
        [self.align_x, self.align_y, self.align_z]
    }
}
