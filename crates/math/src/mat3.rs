use std::ops::{Index, Mul};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Mat4, MatrixError, Vec3};

/// 3x3 column-major matrix. Element `i` of the backing array is column
/// `i / 3`, row `i % 3`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Mat3 {
    cols: [f32; 9],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        cols: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    pub const ZERO: Self = Self { cols: [0.0; 9] };

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn from_cols_array(cols: [f32; 9]) -> Self {
        Self { cols }
    }

    /// Build from a column-major slice of exactly nine elements.
    ///
    /// # Panics
    /// Panics on any other length.
    pub fn from_slice(slice: &[f32]) -> Self {
        match <[f32; 9]>::try_from(slice) {
            Ok(cols) => Self { cols },
            Err(_) => panic!("Mat3 expects 9 elements, got {}", slice.len()),
        }
    }

    pub fn to_cols_array(&self) -> [f32; 9] {
        self.cols
    }

    /// Raw bytes for uniform upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.cols[i * 3..i * 3 + 3])
    }

    pub fn transpose(&self) -> Self {
        let m = &self.cols;
        Self {
            cols: [m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]],
        }
    }

    pub fn determinant(&self) -> f32 {
        let m = &self.cols;
        m[0] * (m[8] * m[4] - m[5] * m[7])
            + m[1] * (-m[8] * m[3] + m[5] * m[6])
            + m[2] * (m[7] * m[3] - m[4] * m[6])
    }

    /// Inverse via the adjugate. A determinant of exactly zero is reported as
    /// [`MatrixError::Singular`]; no tolerance is applied.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.cols;

        let b00 = a22 * a11 - a12 * a21;
        let b01 = -a22 * a10 + a12 * a20;
        let b02 = a21 * a10 - a11 * a20;

        let det = a00 * b00 + a01 * b01 + a02 * b02;
        if det == 0.0 {
            return Err(MatrixError::Singular { dim: 3 });
        }
        let inv = 1.0 / det;

        Ok(Self {
            cols: [
                b00 * inv,
                (-a22 * a01 + a02 * a21) * inv,
                (a12 * a01 - a02 * a11) * inv,
                b01 * inv,
                (a22 * a00 - a02 * a20) * inv,
                (-a12 * a00 + a02 * a10) * inv,
                b02 * inv,
                (-a21 * a00 + a01 * a20) * inv,
                (a11 * a00 - a01 * a10) * inv,
            ],
        })
    }

    /// Normal matrix for a model matrix: `transpose(inverse(upper3x3(model)))`.
    ///
    /// Transforms surface normals correctly under non-uniform scale. Fails when
    /// the linear part of `model` is singular (e.g. a zero scale factor).
    pub fn model_to_normal(model: &Mat4) -> Result<Self, MatrixError> {
        Ok(model.to_mat3().inverse()?.transpose())
    }

    pub fn mul_vec3(&self, v: Vec3) -> Vec3 {
        let m = &self.cols;
        Vec3::new(
            m[0] * v.x + m[3] * v.y + m[6] * v.z,
            m[1] * v.x + m[4] * v.y + m[7] * v.z,
            m[2] * v.x + m[5] * v.y + m[8] * v.z,
        )
    }

    pub fn mul_mat3(&self, rhs: &Self) -> Self {
        let mut cols = [0.0; 9];
        for c in 0..3 {
            let v = self.mul_vec3(rhs.col(c));
            cols[c * 3..c * 3 + 3].copy_from_slice(&v.to_array());
        }
        Self { cols }
    }

    /// Element-wise comparison within an absolute tolerance.
    pub fn abs_diff_eq(&self, rhs: &Self, max_abs_diff: f32) -> bool {
        self.cols
            .iter()
            .zip(rhs.cols.iter())
            .all(|(a, b)| (a - b).abs() <= max_abs_diff)
    }
}

impl Index<usize> for Mat3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.cols[index]
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_mat3(&rhs)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec3(rhs)
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(cols: [f32; 9]) -> Self {
        Self { cols }
    }
}

impl From<Mat3> for glam::Mat3 {
    fn from(m: Mat3) -> Self {
        glam::Mat3::from_cols_array(&m.cols)
    }
}

impl From<glam::Mat3> for Mat3 {
    fn from(m: glam::Mat3) -> Self {
        Self {
            cols: m.to_cols_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn sample() -> Mat3 {
        Mat3::from_cols_array([2.0, 0.0, 1.0, 1.0, 3.0, 0.0, 0.0, 1.0, 4.0])
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Mat3::default(), Mat3::identity());
        assert_eq!(Mat3::IDENTITY.col(1), Vec3::Y);
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = Mat3::from_cols_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let t = m.transpose();
        assert_eq!(t.to_cols_array(), [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn identity_is_neutral() {
        let m = sample();
        assert_eq!(Mat3::IDENTITY * m, m);
        assert_eq!(m * Mat3::IDENTITY, m);
    }

    #[test]
    fn inverse_round_trip() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!((m * inv).abs_diff_eq(&Mat3::IDENTITY, EPS));
        assert!((inv * m).abs_diff_eq(&Mat3::IDENTITY, EPS));
    }

    #[test]
    fn inverse_matches_glam() {
        let m = sample();
        let ours = m.inverse().unwrap();
        let theirs = Mat3::from(glam::Mat3::from(m).inverse());
        assert!(ours.abs_diff_eq(&theirs, EPS));
    }

    #[test]
    fn singular_inverse_is_an_error() {
        assert_eq!(Mat3::ZERO.inverse(), Err(MatrixError::Singular { dim: 3 }));
        let flat = Mat3::from_cols_array([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(flat.determinant(), 0.0);
        assert!(flat.inverse().is_err());
    }

    #[test]
    fn normal_matrix_of_uniform_scale_is_reciprocal() {
        let n = Mat3::model_to_normal(&Mat4::from_uniform_scale(2.0)).unwrap();
        assert!(n.abs_diff_eq(
            &Mat3::from_cols_array([0.5, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.5]),
            EPS
        ));
    }

    #[test]
    fn normal_matrix_keeps_normals_perpendicular_under_nonuniform_scale() {
        let model = Mat4::from_scale(4.0, 1.0, 1.0).rotate_z(0.3);
        let normal = Mat3::model_to_normal(&model).unwrap();
        // Surface through the origin with tangent t and normal n.
        let t = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::new(1.0, 1.0, 0.0);
        let t_world = model.transform_vector(t);
        let n_world = normal * n;
        assert!(t_world.dot(n_world).abs() < EPS);
    }

    #[test]
    fn normal_matrix_ignores_translation() {
        let model = Mat4::from_translation(5.0, -3.0, 2.0);
        let normal = Mat3::model_to_normal(&model).unwrap();
        assert!(normal.abs_diff_eq(&Mat3::IDENTITY, EPS));
    }

    #[test]
    fn normal_matrix_of_zero_scale_fails() {
        let model = Mat4::from_scale(1.0, 0.0, 1.0);
        assert_eq!(
            Mat3::model_to_normal(&model),
            Err(MatrixError::Singular { dim: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "Mat3 expects 9 elements")]
    fn from_slice_rejects_ragged_input() {
        let _ = Mat3::from_slice(&[1.0; 8]);
    }

    #[test]
    fn bytes_are_column_major_floats() {
        assert_eq!(Mat3::IDENTITY.as_bytes().len(), 9 * 4);
    }
}
