use std::ops::{Index, Mul};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Mat3, MatrixError, Vec3, Vec4};

/// 4x4 column-major affine/projective matrix. Element `i` of the backing array
/// is column `i / 4`, row `i % 4`, so elements 12..15 hold the translation.
///
/// `a * b` applies `b` first, then `a`. The chaining builders (`scale`,
/// `translate`, `rotate_*`) pre-multiply, so each call applies its transform
/// in world space after everything already in the matrix. The `self_*`
/// variants apply it relative to the matrix's own current axes instead.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Mat4 {
    cols: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        cols: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub const ZERO: Self = Self { cols: [0.0; 16] };

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn from_cols_array(cols: [f32; 16]) -> Self {
        Self { cols }
    }

    /// Build from a column-major slice of exactly sixteen elements.
    ///
    /// # Panics
    /// Panics on any other length.
    pub fn from_slice(slice: &[f32]) -> Self {
        match <[f32; 16]>::try_from(slice) {
            Ok(cols) => Self { cols },
            Err(_) => panic!("Mat4 expects 16 elements, got {}", slice.len()),
        }
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        self.cols
    }

    /// Raw bytes for uniform upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::from_slice(&self.cols[i * 4..i * 4 + 4])
    }

    /// Translation column as a vector.
    pub fn translation(&self) -> Vec3 {
        self.col(3).to_vec3()
    }

    // ---- elementary transforms -------------------------------------------

    pub fn from_scale(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[0] = x;
        m.cols[5] = y;
        m.cols[10] = z;
        m
    }

    pub fn from_uniform_scale(s: f32) -> Self {
        Self::from_scale(s, s, s)
    }

    pub fn from_translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[12] = x;
        m.cols[13] = y;
        m.cols[14] = z;
        m
    }

    pub fn from_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[5] = c;
        m.cols[6] = s;
        m.cols[9] = -s;
        m.cols[10] = c;
        m
    }

    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[0] = c;
        m.cols[2] = -s;
        m.cols[8] = s;
        m.cols[10] = c;
        m
    }

    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[0] = c;
        m.cols[1] = s;
        m.cols[4] = -s;
        m.cols[5] = c;
        m
    }

    /// Rotation of `angle` radians around `axis` (Rodrigues' formula). The
    /// axis is normalized first; a zero axis degenerates to `cos(angle) * I`
    /// on the linear part.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let Vec3 { x, y, z } = axis.normalize();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Self {
            cols: [
                c + x * x * t,
                y * x * t + z * s,
                z * x * t - y * s,
                0.0,
                x * y * t - z * s,
                c + y * y * t,
                z * y * t + x * s,
                0.0,
                x * z * t + y * s,
                y * z * t - x * s,
                c + z * z * t,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0,
            ],
        }
    }

    // ---- world-space chaining --------------------------------------------

    pub fn scale(self, x: f32, y: f32, z: f32) -> Self {
        Self::from_scale(x, y, z) * self
    }

    pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
        Self::from_translation(x, y, z) * self
    }

    pub fn rotate_x(self, angle: f32) -> Self {
        Self::from_rotation_x(angle) * self
    }

    pub fn rotate_y(self, angle: f32) -> Self {
        Self::from_rotation_y(angle) * self
    }

    pub fn rotate_z(self, angle: f32) -> Self {
        Self::from_rotation_z(angle) * self
    }

    pub fn rotate_axis(self, angle: f32, axis: Vec3) -> Self {
        Self::from_axis_angle(axis, angle) * self
    }

    // ---- self-space chaining ---------------------------------------------

    /// Scale along the matrix's own axes (post-multiplication).
    pub fn self_scale(self, x: f32, y: f32, z: f32) -> Self {
        self * Self::from_scale(x, y, z)
    }

    /// Translate by `(x, y, z)` measured along the matrix's own axes.
    pub fn self_translate(self, x: f32, y: f32, z: f32) -> Self {
        let d = self.transform_vector(Vec3::new(x, y, z));
        self.translate(d.x, d.y, d.z)
    }

    /// Rotate around the matrix's own X axis, keeping its translation.
    pub fn self_rotate_x(self, angle: f32) -> Self {
        self.rotate_about_local(Vec3::X, angle)
    }

    /// Rotate around the matrix's own Y axis, keeping its translation.
    pub fn self_rotate_y(self, angle: f32) -> Self {
        self.rotate_about_local(Vec3::Y, angle)
    }

    /// Rotate around the matrix's own Z axis, keeping its translation.
    pub fn self_rotate_z(self, angle: f32) -> Self {
        self.rotate_about_local(Vec3::Z, angle)
    }

    fn rotate_about_local(self, local_axis: Vec3, angle: f32) -> Self {
        let world_axis = self.transform_vector(local_axis);
        let mut out = self.rotate_axis(angle, world_axis);
        out.cols[12..15].copy_from_slice(&self.cols[12..15]);
        out
    }

    // ---- view and projection ---------------------------------------------

    /// Right-handed view matrix looking from `eye` toward `center`.
    ///
    /// If `up` is parallel to the view direction the right axis collapses to
    /// zero rather than becoming NaN.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let z = (eye - center).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x).normalize();
        Self::view_from_basis(x, y, z, eye)
    }

    /// View matrix from an eye position and roll/pitch/yaw angles.
    ///
    /// `pitch` is measured from +Y (so `pi/2` is horizontal) and `yaw` around
    /// +Y with zero facing +Z. `roll` tilts the reference up vector about the
    /// view direction, which `look_at` cannot express.
    pub fn look_at_rpy(eye: Vec3, roll: f32, pitch: f32, yaw: f32) -> Self {
        let (sin_r, cos_r) = roll.sin_cos();
        let (sin_p, cos_p) = pitch.sin_cos();
        let (sin_y, cos_y) = yaw.sin_cos();

        let z = Vec3::new(-sin_p * sin_y, -cos_p, -sin_p * cos_y);
        let up = Vec3::new(-sin_r * cos_y, cos_r, sin_r * sin_y);
        let x = up.cross(z).normalize();
        let y = z.cross(x).normalize();
        Self::view_from_basis(x, y, z, eye)
    }

    /// Basis vectors become the rows of the rotation part; the translation
    /// moves `eye` to the origin.
    fn view_from_basis(x: Vec3, y: Vec3, z: Vec3, eye: Vec3) -> Self {
        Self {
            cols: [
                x.x,
                y.x,
                z.x,
                0.0,
                x.y,
                y.y,
                z.y,
                0.0,
                x.z,
                y.z,
                z.z,
                0.0,
                -x.dot(eye),
                -y.dot(eye),
                -z.dot(eye),
                1.0,
            ],
        }
    }

    /// OpenGL-style perspective projection (depth mapped to `[-1, 1]`,
    /// `w = -z`). `fov_y` is in radians.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = 1.0 / (near - far);

        let mut m = Self::ZERO;
        m.cols[0] = f / aspect;
        m.cols[5] = f;
        m.cols[10] = (far + near) * nf;
        m.cols[11] = -1.0;
        m.cols[14] = 2.0 * far * near * nf;
        m
    }

    /// OpenGL-style orthographic projection of the given box.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let lr = 1.0 / (left - right);
        let bt = 1.0 / (bottom - top);
        let nf = 1.0 / (near - far);

        let mut m = Self::IDENTITY;
        m.cols[0] = -2.0 * lr;
        m.cols[5] = -2.0 * bt;
        m.cols[10] = 2.0 * nf;
        m.cols[12] = (left + right) * lr;
        m.cols[13] = (top + bottom) * bt;
        m.cols[14] = (far + near) * nf;
        m
    }

    // ---- algebra -----------------------------------------------------------

    pub fn mul_mat4(&self, rhs: &Self) -> Self {
        let a = &self.cols;
        let mut cols = [0.0; 16];
        for c in 0..4 {
            let b = &rhs.cols[c * 4..c * 4 + 4];
            for r in 0..4 {
                cols[c * 4 + r] =
                    b[0] * a[r] + b[1] * a[4 + r] + b[2] * a[8 + r] + b[3] * a[12 + r];
            }
        }
        Self { cols }
    }

    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        let m = &self.cols;
        Vec4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }

    /// Transform a position (`w = 1`), ignoring any projective row.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.mul_vec4(p.extend(1.0)).to_vec3()
    }

    /// Transform a direction (`w = 0`); translation has no effect.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.mul_vec4(v.extend(0.0)).to_vec3()
    }

    pub fn transpose(&self) -> Self {
        let mut cols = [0.0; 16];
        for c in 0..4 {
            for r in 0..4 {
                cols[c * 4 + r] = self.cols[r * 4 + c];
            }
        }
        Self { cols }
    }

    /// Upper-left 3x3 linear part; translation and the projective row are
    /// dropped.
    pub fn to_mat3(&self) -> Mat3 {
        let m = &self.cols;
        Mat3::from_cols_array([m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]])
    }

    /// Full inverse by cofactor expansion over six pairs of 2x2
    /// sub-determinants. A determinant of exactly zero is reported as
    /// [`MatrixError::Singular`].
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let [
            a00, a01, a02, a03,
            a10, a11, a12, a13,
            a20, a21, a22, a23,
            a30, a31, a32, a33,
        ] = self.cols;

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == 0.0 {
            return Err(MatrixError::Singular { dim: 4 });
        }
        let inv = 1.0 / det;

        Ok(Self {
            cols: [
                (a11 * b11 - a12 * b10 + a13 * b09) * inv,
                (-a01 * b11 + a02 * b10 - a03 * b09) * inv,
                (a31 * b05 - a32 * b04 + a33 * b03) * inv,
                (-a21 * b05 + a22 * b04 - a23 * b03) * inv,
                (-a10 * b11 + a12 * b08 - a13 * b07) * inv,
                (a00 * b11 - a02 * b08 + a03 * b07) * inv,
                (-a30 * b05 + a32 * b02 - a33 * b01) * inv,
                (a20 * b05 - a22 * b02 + a23 * b01) * inv,
                (a10 * b10 - a11 * b08 + a13 * b06) * inv,
                (-a00 * b10 + a01 * b08 - a03 * b06) * inv,
                (a30 * b04 - a31 * b02 + a33 * b00) * inv,
                (-a20 * b04 + a21 * b02 - a23 * b00) * inv,
                (-a10 * b09 + a11 * b07 - a12 * b06) * inv,
                (a00 * b09 - a01 * b07 + a02 * b06) * inv,
                (-a30 * b03 + a31 * b01 - a32 * b00) * inv,
                (a20 * b03 - a21 * b01 + a22 * b00) * inv,
            ],
        })
    }

    /// Element-wise comparison within an absolute tolerance.
    pub fn abs_diff_eq(&self, rhs: &Self, max_abs_diff: f32) -> bool {
        self.cols
            .iter()
            .zip(rhs.cols.iter())
            .all(|(a, b)| (a - b).abs() <= max_abs_diff)
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.cols[index]
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_mat4(&rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        self.mul_vec4(rhs)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(cols: [f32; 16]) -> Self {
        Self { cols }
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(m: Mat4) -> Self {
        m.cols
    }
}

impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        glam::Mat4::from_cols_array(&m.cols)
    }
}

impl From<glam::Mat4> for Mat4 {
    fn from(m: glam::Mat4) -> Self {
        Self {
            cols: m.to_cols_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use super::*;

    const EPS: f32 = 1e-5;

    fn affine() -> Mat4 {
        Mat4::from_scale(2.0, 0.5, 1.5)
            .rotate_x(0.4)
            .rotate_y(-1.1)
            .translate(3.0, -2.0, 7.0)
    }

    fn assert_mat_near(a: &Mat4, b: &Mat4, eps: f32) {
        assert!(a.abs_diff_eq(b, eps), "\n{a:?}\n!=\n{b:?}");
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn identity_is_neutral() {
        let x = affine();
        assert_eq!(Mat4::IDENTITY * x, x);
        assert_eq!(x * Mat4::IDENTITY, x);
        let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(Mat4::IDENTITY * v, v);
    }

    #[test]
    fn multiply_applies_right_operand_first() {
        let t = Mat4::from_translation(1.0, 0.0, 0.0);
        let s = Mat4::from_uniform_scale(2.0);
        let p = Vec3::new(1.0, 0.0, 0.0);
        // scale then translate
        assert_eq!((t * s).transform_point(p), Vec3::new(3.0, 0.0, 0.0));
        // translate then scale
        assert_eq!((s * t).transform_point(p), Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(s.translate(1.0, 0.0, 0.0), t * s);
    }

    #[test]
    fn multiply_matches_glam() {
        let a = affine();
        let b = Mat4::perspective(1.0, 1.5, 0.1, 50.0);
        let ours = a * b;
        let theirs = Mat4::from(glam::Mat4::from(a) * glam::Mat4::from(b));
        assert_mat_near(&ours, &theirs, EPS);
    }

    #[test]
    fn inverse_round_trip() {
        let m = affine();
        let inv = m.inverse().unwrap();
        assert_mat_near(&(m * inv), &Mat4::IDENTITY, EPS);
        assert_mat_near(&(inv * m), &Mat4::IDENTITY, EPS);

        let p = Mat4::perspective(FRAC_PI_2, 1.0, 0.1, 100.0);
        let p_inv = p.inverse().unwrap();
        assert_mat_near(&(p * p_inv), &Mat4::IDENTITY, 1e-4);
    }

    #[test]
    fn inverse_matches_glam() {
        let m = affine();
        let theirs = Mat4::from(glam::Mat4::from(m).inverse());
        assert_mat_near(&m.inverse().unwrap(), &theirs, EPS);
    }

    #[test]
    fn singular_inverse_is_an_error() {
        assert_eq!(Mat4::ZERO.inverse(), Err(MatrixError::Singular { dim: 4 }));
        assert_eq!(
            Mat4::from_scale(1.0, 1.0, 0.0).inverse(),
            Err(MatrixError::Singular { dim: 4 })
        );
    }

    #[test]
    fn look_at_down_negative_z() {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        // third row is the backward axis
        assert_eq!(Vec3::new(view[2], view[6], view[10]), Vec3::Z);
        // no roll: right and up stay on world axes
        assert_eq!(Vec3::new(view[0], view[4], view[8]), Vec3::X);
        assert_eq!(Vec3::new(view[1], view[5], view[9]), Vec3::Y);
        let origin = view * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.z + 5.0).abs() < EPS);
    }

    #[test]
    fn look_at_matches_glam() {
        let eye = Vec3::new(3.0, 4.0, -2.0);
        let center = Vec3::new(-1.0, 0.5, 2.0);
        let ours = Mat4::look_at(eye, center, Vec3::Y);
        let theirs = Mat4::from(glam::Mat4::look_at_rh(eye.into(), center.into(), glam::Vec3::Y));
        assert_mat_near(&ours, &theirs, EPS);
    }

    #[test]
    fn look_at_with_parallel_up_has_no_nan() {
        let view = Mat4::look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y);
        assert!(view.to_cols_array().iter().all(|v| v.is_finite()));
        assert_eq!(Vec3::new(view[0], view[4], view[8]), Vec3::ZERO);
    }

    #[test]
    fn look_at_rpy_level_matches_look_at() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        // pitch pi/2 is horizontal, yaw pi faces -Z
        let rpy = Mat4::look_at_rpy(eye, 0.0, FRAC_PI_2, PI);
        let target = eye + Vec3::new(0.0, 0.0, -1.0);
        let la = Mat4::look_at(eye, target, Vec3::Y);
        assert_mat_near(&rpy, &la, EPS);
    }

    #[test]
    fn look_at_rpy_direction_follows_yaw_and_pitch() {
        let eye = Vec3::ZERO;
        for (pitch, yaw) in [(1.0, 0.3), (2.0, -2.5), (0.5, 4.0)] {
            let (sp, cp) = f32::sin_cos(pitch);
            let (sy, cy) = f32::sin_cos(yaw);
            let dir = Vec3::new(sp * sy, cp, sp * cy);
            let rpy = Mat4::look_at_rpy(eye, 0.0, pitch, yaw);
            let la = Mat4::look_at(eye, dir, Vec3::Y);
            assert_mat_near(&rpy, &la, 1e-4);
        }
    }

    #[test]
    fn look_at_rpy_roll_tilts_up_axis() {
        let view = Mat4::look_at_rpy(Vec3::ZERO, FRAC_PI_2, FRAC_PI_2, PI);
        // view direction unchanged
        assert!(Vec3::new(view[2], view[6], view[10]).abs_diff_eq(Vec3::Z, EPS));
        // camera up now lies along world +/-X
        let up = Vec3::new(view[1], view[5], view[9]);
        assert!(up.y.abs() < EPS);
        assert!((up.x.abs() - 1.0).abs() < EPS);
    }

    #[test]
    fn perspective_maps_near_and_far_to_clip_bounds() {
        let (near, far) = (0.1_f32, 100.0_f32);
        let proj = Mat4::perspective(FRAC_PI_2, 1.0, near, far);

        let n = proj * Vec4::new(0.0, 0.0, -near, 1.0);
        assert!((n.z / n.w + 1.0).abs() < 1e-4);
        assert!((n.w - near).abs() < EPS);

        let f = proj * Vec4::new(0.0, 0.0, -far, 1.0);
        assert!((f.z / f.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn perspective_matches_glam_gl() {
        let ours = Mat4::perspective(1.2, 16.0 / 9.0, 0.1, 130.0);
        let theirs = Mat4::from(glam::Mat4::perspective_rh_gl(1.2, 16.0 / 9.0, 0.1, 130.0));
        assert_mat_near(&ours, &theirs, EPS);
    }

    #[test]
    fn orthographic_maps_box_to_unit_cube() {
        let proj = Mat4::orthographic(-2.0, 4.0, -1.0, 3.0, 0.5, 10.0);
        let lo = proj.transform_point(Vec3::new(-2.0, -1.0, -0.5));
        let hi = proj.transform_point(Vec3::new(4.0, 3.0, -10.0));
        assert!(lo.abs_diff_eq(Vec3::new(-1.0, -1.0, -1.0), EPS));
        assert!(hi.abs_diff_eq(Vec3::new(1.0, 1.0, 1.0), EPS));
        assert_eq!(proj[15], 1.0);
        let theirs = Mat4::from(glam::Mat4::orthographic_rh_gl(-2.0, 4.0, -1.0, 3.0, 0.5, 10.0));
        assert_mat_near(&proj, &theirs, EPS);
    }

    #[test]
    fn elementary_rotations_agree_with_axis_angle() {
        let angle = 0.7;
        assert_mat_near(
            &Mat4::from_rotation_x(angle),
            &Mat4::from_axis_angle(Vec3::X, angle),
            EPS,
        );
        assert_mat_near(
            &Mat4::from_rotation_y(angle),
            &Mat4::from_axis_angle(Vec3::Y, angle),
            EPS,
        );
        assert_mat_near(
            &Mat4::from_rotation_z(angle),
            &Mat4::from_axis_angle(Vec3::Z, angle),
            EPS,
        );
    }

    #[test]
    fn rotate_y_quarter_turn_takes_z_to_x() {
        let r = Mat4::IDENTITY.rotate_y(FRAC_PI_2);
        assert!(r.transform_vector(Vec3::Z).abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn rotate_axis_full_turn_is_identity() {
        let m = affine();
        assert_mat_near(&m.rotate_axis(TAU, Vec3::Y), &m, 1e-4);
        assert_mat_near(
            &Mat4::IDENTITY.rotate_axis(TAU, Vec3::new(1.0, 2.0, -3.0)),
            &Mat4::IDENTITY,
            EPS,
        );
    }

    #[test]
    fn rotate_axis_normalizes_its_axis() {
        let a = Mat4::IDENTITY.rotate_axis(0.5, Vec3::new(0.0, 10.0, 0.0));
        assert_mat_near(&a, &Mat4::from_rotation_y(0.5), EPS);
    }

    #[test]
    fn self_scale_acts_in_local_frame() {
        let m = Mat4::from_translation(5.0, 0.0, 0.0).self_scale(2.0, 2.0, 2.0);
        // translation untouched, local unit X now spans two world units
        assert_eq!(m.translation(), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(m.transform_point(Vec3::X), Vec3::new(7.0, 0.0, 0.0));
    }

    #[test]
    fn self_translate_follows_local_axes() {
        let m = Mat4::from_rotation_y(FRAC_PI_2).translate(1.0, 0.0, 0.0);
        let moved = m.self_translate(0.0, 0.0, 4.0);
        // local +Z points along world +X after the quarter turn
        assert!(moved.translation().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn self_rotation_keeps_translation() {
        let m = Mat4::from_translation(0.0, 0.0, 5.0).rotate_z(0.3);
        for rotated in [m.self_rotate_x(1.0), m.self_rotate_y(1.0), m.self_rotate_z(1.0)] {
            assert_eq!(rotated.translation(), m.translation());
        }
    }

    #[test]
    fn self_rotate_y_spins_about_local_axis() {
        // tilt the frame, then spin around its own (tilted) up axis
        let tilted = Mat4::from_rotation_z(0.5).translate(0.0, 0.0, 5.0);
        let local_up = tilted.transform_vector(Vec3::Y);
        let spun = tilted.self_rotate_y(1.3);
        // the local up axis is the rotation axis, so it is preserved
        assert!(spun.transform_vector(Vec3::Y).abs_diff_eq(local_up, EPS));
        // but local X moved
        assert!(!spun
            .transform_vector(Vec3::X)
            .abs_diff_eq(tilted.transform_vector(Vec3::X), 1e-3));
    }

    #[test]
    fn self_rotate_matches_post_multiplication_for_rigid_frames() {
        let frame = Mat4::from_rotation_x(0.2).translate(1.0, 2.0, 3.0);
        let expected = frame * Mat4::from_rotation_y(0.8);
        assert_mat_near(&frame.self_rotate_y(0.8), &expected, EPS);
    }

    #[test]
    fn to_mat3_drops_translation() {
        let m = Mat4::from_translation(4.0, 5.0, 6.0).rotate_x(0.25);
        let linear = m.to_mat3();
        let expected = Mat4::from_rotation_x(0.25).to_mat3();
        assert!(linear.abs_diff_eq(&expected, EPS));
    }

    #[test]
    fn transpose_twice_is_identity_op() {
        let m = affine();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose()[3], m[12]);
    }

    #[test]
    #[should_panic(expected = "Mat4 expects 16 elements")]
    fn from_slice_rejects_ragged_input() {
        let _ = Mat4::from_slice(&[0.0; 12]);
    }

    #[test]
    fn serde_round_trip_is_column_major_array() {
        let m = Mat4::from_translation(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("[1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0,0.0,1.0,2.0,3.0,1.0]"));
        let back: Mat4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
