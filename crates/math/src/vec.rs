use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Two-component vector (pointer positions, viewport sizes).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Three-component vector (positions, directions, normals).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Four-component vector (homogeneous coordinates).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

macro_rules! impl_vec {
    ($name:ident, $n:literal, $($f:ident),+) => {
        impl $name {
            pub const ZERO: Self = Self { $($f: 0.0),+ };

            pub const fn new($($f: f32),+) -> Self {
                Self { $($f),+ }
            }

            /// Build from a slice holding exactly the right number of components.
            ///
            /// # Panics
            /// Panics if `slice.len()` differs from the vector arity.
            pub fn from_slice(slice: &[f32]) -> Self {
                match <[f32; $n]>::try_from(slice) {
                    Ok(array) => Self::from(array),
                    Err(_) => panic!(
                        "{} expects {} components, got {}",
                        stringify!($name),
                        $n,
                        slice.len()
                    ),
                }
            }

            pub fn to_array(self) -> [f32; $n] {
                [$(self.$f),+]
            }

            pub fn dot(self, rhs: Self) -> f32 {
                0.0 $(+ self.$f * rhs.$f)+
            }

            /// Euclidean length.
            pub fn magnitude(self) -> f32 {
                self.dot(self).sqrt()
            }

            /// Unit-length copy of `self`. The zero vector normalizes to itself.
            pub fn normalize(self) -> Self {
                let len = self.magnitude();
                if len > 0.0 {
                    self * (1.0 / len)
                } else {
                    Self::ZERO
                }
            }

            /// Component-wise comparison within an absolute tolerance.
            pub fn abs_diff_eq(self, rhs: Self, max_abs_diff: f32) -> bool {
                true $(&& (self.$f - rhs.$f).abs() <= max_abs_diff)+
            }
        }

        impl From<[f32; $n]> for $name {
            fn from(array: [f32; $n]) -> Self {
                let [$($f),+] = array;
                Self { $($f),+ }
            }
        }

        impl From<$name> for [f32; $n] {
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl From<$name> for glam::$name {
            fn from(v: $name) -> Self {
                glam::$name::new($(v.$f),+)
            }
        }

        impl From<glam::$name> for $name {
            fn from(v: glam::$name) -> Self {
                Self::new($(v.$f),+)
            }
        }

        impl Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }

        impl Mul<$name> for f32 {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$f += rhs.$f;)+
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$f -= rhs.$f;)+
            }
        }
    };
}

impl_vec!(Vec2, 2, x, y);
impl_vec!(Vec3, 3, x, y, z);
impl_vec!(Vec4, 4, x, y, z, w);

impl Vec3 {
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Right-handed cross product. Parallel inputs give the zero vector.
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl Vec4 {
    /// Drop the `w` component.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}
