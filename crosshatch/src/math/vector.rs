use serde::{Deserialize, Serialize};

use super::common::{FloatValueType, ValueType};

/// A two-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Vec2<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
}

/// A three-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Vec3<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

/// A four-dimensional vector.
///
/// Used for homogeneous positions where `w` is the perspective divisor.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Vec4<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
    /// The w component of the vector.
    pub w: T,
}

impl_vec_like!(Vec2 { x, y });
impl_vec_like!(Vec3 { x, y, z });
impl_vec_like!(Vec4 { x, y, z, w });

/// Shorthand constructor for [`Vec2`].
#[inline]
pub fn vec2<T: ValueType>(x: T, y: T) -> Vec2<T> {
    Vec2::new(x, y)
}

/// Shorthand constructor for [`Vec3`].
#[inline]
pub fn vec3<T: ValueType>(x: T, y: T, z: T) -> Vec3<T> {
    Vec3::new(x, y, z)
}

/// Shorthand constructor for [`Vec4`].
#[inline]
pub fn vec4<T: ValueType>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vec4::new(x, y, z, w)
}

impl<T> Vec2<T>
where
    T: ValueType,
{
    /// Finds the value of the minimum component in this `Vec2`.
    #[inline]
    pub fn min_comp(&self) -> T {
        debug_assert!(!self.has_nans());

        self.x.mini(self.y)
    }

    /// Finds the value of the maximum component in this `Vec2`.
    #[inline]
    pub fn max_comp(&self) -> T {
        debug_assert!(!self.has_nans());

        self.x.maxi(self.y)
    }
}

impl<T> Vec3<T>
where
    T: ValueType,
{
    /// Finds the value of the minimum component in this `Vec3`.
    #[inline]
    pub fn min_comp(&self) -> T {
        debug_assert!(!self.has_nans());

        self.x.mini(self.y.mini(self.z))
    }

    /// Finds the value of the maximum component in this `Vec3`.
    #[inline]
    pub fn max_comp(&self) -> T {
        debug_assert!(!self.has_nans());

        self.x.maxi(self.y.maxi(self.z))
    }

    /// Projection onto the plane orthogonal to x.
    #[inline]
    pub fn yz(&self) -> Vec2<T> {
        Vec2 {
            x: self.y,
            y: self.z,
        }
    }

    /// Projection onto the plane orthogonal to y.
    #[inline]
    pub fn zx(&self) -> Vec2<T> {
        Vec2 {
            x: self.z,
            y: self.x,
        }
    }

    /// Projection onto the plane orthogonal to z.
    #[inline]
    pub fn xy(&self) -> Vec2<T> {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Extends this `Vec3` into a [`Vec4`] with the given `w`.
    #[inline]
    pub fn extend(&self, w: T) -> Vec4<T> {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w,
        }
    }
}

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Calculates the cross product of this `Vec3` and another `Vec3`.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        Self {
            x: (self.y * other.z) - (self.z * other.y),
            y: (self.z * other.x) - (self.x * other.z),
            z: (self.x * other.y) - (self.y * other.x),
        }
    }
}

impl<T> Vec4<T>
where
    T: ValueType,
{
    /// Drops the w component.
    #[inline]
    pub fn xyz(&self) -> Vec3<T> {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}
