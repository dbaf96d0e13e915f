use num::cast::{FromPrimitive, ToPrimitive};
use num::traits::{Float, Num};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Generic types that can be stored in the lib containers
pub trait ValueType:
    Num
    + Mini
    + Maxi
    + PartialOrd
    + ToPrimitive
    + FromPrimitive
    + Copy
    + AddAssign
    + DivAssign
    + MulAssign
    + SubAssign
{
}
pub trait FloatValueType: ValueType + Float {}

// Impls for all matching types
impl<T> ValueType for T where
    T: Num
        + Mini
        + Maxi
        + PartialOrd
        + ToPrimitive
        + FromPrimitive
        + Copy
        + AddAssign
        + DivAssign
        + MulAssign
        + SubAssign
{
}
impl<T> FloatValueType for T where T: ValueType + Float {}

/// Trait that maps to number types that implement `fn min(&self, other)`
pub trait Mini {
    /// Returns self.min(other)
    fn mini(&self, other: Self) -> Self;
}

/// Trait that maps to number types that implement `fn max(&self, other)`
pub trait Maxi {
    /// Returns self.max(other)
    fn maxi(&self, other: Self) -> Self;
}

macro_rules! impl_mini_maxi_float {
    ( $( $t:ty ),+ ) => {
        $(
            impl Mini for $t {
                fn mini(&self, other: $t) -> $t {
                    self.min(other)
                }
            }

            impl Maxi for $t {
                fn maxi(&self, other: $t) -> $t {
                    self.max(other)
                }
            }
        )*
    }
}
impl_mini_maxi_float!(f32, f64);

macro_rules! impl_mini_maxi_integer {
    ( $( $t:ty ),+ ) => {
        $(
            impl Mini for $t {
                fn mini(&self, other: $t) -> $t {
                    *self.min(&other)
                }
            }

            impl Maxi for $t {
                fn maxi(&self, other: $t) -> $t {
                    *self.max(&other)
                }
            }
        )*
    }
}
impl_mini_maxi_integer!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Implements the shared surface of the fixed-size component containers:
/// construction, component-wise arithmetic, scalar arithmetic and `approx` comparisons.
///
/// Expanded per struct using the concrete component names so any naming
/// convention (`x, y, z` or `r, g, b`) works.
macro_rules! impl_vec_like {
    ($name:ident { $($c:ident),+ }) => {
        impl<T> $name<T>
        where
            T: ValueType,
        {
            /// Creates a new instance with the given components.
            ///
            /// Has a debug assert that checks for NaNs.
            #[inline]
            pub fn new($($c: T),+) -> Self {
                let v = Self { $($c),+ };
                debug_assert!(!v.has_nans());
                v
            }

            /// Creates a new instance with all components set to zero.
            #[inline]
            pub fn zeros() -> Self {
                Self { $($c: T::zero()),+ }
            }

            /// Creates a new instance with all components set to one.
            #[inline]
            pub fn ones() -> Self {
                Self { $($c: T::one()),+ }
            }

            /// Creates a new instance with all components set to `v`.
            #[inline]
            pub fn splat(v: T) -> Self {
                Self { $($c: v),+ }
            }

            /// Returns `true` if any component is NaN.
            #[inline]
            pub fn has_nans(&self) -> bool {
                // Cast to f64 since it is currently the largest floating point type
                false $(|| self.$c.to_f64().map_or(true, f64::is_nan))+
            }

            /// Calculates the dot product of this and another instance.
            #[inline]
            pub fn dot(&self, other: Self) -> T {
                let mut sum = T::zero();
                $(sum += self.$c * other.$c;)+
                sum
            }

            /// Calculates the squared length.
            #[inline]
            pub fn len_sqr(&self) -> T {
                self.dot(*self)
            }

            /// Returns the component-wise product.
            #[inline]
            pub fn mul_element(&self, other: Self) -> Self {
                Self { $($c: self.$c * other.$c),+ }
            }

            /// Returns the component-wise minimum.
            #[inline]
            pub fn min(&self, other: Self) -> Self {
                Self { $($c: self.$c.mini(other.$c)),+ }
            }

            /// Returns the component-wise maximum.
            #[inline]
            pub fn max(&self, other: Self) -> Self {
                Self { $($c: self.$c.maxi(other.$c)),+ }
            }

            /// Clamps each component into `[lo, hi]`.
            #[inline]
            pub fn clamped(&self, lo: T, hi: T) -> Self {
                Self { $($c: self.$c.maxi(lo).mini(hi)),+ }
            }

            /// Applies `f` to each component.
            #[inline]
            pub fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
                Self { $($c: f(self.$c)),+ }
            }
        }

        impl<T> $name<T>
        where
            T: FloatValueType,
        {
            /// Calculates the length.
            #[inline]
            pub fn len(&self) -> T {
                self.len_sqr().sqrt()
            }

            /// Returns a unit length copy.
            #[inline]
            pub fn normalized(&self) -> Self {
                *self / self.len()
            }

            /// Returns a unit length copy, or `fallback` if the length is zero or not finite.
            #[inline]
            pub fn normalized_or(&self, fallback: Self) -> Self {
                let len = self.len();
                if len > T::zero() && len.is_finite() {
                    *self / len
                } else {
                    fallback
                }
            }

            /// Returns `true` if all components are finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                true $(&& self.$c.is_finite())+
            }

            /// Component-wise floor.
            #[inline]
            pub fn floor(&self) -> Self {
                Self { $($c: self.$c.floor()),+ }
            }

            /// Component-wise ceil.
            #[inline]
            pub fn ceil(&self) -> Self {
                Self { $($c: self.$c.ceil()),+ }
            }

            /// Component-wise `x - floor(x)`, always in `[0, 1)` for finite input.
            #[inline]
            pub fn fract(&self) -> Self {
                Self { $($c: self.$c - self.$c.floor()),+ }
            }

            /// Linear interpolation toward `other`, `t = 0` returns `self`.
            #[inline]
            pub fn lerp(&self, other: Self, t: T) -> Self {
                Self { $($c: self.$c * (T::one() - t) + other.$c * t),+ }
            }
        }

        impl<T> std::ops::Add for $name<T>
        where
            T: ValueType,
        {
            type Output = Self;

            #[inline]
            fn add(self, other: Self) -> Self {
                Self { $($c: self.$c + other.$c),+ }
            }
        }

        impl<T> std::ops::Sub for $name<T>
        where
            T: ValueType,
        {
            type Output = Self;

            #[inline]
            fn sub(self, other: Self) -> Self {
                Self { $($c: self.$c - other.$c),+ }
            }
        }

        impl<T> std::ops::Neg for $name<T>
        where
            T: ValueType + std::ops::Neg<Output = T>,
        {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($c: -self.$c),+ }
            }
        }

        impl<T> std::ops::Add<T> for $name<T>
        where
            T: ValueType,
        {
            type Output = Self;

            #[inline]
            fn add(self, s: T) -> Self {
                Self { $($c: self.$c + s),+ }
            }
        }

        impl<T> std::ops::Sub<T> for $name<T>
        where
            T: ValueType,
        {
            type Output = Self;

            #[inline]
            fn sub(self, s: T) -> Self {
                Self { $($c: self.$c - s),+ }
            }
        }

        impl<T> std::ops::Mul<T> for $name<T>
        where
            T: ValueType,
        {
            type Output = Self;

            #[inline]
            fn mul(self, s: T) -> Self {
                Self { $($c: self.$c * s),+ }
            }
        }

        impl<T> std::ops::Div<T> for $name<T>
        where
            T: ValueType,
        {
            type Output = Self;

            #[inline]
            fn div(self, s: T) -> Self {
                Self { $($c: self.$c / s),+ }
            }
        }

        impl<T> std::ops::AddAssign for $name<T>
        where
            T: ValueType,
        {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                $(self.$c += other.$c;)+
            }
        }

        impl<T> std::ops::SubAssign for $name<T>
        where
            T: ValueType,
        {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                $(self.$c -= other.$c;)+
            }
        }

        impl<T> std::ops::MulAssign<T> for $name<T>
        where
            T: ValueType,
        {
            #[inline]
            fn mul_assign(&mut self, s: T) {
                $(self.$c *= s;)+
            }
        }

        impl<T> std::ops::DivAssign<T> for $name<T>
        where
            T: ValueType,
        {
            #[inline]
            fn div_assign(&mut self, s: T) {
                $(self.$c /= s;)+
            }
        }

        impl<T> approx::AbsDiffEq for $name<T>
        where
            T: ValueType + approx::AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                true $(&& self.$c.abs_diff_eq(&other.$c, epsilon))+
            }
        }

        impl<T> approx::RelativeEq for $name<T>
        where
            T: ValueType + approx::RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                true $(&& self.$c.relative_eq(&other.$c, epsilon, max_relative))+
            }
        }
    };
}
