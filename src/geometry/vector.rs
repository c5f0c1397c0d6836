// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::ops::{Add, Mul, Sub};

use crate::{
    geometry::projection::{Axis, ProjectionAxes},
    numeric::scalar::Scalar,
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> Vector2<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    #[inline(always)]
    pub fn sub(&self, other: &Vector2<T>) -> Vector2<T> {
        Vector2::new(&self.x - &other.x, &self.y - &other.y)
    }

    /// Perp-dot product, `self.x * other.y - other.x * self.y`.
    #[inline(always)]
    pub fn cross(&self, other: &Vector2<T>) -> T {
        &(&self.x * &other.y) - &(&other.x * &self.y)
    }

    #[inline(always)]
    pub fn scale(&self, s: &T) -> Vector2<T> {
        Vector2::new(s * &self.x, s * &self.y)
    }

    /// `s1 * v1 + s2 * v2`
    #[inline(always)]
    pub fn scaled_sum(s1: &T, v1: &Vector2<T>, s2: &T, v2: &Vector2<T>) -> Vector2<T> {
        Vector2::new(
            &(s1 * &v1.x) + &(s2 * &v2.x),
            &(s1 * &v1.y) + &(s2 * &v2.y),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn try_map<U, E>(&self, mut f: impl FnMut(&T) -> Result<U, E>) -> Result<Vector3<U>, E> {
        Ok(Vector3::new(f(&self.x)?, f(&self.y)?, f(&self.z)?))
    }

    #[inline(always)]
    pub fn component(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl<T: Scalar> Vector3<T> {
    /// Drops the axis `axes` leaves out.
    #[inline(always)]
    pub fn project(&self, axes: ProjectionAxes) -> Vector2<T> {
        Vector2::new(
            self.component(axes.i0).clone(),
            self.component(axes.i1).clone(),
        )
    }
}

impl<T> Vector3<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    #[inline(always)]
    pub fn add(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(&self.x + &other.x, &self.y + &other.y, &self.z + &other.z)
    }

    #[inline(always)]
    pub fn sub(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(&self.x - &other.x, &self.y - &other.y, &self.z - &other.z)
    }

    #[inline(always)]
    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: &(&self.y * &other.z) - &(&self.z * &other.y),
            y: &(&self.z * &other.x) - &(&self.x * &other.z),
            z: &(&self.x * &other.y) - &(&self.y * &other.x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn add_and_sub_are_componentwise() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -1.0, 4.0);
        assert_eq!(a.add(&b), Vector3::new(1.5, 1.0, 7.0));
        assert_eq!(a.sub(&b), Vector3::new(0.5, 3.0, -1.0));
        assert_eq!(a.sub(&b).add(&b), a);
        assert_eq!(Vector2::new(1.0, 2.0).sub(&Vector2::new(3.0, -1.0)), Vector2::new(-2.0, 3.0));
    }

    #[test]
    fn perp_dot_sign() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 1.0);
        assert_eq!(a.cross(&b), 1.0);
        assert_eq!(b.cross(&a), -1.0);
    }

    #[test]
    fn scaled_sum_combines_both_terms() {
        let v = Vector2::scaled_sum(&2.0, &Vector2::new(1.0, 2.0), &-1.0, &Vector2::new(3.0, 5.0));
        assert_eq!(v, Vector2::new(-1.0, -1.0));
    }

    #[test]
    fn projection_keeps_selected_components() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.project(ProjectionAxes::YZ), Vector2::new(2.0, 3.0));
        assert_eq!(v.project(ProjectionAxes::XZ), Vector2::new(1.0, 3.0));
        assert_eq!(v.project(ProjectionAxes::XY), Vector2::new(1.0, 2.0));
    }
}
