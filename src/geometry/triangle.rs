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
    geometry::{
        tri_tri_intersect::{TriTriIntersectionResult, tri_tri_intersect_3d},
        vector::Vector3,
    },
    numeric::scalar::Scalar,
};

/// A triangle given by its three corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T> {
    pub a: Vector3<T>,
    pub b: Vector3<T>,
    pub c: Vector3<T>,
}

/// A triangle given by a base vertex and the two edges leaving it.
///
/// The corners are `origin`, `origin + e1` and `origin + e2`. This is the form
/// the separating-plane test works in: its determinants only ever see edge
/// vectors and the offset between the two base vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeTriangle<T> {
    pub origin: Vector3<T>,
    pub e1: Vector3<T>,
    pub e2: Vector3<T>,
}

impl<T> Triangle<T> {
    pub const fn new(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        Self { a, b, c }
    }
}

impl<T> Triangle<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    /// Unnormalized normal `(b - a) x (c - a)`.
    pub fn normal(&self) -> Vector3<T> {
        self.b.sub(&self.a).cross(&self.c.sub(&self.a))
    }

    pub fn to_edge_form(&self) -> EdgeTriangle<T> {
        EdgeTriangle::new(self.a.clone(), self.b.sub(&self.a), self.c.sub(&self.a))
    }
}

impl<T> EdgeTriangle<T> {
    pub const fn new(origin: Vector3<T>, e1: Vector3<T>, e2: Vector3<T>) -> Self {
        Self { origin, e1, e2 }
    }
}

impl<T> EdgeTriangle<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    pub fn from_vertices(a: &Vector3<T>, b: &Vector3<T>, c: &Vector3<T>) -> Self {
        EdgeTriangle::new(a.clone(), b.sub(a), c.sub(a))
    }

    pub fn to_vertex_form(&self) -> Triangle<T> {
        Triangle::new(
            self.origin.clone(),
            self.origin.add(&self.e1),
            self.origin.add(&self.e2),
        )
    }

    /// Unnormalized normal `e1 x e2`.
    pub fn normal(&self) -> Vector3<T> {
        self.e1.cross(&self.e2)
    }

    /// Classifies this triangle against `other`.
    pub fn intersect(&self, other: &EdgeTriangle<T>) -> TriTriIntersectionResult {
        tri_tri_intersect_3d(
            &self.origin,
            &self.e1,
            &self.e2,
            &other.origin,
            &other.e1,
            &other.e2,
        )
    }

    pub fn intersects(&self, other: &EdgeTriangle<T>) -> bool {
        self.intersect(other).is_intersecting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_and_vertex_forms_round_trip() {
        let t = Triangle::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 2.0, 3.0),
            Vector3::new(1.0, 6.0, 3.0),
        );
        let e = t.to_edge_form();
        assert_eq!(e.e1, Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(e.e2, Vector3::new(0.0, 4.0, 0.0));
        assert_eq!(e.to_vertex_form(), t);
        assert_eq!(e.normal(), t.normal());
        assert_eq!(t.normal(), Vector3::new(0.0, 0.0, 12.0));
    }
}
