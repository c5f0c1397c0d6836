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
        edge_edge_intersect::edge_against_tri_edges,
        point_in_tri::point_in_tri_2d,
        projection::ProjectionAxes,
        tri_tri_intersect::{CoplanarContact, TriTriIntersectionResult},
        vector::Vector3,
    },
    numeric::scalar::Scalar,
};

/// Tests two triangles known to share a plane with normal `n`.
///
/// This is Möller's coplanar test ("A Fast Triangle-Triangle Intersection
/// Test", 1997). Both triangles are flattened onto the axis-aligned plane with
/// the largest projected area. Every edge of `v` is tried against every edge of
/// `u`; failing that, `v0` is tested inside `u` and `u0` inside `v`, which
/// catches one triangle lying wholly inside the other.
pub fn coplanar_tri_tri<T>(
    n: &Vector3<T>,
    v0: &Vector3<T>,
    v1: &Vector3<T>,
    v2: &Vector3<T>,
    u0: &Vector3<T>,
    u1: &Vector3<T>,
    u2: &Vector3<T>,
) -> TriTriIntersectionResult
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let axes = ProjectionAxes::for_normal(n);
    let [v0, v1, v2, u0, u1, u2] = [v0, v1, v2, u0, u1, u2].map(|p| p.project(axes));

    if edge_against_tri_edges(&v0, &v1, &u0, &u1, &u2)
        || edge_against_tri_edges(&v1, &v2, &u0, &u1, &u2)
        || edge_against_tri_edges(&v2, &v0, &u0, &u1, &u2)
    {
        return TriTriIntersectionResult::Coplanar(CoplanarContact::EdgeCrossing);
    }

    if point_in_tri_2d(&v0, &u0, &u1, &u2) || point_in_tri_2d(&u0, &v0, &v1, &v2) {
        return TriTriIntersectionResult::Coplanar(CoplanarContact::Containment);
    }

    TriTriIntersectionResult::Disjoint
}
