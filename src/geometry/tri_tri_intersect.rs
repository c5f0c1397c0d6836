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

use log::trace;

use crate::{
    geometry::{
        coplanar::coplanar_tri_tri, projection::ProjectionAxes,
        segment_interval::resolve_segment_interval, vector::Vector2, vector::Vector3,
    },
    numeric::scalar::Scalar,
};

/// Which two edges of the first triangle bound the stretch of the reduced 2D
/// problem that the second triangle's segment overlaps. Edges are numbered from
/// the base vertex: first = `e1`, second = `e2`, third = the edge between their
/// tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgePair {
    FirstSecond,
    FirstThird,
    SecondThird,
}

impl EdgePair {
    pub const fn code(self) -> u8 {
        match self {
            EdgePair::FirstSecond => 12,
            EdgePair::FirstThird => 13,
            EdgePair::SecondThird => 23,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoplanarContact {
    /// Some edge of one triangle touches or crosses an edge of the other.
    EdgeCrossing,
    /// No edges meet, and one triangle holds a vertex of the other strictly inside.
    Containment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriTriIntersectionResult {
    Disjoint,
    /// Found by the separating-plane reduction.
    Crossing(EdgePair),
    /// Found by the coplanar fallback.
    Coplanar(CoplanarContact),
}

impl TriTriIntersectionResult {
    pub const fn is_intersecting(&self) -> bool {
        !matches!(self, TriTriIntersectionResult::Disjoint)
    }

    /// Integer code of the classification: 0 when disjoint, 1 for a coplanar
    /// overlap, 12, 13 or 23 for a crossing (see [`EdgePair::code`]).
    pub const fn code(&self) -> u8 {
        match self {
            TriTriIntersectionResult::Disjoint => 0,
            TriTriIntersectionResult::Crossing(pair) => pair.code(),
            TriTriIntersectionResult::Coplanar(_) => 1,
        }
    }
}

#[inline(always)]
fn plane_side<T>(v: &Vector3<T>, dp0: &T, dp1: &T, dp2: &T) -> T
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    &(&(&v.x * dp0) - &(&v.y * dp1)) + &(&v.z * dp2)
}

/// Triangle-triangle intersection test of Tropp, Tal and Shimshoni ("A fast
/// triangle to triangle intersection test for collision detection", 2006).
///
/// Triangle A is `c1, c1 + p1, c1 + p2` and triangle B is `d1, d1 + q1,
/// d1 + q2`. The signed volumes of B's edges against A's plane locate where B
/// crosses that plane; the crossing segment is then tested against A in 2D by
/// [`resolve_segment_interval`]. Each ratio is kept as a product with its
/// denominator instead of being divided out, so the whole test is division
/// free. When B lies in A's plane the answer comes from [`coplanar_tri_tri`].
///
/// The 2D part runs on the axis-aligned plane that drops the dominant
/// component of A's normal, so triangles standing perpendicular to the xy
/// plane are handled as well as any other.
///
/// Exact coincidences (a vertex of one triangle lying on the other's plane,
/// the crossing line passing through a vertex of A) may classify either way,
/// as may zero-area triangles. NaN coordinates fail every comparison and come
/// out [`TriTriIntersectionResult::Disjoint`].
pub fn tri_tri_intersect_3d<T>(
    c1: &Vector3<T>,
    p1: &Vector3<T>,
    p2: &Vector3<T>,
    d1: &Vector3<T>,
    q1: &Vector3<T>,
    q2: &Vector3<T>,
) -> TriTriIntersectionResult
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let r = d1.sub(c1);

    // A's normal is (dp0, -dp1, dp2)
    let dp0 = &(&p1.y * &p2.z) - &(&p2.y * &p1.z);
    let dp1 = &(&p1.x * &p2.z) - &(&p2.x * &p1.z);
    let dp2 = &(&p1.x * &p2.y) - &(&p2.x * &p1.y);

    let dq1 = plane_side(q1, &dp0, &dp1, &dp2);
    let dq2 = plane_side(q2, &dp0, &dp1, &dp2);
    let dr = &(&(&r.y * &dp1) - &(&r.x * &dp0)) - &(&r.z * &dp2);

    // beta_i scaled by dq1 * dq2
    let beta1 = &dr * &dq2;
    let beta2 = &dr * &dq1;
    let q1_edge_legal = beta2.is_positive_or_zero() && beta2 <= &dq1 * &dq1 && !dq1.is_zero();
    let q2_edge_legal = beta1.is_positive_or_zero() && beta1 <= &dq2 * &dq2 && !dq2.is_zero();

    if dq1.is_zero() && dq2.is_zero() {
        if !dr.is_zero() {
            trace!("parallel planes, offset {}", dr.approx());
            return TriTriIntersectionResult::Disjoint;
        }
        trace!("coplanar triangles, falling back to the planar test");
        let n1 = p1.cross(p2);
        return coplanar_tri_tri(&n1, c1, &c1.add(p1), &c1.add(p2), d1, &d1.add(q1), &d1.add(q2));
    }

    // B does not cross A's plane
    if !q1_edge_legal && !q2_edge_legal {
        return TriTriIntersectionResult::Disjoint;
    }

    let axes = ProjectionAxes::dropping_dominant(&dp0.abs(), &dp1.abs(), &dp2.abs());
    let [p1, p2, q1, q2, r] = [p1, p2, q1, q2, &r].map(|v| v.project(axes));

    let dq3 = &dq2 - &dq1;
    let dr3 = &dr - &dq1;

    // t runs between the two points where B meets A's plane, r4 is the first
    // of them; both relative to c1 and scaled by sf.
    let (sf, t, anchor, anchor_beta) = if q1_edge_legal && q2_edge_legal {
        let sf = &dq1 * &dq2;
        let t = Vector2::scaled_sum(&beta2, &q2, &(-beta1.clone()), &q1);
        (sf, t, &q1, beta1)
    } else if q1_edge_legal {
        let sf = &dq1 * &dq3;
        let beta1 = &beta1 - &beta2;
        let beta3 = &dr3 * &dq1;
        let t = Vector2::scaled_sum(&(&(&sf - &beta3) - &beta1), &q1, &beta3, &q2);
        (sf, t, &q1, beta1)
    } else {
        let sf = &dq2 * &dq3;
        let beta2 = &beta1 - &beta2;
        let beta3 = &dr3 * &dq2;
        let t = Vector2::scaled_sum(&(&sf - &beta3), &q1, &(&beta3 - &beta2), &q2);
        (sf, t, &q2, beta2)
    };
    let r4 = Vector2::scaled_sum(&sf, &r, &anchor_beta, anchor);

    match resolve_segment_interval(&sf, &p1, &p2, &t, &r4) {
        Some(pair) => TriTriIntersectionResult::Crossing(pair),
        None => TriTriIntersectionResult::Disjoint,
    }
}

/// Vertex-form convenience over [`tri_tri_intersect_3d`]: true if triangle
/// `p0 p1 p2` and triangle `q0 q1 q2` share at least one point.
pub fn tri_tri_overlap<T>(
    p0: &Vector3<T>,
    p1: &Vector3<T>,
    p2: &Vector3<T>,
    q0: &Vector3<T>,
    q1: &Vector3<T>,
    q2: &Vector3<T>,
) -> bool
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    tri_tri_intersect_3d(p0, &p1.sub(p0), &p2.sub(p0), q0, &q1.sub(q0), &q2.sub(q0)).is_intersecting()
}
