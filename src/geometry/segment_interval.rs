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
    geometry::{tri_tri_intersect::EdgePair, vector::Vector2},
    numeric::scalar::Scalar,
};

/// `value / det^2` lies in `[0, 1]`, for a nonzero `det`.
#[inline(always)]
fn scaled_in_unit<T>(value: &T, det: &T) -> bool
where
    T: Scalar,
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    value.is_positive_or_zero() && *value <= det * det && !det.is_zero()
}

/// `gamma / det^2` lies in `[-1, 0]`.
#[inline(always)]
fn scaled_in_neg_unit<T>(gamma: &T, det: &T) -> bool
where
    T: Scalar,
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    gamma.is_negative_or_zero() && *gamma >= -(det * det)
}

/// The segment overlaps the chord the triangle cuts from its supporting line:
/// either chord end falls on the segment, or the chord ends straddle its start.
#[inline(always)]
fn overlaps_chord<T>(gamma_a: &T, det_a: &T, gamma_b: &T, det_b: &T) -> bool
where
    T: Scalar,
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    scaled_in_neg_unit(gamma_a, det_a)
        || scaled_in_neg_unit(gamma_b, det_b)
        || (gamma_a * gamma_b).is_negative()
}

/// Planar half of the separating-plane test.
///
/// Triangle A sits at the origin with edges `p1` and `p2`; the candidate
/// segment starts at `r` and runs along `q`. `r` and `q` arrive multiplied by
/// `sf`, and `p1`, `p2` are multiplied by it here, so every quantity compared
/// below carries the same even power of `sf` and its sign never matters.
///
/// The segment's line is intersected with the lines of A's three edges (`p1`,
/// `p2` and `p2 - p1`). An edge is usable when the crossing falls within it;
/// two usable edges bound the chord of the line inside A, which is then tested
/// against the segment. Returns the pair of A's edges that bound the
/// overlapping chord, or `None` when the segment misses A.
pub fn resolve_segment_interval<T>(
    sf: &T,
    p1: &Vector2<T>,
    p2: &Vector2<T>,
    q: &Vector2<T>,
    r: &Vector2<T>,
) -> Option<EdgePair>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let p1 = p1.scale(sf);
    let p2 = p2.scale(sf);

    let det1 = p1.cross(q);
    let gama1 = &p1.cross(r) * &det1;
    let alpha1 = &r.cross(q) * &det1;
    let alpha1_legal = scaled_in_unit(&alpha1, &det1);

    let det2 = p2.cross(q);
    let alpha2 = &r.cross(q) * &det2;
    let gama2 = &p2.cross(r) * &det2;
    let alpha2_legal = scaled_in_unit(&alpha2, &det2);

    let det3 = &det2 - &det1;
    let gama3 = &p2.sub(&p1).cross(&r.sub(&p1)) * &det3;

    match (alpha1_legal, alpha2_legal) {
        (true, true) if overlaps_chord(&gama1, &det1, &gama2, &det2) => Some(EdgePair::FirstSecond),
        (true, false) if overlaps_chord(&gama1, &det1, &gama3, &det3) => Some(EdgePair::FirstThird),
        (false, true) if overlaps_chord(&gama2, &det2, &gama3, &det3) => Some(EdgePair::SecondThird),
        _ => None,
    }
}
