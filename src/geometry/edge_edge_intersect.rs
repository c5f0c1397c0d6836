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

use crate::{geometry::vector::Vector2, numeric::scalar::Scalar};

/// Tests the edge starting at `v0` with direction `a` against the edge `u0 u1`.
///
/// Franklin Antonio's test ("Faster Line Segment Intersection", Graphics Gems
/// III): both segment parameters are checked as numerator/denominator pairs,
/// so nothing is divided. Parallel edges (`f == 0`) never report a hit.
#[inline(always)]
pub fn edge_edge_test<T>(a: &Vector2<T>, v0: &Vector2<T>, u0: &Vector2<T>, u1: &Vector2<T>) -> bool
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let b = u0.sub(u1);
    let c = v0.sub(u0);
    let f = &(&a.y * &b.x) - &(&a.x * &b.y);
    let d = &(&b.y * &c.x) - &(&b.x * &c.y);

    let d_in_range = (f.is_positive() && d.is_positive_or_zero() && d <= f)
        || (f.is_negative() && d.is_negative_or_zero() && d >= f);
    if !d_in_range {
        return false;
    }

    let e = &(&a.x * &c.y) - &(&a.y * &c.x);
    if f.is_positive() {
        e.is_positive_or_zero() && e <= f
    } else {
        e.is_negative_or_zero() && e >= f
    }
}

/// Tests the edge `v0 v1` against every edge of triangle `u0 u1 u2`.
pub fn edge_against_tri_edges<T>(
    v0: &Vector2<T>,
    v1: &Vector2<T>,
    u0: &Vector2<T>,
    u1: &Vector2<T>,
    u2: &Vector2<T>,
) -> bool
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let a = v1.sub(v0);
    edge_edge_test(&a, v0, u0, u1) || edge_edge_test(&a, v0, u1, u2) || edge_edge_test(&a, v0, u2, u0)
}
