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

/// Value of the line equation through `ui uj` at `p`; the sign tells the side.
#[inline(always)]
fn edge_side<T>(p: &Vector2<T>, ui: &Vector2<T>, uj: &Vector2<T>) -> T
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let a = &uj.y - &ui.y;
    let b = -(&uj.x - &ui.x);
    let c = &(-(&a * &ui.x)) - &(&b * &ui.y);
    &(&(&a * &p.x) + &(&b * &p.y)) + &c
}

/// Returns true if `p` lies strictly inside triangle `u0 u1 u2`, whichever way
/// the triangle winds. Points on the boundary are outside.
pub fn point_in_tri_2d<T>(p: &Vector2<T>, u0: &Vector2<T>, u1: &Vector2<T>, u2: &Vector2<T>) -> bool
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let d0 = edge_side(p, u0, u1);
    let d1 = edge_side(p, u1, u2);
    let d2 = edge_side(p, u2, u0);
    (&d0 * &d1).is_positive() && (&d0 * &d2).is_positive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    #[test]
    fn inside_either_winding() {
        let (a, b, c) = (v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0));
        assert!(point_in_tri_2d(&v(1.0, 1.0), &a, &b, &c));
        assert!(point_in_tri_2d(&v(1.0, 1.0), &a, &c, &b));
    }

    #[test]
    fn outside() {
        let (a, b, c) = (v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0));
        assert!(!point_in_tri_2d(&v(3.0, 3.0), &a, &b, &c));
        assert!(!point_in_tri_2d(&v(-1.0, 1.0), &a, &b, &c));
    }

    #[test]
    fn boundary_is_excluded() {
        let (a, b, c) = (v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0));
        assert!(!point_in_tri_2d(&v(2.0, 0.0), &a, &b, &c));
        assert!(!point_in_tri_2d(&v(2.0, 2.0), &a, &b, &c));
        assert!(!point_in_tri_2d(&b, &a, &b, &c));
    }
}
