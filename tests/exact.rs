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

use rand::{Rng, SeedableRng, rngs::StdRng};
use rug::Rational;
use tritri::geometry::{EdgeTriangle, Vector3};
use tritri::{CoplanarContact, ExactRational, NumericError, TriTriIntersectionResult};

fn q(num: i32, den: i32) -> ExactRational {
    ExactRational::from(Rational::from((num, den)))
}

fn exact_point(x: (i32, i32), y: (i32, i32), z: (i32, i32)) -> Vector3<ExactRational> {
    Vector3::new(q(x.0, x.1), q(y.0, y.1), q(z.0, z.1))
}

fn edge_form<T>(t: &[Vector3<T>; 3]) -> EdgeTriangle<T>
where
    T: tritri::Scalar,
    for<'a> &'a T: std::ops::Add<&'a T, Output = T>
        + std::ops::Sub<&'a T, Output = T>
        + std::ops::Mul<&'a T, Output = T>,
{
    EdgeTriangle::from_vertices(&t[0], &t[1], &t[2])
}

fn to_exact(t: &[Vector3<f64>; 3]) -> Result<[Vector3<ExactRational>; 3], NumericError> {
    Ok([
        t[0].try_map(|&x| ExactRational::try_from(x))?,
        t[1].try_map(|&x| ExactRational::try_from(x))?,
        t[2].try_map(|&x| ExactRational::try_from(x))?,
    ])
}

/// The triangle cut out of the plane `x + y + z = 1` by the positive octant.
fn octant_face() -> [Vector3<ExactRational>; 3] {
    [
        exact_point((1, 1), (0, 1), (0, 1)),
        exact_point((0, 1), (1, 1), (0, 1)),
        exact_point((0, 1), (0, 1), (1, 1)),
    ]
}

#[test]
fn test_thirds_are_coplanar_only_when_exact() {
    let face = octant_face();
    let touching = [
        exact_point((1, 3), (1, 3), (1, 3)),
        exact_point((2, 3), (1, 3), (0, 1)),
        exact_point((1, 3), (0, 1), (2, 3)),
    ];
    let expected = TriTriIntersectionResult::Coplanar(CoplanarContact::EdgeCrossing);
    assert_eq!(edge_form(&face).intersect(&edge_form(&touching)), expected);
    assert_eq!(edge_form(&touching).intersect(&edge_form(&face)), expected);

    // rounding 1/3 and 2/3 lifts the second triangle off the plane
    let face = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ];
    let third = 1.0 / 3.0;
    let two_thirds = 2.0 / 3.0;
    let rounded = [
        Vector3::new(third, third, third),
        Vector3::new(two_thirds, third, 0.0),
        Vector3::new(third, 0.0, two_thirds),
    ];
    assert_eq!(
        edge_form(&face).intersect(&edge_form(&rounded)),
        TriTriIntersectionResult::Disjoint
    );
    assert_eq!(
        edge_form(&rounded).intersect(&edge_form(&face)),
        TriTriIntersectionResult::Disjoint
    );
}

#[test]
fn test_exact_containment_on_slanted_plane() {
    let face = octant_face();
    let inner = [
        exact_point((1, 3), (1, 3), (1, 3)),
        exact_point((1, 2), (1, 4), (1, 4)),
        exact_point((1, 4), (1, 2), (1, 4)),
    ];
    let expected = TriTriIntersectionResult::Coplanar(CoplanarContact::Containment);
    assert_eq!(edge_form(&face).intersect(&edge_form(&inner)), expected);
    assert_eq!(edge_form(&inner).intersect(&edge_form(&face)), expected);
}

#[test]
fn test_floats_agree_with_exact_on_random_input() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let a: [Vector3<f64>; 3] =
            std::array::from_fn(|_| Vector3::new(rng.random(), rng.random(), rng.random()));
        let b: [Vector3<f64>; 3] =
            std::array::from_fn(|_| Vector3::new(rng.random(), rng.random(), rng.random()));
        let ea = to_exact(&a).expect("finite input");
        let eb = to_exact(&b).expect("finite input");
        assert_eq!(
            edge_form(&a).intersect(&edge_form(&b)),
            edge_form(&ea).intersect(&edge_form(&eb)),
            "a = {a:?}, b = {b:?}"
        );
    }
}

fn rigid_motion(v: &Vector3<ExactRational>) -> Vector3<ExactRational> {
    let (c, s) = (q(3, 5), q(4, 5));
    let x = &(&c * &v.x) - &(&s * &v.y);
    let y = &(&s * &v.x) + &(&c * &v.y);
    let (c, s) = (q(5, 13), q(12, 13));
    let rotated = Vector3::new(
        x,
        &(&c * &y) - &(&s * &v.z),
        &(&s * &y) + &(&c * &v.z),
    );
    rotated.add(&exact_point((1, 2), (-1, 3), (2, 7)))
}

#[test]
fn test_exact_result_survives_rigid_motion() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut intersecting = 0;
    for _ in 0..200 {
        let a: [Vector3<f64>; 3] =
            std::array::from_fn(|_| Vector3::new(rng.random(), rng.random(), rng.random()));
        let b: [Vector3<f64>; 3] =
            std::array::from_fn(|_| Vector3::new(rng.random(), rng.random(), rng.random()));
        let a = to_exact(&a).expect("finite input");
        let b = to_exact(&b).expect("finite input");
        let expected = edge_form(&a).intersects(&edge_form(&b));
        intersecting += expected as usize;

        let moved_a = [0, 1, 2].map(|i| rigid_motion(&a[i]));
        let moved_b = [0, 1, 2].map(|i| rigid_motion(&b[i]));
        assert_eq!(edge_form(&moved_a).intersects(&edge_form(&moved_b)), expected);
    }
    assert!(intersecting > 0);
}

#[test]
fn test_non_finite_coordinates_are_rejected() {
    let p = Vector3::new(0.0, f64::INFINITY, 1.0);
    assert!(matches!(
        p.try_map(|&x| ExactRational::try_from(x)),
        Err(NumericError::NotFinite(x)) if x.is_infinite()
    ));
}
