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
use tritri::geometry::{EdgeTriangle, Vector3};

const SAMPLES: usize = 2000;

fn random_triangle(rng: &mut StdRng) -> [Vector3<f64>; 3] {
    std::array::from_fn(|_| Vector3::new(rng.random(), rng.random(), rng.random()))
}

fn hits(a: &[Vector3<f64>; 3], b: &[Vector3<f64>; 3]) -> bool {
    let a = EdgeTriangle::from_vertices(&a[0], &a[1], &a[2]);
    let b = EdgeTriangle::from_vertices(&b[0], &b[1], &b[2]);
    a.intersects(&b)
}

fn transformed(t: &[Vector3<f64>; 3], f: impl Fn(&Vector3<f64>) -> Vector3<f64>) -> [Vector3<f64>; 3] {
    [f(&t[0]), f(&t[1]), f(&t[2])]
}

fn check_invariant(seed: u64, f: impl Fn(&Vector3<f64>) -> Vector3<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut intersecting = 0;
    for _ in 0..SAMPLES {
        let a = random_triangle(&mut rng);
        let b = random_triangle(&mut rng);
        let expected = hits(&a, &b);
        intersecting += expected as usize;
        assert_eq!(
            hits(&transformed(&a, &f), &transformed(&b, &f)),
            expected,
            "a = {a:?}, b = {b:?}"
        );
    }
    assert!(intersecting > 0);
}

#[test]
fn test_argument_order_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(0x7a1_7a1);
    let mut intersecting = 0;
    for _ in 0..SAMPLES {
        let a = random_triangle(&mut rng);
        let b = random_triangle(&mut rng);
        let forward = hits(&a, &b);
        intersecting += forward as usize;
        assert_eq!(forward, hits(&b, &a), "a = {a:?}, b = {b:?}");
    }
    // roughly a quarter of unit-cube pairs intersect
    assert!(intersecting > SAMPLES / 10);
}

#[test]
fn test_invariant_under_axis_rotation() {
    check_invariant(1, |v| Vector3::new(v.y, -v.z, v.x));
}

#[test]
fn test_invariant_under_translation() {
    check_invariant(2, |v| Vector3::new(v.x + 3.0, v.y - 2.0, v.z + 0.5));
}

#[test]
fn test_invariant_under_uniform_scale() {
    check_invariant(3, |v| Vector3::new(v.x * 0.125, v.y * 0.125, v.z * 0.125));
}

#[test]
fn test_vertical_triangles_are_symmetric() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..SAMPLES {
        let x0: f64 = rng.random();
        let wall = [
            Vector3::new(x0, rng.random(), rng.random()),
            Vector3::new(x0, rng.random(), rng.random()),
            Vector3::new(x0, rng.random(), rng.random()),
        ];
        let other = random_triangle(&mut rng);
        assert_eq!(
            hits(&wall, &other),
            hits(&other, &wall),
            "wall = {wall:?}, other = {other:?}"
        );
    }
}
