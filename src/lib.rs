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

//! Fast triangle-triangle intersection test.
//!
//! [`tri_tri_intersect_3d`] classifies a pair of triangles given in edge form
//! (a base vertex plus two edge vectors); [`coplanar_tri_tri`] handles pairs
//! already known to share a plane. Both are pure functions, generic over
//! [`Scalar`]: `f64` for speed, [`ExactRational`] when inputs carry exact
//! coincidences that must be decided without rounding.

pub mod geometry;
pub mod harness;
pub mod numeric;
pub mod operations;

pub use geometry::{
    coplanar::coplanar_tri_tri,
    tri_tri_intersect::{
        CoplanarContact, EdgePair, TriTriIntersectionResult, tri_tri_intersect_3d,
        tri_tri_overlap,
    },
};
pub use numeric::{ExactRational, NumericError, Scalar};
