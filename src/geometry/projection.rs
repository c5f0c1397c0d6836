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

use crate::{geometry::vector::Vector3, numeric::scalar::Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// The two coordinates kept when a planar problem is flattened onto an
/// axis-aligned plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectionAxes {
    pub i0: Axis,
    pub i1: Axis,
}

impl ProjectionAxes {
    pub const YZ: ProjectionAxes = ProjectionAxes {
        i0: Axis::Y,
        i1: Axis::Z,
    };
    pub const XZ: ProjectionAxes = ProjectionAxes {
        i0: Axis::X,
        i1: Axis::Z,
    };
    pub const XY: ProjectionAxes = ProjectionAxes {
        i0: Axis::X,
        i1: Axis::Y,
    };

    /// Given the magnitudes of a normal's components, keep the two axes that
    /// maximize the projected area (the largest component is dropped).
    ///
    /// Ties resolve in a fixed order: x loses to an equal y or z, and z loses to
    /// an equal y.
    #[inline(always)]
    pub fn dropping_dominant<T: Scalar>(ax: &T, ay: &T, az: &T) -> ProjectionAxes {
        if ax > ay {
            if ax > az {
                ProjectionAxes::YZ
            } else {
                ProjectionAxes::XY
            }
        } else if az > ay {
            ProjectionAxes::XY
        } else {
            ProjectionAxes::XZ
        }
    }

    #[inline(always)]
    pub fn for_normal<T: Scalar>(n: &Vector3<T>) -> ProjectionAxes {
        Self::dropping_dominant(&n.x.abs(), &n.y.abs(), &n.z.abs())
    }
}
