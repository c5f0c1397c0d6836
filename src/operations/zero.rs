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

/// Sign queries against zero.
///
/// Implementations compare exactly: there is no tolerance band around zero, so
/// a NaN is neither zero, positive nor negative.
pub trait Zero {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
    fn is_positive(&self) -> bool;
    fn is_negative(&self) -> bool;
    fn is_positive_or_zero(&self) -> bool;
    fn is_negative_or_zero(&self) -> bool;
}

impl Zero for f64 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    #[inline(always)]
    fn is_positive(&self) -> bool {
        *self > 0.0
    }

    #[inline(always)]
    fn is_negative(&self) -> bool {
        *self < 0.0
    }

    #[inline(always)]
    fn is_positive_or_zero(&self) -> bool {
        *self >= 0.0
    }

    #[inline(always)]
    fn is_negative_or_zero(&self) -> bool {
        *self <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::Zero;

    #[test]
    fn signed_zero_is_zero() {
        assert!((-0.0f64).is_zero());
        assert!((-0.0f64).is_positive_or_zero());
        assert!(!Zero::is_negative(&-0.0f64));
    }

    #[test]
    fn nan_has_no_sign() {
        let nan = f64::NAN;
        assert!(!nan.is_zero());
        assert!(!Zero::is_positive(&nan));
        assert!(!Zero::is_negative(&nan));
        assert!(!nan.is_positive_or_zero());
        assert!(!nan.is_negative_or_zero());
    }
}
