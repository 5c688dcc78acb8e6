// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # By-Value Saturating Arithmetic
//!
//! Objective values accumulate over many included units; a pathological
//! instance must clamp to the type bounds rather than wrap around and
//! corrupt the ordering the engine prunes by. The standard library exposes
//! `saturating_add` as inherent methods only, so this trait lifts the
//! operation into a bound that generic code can require.

/// By-value saturating addition.
pub trait SaturatingAddVal: Sized {
    /// Adds `rhs` to `self`, clamping to the type bounds on overflow.
    fn saturating_add_val(self, rhs: Self) -> Self;
}

macro_rules! impl_saturating_add_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl SaturatingAddVal for $t {
                #[inline(always)]
                fn saturating_add_val(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }
            }
        )*
    };
}

impl_saturating_add_val!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_addition() {
        assert_eq!(2i64.saturating_add_val(3), 5);
        assert_eq!((-2i32).saturating_add_val(3), 1);
    }

    #[test]
    fn test_saturates_at_upper_bound() {
        assert_eq!(i64::MAX.saturating_add_val(1), i64::MAX);
        assert_eq!(i8::MAX.saturating_add_val(i8::MAX), i8::MAX);
    }

    #[test]
    fn test_saturates_at_lower_bound() {
        assert_eq!(i64::MIN.saturating_add_val(-1), i64::MIN);
        assert_eq!(i16::MIN.saturating_add_val(i16::MIN), i16::MIN);
    }
}
