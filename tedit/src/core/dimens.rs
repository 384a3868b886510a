// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [Size] holds the `width` and `height` of the terminal (or of a region of it), and
//! [Pos] holds a `row_index` and a `col_index`. [`ColWidth`] and [`RowHeight`] are
//! distinct types so that a width can't be passed where a height is expected.
//!
//! ```text
//!     0   4    9    1    2    2
//!                   4    0    5
//!    ┌────┴────┴────┴────┴────┴── col
//!  0 ┤     ╭─────────────╮
//!  1 ┤     │ pos:        │
//!  2 ┤     │ [row 1,     │
//!  3 ┤     │  col 5]     │
//!  4 ┤     │ size: 16x5  │
//!  5 ┤     ╰─────────────╯
//!    │
//!   row
//! ```
//!
//! # Examples
//!
//! ```
//! use tedit::{height, width, Size};
//!
//! // The order of the arguments doesn't matter.
//! let size: Size = width(80) + height(24);
//! assert_eq!(size, height(24) + width(80));
//! assert_eq!(*size.col_width, 80);
//! assert_eq!(*size.row_height, 24);
//! ```

use std::{fmt::{Debug, Formatter, Result},
          ops::{Add, Deref}};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ColWidth(pub usize);

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct RowHeight(pub usize);

pub fn width(arg: usize) -> ColWidth { ColWidth(arg) }

pub fn height(arg: usize) -> RowHeight { RowHeight(arg) }

impl Deref for ColWidth {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl Deref for RowHeight {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl Debug for ColWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "width({})", self.0) }
}

impl Debug for RowHeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "height({})", self.0) }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub col_width: ColWidth,
    pub row_height: RowHeight,
}

impl Debug for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[{:?}, {:?}]", self.col_width, self.row_height)
    }
}

impl Add<RowHeight> for ColWidth {
    type Output = Size;
    fn add(self, rhs: RowHeight) -> Self::Output {
        Size {
            col_width: self,
            row_height: rhs,
        }
    }
}

impl Add<ColWidth> for RowHeight {
    type Output = Size;
    fn add(self, rhs: ColWidth) -> Self::Output {
        Size {
            col_width: rhs,
            row_height: self,
        }
    }
}

/// A (row, col) pair. Columns are counted in characters, not bytes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Pos {
    pub row_index: usize,
    pub col_index: usize,
}

impl Pos {
    #[must_use]
    pub fn new(row_index: usize, col_index: usize) -> Self {
        Self {
            row_index,
            col_index,
        }
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[r: {}, c: {}]", self.row_index, self.col_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_size_add_any_order() {
        let a = width(10) + height(3);
        let b = height(3) + width(10);
        assert_eq2!(a, b);
        assert_eq2!(*a.col_width, 10);
        assert_eq2!(*a.row_height, 3);
    }

    #[test]
    fn test_debug_format() {
        let size = width(80) + height(24);
        assert_eq2!(format!("{size:?}"), "[width(80), height(24)]");
        assert_eq2!(format!("{:?}", Pos::new(1, 5)), "[r: 1, c: 5]");
    }
}
