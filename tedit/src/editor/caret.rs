// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter, Result},
          ops::{Deref, DerefMut}};

use crate::Pos;

/// The logical insertion point, in buffer coordinates (not screen coordinates). The
/// column may equal the line length, which is the "end of line" position.
///
/// ```text
/// R ┌──────────┐
/// 0 ▸hello░    │
///   └─────▴────┘
///   C0123456789
/// caret: [r: 0, c: 5]
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub struct Caret(pub Pos);

/// How far the viewport is scrolled, in rows and columns. Screen position is caret
/// minus this (plus the gutter width for the column).
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub struct ScrOfs(pub Pos);

impl Caret {
    #[must_use]
    pub fn new(row_index: usize, col_index: usize) -> Self {
        Self(Pos::new(row_index, col_index))
    }
}

impl ScrOfs {
    #[must_use]
    pub fn new(row_index: usize, col_index: usize) -> Self {
        Self(Pos::new(row_index, col_index))
    }
}

impl Deref for Caret {
    type Target = Pos;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for Caret {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl Deref for ScrOfs {
    type Target = Pos;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for ScrOfs {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl Debug for Caret {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "Caret{:?}", self.0) }
}

impl Debug for ScrOfs {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "ScrOfs{:?}", self.0) }
}
