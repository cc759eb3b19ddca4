use std::fmt;
use std::iter::FusedIterator;

use crate::error::{MatrixError, ParseError};
use crate::scan::ScanDirection;
use crate::state::{combine_xor, State};

/// A `width` x `height` grid of module states.
///
/// Cells are addressed as `(w, h)` with `w` in `0..width` and `h` in
/// `0..height`. Storage is flat and column-major (`w * height + h`), so the
/// cells sharing one width index form a contiguous slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    width: usize,
    height: usize,
    cells: Vec<State>,
}

impl Matrix {
    /// Create a matrix with every cell set to [`State::Init`].
    ///
    /// Zero dimensions are allowed and give an empty matrix.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows or the cells cannot be
    /// allocated. Use [`Matrix::try_new`] for untrusted dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible [`Matrix::new`]: fails with [`MatrixError::TooLarge`] when the
    /// cell count overflows or the allocation is refused.
    pub fn try_new(width: usize, height: usize) -> Result<Self, MatrixError> {
        let too_large = MatrixError::TooLarge { width, height };
        let len = width.checked_mul(height).ok_or_else(|| too_large.clone())?;
        // every valid coordinate must also fit the signed accessors
        if len > isize::MAX as usize / std::mem::size_of::<State>() {
            return Err(too_large);
        }
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, State::Init);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a row-major data string of state characters (`'0'`..=`'5'`).
    ///
    /// Whitespace is skipped, so rows may be written one per line. Error
    /// positions are character offsets into `data`.
    pub fn from_data_string(width: usize, height: usize, data: &str) -> Result<Self, ParseError> {
        let states: Vec<State> = data
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(i, c)| State::from_char(c).ok_or(ParseError::InvalidChar(c, i)))
            .collect::<Result<_, _>>()?;

        let expected = width
            .checked_mul(height)
            .ok_or(MatrixError::TooLarge { width, height })?;
        if states.len() != expected {
            return Err(ParseError::DataLength {
                expected,
                found: states.len(),
            });
        }

        let mut m = Matrix::try_new(width, height)?;
        for (i, s) in states.into_iter().enumerate() {
            let (w, h) = (i % width, i / width);
            m.cells[w * height + h] = s;
        }
        Ok(m)
    }

    /// Row-major data string, one line per row, readable by
    /// [`Matrix::from_data_string`].
    pub fn to_data_string(&self) -> String {
        let mut s = String::with_capacity((self.width + 1) * self.height);
        for (w, _, state) in self.cells(ScanDirection::Row) {
            s.push(state.to_char());
            if w + 1 == self.width {
                s.push('\n');
            }
        }
        s
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Validate `(w, h)` and return the storage index. Width is checked first.
    fn index(&self, w: isize, h: isize) -> Result<usize, MatrixError> {
        let w = usize::try_from(w)
            .ok()
            .filter(|&w| w < self.width)
            .ok_or(MatrixError::OutOfRangeWidth { w, width: self.width })?;
        let h = usize::try_from(h)
            .ok()
            .filter(|&h| h < self.height)
            .ok_or(MatrixError::OutOfRangeHeight { h, height: self.height })?;
        Ok(w * self.height + h)
    }

    /// Overwrite the state at `(w, h)`. Any state may replace any other.
    pub fn set(&mut self, w: isize, h: isize, state: State) -> Result<(), MatrixError> {
        let i = self.index(w, h)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Read the state at `(w, h)`.
    pub fn get(&self, w: isize, h: isize) -> Result<State, MatrixError> {
        let i = self.index(w, h)?;
        Ok(self.cells[i])
    }

    /// Independent deep copy; same as [`Clone::clone`].
    pub fn copy(&self) -> Matrix {
        self.clone()
    }

    /// States at height index `index`, one per width index in increasing order.
    ///
    /// `index` is bound-checked against the height; the result has `width`
    /// entries. Returns `None` when out of range.
    pub fn row(&self, index: isize) -> Option<Vec<State>> {
        let h = usize::try_from(index).ok().filter(|&h| h < self.height)?;
        Some(
            (0..self.width)
                .map(|w| self.cells[w * self.height + h])
                .collect(),
        )
    }

    /// States at width index `index`, `height` entries in increasing order.
    ///
    /// Borrows the contiguous storage line directly. Returns `None` when out
    /// of range.
    pub fn col(&self, index: isize) -> Option<&[State]> {
        let w = usize::try_from(index).ok().filter(|&w| w < self.width)?;
        let start = w * self.height;
        Some(&self.cells[start..start + self.height])
    }

    /// Iterator over every cell as `(w, h, state)` in the given order.
    pub fn cells(&self, direction: ScanDirection) -> Cells<'_> {
        Cells {
            matrix: self,
            direction,
            pos: 0,
            len: self.cells.len(),
        }
    }

    /// Visit every cell exactly once as `visit(w, h, state)`.
    ///
    /// Coordinates are the same `(w, h)` that [`Matrix::get`] takes; casting
    /// them to `isize` is always lossless since the cell count fits `isize`.
    pub fn iterate<F>(&self, direction: ScanDirection, mut visit: F)
    where
        F: FnMut(usize, usize, State),
    {
        for (w, h, s) in self.cells(direction) {
            visit(w, h, s);
        }
    }

    /// Combine two equally sized matrices cell by cell with [`combine_xor`].
    pub fn xor(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if (self.width, self.height) != (other.width, other.height) {
            return Err(MatrixError::DimensionMismatch {
                left: (self.width, self.height),
                right: (other.width, other.height),
            });
        }
        Ok(Matrix {
            width: self.width,
            height: self.height,
            cells: self
                .cells
                .iter()
                .zip(&other.cells)
                .map(|(&a, &b)| combine_xor(a, b))
                .collect(),
        })
    }

    /// Print the numeric grid form to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

/// Numeric grid form: row-first, each code right-aligned in two columns and
/// followed by a space, one line per row.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (w, _, s) in self.cells(ScanDirection::Row) {
            write!(f, "{:2} ", s.code())?;
            if w + 1 == self.width {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator returned by [`Matrix::cells`].
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    matrix: &'a Matrix,
    direction: ScanDirection,
    pos: usize,
    len: usize,
}

impl Iterator for Cells<'_> {
    type Item = (usize, usize, State);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let m = self.matrix;
        let (w, h) = match self.direction {
            ScanDirection::Row => (self.pos % m.width, self.pos / m.width),
            ScanDirection::Column => (self.pos / m.height, self.pos % m.height),
        };
        self.pos += 1;
        Some((w, h, m.cells[w * m.height + h]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.pos;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl FusedIterator for Cells<'_> {}
