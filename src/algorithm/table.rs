//! Tab-aligned text tables of matrices, with 1-based row and column headers.
//!
//! ```text
//! ========Title=========
//!     |1      2
//!     |==============
//! 1   |0      4
//! 2   |0      0
//! ```
use crate::{algorithm::IncidenceMatrix, graph::*};
use std::fmt::{self, Display};

/// Cells that can be written into a table.
pub trait TableCell {
    fn render_cell(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! display_cell {
    ($($t:ty)*) => {
        $(
            impl TableCell for $t {
                fn render_cell(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

display_cell!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl TableCell for bool {
    fn render_cell(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Anything with rows and columns of cells.
pub trait TabularMatrix {
    fn row_size(&self) -> usize;
    fn column_size(&self) -> usize;
    fn render_cell_at(&self, row: usize, column: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    fn table(&self) -> MatrixTable<'_, Self>
    where
        Self: Sized,
    {
        MatrixTable::new(self)
    }
}

impl<T, const N: usize> TabularMatrix for FixedSquare<T, N>
where
    T: Copy + Default + TableCell,
{
    fn row_size(&self) -> usize {
        N
    }

    fn column_size(&self) -> usize {
        N
    }

    fn render_cell_at(&self, row: usize, column: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self[(row, column)].render_cell(f)
    }
}

impl<T> TabularMatrix for DynSquare<T>
where
    T: Copy + Default + TableCell,
{
    fn row_size(&self) -> usize {
        self.vertex_size()
    }

    fn column_size(&self) -> usize {
        self.vertex_size()
    }

    fn render_cell_at(&self, row: usize, column: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self[(row, column)].render_cell(f)
    }
}

impl TabularMatrix for IncidenceMatrix {
    fn row_size(&self) -> usize {
        self.vertex_size()
    }

    fn column_size(&self) -> usize {
        self.edge_size()
    }

    fn render_cell_at(&self, row: usize, column: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self[(row, column)].render_cell(f)
    }
}

/// Renders a matrix on [Display], with an optional title banner.
pub struct MatrixTable<'a, M>
where
    M: TabularMatrix,
{
    matrix: &'a M,
    title: Option<String>,
    tab_width: usize,
}

impl<'a, M> MatrixTable<'a, M>
where
    M: TabularMatrix,
{
    pub fn new(matrix: &'a M) -> Self {
        Self {
            matrix,
            title: None,
            tab_width: 8,
        }
    }

    /// Puts `title` in the middle of a banner of `=` above the table.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Column width assumed when sizing the banner.
    pub fn tab_width(mut self, width: usize) -> Self {
        self.tab_width = width;
        self
    }

    fn display_banner(&self, f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        let width = self.matrix.column_size() * self.tab_width + 2;
        let len = title.chars().count();
        let left = width.saturating_sub(len) / 2;
        let right = width.saturating_sub(len + left);
        writeln!(f, "{}{}{}", "=".repeat(left), title, "=".repeat(right))
    }
}

impl<'a, M> Display for MatrixTable<'a, M>
where
    M: TabularMatrix,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            self.display_banner(f, title)?;
        }
        let columns = self.matrix.column_size();
        write!(f, "\t|")?;
        for j in 0..columns {
            write!(f, "{}\t", j + 1)?;
        }
        write!(f, "\n\t|")?;
        for _ in 0..columns {
            write!(f, "=======")?;
        }
        writeln!(f)?;
        for i in 0..self.matrix.row_size() {
            write!(f, "{}\t|", i + 1)?;
            for j in 0..columns {
                self.matrix.render_cell_at(i, j, f)?;
                write!(f, "\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
