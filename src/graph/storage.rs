use std::ops::{Index, IndexMut};

/// A square mapping from `(row, column)` pairs to values.
///
/// This is the capability shared by graphs of a fixed size and resizable graphs.
/// All algorithms are written against it,
/// and every derived square matrix is produced in the same shape by `Rebind`:
/// fixed-extent storages yield fixed-extent derived matrices and
/// resizable storages yield resizable ones.
pub trait SquareStorage: Clone {
    /// Type of cells.
    type Value: Copy + Default;
    /// The same storage shape, holding another type of cells.
    type Rebind<T: Copy + Default>: SquareStorage<Value = T>;

    /// Number of rows, which is also the number of columns.
    fn vertex_size(&self) -> usize;
    /// Reads a cell. Panics if out of range.
    fn get(&self, row: usize, col: usize) -> Self::Value;
    /// Writes a cell. Panics if out of range.
    fn set(&mut self, row: usize, col: usize, value: Self::Value);
    /// Writes every cell.
    fn fill(&mut self, value: Self::Value);
    /// Creates a default-filled storage of the same size.
    fn rebind<T: Copy + Default>(&self) -> Self::Rebind<T>;

    /// Copies cells out, row by row.
    fn to_rows(&self) -> Vec<Vec<Self::Value>> {
        let n = self.vertex_size();
        (0..n)
            .map(|row| (0..n).map(|col| self.get(row, col)).collect())
            .collect()
    }
}

/// Square storage whose size is a compile-time constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedSquare<T, const N: usize> {
    cells: [[T; N]; N],
}

impl<T: Copy + Default, const N: usize> FixedSquare<T, N> {
    pub fn new() -> Self {
        Self {
            cells: [[T::default(); N]; N],
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row]
    }
}

impl<T: Copy + Default, const N: usize> Default for FixedSquare<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> SquareStorage for FixedSquare<T, N> {
    type Value = T;
    type Rebind<U: Copy + Default> = FixedSquare<U, N>;

    fn vertex_size(&self) -> usize {
        N
    }

    fn get(&self, row: usize, col: usize) -> T {
        self.cells[row][col]
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row][col] = value;
    }

    fn fill(&mut self, value: T) {
        for row in self.cells.iter_mut() {
            row.fill(value);
        }
    }

    fn rebind<U: Copy + Default>(&self) -> FixedSquare<U, N> {
        FixedSquare::new()
    }
}

impl<T, const N: usize> Index<(usize, usize)> for FixedSquare<T, N> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row][col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for FixedSquare<T, N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row][col]
    }
}

/// Square storage whose size is decided at runtime, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DynSquare<T> {
    order: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> DynSquare<T> {
    pub fn new() -> Self {
        Self::with_vertex_size(0)
    }

    pub fn with_vertex_size(order: usize) -> Self {
        Self {
            order,
            cells: vec![T::default(); order * order],
        }
    }

    /// Copies cells of any square storage.
    pub fn from_storage<S>(other: &S) -> Self
    where
        S: SquareStorage<Value = T>,
    {
        let order = other.vertex_size();
        let mut cells = Vec::with_capacity(order * order);
        for row in 0..order {
            for col in 0..order {
                cells.push(other.get(row, col));
            }
        }
        Self { order, cells }
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.order;
        &self.cells[start..start + self.order]
    }

    /// Grows or shrinks to `order` rows and columns.
    ///
    /// New cells are default-filled. Cells out of the new range are dropped.
    pub fn resize(&mut self, order: usize) {
        if order == self.order {
            return;
        }
        let kept = order.min(self.order);
        let mut cells = vec![T::default(); order * order];
        for row in 0..kept {
            let src = row * self.order;
            let dst = row * order;
            cells[dst..dst + kept].copy_from_slice(&self.cells[src..src + kept]);
        }
        self.order = order;
        self.cells = cells;
    }

    /// Appends a default-filled row and column.
    pub fn push_vertex(&mut self) {
        self.resize(self.order + 1);
    }

    /// Deletes a row and the column of the same index. Panics if out of range.
    pub fn remove_vertex(&mut self, index: usize) {
        assert!(index < self.order);
        let order = self.order;
        let cells = self
            .cells
            .iter()
            .enumerate()
            .filter(|(i, _)| i / order != index && i % order != index)
            .map(|(_, x)| *x)
            .collect();
        self.order -= 1;
        self.cells = cells;
    }
}

impl<T: Copy + Default> SquareStorage for DynSquare<T> {
    type Value = T;
    type Rebind<U: Copy + Default> = DynSquare<U>;

    fn vertex_size(&self) -> usize {
        self.order
    }

    fn get(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }

    fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    fn rebind<U: Copy + Default>(&self) -> DynSquare<U> {
        DynSquare::with_vertex_size(self.order)
    }
}

impl<T> Index<(usize, usize)> for DynSquare<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.order && col < self.order);
        &self.cells[row * self.order + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DynSquare<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.order && col < self.order);
        &mut self.cells[row * self.order + col]
    }
}
