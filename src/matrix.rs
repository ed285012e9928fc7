use serde::{Deserialize, Serialize};

use crate::error::LogicMatrixError;
use crate::exponent::Exponent;
use crate::input::InputLogicMatrix;
use crate::vector::semiring_dot;

/// A square matrix over the boolean semiring.
///
/// Logical OR plays the role of addition and logical AND
/// the role of multiplication.
///
/// # Notes
///
/// * The size is fixed when the matrix is created.
/// * Rows and columns are numbered from `1` to `size`, inclusive.
/// * Operations combining matrices never modify their operands.
///   They always return a new matrix.
/// * [`Clone`] gives a deep copy that shares nothing with the original.
///
/// # Examples
///
/// ## Using rust code
///
/// ```
/// use logic_matrix::LogicMatrix;
///
/// let mut m = LogicMatrix::new(2).unwrap();
/// m.set(1, 1, true).unwrap();
/// m.set(1, 2, true).unwrap();
///
/// let sq = m.square();
/// assert!(sq.get(1, 1).unwrap());
/// assert!(sq.get(1, 2).unwrap());
/// assert!(!sq.get(2, 1).unwrap());
/// assert!(!sq.get(2, 2).unwrap());
/// ```
///
/// ## In a `YAML` record
///
/// Cells are written as booleans or as `0`/`1`.
///
/// ```
/// let yaml = "
/// - [1, 1]
/// - [false, false]
/// ";
/// let m = logic_matrix::loads(yaml).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.count_true(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "InputLogicMatrix")]
#[serde(into = "InputLogicMatrix")]
pub struct LogicMatrix {
    cells: Vec<bool>,
    size: usize,
}

impl LogicMatrix {
    /// Create a matrix with every cell set to `false`.
    ///
    /// # Errors
    ///
    /// [`LogicMatrixError::InvalidSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, LogicMatrixError> {
        if size == 0 {
            return Err(LogicMatrixError::InvalidSize(size));
        }
        Ok(Self::zeros(size))
    }

    /// Create the multiplicative identity:
    /// `true` on the diagonal, `false` elsewhere.
    ///
    /// # Errors
    ///
    /// [`LogicMatrixError::InvalidSize`] if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// let i = logic_matrix::LogicMatrix::identity(3).unwrap();
    /// assert!(i.is_identity());
    /// assert_eq!(i.count_true(), 3);
    /// ```
    pub fn identity(size: usize) -> Result<Self, LogicMatrixError> {
        if size == 0 {
            return Err(LogicMatrixError::InvalidSize(size));
        }
        Ok(Self::diagonal(size))
    }

    /// Create a matrix from its rows.
    ///
    /// # Errors
    ///
    /// * [`LogicMatrixError::InvalidSize`] if `rows` is empty.
    /// * [`LogicMatrixError::NotSquare`] if the length of any row
    ///   differs from the number of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_matrix::LogicMatrix;
    ///
    /// let m = LogicMatrix::from_rows(vec![vec![false, true], vec![false, false]]).unwrap();
    /// assert!(m.get(1, 2).unwrap());
    ///
    /// assert!(LogicMatrix::from_rows(vec![vec![true, true]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, LogicMatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(LogicMatrixError::InvalidSize(size));
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(LogicMatrixError::NotSquare {
                row: row + 1,
                length: r.len(),
                size,
            });
        }
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            size,
        })
    }

    fn zeros(size: usize) -> Self {
        Self {
            cells: vec![false; size * size],
            size,
        }
    }

    fn diagonal(size: usize) -> Self {
        let mut rv = Self::zeros(size);
        rv.cells.iter_mut().step_by(size + 1).for_each(|c| *c = true);
        rv
    }

    /// The number of rows (equal to the number of columns).
    pub fn size(&self) -> usize {
        self.size
    }

    // Translate a 1-based row or column index into a 0-based offset.
    fn offset(&self, index: usize) -> Result<usize, LogicMatrixError> {
        if index == 0 || index > self.size {
            Err(LogicMatrixError::IndexOutOfBounds {
                index,
                size: self.size,
            })
        } else {
            Ok(index - 1)
        }
    }

    fn element_index(&self, row: usize, column: usize) -> Result<usize, LogicMatrixError> {
        Ok(self.offset(row)? * self.size + self.offset(column)?)
    }

    /// Get the value at `(row, column)`.
    ///
    /// # Errors
    ///
    /// [`LogicMatrixError::IndexOutOfBounds`] unless
    /// both indexes are in `1..=size`.
    pub fn get(&self, row: usize, column: usize) -> Result<bool, LogicMatrixError> {
        let index = self.element_index(row, column)?;
        Ok(self.cells[index])
    }

    /// Set the value at `(row, column)`.
    ///
    /// # Errors
    ///
    /// [`LogicMatrixError::IndexOutOfBounds`] unless
    /// both indexes are in `1..=size`.
    pub fn set(&mut self, row: usize, column: usize, value: bool) -> Result<(), LogicMatrixError> {
        let index = self.element_index(row, column)?;
        self.cells[index] = value;
        Ok(())
    }

    /// A view of a row, in column order.
    ///
    /// # Errors
    ///
    /// [`LogicMatrixError::IndexOutOfBounds`] unless `row` is in `1..=size`.
    pub fn row_vector(&self, row: usize) -> Result<&[bool], LogicMatrixError> {
        let row = self.offset(row)?;
        Ok(self.row_at(row))
    }

    /// A copy of a column, in row order.
    ///
    /// # Errors
    ///
    /// [`LogicMatrixError::IndexOutOfBounds`] unless `column` is in `1..=size`.
    pub fn column_vector(&self, column: usize) -> Result<Vec<bool>, LogicMatrixError> {
        let column = self.offset(column)?;
        Ok(self.column_at(column))
    }

    fn row_at(&self, row: usize) -> &[bool] {
        let start = row * self.size;
        let end = start + self.size;
        &self.cells[start..end]
    }

    fn column_at(&self, column: usize) -> Vec<bool> {
        self.cells
            .iter()
            .skip(column)
            .step_by(self.size)
            .copied()
            .collect()
    }

    /// Iterate over the rows, from first to last.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.size)
    }

    /// The number of `true` cells.
    pub fn count_true(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// `true` if no cell is `true`.
    pub fn is_zero(&self) -> bool {
        self.cells.iter().all(|&c| !c)
    }

    /// `true` if this matrix is the identity of its size.
    pub fn is_identity(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(i, &c)| c == (i % (self.size + 1) == 0))
    }

    fn check_same_size(&self, other: &Self) -> Result<(), LogicMatrixError> {
        if self.size == other.size {
            Ok(())
        } else {
            Err(LogicMatrixError::DimensionMismatch {
                left: self.size,
                right: other.size,
            })
        }
    }

    /// Logical matrix multiplication.
    ///
    /// Cell `(r, c)` of the result is the
    /// [`logical_dot`](crate::logical_dot) of row `r` of `self`
    /// and column `c` of `right`.
    ///
    /// # Errors
    ///
    /// [`LogicMatrixError::DimensionMismatch`] if the sizes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_matrix::LogicMatrix;
    ///
    /// // 1 -> 2 -> 3
    /// let edges: LogicMatrix = "010;001;000".parse().unwrap();
    /// let two_steps = edges.multiply(&edges).unwrap();
    /// assert!(two_steps.get(1, 3).unwrap());
    /// assert_eq!(two_steps.count_true(), 1);
    /// ```
    pub fn multiply(&self, right: &Self) -> Result<Self, LogicMatrixError> {
        self.check_same_size(right)?;
        Ok(self.multiply_same_size(right))
    }

    fn multiply_same_size(&self, right: &Self) -> Self {
        let columns = (0..right.size)
            .map(|c| right.column_at(c))
            .collect::<Vec<_>>();
        let cells = self
            .rows()
            .flat_map(|row| columns.iter().map(move |column| semiring_dot(row, column)))
            .collect();
        Self {
            cells,
            size: self.size,
        }
    }

    /// Raise the matrix to a non-negative integer power.
    ///
    /// The zeroth power is the identity.
    /// Otherwise, the result is `self` multiplied by itself
    /// `times - 1` times.
    ///
    /// # Errors
    ///
    /// [`LogicMatrixError::InvalidExponent`] if `times`
    /// cannot be converted to an [`Exponent`](crate::Exponent).
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_matrix::LogicMatrix;
    ///
    /// let m: LogicMatrix = "11;00".parse().unwrap();
    /// assert!(m.power(0).unwrap().is_identity());
    /// assert_eq!(m.power(5).unwrap(), m);
    /// assert!(m.power(-1).is_err());
    /// ```
    pub fn power<E>(&self, times: E) -> Result<Self, LogicMatrixError>
    where
        E: TryInto<Exponent>,
        LogicMatrixError: From<E::Error>,
    {
        let times: Exponent = times.try_into()?;
        Ok(self.power_of(u32::from(times)))
    }

    fn power_of(&self, times: u32) -> Self {
        if times == 0 {
            return Self::diagonal(self.size);
        }
        let mut rv = self.clone();
        for _ in 1..times {
            rv = rv.multiply_same_size(self);
        }
        rv
    }

    /// Same as `self.power(2)`.
    pub fn square(&self) -> Self {
        self.power_of(2)
    }

    /// Same as `self.power(3)`.
    pub fn cube(&self) -> Self {
        self.power_of(3)
    }

    /// Logical matrix addition: the cell-wise OR of two matrices.
    ///
    /// # Errors
    ///
    /// [`LogicMatrixError::DimensionMismatch`] if the sizes differ.
    pub fn logical_plus(&self, other: &Self) -> Result<Self, LogicMatrixError> {
        self.check_same_size(other)?;
        Ok(self.plus_same_size(other))
    }

    fn plus_same_size(&self, other: &Self) -> Self {
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(&a, &b)| a || b)
            .collect();
        Self {
            cells,
            size: self.size,
        }
    }

    /// The transitive closure, `m + m^2 + ... + m^n`, where `n` is the size.
    ///
    /// Treating the matrix as the adjacency matrix of a directed graph,
    /// cell `(r, c)` of the closure is `true` if there is a path of
    /// length one or more from `r` to `c`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_matrix::LogicMatrix;
    ///
    /// let edges: LogicMatrix = "010;001;000".parse().unwrap();
    /// let reach = edges.transitive_closure();
    /// assert_eq!(format!("{reach}"), "011\n001\n000");
    /// ```
    pub fn transitive_closure(&self) -> Self {
        let mut closure = self.clone();
        let mut current_power = self.clone();
        for _ in 1..self.size {
            current_power = current_power.multiply_same_size(self);
            let next = closure.plus_same_size(&current_power);
            // Once adding a power changes nothing, no later power can.
            if next == closure {
                break;
            }
            closure = next;
        }
        closure
    }

    /// The identity plus the [transitive closure](LogicMatrix::transitive_closure).
    ///
    /// Cell `(r, c)` is `true` if `c` can be reached from `r`
    /// in zero or more steps.
    pub fn reflexive_transitive_closure(&self) -> Self {
        Self::diagonal(self.size).plus_same_size(&self.transitive_closure())
    }
}

impl_semiring_operator!(Mul, mul, multiply);
impl_semiring_operator!(Add, add, logical_plus);

impl TryFrom<Vec<Vec<bool>>> for LogicMatrix {
    type Error = LogicMatrixError;
    fn try_from(value: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(value)
    }
}

impl From<LogicMatrix> for Vec<Vec<bool>> {
    fn from(value: LogicMatrix) -> Self {
        value.rows().map(|row| row.to_vec()).collect()
    }
}
