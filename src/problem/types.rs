//! Items, the interaction matrix, and candidate selections.

/// A selectable item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Cost charged against the budget. Non-negative.
    pub cost: f64,
    /// Base value contributed when selected.
    pub value: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, cost: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            value,
        }
    }
}

/// Square pairwise interaction matrix, stored row-major.
///
/// Entry `(i, j)` is the synergy (positive) or conflict (negative) applied
/// when items `i` and `j` are both selected. Only the upper triangle
/// (`j > i`) is consulted by the objective, so a symmetric matrix is
/// counted once per pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InteractionMatrix {
    size: usize,
    data: Vec<f64>,
}

impl InteractionMatrix {
    /// All-zero matrix of the given size.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            data: vec![0.0; size * size],
        }
    }

    /// Builds a matrix from square rows. Callers must have checked that
    /// every row has `rows.len()` columns.
    pub(crate) fn from_square_rows(rows: &[Vec<f64>]) -> Self {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            data.extend_from_slice(row);
        }
        Self { size, data }
    }

    /// Copies the overlapping block of `rows` into a zero matrix of `size`.
    /// Rows or columns past `size` are dropped.
    pub(crate) fn padded(rows: &[Vec<f64>], size: usize) -> Self {
        let mut matrix = Self::zeros(size);
        for (i, row) in rows.iter().take(size).enumerate() {
            for (j, &v) in row.iter().take(size).enumerate() {
                matrix.data[i * size + j] = v;
            }
        }
        matrix
    }

    /// The matrix as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.size.max(1)).map(<[f64]>::to_vec).collect()
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    /// Number of non-zero entries over the whole matrix.
    pub fn nonzero_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0.0).count()
    }
}

/// A candidate solution: one inclusion flag per item.
///
/// Any flag pattern is a valid `Selection`; feasibility against the budget
/// is decided by the objective, not by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    flags: Vec<bool>,
}

impl Selection {
    /// Selection with no item chosen.
    pub fn empty(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Selection with every item chosen.
    pub fn full(len: usize) -> Self {
        Self {
            flags: vec![true; len],
        }
    }

    /// Selection of length `len` with exactly the given indices chosen.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    pub fn from_indices(len: usize, indices: &[usize]) -> Self {
        let mut selection = Self::empty(len);
        for &i in indices {
            selection.flags[i] = true;
        }
        selection
    }

    /// Number of flags (equal to the item count).
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the selection has zero flags (zero-item instance).
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether item `i` is chosen.
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.flags[i]
    }

    /// Sets the flag of item `i`.
    #[inline]
    pub fn set(&mut self, i: usize, chosen: bool) {
        self.flags[i] = chosen;
    }

    /// Number of chosen items.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Indices of chosen items, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
            .collect()
    }

    /// Indices of items not chosen, ascending.
    pub fn free_indices(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| (!f).then_some(i))
            .collect()
    }

    /// Number of positions where `self` and `other` differ.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn hamming_distance(&self, other: &Selection) -> usize {
        assert_eq!(self.len(), other.len(), "selection lengths differ");
        self.flags
            .iter()
            .zip(&other.flags)
            .filter(|(a, b)| a != b)
            .count()
    }

    /// The flags as a slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }

    /// Flags as `0`/`1`, the form reporting collaborators usually print.
    pub fn to_bits(&self) -> Vec<u8> {
        self.flags.iter().map(|&f| u8::from(f)).collect()
    }
}

impl From<Vec<bool>> for Selection {
    fn from(flags: Vec<bool>) -> Self {
        Self { flags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_to_rows() {
        let rows = vec![vec![0.0, 1.0], vec![2.0, 0.0]];
        let m = InteractionMatrix::from_square_rows(&rows);
        assert_eq!(m.to_rows(), rows);
        assert!(InteractionMatrix::zeros(0).to_rows().is_empty());
    }

    #[test]
    fn test_selection_indices() {
        let s = Selection::from_indices(5, &[0, 3]);
        assert_eq!(s.selected_indices(), vec![0, 3]);
        assert_eq!(s.free_indices(), vec![1, 2, 4]);
        assert_eq!(s.count(), 2);
        assert_eq!(s.to_bits(), vec![1, 0, 0, 1, 0]);
    }

    #[test]
    fn test_selection_hamming() {
        let a = Selection::empty(4);
        let b = Selection::from_indices(4, &[1, 2]);
        assert_eq!(a.hamming_distance(&b), 2);
        assert_eq!(Selection::full(4).hamming_distance(&a), 4);
    }

    #[test]
    fn test_matrix_padded_and_truncated() {
        let small = vec![vec![0.0, 2.0], vec![2.0, 0.0]];
        let m = InteractionMatrix::padded(&small, 3);
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 2), 0.0);
        assert_eq!(m.get(2, 2), 0.0);

        let big = vec![
            vec![0.0, 1.0, 9.0],
            vec![1.0, 0.0, 9.0],
            vec![9.0, 9.0, 0.0],
        ];
        let m = InteractionMatrix::padded(&big, 2);
        assert_eq!(m.size(), 2);
        assert_eq!(m.nonzero_count(), 2);
    }
}
