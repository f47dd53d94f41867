//! Dense, bit-packed adjacency matrix.
//!
//! Row `i` holds the vertices file `i` requires. Each row occupies
//! `ceil(n / 64)` words, so a lookup is a shift and a mask and a full
//! successor scan touches `n / 64` words.

use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// N×N boolean matrix; `contains(i, j)` iff vertex `i` depends on vertex `j`.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl AdjacencyMatrix {
    /// Create an empty `size`×`size` matrix.
    pub fn new(size: usize) -> Self {
        let words_per_row = size.div_ceil(WORD_BITS);
        Self {
            size,
            words_per_row,
            bits: vec![0; size * words_per_row],
        }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the edge `from -> to` is present.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn contains(&self, from: usize, to: usize) -> bool {
        assert!(to < self.size, "column {to} out of bounds for {}", self.size);
        let word = self.row(from)[to / WORD_BITS];
        word & (1 << (to % WORD_BITS)) != 0
    }

    /// Set the edge `from -> to`. Returns `true` if it was not already set.
    pub(crate) fn insert(&mut self, from: usize, to: usize) -> bool {
        assert!(to < self.size, "column {to} out of bounds for {}", self.size);
        let start = self.row_start(from);
        let word = &mut self.bits[start + to / WORD_BITS];
        let mask = 1 << (to % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    /// First successor of `from` whose index is `>= start_col`.
    pub fn next_successor(&self, from: usize, start_col: usize) -> Option<usize> {
        if start_col >= self.size {
            return None;
        }

        let row = self.row(from);
        let mut word_idx = start_col / WORD_BITS;
        let mut word = row[word_idx] & (u64::MAX << (start_col % WORD_BITS));

        loop {
            if word != 0 {
                return Some(word_idx * WORD_BITS + word.trailing_zeros() as usize);
            }
            word_idx += 1;
            word = *row.get(word_idx)?;
        }
    }

    /// Successors of `from` in ascending index order.
    pub fn successors(&self, from: usize) -> Successors<'_> {
        Successors {
            matrix: self,
            from,
            next_col: 0,
        }
    }

    /// Total number of set cells.
    pub fn edge_count(&self) -> usize {
        self.bits.iter().map(|word| word.count_ones() as usize).sum()
    }

    fn row_start(&self, row: usize) -> usize {
        assert!(row < self.size, "row {row} out of bounds for {}", self.size);
        row * self.words_per_row
    }

    fn row(&self, row: usize) -> &[u64] {
        let start = self.row_start(row);
        &self.bits[start..start + self.words_per_row]
    }
}

impl fmt::Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyMatrix")
            .field("size", &self.size)
            .field("edges", &self.edge_count())
            .finish()
    }
}

/// Iterator over the successors of one vertex.
#[derive(Debug, Clone)]
pub struct Successors<'a> {
    matrix: &'a AdjacencyMatrix,
    from: usize,
    next_col: usize,
}

impl Iterator for Successors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let col = self.matrix.next_successor(self.from, self.next_col)?;
        self.next_col = col + 1;
        Some(col)
    }
}
