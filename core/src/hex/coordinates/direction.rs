use crate::hex::coordinates::HexagonalVector;

pub const NUM_DIRECTIONS: usize = 6;

/// Fixed unit steps around a cell. Directions point to the six
/// side-adjacent cells, diagonals to the six vertex-adjacent ones; both
/// tables are indexed 0..6 in increasing rotation-angle order. Indexing
/// out of range is a programming error and panics.
pub trait HexagonalDirection: HexagonalVector {
    fn direction(direction: usize) -> Self;

    fn diagonal(direction: usize) -> Self;

    fn neighbor(&self, direction: usize) -> Self {
        *self + Self::direction(direction)
    }

    fn diagonal_neighbor(&self, direction: usize) -> Self {
        *self + Self::diagonal(direction)
    }
}
