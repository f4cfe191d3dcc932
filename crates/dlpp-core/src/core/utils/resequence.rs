//! Row-major to column-major re-sequencing of the tabulated layout.
//!
//! An `OUTPUT` property block spans three physical lines of ten values, so
//! the flat 30-slot layout is row-major over a 3 x 10 grid. Gathering every
//! tenth slot re-reads the block column by column, which places related
//! quantities (`step`, `time(ps)`, `cpu(s)`) next to each other in the
//! emitted table. The gather is expressed here as an explicit permutation so
//! it can be tested, and inverted, independently of the 30-column layout.

/// The stride-`stride` gather order over a `len`-slot row-major layout.
///
/// For each starting offset, every `stride`-th index is taken in turn; the
/// scan is cut off once each index has been emitted exactly once, which
/// removes the wrap-around duplicates a full scan would produce. The result
/// is a permutation of `0..len`.
pub fn permutation(len: usize, stride: usize) -> Vec<usize> {
    assert!(stride > 0, "gather stride must be non-zero");

    let mut order = Vec::with_capacity(len);
    for start in 0..len {
        let mut index = start;
        while index < len {
            order.push(index);
            if order.len() == len {
                return order;
            }
            index += stride;
        }
    }
    order
}

/// Gathers `items` through `order`: output slot `k` holds `items[order[k]]`.
pub fn apply<T: Clone>(items: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&index| items[index].clone()).collect()
}

/// The inverse permutation: applying `order` and then `invert(order)`
/// reconstructs the original sequence exactly.
pub fn invert(order: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; order.len()];
    for (slot, &source) in order.iter().enumerate() {
        inverse[source] = slot;
    }
    inverse
}
