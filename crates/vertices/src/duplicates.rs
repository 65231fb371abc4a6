// internal modules
use crate::coordinate::Coordinate;

// external crates
use log::debug;
use ndarray::{ArrayView1, ArrayView2, Axis};

// standard library
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// One vertex row, hashed and compared by coordinate value
///
/// Holds a view into the vertex array rather than a copy of the coordinates.
#[derive(Debug)]
struct Row<'a, T>(ArrayView1<'a, T>);

impl<T: Coordinate> Hash for Row<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.iter().for_each(|c| c.canonical_bits().hash(state));
    }
}

impl<T: Coordinate> PartialEq for Row<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.canonical_bits() == b.canonical_bits())
    }
}

impl<T: Coordinate> Eq for Row<'_, T> {}

/// Find vertices that repeat an earlier vertex
///
/// Each row of `vertices` is one vertex. For every row equal to an earlier
/// row, the result holds `(duplicate, first)`, where `first` is the index of
/// the earliest row with the same coordinates. Pairs are in ascending order
/// of `duplicate`, and rows that are not duplicates are left out, so any
/// index missing from the result maps to itself.
///
/// ```rust
/// # use labeltools_vertices::remap_duplicates;
/// # use ndarray::array;
/// let vertices = array![
///     [0.0_f32, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [-0.0, 0.0, 0.0],
/// ];
///
/// let pairs = remap_duplicates(vertices.view());
/// assert_eq!(pairs, vec![(2, 0), (3, 1), (4, 0)]);
/// ```
pub fn remap_duplicates<T: Coordinate>(vertices: ArrayView2<'_, T>) -> Vec<(usize, usize)> {
    let mut first_seen = HashMap::with_capacity(vertices.nrows());
    let mut pairs = Vec::new();

    for (index, row) in vertices.axis_iter(Axis(0)).enumerate() {
        match first_seen.entry(Row(row)) {
            Entry::Occupied(first) => pairs.push((index, *first.get())),
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }

    debug!(
        "Found {} duplicates among {} vertices",
        pairs.len(),
        vertices.nrows()
    );

    pairs
}
