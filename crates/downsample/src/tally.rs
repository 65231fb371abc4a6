// labeltools modules
use labeltools_utils::Label;

// external crates
use ndarray::{ArrayBase, Data, Dimension};

/// Reusable scratch space for counting the labels of one block
///
/// Each worker owns one, so blocks are reduced without allocating. The block
/// is copied in and sorted, after which equal labels form contiguous runs in
/// ascending order and the vote is a single scan.
#[derive(Debug)]
pub(crate) struct Tally<T> {
    scratch: Vec<T>,
}

impl<T: Label> Tally<T> {
    pub(crate) fn with_capacity(block_len: usize) -> Self {
        Self {
            scratch: Vec::with_capacity(block_len),
        }
    }

    /// Most frequent label in the block, smallest label on a tie
    ///
    /// With `suppress_zero`, zero only wins a block made entirely of zeros.
    pub(crate) fn majority<S, D>(&mut self, block: &ArrayBase<S, D>, suppress_zero: bool) -> T
    where
        S: Data<Elem = T>,
        D: Dimension,
    {
        let mut values = block.iter();
        let first = match values.next() {
            Some(&first) => first,
            None => return T::default(),
        };

        // uniform blocks are common in segmentations
        if values.all(|&v| v == first) {
            return first;
        }

        self.scratch.clear();
        self.scratch.extend(block.iter().copied());
        self.scratch.sort_unstable();

        // zero sorts first, and a mixed block always has a nonzero label
        let candidates = match suppress_zero {
            true => {
                let zeros = self.scratch.partition_point(|v| v.is_zero());
                &self.scratch[zeros..]
            }
            false => &self.scratch[..],
        };

        let mut best = first;
        let mut best_count = 0;
        for run in candidates.chunk_by(|a, b| a == b) {
            if run.len() > best_count {
                best = run[0];
                best_count = run.len();
            }
        }
        best
    }
}
