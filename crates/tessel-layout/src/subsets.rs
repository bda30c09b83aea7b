//! Default even/odd site subsets.

use crate::collaborators::SubsetInitializer;
use crate::layout::Layout;

/// Even and odd sites by coordinate-sum parity, as linear site indices.
///
/// Indices are listed in increasing order. Under a checkerboard ordering
/// each subset is one contiguous half of the index range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParitySubsets {
    even: Vec<usize>,
    odd: Vec<usize>,
}

impl ParitySubsets {
    /// Empty subsets, filled in by [`init_default_sets`](SubsetInitializer::init_default_sets).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sites whose coordinate sum is even.
    pub fn even(&self) -> &[usize] {
        &self.even
    }

    /// Sites whose coordinate sum is odd.
    pub fn odd(&self) -> &[usize] {
        &self.odd
    }

    /// Subset by colour: 0 is even, 1 is odd.
    pub fn colour(&self, cb: usize) -> Option<&[usize]> {
        match cb {
            0 => Some(&self.even),
            1 => Some(&self.odd),
            _ => None,
        }
    }
}

impl SubsetInitializer for ParitySubsets {
    fn init_default_sets(&mut self, layout: &Layout) {
        self.even.clear();
        self.odd.clear();
        let node = layout.node_number();
        for i in 0..layout.sites_on_node() {
            let coord = layout.site_coords(node, i);
            let parity = coord.iter().fold(0, |acc, &c| acc ^ (c & 1));
            if parity == 0 {
                self.even.push(i);
            } else {
                self.odd.push(i);
            }
        }
        tracing::debug!(
            even = self.even.len(),
            odd = self.odd.len(),
            "default subsets initialised"
        );
    }
}
