//! Default nearest-neighbour shift maps.

use crate::collaborators::MapInitializer;
use crate::layout::Layout;

/// Periodic nearest-neighbour tables in linear site order.
///
/// `forward(mu)[i]` is the linear index of the site one step in the
/// positive `mu` direction from site `i`, wrapping at the lattice
/// boundary; `backward(mu)` is the same in the negative direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShiftMaps {
    forward: Vec<Vec<usize>>,
    backward: Vec<Vec<usize>>,
}

impl ShiftMaps {
    /// Empty maps, filled in by [`init_default_maps`](MapInitializer::init_default_maps).
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of axes with tables.
    pub fn ndim(&self) -> usize {
        self.forward.len()
    }

    /// Positive-direction neighbour table for axis `mu`.
    pub fn forward(&self, mu: usize) -> Option<&[usize]> {
        self.forward.get(mu).map(Vec::as_slice)
    }

    /// Negative-direction neighbour table for axis `mu`.
    pub fn backward(&self, mu: usize) -> Option<&[usize]> {
        self.backward.get(mu).map(Vec::as_slice)
    }
}

impl MapInitializer for ShiftMaps {
    fn init_default_maps(&mut self, layout: &Layout) {
        let dims = layout.lattice_size();
        let node = layout.node_number();
        let sites = layout.sites_on_node();
        self.forward = (0..dims.len()).map(|_| Vec::with_capacity(sites)).collect();
        self.backward = (0..dims.len()).map(|_| Vec::with_capacity(sites)).collect();

        for i in 0..sites {
            let mut coord = layout.site_coords(node, i);
            for (mu, &extent) in dims.iter().enumerate() {
                let d = extent as i32;
                let c = coord[mu];

                coord[mu] = (c + 1) % d;
                self.forward[mu].push(layout.linear_site_index(&coord));
                coord[mu] = (c + d - 1) % d;
                self.backward[mu].push(layout.linear_site_index(&coord));
                coord[mu] = c;
            }
        }
        tracing::debug!(axes = dims.len(), sites, "default shift maps initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_codec::LayoutScheme;

    fn maps(dims: &[u32], scheme: LayoutScheme) -> (Layout, ShiftMaps) {
        let layout = Layout::for_tests(dims, scheme);
        let mut m = ShiftMaps::new();
        m.init_default_maps(&layout);
        (layout, m)
    }

    #[test]
    fn forward_and_backward_are_inverse_permutations() {
        for scheme in LayoutScheme::ALL {
            let (layout, m) = maps(&[4, 2, 6, 2], scheme);
            assert_eq!(m.ndim(), 4);
            for mu in 0..4 {
                let fwd = m.forward(mu).unwrap();
                let bwd = m.backward(mu).unwrap();
                for i in 0..layout.volume() {
                    assert_eq!(bwd[fwd[i]], i, "{scheme} axis {mu} site {i}");
                    assert_eq!(fwd[bwd[i]], i, "{scheme} axis {mu} site {i}");
                }
            }
        }
    }

    #[test]
    fn lexicographic_neighbours_wrap() {
        let (_, m) = maps(&[2, 3], LayoutScheme::Lexicographic);
        // Axis 1 steps by 2 and wraps from the last row to the first.
        assert_eq!(m.forward(1).unwrap(), &[2, 3, 4, 5, 0, 1]);
        assert_eq!(m.backward(1).unwrap(), &[4, 5, 0, 1, 2, 3]);
        assert_eq!(m.forward(0).unwrap(), &[1, 0, 3, 2, 5, 4]);
        assert_eq!(m.forward(2), None);
    }

    #[test]
    fn every_axis_table_reserves_full_volume() {
        let (layout, m) = maps(&[4, 2, 6, 2], LayoutScheme::Checkerboard2);
        for table in m.forward.iter().chain(&m.backward) {
            assert_eq!(table.len(), layout.volume());
            assert!(table.capacity() >= layout.volume());
        }
    }

    #[test]
    fn checkerboard_neighbours_change_colour() {
        let (layout, m) = maps(&[4, 4, 4, 4], LayoutScheme::Checkerboard2);
        let half = layout.volume() / 2;
        for mu in 0..4 {
            for (i, &j) in m.forward(mu).unwrap().iter().enumerate() {
                assert_ne!(i < half, j < half);
            }
        }
    }
}
