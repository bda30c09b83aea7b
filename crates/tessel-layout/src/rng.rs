//! Default per-site random number generator.
//!
//! Each lattice site gets its own ChaCha8 stream. The key comes from the
//! seed and the stream number from the site's lexicographic number, so the
//! sequence drawn at a given coordinate does not depend on the site
//! ordering in use.
//!
//! Only the stream number and word position are stored per site. The
//! generator itself is rebuilt from a keyed template on every draw.

use crate::collaborators::RngService;
use crate::layout::Layout;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_codec::lexico::lex_index;

/// Position of one site within its ChaCha8 stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SiteStream {
    stream: u64,
    word_pos: u64,
}

/// One ChaCha8 stream per lattice site, stored in linear site order.
#[derive(Clone, Debug)]
pub struct SiteRng {
    seed: u64,
    keyed: ChaCha8Rng,
    sites: Vec<SiteStream>,
}

impl SiteRng {
    /// Generator that will be keyed from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            keyed: ChaCha8Rng::seed_from_u64(seed),
            sites: Vec::new(),
        }
    }

    /// The seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether per-site streams exist.
    pub fn is_initialized(&self) -> bool {
        !self.sites.is_empty()
    }

    /// Number of sites with a stream.
    pub fn sites(&self) -> usize {
        self.sites.len()
    }

    /// Bytes of per-site generator state.
    pub fn state_bytes(&self) -> usize {
        self.sites.len() * std::mem::size_of::<SiteStream>()
    }

    fn draw(keyed: &ChaCha8Rng, site: &mut SiteStream) -> u64 {
        let mut rng = keyed.clone();
        rng.set_stream(site.stream);
        rng.set_word_pos(u128::from(site.word_pos));
        let value = rng.next_u64();
        site.word_pos = rng.get_word_pos() as u64;
        value
    }

    /// Next value from the stream at linear site index `site`.
    ///
    /// Returns `None` before initialisation or for an out-of-range site.
    pub fn next_u64(&mut self, site: usize) -> Option<u64> {
        let keyed = &self.keyed;
        self.sites.get_mut(site).map(|s| Self::draw(keyed, s))
    }

    /// Fill `out[i]` with the next value of site `i`'s stream.
    ///
    /// Returns `false` (leaving `out` untouched) if the length does not
    /// match the number of sites.
    pub fn fill_u64(&mut self, out: &mut [u64]) -> bool {
        if out.len() != self.sites.len() {
            return false;
        }
        for (v, site) in out.iter_mut().zip(&mut self.sites) {
            *v = Self::draw(&self.keyed, site);
        }
        true
    }
}

impl RngService for SiteRng {
    fn initialize_default(&mut self, layout: &Layout) {
        let node = layout.node_number();
        let dims = layout.lattice_size();
        self.sites = (0..layout.sites_on_node())
            .map(|i| SiteStream {
                stream: lex_index(&layout.site_coords(node, i), dims) as u64,
                word_pos: 0,
            })
            .collect();
        tracing::debug!(
            seed = self.seed,
            sites = self.sites.len(),
            state_bytes = self.state_bytes(),
            "default RNG initialised"
        );
    }

    fn finalize(&mut self) {
        self.sites = Vec::new();
    }
}
