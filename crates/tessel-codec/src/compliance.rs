//! Codec compliance test helpers.
//!
//! These functions verify that a codec satisfies the bijection contract
//! of [`CoordinateCodec`]. Reused across all codec test modules.

use crate::codec::CoordinateCodec;
use crate::lexico;
use indexmap::IndexSet;
use tessel_core::{Coord, NodeId};

/// Every valid coordinate in lexicographic order.
pub fn all_coords(codec: &dyn CoordinateCodec) -> Vec<Coord> {
    (0..codec.volume())
        .map(|i| lexico::lex_coord(i, codec.extents()))
        .collect()
}

/// Assert `coord_to_index(index_to_coord(i)) == i` for every index.
pub fn assert_index_round_trip(codec: &dyn CoordinateCodec) {
    for i in 0..codec.volume() {
        let coord = codec.index_to_coord(NodeId::PRIMARY, i);
        assert!(
            codec.contains(&coord),
            "index {i} decoded to out-of-range coordinate {coord:?}"
        );
        let j = codec.coord_to_index(&coord);
        assert_eq!(j, i, "index {i} -> {coord:?} -> {j}");
    }
}

/// Assert `index_to_coord(coord_to_index(c)) == c` for every coordinate.
pub fn assert_coord_round_trip(codec: &dyn CoordinateCodec) {
    for coord in all_coords(codec) {
        let i = codec.coord_to_index(&coord);
        assert!(
            i < codec.volume(),
            "{coord:?} encoded to {i}, volume {}",
            codec.volume()
        );
        let back = codec.index_to_coord(NodeId::PRIMARY, i);
        assert_eq!(back, coord, "{coord:?} -> {i} -> {back:?}");
    }
}

/// Assert that distinct coordinates never share an index.
pub fn assert_indices_unique(codec: &dyn CoordinateCodec) {
    let indices: IndexSet<usize> = all_coords(codec)
        .iter()
        .map(|c| codec.coord_to_index(c))
        .collect();
    assert_eq!(
        indices.len(),
        codec.volume(),
        "coord_to_index maps {} coordinates onto {} indices",
        codec.volume(),
        indices.len()
    );
}

/// Assert every block holds exactly `block_volume` sites and that each
/// site's index falls inside its own block.
pub fn assert_block_volumes(codec: &dyn CoordinateCodec) {
    assert_eq!(
        codec.block_volume() * codec.block_count(),
        codec.volume(),
        "blocks do not tile the volume"
    );
    let mut counts = vec![0usize; codec.block_count()];
    for coord in all_coords(codec) {
        let block = codec.block_of_coord(&coord);
        counts[block] += 1;
        let index = codec.coord_to_index(&coord);
        assert_eq!(
            index / codec.block_volume(),
            block,
            "{coord:?} in block {block} has index {index} outside it"
        );
    }
    for (block, &count) in counts.iter().enumerate() {
        assert_eq!(
            count,
            codec.block_volume(),
            "block {block} holds {count} sites"
        );
    }
}

/// Assert that repeated conversions give identical answers.
pub fn assert_deterministic(codec: &dyn CoordinateCodec) {
    for i in 0..codec.volume() {
        let a = codec.index_to_coord(NodeId::PRIMARY, i);
        let b = codec.index_to_coord(NodeId::PRIMARY, i);
        assert_eq!(a, b, "index_to_coord({i}) is non-deterministic");
        assert_eq!(codec.coord_to_index(&a), codec.coord_to_index(&b));
    }
}

/// Assert the checked conversions reject out-of-domain input.
pub fn assert_checked_rejects_out_of_range(codec: &dyn CoordinateCodec) {
    assert_eq!(
        codec.checked_index_to_coord(NodeId::PRIMARY, codec.volume()),
        None
    );
    let mut past_end: Coord = codec.extents().iter().map(|&e| e as i32 - 1).collect();
    assert!(codec.checked_coord_to_index(&past_end).is_some());
    past_end[0] += 1;
    assert_eq!(codec.checked_coord_to_index(&past_end), None);
    let negative: Coord = codec.extents().iter().map(|_| -1).collect();
    assert_eq!(codec.checked_coord_to_index(&negative), None);
    assert_eq!(codec.checked_coord_to_index(&[]), None);
}

/// Run all compliance checks on a codec.
pub fn run_full_compliance(codec: &dyn CoordinateCodec) {
    assert_index_round_trip(codec);
    assert_coord_round_trip(codec);
    assert_indices_unique(codec);
    assert_block_volumes(codec);
    assert_deterministic(codec);
    assert_checked_rejects_out_of_range(codec);
}
