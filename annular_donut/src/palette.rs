// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Fixed qualitative palette used to differentiate categories.
///
/// Twenty visually distinct colors, assigned positionally: the point at index
/// `i` receives [`color_for`]`(i)` in both the arc and legend passes, so the
/// two always agree. The table is a constant on purpose; cycling behavior
/// must not depend on any external palette utility.
pub const PALETTE: [Color; 20] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xae, 0xc7, 0xe8),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0xff, 0xbb, 0x78),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0x98, 0xdf, 0x8a),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0xff, 0x98, 0x96),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0xc5, 0xb0, 0xd5),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xc4, 0x9c, 0x94),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0xf7, 0xb6, 0xd2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xc7, 0xc7, 0xc7),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0xdb, 0xdb, 0x8d),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
    Color::from_rgb8(0x9e, 0xda, 0xe5),
];

/// Returns the palette color for a data point at `index`.
///
/// Indexing cycles modulo the palette length, so any index is valid and the
/// assignment is stable across updates for the same index.
#[must_use]
pub fn color_for(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::{PALETTE, color_for};

    #[test]
    fn low_indices_map_directly() {
        for (i, expected) in PALETTE.iter().enumerate() {
            assert_eq!(color_for(i), *expected);
        }
    }

    #[test]
    fn cycling_is_modulo_palette_length() {
        assert_eq!(color_for(PALETTE.len()), color_for(0));
        assert_eq!(color_for(PALETTE.len() * 3 + 7), color_for(7));
    }

    #[test]
    fn assignment_is_stable_across_calls() {
        assert_eq!(color_for(13), color_for(13));
    }

    #[test]
    fn palette_entries_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in PALETTE.iter().skip(i + 1) {
                assert_ne!(a, b, "palette colors must be pairwise distinct");
            }
        }
    }
}
