//! Compile-time memory geometry.
//!
//! The original design takes `OFFSET_WIDTH`, `VIRTUAL_ADDRESS_WIDTH` and
//! `NUM_FRAMES` from a build-time header; here they are associated
//! constants of a [`Geometry`] implementor, so [`crate::VirtualMemory`] can
//! be instantiated at several geometries in the same binary (handy for
//! tests that sweep geometries side by side).

/// Describes the shape of one virtual-memory instance.
///
/// Implementors supply the three independent constants; everything else
/// (`PAGE_SIZE`, `NUM_PAGES`, `TABLES_DEPTH`, `VIRTUAL_MEMORY_SIZE`) is
/// derived from those three.
pub trait Geometry {
    /// Bits per page-table level, and log2 of `PAGE_SIZE`.
    const OFFSET_WIDTH: u32;

    /// Total bits in a virtual address.
    const VIRTUAL_ADDRESS_WIDTH: u32;

    /// Number of physical frames backing this instance.
    const NUM_FRAMES: u64;

    /// Words per frame and entries per table.
    const PAGE_SIZE: u64 = 1u64 << Self::OFFSET_WIDTH;

    /// Number of virtual pages addressable by this geometry.
    const NUM_PAGES: u64 = 1u64 << (Self::VIRTUAL_ADDRESS_WIDTH - Self::OFFSET_WIDTH);

    /// Number of table levels above the leaf page.
    ///
    /// `ceil((VIRTUAL_ADDRESS_WIDTH - OFFSET_WIDTH) / OFFSET_WIDTH)`; the top
    /// level uses only the leftover high bits when the division isn't exact.
    const TABLES_DEPTH: u32 = {
        let index_bits = Self::VIRTUAL_ADDRESS_WIDTH - Self::OFFSET_WIDTH;
        index_bits.div_ceil(Self::OFFSET_WIDTH)
    };

    /// Total addressable virtual memory in words.
    const VIRTUAL_MEMORY_SIZE: u64 = Self::NUM_PAGES * Self::PAGE_SIZE;
}


#[cfg(test)]
mod tests {
    use super::test_geometry::{Small, Uneven};
    use super::Geometry;

    #[test]
    fn small_geometry_derives_constants_correctly() {
        assert_eq!(Small::PAGE_SIZE, 16);
        assert_eq!(Small::NUM_PAGES, 1 << 16);
        assert_eq!(Small::TABLES_DEPTH, 4);
        assert_eq!(Small::VIRTUAL_MEMORY_SIZE, (1u64 << 16) * 16);
    }

    #[test]
    fn uneven_geometry_rounds_tables_depth_up() {
        // (18 - 4) / 4 = 3.5 -> ceil to 4
        assert_eq!(Uneven::TABLES_DEPTH, 4);
    }
}
