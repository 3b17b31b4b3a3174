//! Frame acquisition: a three-tier policy that turns one traversal into a
//! frame ready for the translator to use.

use crate::traversal::traverse;
use crate::{frame, FrameIndex, Geometry, PageIndex, PhysicalMemory};

/// Obtain a frame for the translator to chain in next.
///
/// `target_page` is the page currently being faulted in (used to score
/// eviction candidates); `skip_frame` is the translator's current parent,
/// excluded from "reuse an empty table" so the walk in progress isn't
/// severed; `will_be_page` is true exactly when the frame will hold page
/// data rather than a table (the translator passes this as true exactly
/// when `level == 1`), which skips an unnecessary zero-fill before
/// `PhysicalMemory::restore` overwrites it.
pub(crate) fn obtain_frame<G: Geometry, PM: PhysicalMemory>(
    pm: &mut PM,
    target_page: PageIndex,
    skip_frame: FrameIndex,
    will_be_page: bool,
) -> FrameIndex {
    let traversal = traverse::<G, PM>(pm, target_page, skip_frame);

    // Tier 1: reuse an empty table. Its contents are already zero.
    if let Some(empty_frame) = traversal.empty_frame {
        frame::unlink::<G, PM>(pm, traversal.empty_parent, empty_frame);
        log::trace!("obtain_frame: reusing empty table frame {empty_frame}");
        return empty_frame;
    }

    // Tier 2: extend the pool.
    if traversal.max_in_use + 1 < G::NUM_FRAMES {
        let fresh = traversal.max_in_use + 1;
        if !will_be_page {
            frame::clean::<G, PM>(pm, fresh);
        }
        log::trace!("obtain_frame: extending pool with frame {fresh}");
        return fresh;
    }

    // Tier 3: evict the page cyclically farthest from `target_page`.
    //
    // Geometry::NUM_FRAMES >= TABLES_DEPTH + 1 guarantees the tree already
    // holds at least one page frame by the time tier 2 is exhausted, so a
    // far-page candidate always exists here.
    let far_page_index = traversal
        .far_page_index
        .expect("tier 3 reached with no page to evict; NUM_FRAMES too small for this geometry");
    log::debug!(
        "obtain_frame: evicting frame {} (page {far_page_index})",
        traversal.far_page_frame
    );
    pm.evict(traversal.far_page_frame, far_page_index);
    frame::unlink::<G, PM>(pm, traversal.far_page_parent, traversal.far_page_frame);
    if !will_be_page {
        frame::clean::<G, PM>(pm, traversal.far_page_frame);
    }
    traversal.far_page_frame
}
