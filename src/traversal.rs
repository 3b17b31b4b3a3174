//! Single-pass tree traversal.
//!
//! One DFS over the live page-table tree rooted at frame `0`, collecting
//! three facts in one walk: the first empty table frame, the highest
//! in-use frame index, and the page whose virtual index is cyclically
//! farthest from a target page.

use crate::distance::cyclic_distance;
use crate::{FrameIndex, Geometry, PageIndex, PhysicalMemory};

/// Everything [`traverse`] observed.
///
/// `empty_frame` and `far_page_index` are `Option`s rather than aliasing
/// `0` as "not found": frame `0` and page index `0` are both legitimate
/// values, so `None` is used instead of aliasing 0 as unset.
#[derive(Default)]
pub(crate) struct TraversalResult {
    pub empty_frame: Option<FrameIndex>,
    pub empty_parent: FrameIndex,
    pub max_in_use: FrameIndex,
    pub far_page_frame: FrameIndex,
    pub far_page_index: Option<PageIndex>,
    pub far_page_parent: FrameIndex,
}

/// Walk the tree rooted at frame `0`, skipping `skip` for empty-frame
/// candidacy (it's the translator's current parent; reclaiming it would
/// sever the branch being walked), and scoring "farthest" against `target`.
pub(crate) fn traverse<G: Geometry, PM: PhysicalMemory>(
    pm: &PM,
    target: PageIndex,
    skip: FrameIndex,
) -> TraversalResult {
    let mut result = TraversalResult::default();
    visit::<G, PM>(pm, 0, 0, 0, 0, target, skip, &mut result);
    result
}

#[allow(clippy::too_many_arguments)]
fn visit<G: Geometry, PM: PhysicalMemory>(
    pm: &PM,
    frame: FrameIndex,
    partial_index: PageIndex,
    depth: u32,
    parent: FrameIndex,
    target: PageIndex,
    skip: FrameIndex,
    out: &mut TraversalResult,
) {
    if frame > out.max_in_use {
        out.max_in_use = frame;
    }

    if depth == G::TABLES_DEPTH {
        let is_farther = match out.far_page_index {
            None => true,
            Some(best) => {
                cyclic_distance::<G>(target, partial_index) > cyclic_distance::<G>(target, best)
            }
        };
        if is_farther {
            out.far_page_frame = frame;
            out.far_page_index = Some(partial_index);
            out.far_page_parent = parent;
        }
        return;
    }

    for i in 0..G::PAGE_SIZE {
        let child = pm.read(frame * G::PAGE_SIZE + i);
        if child != 0 {
            visit::<G, PM>(
                pm,
                child as FrameIndex,
                (partial_index << G::OFFSET_WIDTH) | i,
                depth + 1,
                frame,
                target,
                skip,
                out,
            );
        }
    }

    if out.empty_frame.is_none()
        && frame != 0
        && frame != skip
        && crate::frame::is_empty::<G, PM>(pm, frame)
    {
        out.empty_frame = Some(frame);
        out.empty_parent = parent;
    }
}
