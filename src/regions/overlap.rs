use crate::types::Rect;

/// Sort rectangles by descending area. Equal areas keep their order.
pub fn sort_by_area_desc(rects: &mut [Rect]) {
    rects.sort_by(|a, b| b.area().cmp(&a.area()));
}

/// Greedily keep rectangles that do not overlap an already kept one.
///
/// `rects` is expected in descending area order so that larger regions win;
/// the function does not sort. At most `limit` rectangles are returned.
pub fn filter_overlap(rects: &[Rect], limit: usize) -> Vec<Rect> {
    let mut kept: Vec<Rect> = Vec::with_capacity(limit.min(rects.len()));
    if limit == 0 {
        return kept;
    }
    for r0 in rects {
        if kept.iter().any(|r1| r0.overlaps(r1)) {
            continue;
        }
        kept.push(*r0);
        if kept.len() >= limit {
            break;
        }
    }
    kept
}
