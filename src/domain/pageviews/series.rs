use super::entity::DailyViews;

pub fn total_views(series: &[DailyViews]) -> u64 {
    series
        .iter()
        .fold(0u64, |sum, point| sum.saturating_add(point.views))
}

/// The point with the most views. Ties keep the earliest point; points with
/// zero views never qualify, so an empty or all-zero series yields `None`.
pub fn peak_day(series: &[DailyViews]) -> Option<&DailyViews> {
    let mut peak: Option<&DailyViews> = None;
    for point in series {
        let best = peak.map_or(0, |p| p.views);
        if point.views > best {
            peak = Some(point);
        }
    }
    peak
}
