use crate::history::recorder::DataPoint;

/// Thins a history down to roughly `target` points for plotting.
///
/// Histories shorter than `target` are returned whole. Otherwise every `len / target`-th
/// point is kept, together with every event point and the final point, so regime changes
/// never disappear from a chart.
pub fn downsample<'a, I>(points: I, target: usize) -> Vec<DataPoint>
where
    I: IntoIterator<Item = &'a DataPoint>,
    I::IntoIter: ExactSizeIterator,
{
    let points = points.into_iter();
    let len = points.len();
    if len < target || target == 0 {
        return points.copied().collect();
    }

    let stride = len / target;
    points
        .enumerate()
        .filter(|(i, point)| point.event.is_some() || i % stride == 0 || *i == len - 1)
        .map(|(_, point)| *point)
        .collect()
}
