use crate::model::{Day, BUCKET_COUNT};
use tracing::debug;

/// Assign every day a bucket in `0..BUCKET_COUNT` by min-max scaling its count
/// and rounding up.
///
/// When every count is equal (including all zero) there is no signal to
/// scale, and every day gets bucket 0.
pub fn normalize(days: &mut [Day]) {
    let Some(min) = days.iter().map(|d| d.count).min() else {
        return;
    };
    let max = days.iter().map(|d| d.count).max().unwrap_or(min);

    if max == min {
        debug!(count = min, "flat distribution, all buckets zero");
        for day in days.iter_mut() {
            day.bucket = Some(0);
        }
        return;
    }

    let range = u64::from(max - min);
    let top = u64::from(BUCKET_COUNT - 1);
    for day in days.iter_mut() {
        let scaled = u64::from(day.count - min) * top;
        // ceil(scaled / range) without going through floats
        let bucket = scaled.div_ceil(range);
        day.bucket = Some(bucket as u8);
    }
}
