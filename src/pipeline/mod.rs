// Pure series transforms: downsample -> day buckets -> aligned rows.
// Fetching stays in prom_repo; rendering stays in report.

mod align;
mod bucket;
mod downsample;

pub use align::{AlignInput, align};
pub use bucket::{BucketOutcome, BucketSeries, DayBuckets, KindBuckets, bucket_series};
pub use downsample::downsample;
