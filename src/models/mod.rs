// Domain models

mod report;
mod series;

pub use report::{AlignedRow, ChartSpec, DayReport, ReportTable};
pub use series::{HostKind, InstanceSeries, MetricPoint, SeriesFetch, TimedValue};
