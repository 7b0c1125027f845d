// Workbook rendering via rust_xlsxwriter: one data sheet per host kind,
// one chart sheet per metric column.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Chart, ChartLegendPosition, ChartType, Format, Workbook};
use tracing::{info, instrument, warn};

use crate::models::DayReport;

/// Writes every day's workbook into `output_dir`. A day that fails to render
/// is logged and skipped; the remaining days are still written. Returns the
/// number of workbooks written.
pub fn write_all(reports: &[DayReport], output_dir: &Path) -> usize {
    let mut written = 0;
    for report in reports {
        match write_day_report(report, output_dir) {
            Ok(path) => {
                info!(day = %report.day, path = %path.display(), "report written");
                written += 1;
            }
            Err(e) => warn!(day = %report.day, error = %e, "report failed; skipping day"),
        }
    }
    written
}

/// Writes one day's workbook as `cpu_<YYYY-MM-DD>.xlsx` under `output_dir`.
/// Empty cells in aligned rows are left unwritten.
#[instrument(skip(report), fields(day = %report.day))]
pub fn write_day_report(report: &DayReport, output_dir: &Path) -> anyhow::Result<PathBuf> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    for table in &report.tables {
        let sheet = workbook.add_worksheet();
        sheet.set_name(table.sheet_name.as_str())?;
        for (col, name) in table.columns.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, name.as_str(), &header)?;
        }
        for (i, row) in table.rows.iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write_string(r, 0, row.label.as_str())?;
            for (j, value) in row.values.iter().enumerate() {
                if let Some(v) = value {
                    sheet.write_number(r, (j + 1) as u16, *v)?;
                }
            }
        }
    }

    for spec in &report.charts {
        if spec.row_count == 0 {
            continue;
        }
        let mut chart = Chart::new(ChartType::Bar);
        chart
            .add_series()
            .set_name(spec.series_name.as_str())
            .set_categories((spec.data_sheet.as_str(), 1, 0, spec.row_count, 0))
            .set_values((
                spec.data_sheet.as_str(),
                1,
                spec.value_col,
                spec.row_count,
                spec.value_col,
            ));
        chart.title().set_name(spec.title.as_str());
        chart.x_axis().set_name(spec.value_axis.as_str());
        chart.y_axis().set_name("Time");
        chart.legend().set_position(ChartLegendPosition::Bottom);

        let sheet = workbook.add_worksheet();
        sheet.set_name(spec.chart_sheet.as_str())?;
        sheet.insert_chart(2, 1, &chart)?;
    }

    let path = output_dir.join(format!("cpu_{}.xlsx", report.day));
    workbook.save(&path)?;
    Ok(path)
}
