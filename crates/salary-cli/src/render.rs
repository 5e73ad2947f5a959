//! Terminal tables for metrics, chart status, filter options and records.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use salary_common::{format_thousands, format_usd};
use salary_dashboard::FilteredView;
use salary_model::{ChartOutcome, FilterColumn, FilterOptions, MetricsSummary};

/// One-line metrics rendering used in logs and plain output.
pub fn metrics_line(metrics: &MetricsSummary) -> String {
    let top = if metrics.top_job_title.is_empty() {
        "-"
    } else {
        metrics.top_job_title.as_str()
    };
    format!(
        "mean {} | max {} | records {} | top title {}",
        format_usd(metrics.mean_usd),
        format_usd(metrics.max_usd),
        format_thousands(metrics.count as f64),
        top
    )
}

pub fn metrics_table(metrics: &MetricsSummary, styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Mean salary"),
        header_cell("Max salary"),
        header_cell("Records"),
        header_cell("Most frequent title"),
    ]);
    apply_table_style(&mut table, styled);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let top = if metrics.top_job_title.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(&metrics.top_job_title).add_attribute(Attribute::Bold)
    };
    table.add_row(vec![
        Cell::new(format_usd(metrics.mean_usd)),
        Cell::new(format_usd(metrics.max_usd)),
        Cell::new(format_thousands(metrics.count as f64)),
        top,
    ]);
    table
}

pub fn chart_status_table(outcomes: &[ChartOutcome], styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Chart"),
        header_cell("Status"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table, styled);
    align_column(&mut table, 1, CellAlignment::Center);
    for outcome in outcomes {
        let (status, detail) = match outcome {
            ChartOutcome::Ready(spec) => (
                Cell::new("ready").fg(Color::Green),
                Cell::new(spec.title()),
            ),
            ChartOutcome::Unavailable { reason, .. } => (
                Cell::new("unavailable")
                    .fg(Color::Yellow)
                    .add_attribute(Attribute::Bold),
                dim_cell(reason),
            ),
        };
        table.add_row(vec![Cell::new(outcome.kind()), status, detail]);
    }
    table
}

pub fn options_table(options: &FilterOptions, styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Filter"),
        header_cell("Flag"),
        header_cell("Count"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut table, styled);
    align_column(&mut table, 2, CellAlignment::Right);
    for column in FilterColumn::ALL {
        let values = options.values(column);
        table.add_row(vec![
            Cell::new(column.label()),
            dim_cell(format!("--{column}")),
            Cell::new(values.len()),
            Cell::new(values.join(", ")),
        ]);
    }
    table
}

/// Detail table of the filtered records: the typed columns followed by every
/// other CSV column. `None` prints every row.
pub fn detail_table(
    view: &FilteredView<'_>,
    extra_columns: &[String],
    limit: Option<usize>,
    styled: bool,
) -> Table {
    let mut table = Table::new();
    let mut header = vec![
        header_cell("Year"),
        header_cell("Level"),
        header_cell("Contract"),
        header_cell("Company"),
        header_cell("Modality"),
        header_cell("Job title"),
        header_cell("Residence"),
        header_cell("USD"),
    ];
    header.extend(extra_columns.iter().map(|name| header_cell(name)));
    table.set_header(header);
    apply_table_style(&mut table, styled);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for record in view.iter().take(limit.unwrap_or(usize::MAX)) {
        let mut row = vec![
            Cell::new(record.year),
            Cell::new(&record.seniority),
            Cell::new(&record.contract),
            Cell::new(&record.company_size),
            Cell::new(&record.modality),
            Cell::new(&record.job_title),
            Cell::new(&record.residence_iso3),
            Cell::new(format_usd(record.usd)),
        ];
        row.extend(record.extra.iter().map(Cell::new));
        table.add_row(row);
    }
    table
}

fn apply_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
