use std::time::Instant;

use tracing::{debug, info, info_span};

use salary_model::Dataset;

use crate::csv::{read_csv_bytes, read_csv_file};
use crate::error::Result;
use crate::fetch::fetch_csv;
use crate::schema::dataset_from_frame;
use crate::source::DataSource;

/// Loads and validates the salary dataset from `source`.
pub fn load_dataset(source: &DataSource) -> Result<Dataset> {
    let span = info_span!("load", source = %source);
    let _guard = span.enter();
    let start = Instant::now();

    let origin = source.to_string();
    let df = match source {
        DataSource::Url(url) => {
            let body = fetch_csv(url)?;
            read_csv_bytes(&body, &origin)?
        }
        DataSource::Path(path) => read_csv_file(path)?,
    };
    debug!(rows = df.height(), columns = df.width(), "CSV parsed");

    let dataset = dataset_from_frame(&df, &origin)?;
    info!(
        records = dataset.len(),
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(dataset)
}
