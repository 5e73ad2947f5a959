use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use salary_dashboard::{
    Dashboard, DashboardEvent, DashboardSettings, DashboardState, filter_options,
};
use salary_ingest::{DataSource, load_dataset};
use salary_model::{Dataset, FilterColumn};
use salary_report::{DashboardBundle, VegaLiteWriter, write_bundle, write_charts};

use crate::cli::{ChartsArgs, TableArgs, ViewArgs};
use crate::config::DashboardConfig;
use crate::render::{chart_status_table, detail_table, metrics_line, metrics_table, options_table};

/// Loaded dataset plus the settings resolved from config and flags.
pub struct Session {
    pub source: DataSource,
    pub dataset: Dataset,
    pub settings: DashboardSettings,
    /// Whether tables carry ANSI styling.
    pub styled: bool,
}

impl Session {
    /// Resolves the config layers and loads the dataset once.
    pub fn open(
        config_path: Option<&Path>,
        source_flag: Option<&str>,
        styled: bool,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => DashboardConfig::load(path)?,
            None => DashboardConfig::default(),
        };
        let source = config.data_source(source_flag);
        let dataset =
            load_dataset(&source).with_context(|| format!("load dataset from {source}"))?;
        Ok(Self {
            source,
            dataset,
            settings: config.settings(),
            styled,
        })
    }

    pub fn from_dataset(dataset: Dataset, settings: DashboardSettings) -> Self {
        Self {
            source: DataSource::default(),
            dataset,
            settings,
            styled: false,
        }
    }

    /// Dashboard state with the view flags applied as input-change events.
    pub fn state(&self, args: &ViewArgs) -> Result<DashboardState<'_>> {
        let mut settings = self.settings.clone();
        if let Some(title) = &args.reference_title {
            settings = settings.with_reference_title(title.as_str());
        }
        let mut state = DashboardState::new(&self.dataset, settings);
        for event in view_events(args)? {
            let description = format!("{event:?}");
            state
                .apply(event)
                .with_context(|| format!("apply filter {description}"))?;
        }
        Ok(state)
    }
}

/// Translates view flags into dashboard events, in flag order: selections
/// first, then `--none` columns, then the theme.
pub fn view_events(args: &ViewArgs) -> Result<Vec<DashboardEvent>> {
    let mut events = Vec::new();
    let selections = [
        (FilterColumn::Year, &args.year),
        (FilterColumn::Seniority, &args.seniority),
        (FilterColumn::Contract, &args.contract),
        (FilterColumn::CompanySize, &args.company_size),
        (FilterColumn::Modality, &args.modality),
    ];
    for (column, values) in selections {
        if !values.is_empty() {
            events.push(DashboardEvent::Select {
                column,
                values: values.clone(),
            });
        }
    }
    for name in &args.none {
        let column = FilterColumn::from_str(name).context("parse --none column")?;
        events.push(DashboardEvent::Clear(column));
    }
    if let Some(theme) = args.theme {
        events.push(DashboardEvent::SetTheme(theme.into()));
    }
    Ok(events)
}

pub fn run_options(session: &Session) -> Result<()> {
    let options = filter_options(&session.dataset);
    println!("Source: {}", session.source);
    println!("Records: {}", session.dataset.len());
    println!("{}", options_table(&options, session.styled));
    Ok(())
}

pub fn run_summary(session: &Session, args: &ViewArgs) -> Result<()> {
    let state = session.state(args)?;
    let dashboard = state.dashboard();
    report_empty(&dashboard);
    info!(metrics = %metrics_line(&dashboard.metrics), "summary computed");
    println!("{}", metrics_table(&dashboard.metrics, session.styled));
    println!("{}", chart_status_table(&dashboard.charts, session.styled));
    Ok(())
}

pub fn run_table(session: &Session, args: &TableArgs) -> Result<()> {
    let state = session.state(&args.view)?;
    let dashboard = state.dashboard();
    report_empty(&dashboard);
    let table = detail_table(
        &dashboard.view,
        session.dataset.extra_columns(),
        args.limit,
        session.styled,
    );
    println!("{table}");
    let shown = args
        .limit
        .map_or(dashboard.view.len(), |limit| dashboard.view.len().min(limit));
    println!(
        "Showing {shown} of {} matching records ({} loaded)",
        dashboard.view.len(),
        session.dataset.len()
    );
    Ok(())
}

/// Writes the chart files and `dashboard.json`; returns the bundle path.
pub fn run_charts(session: &Session, args: &ChartsArgs) -> Result<PathBuf> {
    let span = info_span!("charts", dir = %args.output_dir.display());
    let _guard = span.enter();

    let state = session.state(&args.view)?;
    let dashboard = state.dashboard();
    report_empty(&dashboard);

    let mut writer = VegaLiteWriter::new();
    if let Some(url) = &args.geojson_url {
        writer = writer.with_geojson_url(url.clone());
    }
    if args.compact {
        writer = writer.compact();
    }
    let entries = write_charts(&writer, &args.output_dir, &dashboard.charts)
        .context("write chart files")?;
    let bundle = DashboardBundle::new(
        session.source.to_string(),
        state.settings().theme,
        state.selection().clone(),
        dashboard.metrics,
        entries,
    );
    let path = write_bundle(&args.output_dir, &bundle).context("write dashboard bundle")?;
    println!("{}", chart_status_table(&dashboard.charts, session.styled));
    println!("Dashboard: {}", path.display());
    Ok(path)
}

fn report_empty(dashboard: &Dashboard<'_>) {
    if dashboard.view.is_empty() {
        warn!("no records match the current filters");
        eprintln!("warning: no records match the current filters");
    }
}
