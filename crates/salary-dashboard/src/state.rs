//! Event-driven dashboard state.
//!
//! Each user interaction is a [`DashboardEvent`]. Applying one updates the
//! selection or settings and the caller re-runs [`recompute`] through
//! [`DashboardState::dashboard`].

use tracing::{debug, info};

use salary_model::{Dataset, FilterColumn, FilterOptions, FilterSelection, MapTheme, Result};

use crate::options::filter_options;
use crate::pipeline::{Dashboard, recompute};
use crate::settings::DashboardSettings;

/// A discrete input change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Replace the selected values of one column.
    Select {
        column: FilterColumn,
        values: Vec<String>,
    },
    /// Select every available value of one column.
    SelectAll(FilterColumn),
    /// Deselect every value of one column.
    Clear(FilterColumn),
    SetTheme(MapTheme),
    /// Back to the all-selected default.
    Reset,
}

/// Loaded dataset plus the current selection and settings.
#[derive(Debug, Clone)]
pub struct DashboardState<'a> {
    dataset: &'a Dataset,
    options: FilterOptions,
    selection: FilterSelection,
    settings: DashboardSettings,
}

impl<'a> DashboardState<'a> {
    /// Starts with every filter value selected.
    pub fn new(dataset: &'a Dataset, settings: DashboardSettings) -> Self {
        let options = filter_options(dataset);
        let selection = options.select_all();
        info!(
            records = dataset.len(),
            years = options.years.len(),
            seniorities = options.seniorities.len(),
            contracts = options.contracts.len(),
            company_sizes = options.company_sizes.len(),
            modalities = options.modalities.len(),
            "dashboard state initialised"
        );
        Self {
            dataset,
            options,
            selection,
            settings,
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Applies one event. A rejected event leaves the state unchanged.
    pub fn apply(&mut self, event: DashboardEvent) -> Result<()> {
        debug!(?event, "applying dashboard event");
        match event {
            DashboardEvent::Select { column, values } => {
                let mut candidate = self.selection.clone();
                candidate.select(column, &values)?;
                candidate.validate(&self.options)?;
                self.selection = candidate;
            }
            DashboardEvent::SelectAll(column) => {
                let all = self.options.values(column);
                self.selection.select(column, &all)?;
            }
            DashboardEvent::Clear(column) => self.selection.clear(column),
            DashboardEvent::SetTheme(theme) => self.settings.theme = theme,
            DashboardEvent::Reset => self.selection = self.options.select_all(),
        }
        Ok(())
    }

    /// Recomputes the dashboard for the current selection.
    pub fn dashboard(&self) -> Dashboard<'a> {
        recompute(self.dataset, &self.selection, &self.settings)
    }

    /// Applies `event` and recomputes.
    pub fn handle(&mut self, event: DashboardEvent) -> Result<Dashboard<'a>> {
        self.apply(event)?;
        Ok(self.dashboard())
    }
}
