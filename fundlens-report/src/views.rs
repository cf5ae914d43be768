//! Views: the three dashboard pages assembled from guarded panels.
//!
//! [`Dashboard`] borrows a loaded dataset and a config and builds one view per
//! call. Views are plain data: rendering lives in [`crate::reporting`].

use fundlens_core::aggregate::{investor, overview, startup, trend};
use fundlens_core::aggregate::{Share, TrendPoint, YearTotal};
use fundlens_core::{DataSet, EmptyReason, FundingRecord, InvestmentRow, TrendMode};
use serde::Serialize;
use tracing::debug;

use crate::config::ReportConfig;
use crate::panel::Panel;

/// Overall market summary page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub total_invested: Panel<i64>,
    pub max_single_startup_funding: Panel<f64>,
    pub average_ticket_size: Panel<i64>,
    pub funded_startup_count: Panel<usize>,
    pub trend_mode: TrendMode,
    pub trend: Panel<Vec<TrendPoint>>,
}

/// Startup drill-down page. `body` is `Empty(StartupNotFound)` when the name
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartupView {
    pub name: String,
    pub body: Panel<StartupPanels>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartupPanels {
    pub deal_count: usize,
    pub recent_investments: Vec<FundingRecord>,
    pub total_funding: Panel<f64>,
    pub sector_breakdown: Panel<Vec<Share>>,
    pub rounds: Vec<String>,
    pub investors: Vec<String>,
}

/// Investor drill-down page. `body` is `Empty(InvestorNotFound)` when the
/// name matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestorView {
    pub name: String,
    pub body: Panel<InvestorPanels>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestorPanels {
    pub deal_count: usize,
    pub total_invested: Panel<f64>,
    pub recent_investments: Vec<InvestmentRow>,
    pub top_startups: Panel<Vec<Share>>,
    pub sector_breakdown: Panel<Vec<Share>>,
    pub year_over_year: Panel<Vec<YearTotal>>,
}

/// Which entities a picker should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Startups,
    Investors,
}

/// Sorted entity names for a picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityList {
    pub kind: EntityKind,
    pub names: Vec<String>,
}

/// Read-only entry point for building views over one dataset.
pub struct Dashboard<'a> {
    data: &'a DataSet,
    config: &'a ReportConfig,
}

impl<'a> Dashboard<'a> {
    pub fn new(data: &'a DataSet, config: &'a ReportConfig) -> Self {
        Self { data, config }
    }

    pub fn data(&self) -> &DataSet {
        self.data
    }

    pub fn config(&self) -> &ReportConfig {
        self.config
    }

    /// Overall summary with the month-over-month series in `mode`.
    pub fn overview(&self, mode: TrendMode) -> OverviewView {
        debug!(records = self.data.len(), %mode, "building overview");
        OverviewView {
            total_invested: Panel::guard("total invested", overview::total_invested(self.data)),
            max_single_startup_funding: Panel::guard(
                "maximum startup funding",
                overview::max_single_startup_funding(self.data),
            ),
            average_ticket_size: Panel::guard(
                "average ticket size",
                overview::average_ticket_size(self.data),
            ),
            funded_startup_count: Panel::from_outcome(overview::funded_startup_count(self.data)),
            trend_mode: mode,
            trend: Panel::guard("monthly trend", trend::monthly_trend(self.data, mode)),
        }
    }

    pub fn startup(&self, name: &str) -> StartupView {
        let records = startup::startup_records(self.data, name);
        let limits = self.config.limits();
        debug!(startup = name, matches = records.len(), "building startup view");

        let body = if records.is_empty() {
            Panel::Empty(EmptyReason::StartupNotFound)
        } else {
            Panel::Ready(StartupPanels {
                deal_count: records.len(),
                recent_investments: startup::recent_investments(&records, limits.recent),
                total_funding: Panel::guard("total funding", startup::total_funding(&records)),
                sector_breakdown: Panel::guard(
                    "sector breakdown",
                    startup::sector_breakdown(&records),
                ),
                rounds: startup::rounds(&records),
                investors: startup::backers(&records),
            })
        };

        StartupView {
            name: name.to_string(),
            body,
        }
    }

    pub fn investor(&self, name: &str) -> InvestorView {
        let records = investor::investor_records(self.data, name);
        let limits = self.config.limits();
        debug!(investor = name, matches = records.len(), "building investor view");

        let body = if records.is_empty() {
            Panel::Empty(EmptyReason::InvestorNotFound)
        } else {
            Panel::Ready(InvestorPanels {
                deal_count: records.len(),
                total_invested: Panel::guard(
                    "investor total",
                    investor::total_invested(&records),
                ),
                recent_investments: investor::recent_investments(&records, limits.recent),
                top_startups: Panel::guard(
                    "biggest investments",
                    investor::top_startups(&records, limits.top),
                ),
                sector_breakdown: Panel::guard(
                    "sectors invested in",
                    investor::sector_breakdown(&records),
                ),
                year_over_year: Panel::guard(
                    "year-over-year investment",
                    investor::year_over_year(&records),
                ),
            })
        };

        InvestorView {
            name: name.to_string(),
            body,
        }
    }

    pub fn entities(&self, kind: EntityKind) -> EntityList {
        let names = match kind {
            EntityKind::Startups => self.data.startups(),
            EntityKind::Investors => self.data.investors(),
        };
        EntityList { kind, names }
    }
}
