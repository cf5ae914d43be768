//! Markdown report generator.

use std::fmt::Write as _;

use fundlens_core::aggregate::{percentages, Share};
use fundlens_core::InvestmentRow;

use crate::panel::Panel;
use crate::views::{EntityKind, EntityList, InvestorView, OverviewView, StartupView};

pub struct MarkdownReportGenerator {
    currency_label: String,
}

impl MarkdownReportGenerator {
    pub fn new(currency_label: impl Into<String>) -> Self {
        Self {
            currency_label: currency_label.into(),
        }
    }

    pub fn overview(&self, view: &OverviewView) -> String {
        let mut report = String::from("# Overall Analysis\n\n## Summary\n");

        report.push_str(&self.metric_line("Total Invested Amount", &view.total_invested, |v| {
            self.whole(*v)
        }));
        report.push_str(&self.metric_line(
            "Maximum Invested Amount",
            &view.max_single_startup_funding,
            |v| self.amount(*v),
        ));
        report.push_str(&self.metric_line("Average Ticket Size", &view.average_ticket_size, |v| {
            self.whole(*v)
        }));
        report.push_str(&self.metric_line(
            "Number of Startups Funded",
            &view.funded_startup_count,
            |v| v.to_string(),
        ));

        let _ = write!(report, "\n## MoM Graph ({})\n\n", view.trend_mode.label());
        match &view.trend {
            Panel::Ready(points) => {
                report.push_str("| Month | Value |\n");
                report.push_str("|-------|-------|\n");
                for p in points {
                    let value = match view.trend_mode {
                        fundlens_core::TrendMode::Total => self.amount(p.value),
                        fundlens_core::TrendMode::Count => format!("{}", p.value as u64),
                    };
                    let _ = writeln!(report, "| {} | {} |", p.period, value);
                }
            }
            other => report.push_str(&self.placeholder(other)),
        }

        report
    }

    pub fn startup(&self, view: &StartupView) -> String {
        let mut report = format!("# {}\n\n", view.name);

        let panels = match &view.body {
            Panel::Ready(panels) => panels,
            other => {
                report.push_str(&self.placeholder(other));
                return report;
            }
        };

        report.push_str("## Summary\n");
        report.push_str(&self.metric_line("Total Funding", &panels.total_funding, |v| {
            self.amount(*v)
        }));
        let _ = writeln!(report, "- Funding Events: {}", panels.deal_count);
        if !panels.rounds.is_empty() {
            let _ = writeln!(report, "- Rounds: {}", panels.rounds.join(", "));
        }
        if !panels.investors.is_empty() {
            let _ = writeln!(report, "- Investors: {}", panels.investors.join(", "));
        }

        report.push_str("\n## Most Recent Investments\n\n");
        report.push_str("| Date | Investors | Vertical | City | Round | Amount |\n");
        report.push_str("|------|-----------|----------|------|-------|--------|\n");
        for r in &panels.recent_investments {
            let _ = writeln!(
                report,
                "| {} | {} | {} | {} | {} | {} |",
                opt_date(r.date),
                cell(r.investors.as_deref()),
                cell(r.vertical.as_deref()),
                cell(r.city.as_deref()),
                cell(r.round.as_deref()),
                self.opt_amount(r.amount),
            );
        }

        report.push_str("\n## Sectors\n\n");
        report.push_str(&self.shares_table("Sector", &panels.sector_breakdown, true));

        report
    }

    pub fn investor(&self, view: &InvestorView) -> String {
        let mut report = format!("# {}\n\n", view.name);

        let panels = match &view.body {
            Panel::Ready(panels) => panels,
            other => {
                report.push_str(&self.placeholder(other));
                return report;
            }
        };

        report.push_str("## Summary\n");
        report.push_str(&self.metric_line("Total Invested", &panels.total_invested, |v| {
            self.amount(*v)
        }));
        let _ = writeln!(report, "- Investments: {}", panels.deal_count);

        report.push_str("\n## Most Recent Investments\n\n");
        report.push_str(&self.investment_table(&panels.recent_investments));

        report.push_str("\n## Biggest Investments\n\n");
        report.push_str(&self.shares_table("Startup", &panels.top_startups, false));

        report.push_str("\n## Sectors Invested In\n\n");
        report.push_str(&self.shares_table("Sector", &panels.sector_breakdown, true));

        report.push_str("\n## YoY Investment\n\n");
        match &panels.year_over_year {
            Panel::Ready(years) => {
                report.push_str("| Year | Amount |\n");
                report.push_str("|------|--------|\n");
                for y in years {
                    let _ = writeln!(report, "| {} | {} |", y.year, self.amount(y.value));
                }
            }
            other => report.push_str(&self.placeholder(other)),
        }

        report
    }

    pub fn entities(&self, list: &EntityList) -> String {
        let title = match list.kind {
            EntityKind::Startups => "Startups",
            EntityKind::Investors => "Investors",
        };
        let mut report = format!("# {title} ({})\n\n", list.names.len());
        for name in &list.names {
            let _ = writeln!(report, "- {name}");
        }
        report
    }

    // ── helpers ──

    fn metric_line<T, F>(&self, label: &str, panel: &Panel<T>, fmt: F) -> String
    where
        F: Fn(&T) -> String,
    {
        match panel {
            Panel::Ready(v) => format!("- {label}: {}\n", fmt(v)),
            Panel::Empty(reason) => {
                format!("- {label}: _No data available ({})_\n", reason.message())
            }
            Panel::Failed { message } => format!("- {label}: **unavailable** ({message})\n"),
        }
    }

    fn placeholder<T>(&self, panel: &Panel<T>) -> String {
        match panel {
            Panel::Ready(_) => String::new(),
            Panel::Empty(reason) => format!("_No data available: {}._\n", reason.message()),
            Panel::Failed { message } => format!("> **Warning:** {message}\n"),
        }
    }

    fn shares_table(&self, label: &str, panel: &Panel<Vec<Share>>, with_percent: bool) -> String {
        let shares = match panel {
            Panel::Ready(shares) => shares,
            other => return self.placeholder(other),
        };

        let mut out = String::new();
        if with_percent {
            let _ = writeln!(out, "| {label} | Amount | Share |");
            out.push_str("|------|--------|-------|\n");
            for (s, pct) in shares.iter().zip(percentages(shares)) {
                let _ = writeln!(out, "| {} | {} | {:.1}% |", s.label, self.amount(s.value), pct);
            }
        } else {
            let _ = writeln!(out, "| {label} | Amount |");
            out.push_str("|------|--------|\n");
            for s in shares {
                let _ = writeln!(out, "| {} | {} |", s.label, self.amount(s.value));
            }
        }
        out
    }

    fn investment_table(&self, rows: &[InvestmentRow]) -> String {
        let mut out = String::from("| Date | Startup | Vertical | City | Round | Amount |\n");
        out.push_str("|------|---------|----------|------|-------|--------|\n");
        for r in rows {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                opt_date(r.date),
                cell(r.startup.as_deref()),
                cell(r.vertical.as_deref()),
                cell(r.city.as_deref()),
                cell(r.round.as_deref()),
                self.opt_amount(r.amount),
            );
        }
        out
    }

    fn amount(&self, v: f64) -> String {
        format!("₹{:.2} {}", v, self.currency_label)
    }

    fn whole(&self, v: i64) -> String {
        format!("₹{} {}", v, self.currency_label)
    }

    fn opt_amount(&self, v: Option<f64>) -> String {
        v.map_or_else(|| "—".to_string(), |a| self.amount(a))
    }
}

impl Default for MarkdownReportGenerator {
    fn default() -> Self {
        Self::new("Cr")
    }
}

fn cell(v: Option<&str>) -> String {
    // Pipes would break the table layout.
    v.map_or_else(|| "—".to_string(), |s| s.replace('|', "\\|"))
}

fn opt_date(d: Option<chrono::NaiveDate>) -> String {
    d.map_or_else(|| "—".to_string(), |d| d.to_string())
}
