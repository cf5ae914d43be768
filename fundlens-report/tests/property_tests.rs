//! Property tests for view assembly and rendering.
//!
//! Uses proptest to verify:
//! 1. Every view renders over any dataset, including ones whose sums overflow
//! 2. Configured limits bound every drill-down table
//! 3. JSON export always carries the envelope and a tagged panel status
//! 4. Sector percentages add up to 100 when anything was invested

use chrono::NaiveDate;
use fundlens_core::aggregate::{percentages, Share};
use fundlens_core::{DataSet, FundingRecord, TrendMode};
use fundlens_report::{
    export_json, Dashboard, EntityKind, MarkdownReportGenerator, ReportConfig, SCHEMA_VERSION,
};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_amount() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        8 => (0u32..100_000).prop_map(|a| Some(a as f64 / 100.0)),
        1 => Just(None),
        // Large enough that two of them overflow a sum.
        1 => Just(Some(f64::MAX)),
    ]
}

fn arb_record() -> impl Strategy<Value = FundingRecord> {
    (
        prop::option::of((2016..2021i32, 1..=12u32, 1..=28u32)),
        prop::option::weighted(0.9, (0u8..5).prop_map(|i| format!("S{i}"))),
        prop::collection::vec((0u8..4).prop_map(|i| format!("Inv{i}")), 0..3),
        prop::option::of((0u8..3).prop_map(|i| format!("V{i}"))),
        arb_amount(),
    )
        .prop_map(|(date, startup, investors, vertical, amount)| FundingRecord {
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            startup,
            investors: if investors.is_empty() {
                None
            } else {
                Some(investors.join(", "))
            },
            vertical,
            city: None,
            round: Some("Seed".into()),
            amount,
        })
}

fn arb_dataset() -> impl Strategy<Value = DataSet> {
    prop::collection::vec(arb_record(), 0..30).prop_map(DataSet::from_records)
}

// ── 1. Rendering never gives up ──────────────────────────────────────

proptest! {
    /// The overview always shows every summary line, whatever each panel holds.
    #[test]
    fn overview_always_renders_every_metric(data in arb_dataset(), count_mode in any::<bool>()) {
        let config = ReportConfig::default();
        let mode = if count_mode { TrendMode::Count } else { TrendMode::Total };
        let view = Dashboard::new(&data, &config).overview(mode);
        let md = MarkdownReportGenerator::default().overview(&view);

        prop_assert!(md.starts_with("# Overall Analysis"));
        for label in [
            "Total Invested Amount",
            "Maximum Invested Amount",
            "Average Ticket Size",
            "Number of Startups Funded",
            "## MoM Graph",
        ] {
            prop_assert!(md.contains(label), "missing {label}");
        }
    }

    /// Every listed entity gets a full drill-down page.
    #[test]
    fn listed_entities_render_full_pages(data in arb_dataset()) {
        let config = ReportConfig::default();
        let dash = Dashboard::new(&data, &config);
        let md = MarkdownReportGenerator::default();

        for name in dash.entities(EntityKind::Startups).names {
            let page = md.startup(&dash.startup(&name));
            prop_assert!(page.contains("## Summary"));
            prop_assert!(page.contains("## Sectors"));
        }
        for name in dash.entities(EntityKind::Investors).names {
            let page = md.investor(&dash.investor(&name));
            prop_assert!(page.contains("## Summary"));
            prop_assert!(page.contains("## YoY Investment"));
        }
    }
}

// ── 2. Limits ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn limits_bound_drill_down_tables(
        data in arb_dataset(),
        recent in 1usize..8,
        top in 1usize..8,
    ) {
        let config = ReportConfig {
            recent_limit: recent,
            top_limit: top,
            ..ReportConfig::default()
        };
        let dash = Dashboard::new(&data, &config);

        for name in dash.entities(EntityKind::Startups).names {
            if let Some(panels) = dash.startup(&name).body.ready() {
                prop_assert!(panels.recent_investments.len() <= recent);
            }
        }
        for name in dash.entities(EntityKind::Investors).names {
            if let Some(panels) = dash.investor(&name).body.ready() {
                prop_assert!(panels.recent_investments.len() <= recent);
                if let Some(top_startups) = panels.top_startups.ready() {
                    prop_assert!(top_startups.len() <= top);
                }
            }
        }
    }
}

// ── 3. JSON envelope ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn json_export_always_parses(data in arb_dataset()) {
        let config = ReportConfig::default();
        let view = Dashboard::new(&data, &config).overview(TrendMode::Total);
        let json = export_json(&data, &view).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(&value["schema_version"], &serde_json::json!(SCHEMA_VERSION));
        prop_assert_eq!(&value["record_count"], &serde_json::json!(data.len()));
        let status = value["view"]["total_invested"]["status"].as_str().unwrap_or_default();
        prop_assert!(["ready", "empty", "failed"].contains(&status));
    }
}

// ── 4. Percentages ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn percentages_sum_to_100(values in prop::collection::vec(0u32..10_000, 1..12)) {
        let shares: Vec<Share> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Share::new(format!("V{i}"), *v as f64))
            .collect();
        let pct = percentages(&shares);
        prop_assert_eq!(pct.len(), shares.len());

        let sum: f64 = pct.iter().sum();
        if values.iter().any(|v| *v > 0) {
            prop_assert!((sum - 100.0).abs() < 1e-6);
        } else {
            prop_assert_eq!(sum, 0.0);
        }
    }
}
