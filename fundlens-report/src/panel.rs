//! Panel: one independently guarded piece of a view.
//!
//! A view is a set of panels (a metric, a table, a chart series). Each panel
//! is computed through [`Panel::guard`], which turns an aggregation failure
//! into a user-visible message instead of propagating it. One failed or empty
//! panel never stops its siblings from rendering.

use fundlens_core::{AggregateError, AggregateResult, EmptyReason, Outcome};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Panel<T> {
    Ready(T),
    Empty(EmptyReason),
    Failed { message: String },
}

impl<T> Panel<T> {
    /// Recover an aggregation result at the panel boundary.
    pub fn guard(name: &str, result: AggregateResult<T>) -> Self {
        match result {
            Ok(outcome) => Self::from_outcome(outcome),
            Err(e) => Self::failed(name, &e),
        }
    }

    pub fn from_outcome(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Ready(v) => Panel::Ready(v),
            Outcome::Empty(reason) => Panel::Empty(reason),
        }
    }

    fn failed(name: &str, error: &AggregateError) -> Self {
        warn!(panel = name, error = %error, "panel computation failed");
        Panel::Failed {
            message: format!("Could not compute {name}: {error}"),
        }
    }

    /// Chain into a nested panel. Empty and failed panels pass through.
    pub fn and_then<U, F>(self, f: F) -> Panel<U>
    where
        F: FnOnce(T) -> Panel<U>,
    {
        match self {
            Panel::Ready(v) => f(v),
            Panel::Empty(reason) => Panel::Empty(reason),
            Panel::Failed { message } => Panel::Failed { message },
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Panel::Ready(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Panel::Empty(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Panel::Failed { .. })
    }
}
