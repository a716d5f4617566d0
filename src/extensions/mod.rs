//! Optional helpers built on top of the table core.

pub mod signals;

pub use signals::{ReportLayout, Signal, SignalDirection, SignalReport, SignalSummary};
