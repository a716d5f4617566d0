use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::Color;
use crate::style::{HorizontalAlign, LineStyle, TableStyle, TextSize, TextStyle};
use crate::table::{Cell, Column, Row, Table, TablePosition};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalDirection {
    Long,
    Short,
    #[default]
    Neutral,
}

impl SignalDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Long => "Long",
            Self::Short => "Short",
            Self::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub source: String,
    pub direction: SignalDirection,
    pub strength: f64,
}

impl Signal {
    #[must_use]
    pub fn new(source: impl Into<String>, direction: SignalDirection) -> Self {
        Self {
            source: source.into(),
            direction,
            strength: 1.0,
        }
    }

    #[must_use]
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }
}

/// Running totals for one signal source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalSummary {
    pub long_count: usize,
    pub short_count: usize,
    pub neutral_count: usize,
    pub last_direction: SignalDirection,
    pub total_strength: f64,
}

impl SignalSummary {
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.long_count + self.short_count + self.neutral_count
    }

    fn absorb(&mut self, signal: &Signal) {
        match signal.direction {
            SignalDirection::Long => self.long_count += 1,
            SignalDirection::Short => self.short_count += 1,
            SignalDirection::Neutral => self.neutral_count += 1,
        }
        self.last_direction = signal.direction;
        self.total_strength += signal.strength;
    }
}

/// Colors and styles used by [`SignalReport::to_table`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub position: TablePosition,
    pub table_style: TableStyle,
    pub header_style: TableStyle,
    pub long_color: Color,
    pub short_color: Color,
    pub neutral_color: Color,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            position: TablePosition::TopRight,
            table_style: TableStyle::new()
                .with_background_color(Color::rgb(0x13, 0x17, 0x22))
                .with_horizontal_align(HorizontalAlign::Center)
                .with_font(TextStyle::new().with_size(TextSize::Small))
                .with_frame(LineStyle::new().with_color(Color::GRAY).with_width(1))
                .with_border(LineStyle::new().with_color(Color::GRAY).with_width(1)),
            header_style: TableStyle::new()
                .with_background_color(Color::rgb(0x36, 0x3a, 0x45))
                .with_font(TextStyle::new().with_color(Color::WHITE)),
            long_color: Color::GREEN,
            short_color: Color::RED,
            neutral_color: Color::GRAY,
        }
    }
}

impl ReportLayout {
    #[must_use]
    pub fn with_position(mut self, position: TablePosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn direction_color(&self, direction: SignalDirection) -> Color {
        match direction {
            SignalDirection::Long => self.long_color,
            SignalDirection::Short => self.short_color,
            SignalDirection::Neutral => self.neutral_color,
        }
    }
}

/// Aggregates signals per source, keeping sources in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    sources: IndexMap<String, SignalSummary>,
}

impl SignalReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `signal` to its source totals. Signals with a non-finite strength
    /// are dropped and `false` is returned.
    pub fn record(&mut self, signal: Signal) -> bool {
        if !signal.strength.is_finite() {
            warn!(
                source = %signal.source,
                strength = signal.strength,
                "dropping signal with non-finite strength"
            );
            return false;
        }
        self.sources
            .entry(signal.source.clone())
            .or_default()
            .absorb(&signal);
        true
    }

    #[must_use]
    pub fn summary(&self, source: &str) -> Option<&SignalSummary> {
        self.sources.get(source)
    }

    pub fn sources(&self) -> impl Iterator<Item = (&str, &SignalSummary)> {
        self.sources
            .iter()
            .map(|(source, summary)| (source.as_str(), summary))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }

    /// Net direction over every recorded signal; ties are neutral.
    #[must_use]
    pub fn consensus(&self) -> SignalDirection {
        let (long, short) = self.direction_totals();
        match long.cmp(&short) {
            std::cmp::Ordering::Greater => SignalDirection::Long,
            std::cmp::Ordering::Less => SignalDirection::Short,
            std::cmp::Ordering::Equal => SignalDirection::Neutral,
        }
    }

    fn direction_totals(&self) -> (usize, usize) {
        self.sources
            .values()
            .fold((0, 0), |(long, short), summary| {
                (long + summary.long_count, short + summary.short_count)
            })
    }

    /// Builds a table document: header, one row per source, then a consensus row.
    #[must_use]
    pub fn to_table(&self, layout: &ReportLayout) -> Table {
        let mut table = Table::new(layout.position).with_style(layout.table_style.clone());
        table.add_column(
            Column::new().with_style(TableStyle::new().with_horizontal_align(HorizontalAlign::Left)),
        );
        for _ in 0..3 {
            table.add_column(Column::new());
        }

        table
            .add_row(Row::new().with_style(layout.header_style.clone()))
            .cells
            .extend(["Source", "Long", "Short", "Last"].map(Cell::new));

        if self.is_empty() {
            debug!("signal report has no sources");
            return table;
        }

        for (source, summary) in self.sources() {
            table.add_row_with_cells([
                Cell::new(source),
                Cell::new(summary.long_count.to_string()),
                Cell::new(summary.short_count.to_string()),
                direction_cell(layout, summary.last_direction),
            ]);
        }

        let (long, short) = self.direction_totals();
        let consensus = table.add_row(
            Row::new().with_style(
                TableStyle::new().with_font(TextStyle::new().with_size(TextSize::Normal)),
            ),
        );
        consensus.add_cell(Cell::new("Consensus"));
        consensus.add_cell(Cell::new(long.to_string()));
        consensus.add_cell(Cell::new(short.to_string()));
        consensus.add_cell(direction_cell(layout, self.consensus()));

        debug!(sources = self.len(), "built signal report table");
        table
    }
}

fn direction_cell(layout: &ReportLayout, direction: SignalDirection) -> Cell {
    Cell::new(direction.as_str())
        .with_style(TableStyle::new().with_background_color(layout.direction_color(direction)))
}
