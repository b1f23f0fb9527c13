//! Chart slots and the chart models bound into them.
//!
//! A slot owns at most one chart. Binding a new chart always releases the
//! previous one first, so a slot can never hold two live instances.

use crate::models::{ContentType, DistributionSnapshot, TrendSeries};

/// Owning holder for the chart drawn in one dashboard area.
#[derive(Debug)]
pub struct ChartSlot<C> {
    name: &'static str,
    current: Option<C>,
    bound: u64,
    released: u64,
}

impl<C> ChartSlot<C> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: None,
            bound: 0,
            released: 0,
        }
    }

    /// Replace the bound chart, dropping the previous instance before the
    /// new one is stored.
    pub fn bind(&mut self, chart: C) {
        self.release();
        self.current = Some(chart);
        self.bound += 1;
        tracing::trace!(slot = self.name, bound = self.bound, "chart bound");
    }

    /// Drop the bound chart, if any.
    pub fn release(&mut self) {
        if let Some(old) = self.current.take() {
            drop(old);
            self.released += 1;
            tracing::trace!(slot = self.name, released = self.released, "chart released");
        }
    }

    pub fn get(&self) -> Option<&C> {
        self.current.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }

    /// Charts bound over the slot's lifetime.
    pub fn bound_count(&self) -> u64 {
        self.bound
    }

    /// Charts released over the slot's lifetime.
    pub fn released_count(&self) -> u64 {
        self.released
    }
}

// ── Trends line chart ────────────────────────────────────────────

/// Five per-type series plotted against day index.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendsChart {
    pub days: u32,
    pub dates: Vec<String>,
    pub series: Vec<(ContentType, Vec<(f64, f64)>)>,
    pub y_max: f64,
}

impl TrendsChart {
    pub fn from_series(data: &TrendSeries, days: u32) -> Self {
        let series = ContentType::ALL
            .iter()
            .map(|&ct| {
                let points = data
                    .counts(ct)
                    .iter()
                    .take(data.dates.len())
                    .enumerate()
                    .map(|(i, &v)| (i as f64, v))
                    .collect();
                (ct, points)
            })
            .collect();
        Self {
            days,
            dates: data.dates.clone(),
            series,
            // Leave headroom above the tallest point; keep a visible axis for all-zero data
            y_max: (data.max_count() * 1.1).max(1.0),
        }
    }

    pub fn x_max(&self) -> f64 {
        self.dates.len().saturating_sub(1).max(1) as f64
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First, middle and last date labels for the x axis.
    pub fn x_labels(&self) -> Vec<String> {
        match self.dates.len() {
            0 => Vec::new(),
            1 => vec![self.dates[0].clone()],
            2 => self.dates.clone(),
            n => vec![
                self.dates[0].clone(),
                self.dates[n / 2].clone(),
                self.dates[n - 1].clone(),
            ],
        }
    }
}

// ── Distribution chart ───────────────────────────────────────────

/// Category shares, drawn as proportional bars.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionChart {
    pub snapshot: DistributionSnapshot,
}

impl DistributionChart {
    pub fn new(snapshot: DistributionSnapshot) -> Self {
        Self { snapshot }
    }

    /// `(type, count, percent)` for every slice, in category order.
    pub fn rows(&self) -> Vec<(ContentType, u64, f64)> {
        self.snapshot
            .slices
            .iter()
            .map(|&(ct, n)| (ct, n, self.snapshot.percent(n)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live instances so tests can observe drops.
    struct Probe(Rc<Cell<i32>>);

    impl Probe {
        fn new(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            Probe(Rc::clone(live))
        }
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    // ── ChartSlot ─────────────────────────────────────────────────

    #[test]
    fn rebinding_twice_keeps_one_live_instance() {
        let live = Rc::new(Cell::new(0));
        let mut slot = ChartSlot::new("trends");

        slot.bind(Probe::new(&live));
        assert_eq!(live.get(), 1);

        slot.bind(Probe::new(&live));
        assert_eq!(live.get(), 1, "first chart must be dropped on rebind");
        assert_eq!(slot.bound_count(), 2);
        assert_eq!(slot.released_count(), 1);
        assert!(slot.is_bound());
    }

    #[test]
    fn release_empties_slot_once() {
        let live = Rc::new(Cell::new(0));
        let mut slot = ChartSlot::new("distribution");
        slot.bind(Probe::new(&live));
        slot.release();
        slot.release();
        assert_eq!(live.get(), 0);
        assert!(!slot.is_bound());
        assert_eq!(slot.released_count(), 1);
    }

    #[test]
    fn new_slot_is_empty() {
        let slot: ChartSlot<TrendsChart> = ChartSlot::new("trends");
        assert!(slot.get().is_none());
        assert_eq!(slot.bound_count(), 0);
    }

    // ── TrendsChart ───────────────────────────────────────────────

    fn series() -> TrendSeries {
        TrendSeries {
            dates: vec!["03-01".into(), "03-02".into(), "03-03".into()],
            novel_counts: vec![1.0, 5.0, 3.0],
            drama_counts: vec![2.0, 2.0, 10.0],
            ..Default::default()
        }
    }

    #[test]
    fn trends_chart_points_per_series() {
        let chart = TrendsChart::from_series(&series(), 7);
        assert_eq!(chart.series.len(), 5);
        assert_eq!(chart.series[0].0, ContentType::Novel);
        assert_eq!(chart.series[0].1, vec![(0.0, 1.0), (1.0, 5.0), (2.0, 3.0)]);
        // Missing series plot nothing
        assert!(chart.series[2].1.is_empty());
        assert!((chart.y_max - 11.0).abs() < 1e-9);
        assert_eq!(chart.x_max(), 2.0);
    }

    #[test]
    fn trends_chart_ignores_counts_past_last_date() {
        let mut data = series();
        data.news_counts = vec![1.0, 1.0, 1.0, 99.0];
        let chart = TrendsChart::from_series(&data, 7);
        assert_eq!(chart.series[3].1.len(), 3);
    }

    #[test]
    fn trends_chart_x_labels() {
        let chart = TrendsChart::from_series(&series(), 7);
        assert_eq!(chart.x_labels(), vec!["03-01", "03-02", "03-03"]);
        let empty = TrendsChart::from_series(&TrendSeries::default(), 30);
        assert!(empty.is_empty());
        assert!(empty.x_labels().is_empty());
        assert_eq!(empty.y_max, 1.0);
    }

    // ── DistributionChart ─────────────────────────────────────────

    #[test]
    fn distribution_rows_with_percentages() {
        let chart = DistributionChart::new(DistributionSnapshot {
            slices: vec![(ContentType::Novel, 3), (ContentType::News, 1)],
        });
        let rows = chart.rows();
        assert_eq!(rows[0], (ContentType::Novel, 3, 75.0));
        assert_eq!(rows[1], (ContentType::News, 1, 25.0));
    }
}
