use anyhow::Result;
use serde::Serialize;

use crate::frequency::{count_frequencies, FrequencyTable};
use crate::models::{DrawRecord, HistoryStats, VIRADA_DAY, VIRADA_MONTH};
use crate::ranking::{top_k, RankedNumber};
use crate::window::{filter_by_month_day, tail};

/// How many hot dezenas the recent ranking carries.
pub const RECENT_HOT_COUNT: usize = 10;
/// How many hot dezenas the Virada ranking carries. Zero-count dezenas are
/// left off, so sparse Virada histories yield shorter lists.
pub const VIRADA_HOT_COUNT: usize = 13;
/// Recent window used when the caller does not pick one.
pub const DEFAULT_RECENT_WINDOW: usize = 100;

/// Everything the artifact generator and the terminal views consume, built
/// in one pass over a normalized history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyReport {
    pub total_draws: usize,
    pub virada_draws: usize,
    pub recent_window: usize,
    pub historical: FrequencyTable,
    pub virada: FrequencyTable,
    pub recent_hot: Vec<RankedNumber>,
    pub virada_hot: Vec<RankedNumber>,
}

impl FrequencyReport {
    /// Stitch precomputed pieces together. The scalar fields are measured
    /// from the histories handed in, never taken on faith, so they cannot
    /// drift from the tables they describe.
    pub fn assemble(
        full: &[DrawRecord],
        historical: FrequencyTable,
        virada: FrequencyTable,
        virada_history: &[DrawRecord],
        recent: &[DrawRecord],
        recent_hot: Vec<RankedNumber>,
        virada_hot: Vec<RankedNumber>,
    ) -> Self {
        Self {
            total_draws: full.len(),
            virada_draws: virada_history.len(),
            recent_window: recent.len(),
            historical,
            virada,
            recent_hot,
            virada_hot,
        }
    }
}

/// Run the whole pipeline: full count, Virada count, recent count, both hot
/// rankings. An empty history is fine and yields an all-zero report.
pub fn build_report(draws: &[DrawRecord], window: Option<usize>) -> Result<FrequencyReport> {
    let historical = count_frequencies(draws);

    let virada_history = filter_by_month_day(draws, VIRADA_MONTH, VIRADA_DAY)?;
    let virada = count_frequencies(&virada_history);

    let recent = tail(draws, Some(window.unwrap_or(DEFAULT_RECENT_WINDOW)));
    let recent_hot = top_k(&count_frequencies(recent), RECENT_HOT_COUNT, false)?;
    let virada_hot = top_k(&virada, VIRADA_HOT_COUNT, true)?;

    Ok(FrequencyReport::assemble(
        draws,
        historical,
        virada,
        &virada_history,
        recent,
        recent_hot,
        virada_hot,
    ))
}

/// Headline numbers for a history: size, Virada share, covered date range.
/// Draws without a date count toward the totals but not toward the range.
pub fn history_stats(draws: &[DrawRecord]) -> Result<HistoryStats> {
    let virada = filter_by_month_day(draws, VIRADA_MONTH, VIRADA_DAY)?;
    let dates = draws.iter().filter_map(|d| d.date);
    Ok(HistoryStats {
        total_draws: draws.len(),
        virada_draws: virada.len(),
        oldest: dates.clone().min(),
        newest: dates.max(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NUMBERS_PER_DRAW;
    use chrono::NaiveDate;

    fn draw(draw_id: u32, date: Option<NaiveDate>, numbers: [i32; NUMBERS_PER_DRAW]) -> DrawRecord {
        DrawRecord {
            draw_id,
            date,
            numbers,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn sample_history() -> Vec<DrawRecord> {
        vec![
            draw(1, Some(date(2021, 6, 15)), [1, 2, 3, 4, 5, 6]),
            draw(2, Some(date(2021, 12, 31)), [10, 20, 30, 40, 50, 60]),
            draw(3, Some(date(2022, 3, 10)), [1, 2, 3, 7, 8, 9]),
            draw(4, Some(date(2022, 12, 31)), [10, 20, 33, 44, 55, 60]),
            draw(5, None, [5, 15, 25, 35, 45, 55]),
        ]
    }

    #[test]
    fn test_build_report_measures_scalars_from_histories() {
        let draws = sample_history();
        let report = build_report(&draws, Some(3)).unwrap();
        assert_eq!(report.total_draws, 5);
        assert_eq!(report.virada_draws, 2);
        assert_eq!(report.recent_window, 3);
    }

    #[test]
    fn test_build_report_window_capped_at_history() {
        let draws = sample_history();
        let report = build_report(&draws, Some(1000)).unwrap();
        assert_eq!(report.recent_window, 5);
    }

    #[test]
    fn test_build_report_default_window() {
        let draws = sample_history();
        let report = build_report(&draws, None).unwrap();
        // Five draws on file; the default 100 caps at what exists.
        assert_eq!(report.recent_window, 5);
    }

    #[test]
    fn test_build_report_virada_counts_only_dec_31() {
        let draws = sample_history();
        let report = build_report(&draws, None).unwrap();
        assert_eq!(report.virada.get(10), 2);
        assert_eq!(report.virada.get(60), 2);
        assert_eq!(report.virada.get(33), 1);
        assert_eq!(report.virada.get(1), 0);
        assert_eq!(report.virada.total(), 12);
    }

    #[test]
    fn test_build_report_virada_hot_excludes_zeros() {
        let draws = sample_history();
        let report = build_report(&draws, None).unwrap();
        assert!(report.virada_hot.len() <= VIRADA_HOT_COUNT);
        assert!(report.virada_hot.iter().all(|r| r.count > 0));
        assert_eq!(report.virada_hot[0].number, 10);
        assert_eq!(report.virada_hot[0].count, 2);
    }

    #[test]
    fn test_build_report_recent_hot_always_ten() {
        let draws = sample_history();
        let report = build_report(&draws, Some(2)).unwrap();
        assert_eq!(report.recent_hot.len(), RECENT_HOT_COUNT);
    }

    #[test]
    fn test_build_report_empty_history() {
        let report = build_report(&[], None).unwrap();
        assert_eq!(report.total_draws, 0);
        assert_eq!(report.virada_draws, 0);
        assert_eq!(report.recent_window, 0);
        assert_eq!(report.historical.total(), 0);
        assert!(report.virada_hot.is_empty());
        assert_eq!(report.recent_hot.len(), RECENT_HOT_COUNT);
        assert!(report.recent_hot.iter().all(|r| r.count == 0));
    }

    #[test]
    fn test_report_serializes_with_tables_as_maps() {
        let draws = sample_history();
        let report = build_report(&draws, None).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_draws"], 5);
        assert_eq!(json["historical"]["1"], 2);
        assert_eq!(json["virada"]["10"], 2);
    }

    #[test]
    fn test_history_stats_range_ignores_missing_dates() {
        let stats = history_stats(&sample_history()).unwrap();
        assert_eq!(stats.total_draws, 5);
        assert_eq!(stats.virada_draws, 2);
        assert_eq!(stats.oldest, Some(date(2021, 6, 15)));
        assert_eq!(stats.newest, Some(date(2022, 12, 31)));
    }

    #[test]
    fn test_history_stats_empty() {
        let stats = history_stats(&[]).unwrap();
        assert_eq!(stats.total_draws, 0);
        assert_eq!(stats.virada_draws, 0);
        assert_eq!(stats.oldest, None);
        assert_eq!(stats.newest, None);
    }
}
