use anyhow::{bail, Result};
use chrono::Datelike;

use crate::models::DrawRecord;

/// Keep only draws that fell on the given month/day of any year. Draws
/// without a date never match. Used with 12/31 to isolate the Mega da
/// Virada history.
pub fn filter_by_month_day(draws: &[DrawRecord], month: u32, day: u32) -> Result<Vec<DrawRecord>> {
    if !(1..=12).contains(&month) {
        bail!("Mês inválido: {} (esperado 1-12)", month);
    }
    if !(1..=31).contains(&day) {
        bail!("Dia inválido: {} (esperado 1-31)", day);
    }
    Ok(draws
        .iter()
        .filter(|d| {
            d.date
                .is_some_and(|date| date.month() == month && date.day() == day)
        })
        .copied()
        .collect())
}

/// Last `n` draws in input order, the full slice when `n` is `None` or at
/// least the history length.
pub fn tail(draws: &[DrawRecord], n: Option<usize>) -> &[DrawRecord] {
    match n {
        Some(n) if n < draws.len() => &draws[draws.len() - n..],
        _ => draws,
    }
}
