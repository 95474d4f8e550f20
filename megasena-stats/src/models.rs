use chrono::NaiveDate;

/// Dezenas sorteadas por concurso.
pub const NUMBERS_PER_DRAW: usize = 6;

/// Maior dezena do volante (as dezenas vão de 1 a 60).
pub const POOL_SIZE: u8 = 60;

/// A Mega da Virada acontece todo 31 de dezembro.
pub const VIRADA_MONTH: u32 = 12;
pub const VIRADA_DAY: u32 = 31;

/// Date spellings seen across the sources, tried in order: the Brazilian
/// APIs and the Caixa sheet use DD/MM/YYYY, older exports use ISO.
pub const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

/// One drawing, as produced by normalization. `numbers` keeps the source
/// order and may carry out-of-range values; the frequency counter is the
/// one that filters them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRecord {
    pub draw_id: u32,
    pub date: Option<NaiveDate>,
    pub numbers: [i32; NUMBERS_PER_DRAW],
}

/// Parse a draw date, trying each known format. Anything unrecognized is
/// treated as "no date" rather than an error.
pub fn parse_draw_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Scalar summary of a draw history: totals plus the date range covered by
/// the records that carry a parseable date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryStats {
    pub total_draws: usize,
    pub virada_draws: usize,
    pub oldest: Option<NaiveDate>,
    pub newest: Option<NaiveDate>,
}
