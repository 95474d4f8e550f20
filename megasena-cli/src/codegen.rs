use megasena_stats::frequency::FrequencyTable;
use megasena_stats::models::POOL_SIZE;
use megasena_stats::ranking::RankedNumber;
use megasena_stats::report::FrequencyReport;

/// Frequency table as a JS object literal, ten dezenas per line. The
/// consumer pastes this verbatim, so the layout is part of the contract:
/// two-space indent, `n: count` pairs, intermediate lines keep their
/// trailing separator.
pub fn format_frequency_js(table: &FrequencyTable) -> String {
    let mut out = String::from("{\n");
    for (number, count) in table.iter() {
        if number % 10 == 1 {
            out.push_str("  ");
        }
        out.push_str(&format!("{}: {}", number, count));
        if number < POOL_SIZE {
            out.push_str(", ");
        }
        if number % 10 == 0 {
            out.push('\n');
        }
    }
    out.push('}');
    out
}

/// Ranked dezenas as a JS array literal, ranking order preserved.
pub fn format_numbers_js(ranked: &[RankedNumber]) -> String {
    let numbers: Vec<String> = ranked.iter().map(|r| r.number.to_string()).collect();
    format!("[{}]", numbers.join(", "))
}

/// The full artifact: a banner with the generation timestamp and the
/// headline counts, then the four `const` declarations the predictor page
/// swaps in.
pub fn generate_js(report: &FrequencyReport, generated_at: &str) -> String {
    format!(
        "
// ============================================
// DADOS ATUALIZADOS EM: {generated_at}
// Total de sorteios: {total_draws}
// Sorteios da Virada: {virada_draws}
// ============================================

// Historical frequency data from {total_draws} Mega-Sena drawings
const historicalFrequency = {historical};

// Mega da Virada frequency ({virada_draws} drawings)
const viradaFrequency = {virada};

// Recent trends (last {recent_window} drawings) - hot numbers
const recentHotNumbers = {recent_hot}

// Virada hot numbers (most frequent in Mega da Virada)
const viradaHotNumbers = {virada_hot}
",
        generated_at = generated_at,
        total_draws = report.total_draws,
        virada_draws = report.virada_draws,
        recent_window = report.recent_window,
        historical = format_frequency_js(&report.historical),
        virada = format_frequency_js(&report.virada),
        recent_hot = format_numbers_js(&report.recent_hot),
        virada_hot = format_numbers_js(&report.virada_hot),
    )
}
