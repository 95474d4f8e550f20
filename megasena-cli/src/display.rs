use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use megasena_stats::models::{DrawRecord, HistoryStats};
use megasena_stats::normalize::NormalizeSummary;
use megasena_stats::ranking::RankedNumber;
use megasena_stats::report::FrequencyReport;

use crate::codegen::format_numbers_js;

pub fn display_draws(draws: &[DrawRecord]) {
    if draws.is_empty() {
        println!("Nenhum sorteio para exibir.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Concurso", "Data", "Dezenas"]);

    for draw in draws {
        let mut sorted = draw.numbers;
        sorted.sort();
        let dezenas = sorted
            .iter()
            .map(|n| format!("{:02}", n))
            .collect::<Vec<_>>()
            .join(" - ");

        let date = draw
            .date
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "—".to_string());

        table.add_row(vec![&draw.draw_id.to_string(), &date, &dezenas]);
    }

    println!("{table}");
}

pub fn display_normalize_summary(summary: &NormalizeSummary) {
    println!("Normalização concluída:");
    println!("  Registros lidos : {}", summary.total);
    println!("  Aproveitados    : {}", summary.kept);
    if summary.dropped > 0 {
        println!("  Descartados     : {}", summary.dropped);
    }
}

pub fn display_history_stats(stats: &HistoryStats) {
    println!("\n📊 Estatísticas do histórico\n");

    let format_date = |date: Option<chrono::NaiveDate>| {
        date.map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "—".to_string())
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Indicador", "Valor"]);
    table.add_row(vec![
        "Total de sorteios".to_string(),
        stats.total_draws.to_string(),
    ]);
    table.add_row(vec![
        "Sorteios da Virada".to_string(),
        stats.virada_draws.to_string(),
    ]);
    table.add_row(vec!["Primeiro sorteio".to_string(), format_date(stats.oldest)]);
    table.add_row(vec!["Último sorteio".to_string(), format_date(stats.newest)]);
    println!("{table}");
}

pub fn display_ranking_table(title: &str, ranked: &[RankedNumber]) {
    println!("\n── {title} ──");

    if ranked.is_empty() {
        println!("Nenhuma dezena sorteada.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Dezena", "Frequência"]);

    for entry in ranked {
        table.add_row(vec![
            &format!("{:02}", entry.number),
            &entry.count.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn display_report_preview(report: &FrequencyReport, top: &[RankedNumber]) {
    println!("\n📊 PREVIEW DOS DADOS:\n");
    println!("Total de sorteios: {}", report.total_draws);
    println!("Sorteios da Virada: {}", report.virada_draws);

    println!("\nNúmeros mais frequentes (geral):");
    for entry in top {
        println!("  {:02}: {}x", entry.number, entry.count);
    }

    println!("\nNúmeros quentes (últimos {}):", report.recent_window);
    println!("  {}", format_numbers_js(&report.recent_hot));

    println!("\nNúmeros quentes (Virada):");
    println!("  {}", format_numbers_js(&report.virada_hot));
}
