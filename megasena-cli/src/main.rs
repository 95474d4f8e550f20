mod codegen;
mod display;
mod fetch;
mod import;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use megasena_stats::models::DrawRecord;
use megasena_stats::normalize::{normalize_history, NormalizeSummary};
use megasena_stats::ranking::{bottom_k, top_k};
use megasena_stats::report::{build_report, history_stats};
use megasena_stats::window::tail;

use crate::display::{
    display_draws, display_history_stats, display_normalize_summary, display_ranking_table,
    display_report_preview,
};

/// How many dezenas the post-update preview lists.
const PREVIEW_TOP_COUNT: usize = 5;

#[derive(Parser)]
#[command(name = "megasena", about = "Atualizador de frequências da Mega-Sena")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Gerar o arquivo de frequências para o frontend
    Update {
        /// Buscar dados da API online
        #[arg(long)]
        api: bool,

        /// Arquivo CSV com o histórico de sorteios
        #[arg(short, long, conflicts_with = "api")]
        file: Option<PathBuf>,

        /// Arquivo JavaScript de saída
        #[arg(short, long, default_value = "updated_frequencies.js")]
        output: PathBuf,

        /// Janela de sorteios recentes
        #[arg(short, long, default_value = "100")]
        window: usize,

        /// Salvar o histórico normalizado em CSV
        #[arg(long, value_name = "FILE")]
        save_csv: Option<PathBuf>,

        /// Salvar o relatório completo em JSON
        #[arg(long, value_name = "FILE")]
        report_json: Option<PathBuf>,
    },

    /// Exibir estatísticas do histórico
    Stats {
        /// Buscar dados da API online
        #[arg(long)]
        api: bool,

        /// Arquivo CSV com o histórico de sorteios
        #[arg(short, long, conflicts_with = "api")]
        file: Option<PathBuf>,

        /// Janela de sorteios recentes
        #[arg(short, long, default_value = "100")]
        window: usize,

        /// Quantidade de dezenas mais sorteadas
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Quantidade de dezenas menos sorteadas
        #[arg(short, long, default_value = "5")]
        bottom: usize,
    },

    /// Listar os últimos sorteios
    List {
        /// Buscar dados da API online
        #[arg(long)]
        api: bool,

        /// Arquivo CSV com o histórico de sorteios
        #[arg(short, long, conflicts_with = "api")]
        file: Option<PathBuf>,

        /// Número de sorteios a exibir
        #[arg(short, long, default_value = "10")]
        last: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Update {
            api,
            file,
            output,
            window,
            save_csv,
            report_json,
        } => cmd_update(
            api,
            file.as_deref(),
            &output,
            window,
            save_csv.as_deref(),
            report_json.as_deref(),
        ),
        Command::Stats {
            api,
            file,
            window,
            top,
            bottom,
        } => cmd_stats(api, file.as_deref(), window, top, bottom),
        Command::List { api, file, last } => cmd_list(api, file.as_deref(), last),
    }
}

/// Pull raw records from the chosen source and normalize them. The two
/// sources are interchangeable past this point.
fn load_history(api: bool, file: Option<&Path>) -> Result<(Vec<DrawRecord>, NormalizeSummary)> {
    let raw = if api {
        fetch::fetch_history()?
    } else if let Some(path) = file {
        println!("📂 Carregando arquivo: {}", path.display());
        let records = import::read_csv(path)?;
        println!("✅ {} sorteios carregados", records.len());
        records
    } else {
        bail!("Nenhuma fonte de dados informada. Use --api ou --file <arquivo.csv>.");
    };
    Ok(normalize_history(&raw))
}

fn cmd_update(
    api: bool,
    file: Option<&Path>,
    output: &Path,
    window: usize,
    save_csv: Option<&Path>,
    report_json: Option<&Path>,
) -> Result<()> {
    println!("{}", "=".repeat(50));
    println!("🍀 MEGA-SENA FREQUENCY UPDATER");
    println!("{}", "=".repeat(50));

    let (draws, summary) = load_history(api, file)?;
    display_normalize_summary(&summary);

    let report = build_report(&draws, Some(window))?;

    let generated_at = Local::now().format("%Y-%m-%d %H:%M").to_string();
    let js = codegen::generate_js(&report, &generated_at);
    fs::write(output, js)
        .with_context(|| format!("Não foi possível escrever {}", output.display()))?;

    if let Some(path) = save_csv {
        println!("💾 Salvando dados em: {}", path.display());
        import::export_csv(&draws, path)?;
        println!("✅ Arquivo salvo com sucesso");
    }

    if let Some(path) = report_json {
        let json =
            serde_json::to_string_pretty(&report).context("Falha ao serializar o relatório")?;
        fs::write(path, json)
            .with_context(|| format!("Não foi possível escrever {}", path.display()))?;
        println!("💾 Relatório salvo em: {}", path.display());
    }

    println!("\n{}", "=".repeat(50));
    println!("✅ Código gerado em: {}", output.display());
    println!("{}", "=".repeat(50));
    println!("\n📋 INSTRUÇÕES:");
    println!("1. Abra o arquivo '{}'", output.display());
    println!("2. Copie o conteúdo");
    println!("3. Cole no início do arquivo MegaSenaPredictor.jsx");
    println!("   (substitua as variáveis existentes)");
    println!("4. Execute: npm run deploy");

    let top = top_k(&report.historical, PREVIEW_TOP_COUNT, false)?;
    display_report_preview(&report, &top);

    Ok(())
}

fn cmd_stats(
    api: bool,
    file: Option<&Path>,
    window: usize,
    top: usize,
    bottom: usize,
) -> Result<()> {
    let (draws, _) = load_history(api, file)?;
    if draws.is_empty() {
        println!("Histórico vazio. Nada a exibir.");
        return Ok(());
    }

    let stats = history_stats(&draws)?;
    display_history_stats(&stats);

    let report = build_report(&draws, Some(window))?;
    let most_drawn = top_k(&report.historical, top, false)?;
    let least_drawn = bottom_k(&report.historical, bottom)?;

    display_ranking_table("Dezenas mais sorteadas", &most_drawn);
    display_ranking_table("Dezenas menos sorteadas", &least_drawn);
    display_ranking_table(
        &format!("Dezenas quentes (últimos {} sorteios)", report.recent_window),
        &report.recent_hot,
    );
    display_ranking_table("Dezenas quentes (Mega da Virada)", &report.virada_hot);

    Ok(())
}

fn cmd_list(api: bool, file: Option<&Path>, last: usize) -> Result<()> {
    let (draws, _) = load_history(api, file)?;
    if draws.is_empty() {
        println!("Histórico vazio. Nada a exibir.");
        return Ok(());
    }

    let mut recent: Vec<DrawRecord> = tail(&draws, Some(last)).to_vec();
    recent.reverse();
    display_draws(&recent);
    Ok(())
}
