use std::time::Duration;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

/// Public mirrors for the Mega-Sena history, tried in order. The first one
/// answering with a non-empty JSON array wins.
pub const API_URLS: [&str; 2] = [
    "https://loteriascaixa.com/api/mega-sena/",
    "https://servicebus2.caixa.gov.br/portaldeloterias/api/megasena/",
];

const TIMEOUT_SECS: u64 = 30;

/// Download the full draw history as raw records. Each mirror gets one
/// try; only when all fail does the caller see an error.
pub fn fetch_history() -> Result<Vec<Value>> {
    println!("🌐 Buscando dados da API Loteriascaixa.com...");

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()
        .context("Não foi possível criar o cliente HTTP")?;

    for url in API_URLS {
        println!("   Tentando: {url}");
        match fetch_one(&client, url) {
            Ok(records) => {
                println!("   ✅ {} sorteios baixados", records.len());
                return Ok(records);
            }
            Err(e) => println!("   ❌ Erro: {e}"),
        }
    }

    bail!("Todas as APIs falharam. Tente importar um arquivo CSV.");
}

fn fetch_one(client: &reqwest::blocking::Client, url: &str) -> Result<Vec<Value>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}").unwrap());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message("Baixando histórico...");

    let response = client.get(url).send();
    spinner.finish_and_clear();

    let response = response?;
    if !response.status().is_success() {
        bail!("HTTP {}", response.status());
    }

    let payload: Value = response.json().context("Resposta não é JSON válido")?;
    parse_payload(payload)
}

/// A usable payload is a non-empty JSON array of draw records. Anything
/// else, an error page or an empty list, means the mirror is down.
pub fn parse_payload(payload: Value) -> Result<Vec<Value>> {
    match payload {
        Value::Array(records) if !records.is_empty() => Ok(records),
        Value::Array(_) => bail!("Resposta inválida: lista vazia"),
        _ => bail!("Resposta inválida: esperava uma lista de sorteios"),
    }
}
