use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use megasena_stats::models::{DrawRecord, NUMBERS_PER_DRAW};

/// Read raw draw records from a CSV export. Rows come back as the same
/// dict-shaped records the API yields, so both sources go through the one
/// normalizer.
///
/// When some header mentions `Bola` the columns are matched by name, the
/// layout of the Caixa sheet. Otherwise the sheet is read by position:
/// first column concurso, second the date, the six following the dezenas.
pub fn read_csv(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Não foi possível abrir {}", path.display()))?;
    let delimiter = sniff_delimiter(&content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("Cabeçalho ilegível")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let named = headers.iter().any(|h| h.contains("Bola"));

    let mut records = Vec::new();
    for (index, record_result) in reader.records().enumerate() {
        match record_result {
            Ok(record) => records.push(if named {
                named_record(&headers, &record)
            } else {
                positional_record(&record)
            }),
            // Line 1 is the header row.
            Err(e) => log::warn!("linha {} ilegível, ignorada: {}", index + 2, e),
        }
    }
    Ok(records)
}

/// Caixa exports use `;`, generic exports use `,`. The header row tells
/// them apart.
fn sniff_delimiter(sample: &str) -> u8 {
    let first_line = sample.lines().next().unwrap_or("");
    if first_line.contains(';') {
        b';'
    } else {
        b','
    }
}

fn named_record(headers: &[String], record: &csv::StringRecord) -> Value {
    let mut row = Map::new();
    for (header, field) in headers.iter().zip(record.iter()) {
        row.insert(header.clone(), Value::String(field.trim().to_string()));
    }
    Value::Object(row)
}

fn positional_record(record: &csv::StringRecord) -> Value {
    let get = |idx: usize| {
        record
            .get(idx)
            .map(|s| Value::String(s.trim().to_string()))
            .unwrap_or(Value::Null)
    };

    let mut row = Map::new();
    row.insert("concurso".to_string(), get(0));
    row.insert("data".to_string(), get(1));
    for i in 0..NUMBERS_PER_DRAW {
        row.insert(format!("Bola{}", i + 1), get(2 + i));
    }
    Value::Object(row)
}

/// Write a normalized history back out as a `;`-separated CSV in the Caixa
/// layout. Draws without a date get an empty Data field.
pub fn export_csv(draws: &[DrawRecord], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .with_context(|| format!("Não foi possível criar {}", path.display()))?;

    writer.write_record([
        "Concurso", "Data", "Bola1", "Bola2", "Bola3", "Bola4", "Bola5", "Bola6",
    ])?;
    for draw in draws {
        let date = draw
            .date
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_default();
        let mut row = vec![draw.draw_id.to_string(), date];
        row.extend(draw.numbers.iter().map(|n| n.to_string()));
        writer.write_record(&row)?;
    }
    writer.flush().context("Falha ao gravar o arquivo CSV")?;
    Ok(())
}
