use anyhow::{bail, Result};
use serde_json::Value;

use crate::models::{parse_draw_date, DrawRecord, NUMBERS_PER_DRAW};

/// Field-name aliases per logical attribute, tried in order, first match
/// wins. Covers the Loteriascaixa API, the Caixa portal API and the headers
/// of the Caixa result sheet. A new source format means a new entry here,
/// not another conditional.
pub const DRAW_ID_KEYS: [&str; 3] = ["concurso", "numero", "Concurso"];
pub const DATE_KEYS: [&str; 5] = [
    "data",
    "dataApuracao",
    "Data",
    "Data Sorteio",
    "Data do Sorteio",
];
pub const NUMBER_LIST_KEYS: [&str; 2] = ["dezenas", "listaDezenas"];
pub const BALL_FIELD_PREFIXES: [&str; 2] = ["Bola", "bola"];

/// Convert one raw record into a canonical [`DrawRecord`].
///
/// A record is dropped (error) when it is not a JSON object, when its draw
/// identifier is missing or not a positive integer, or when fewer than six
/// numeric values can be located. A missing or unparseable date is fine:
/// the record survives with no date and calendar filters skip it. Values
/// outside 1..=60 also pass through untouched; range filtering belongs to
/// the counting step.
pub fn normalize(raw: &Value) -> Result<DrawRecord> {
    if !raw.is_object() {
        bail!("registro bruto não é um objeto JSON");
    }

    let draw_id = match first_field(raw, &DRAW_ID_KEYS).and_then(numeric_value) {
        Some(id) if id > 0 && id <= i64::from(u32::MAX) => id as u32,
        _ => bail!("identificador do concurso ausente ou inválido"),
    };

    let date = first_field(raw, &DATE_KEYS)
        .and_then(Value::as_str)
        .and_then(parse_draw_date);

    let numbers = locate_numbers(raw)?;

    Ok(DrawRecord {
        draw_id,
        date,
        numbers,
    })
}

/// Normalize a whole raw history, skipping records that fail and counting
/// them. The returned sequence owns nothing from the raw payload.
pub fn normalize_history(raw: &[Value]) -> (Vec<DrawRecord>, NormalizeSummary) {
    let mut draws = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;

    for (index, record) in raw.iter().enumerate() {
        match normalize(record) {
            Ok(draw) => draws.push(draw),
            Err(e) => {
                dropped += 1;
                log::warn!("registro {} descartado: {}", index + 1, e);
            }
        }
    }

    let summary = NormalizeSummary {
        total: raw.len(),
        kept: draws.len(),
        dropped,
    };
    (draws, summary)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub total: usize,
    pub kept: usize,
    pub dropped: usize,
}

fn first_field<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| record.get(key))
}

/// A numeric value may arrive as a JSON integer, a spreadsheet float cell
/// (truncated, like the source did) or a zero-padded string such as "04".
fn numeric_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn locate_numbers(raw: &Value) -> Result<[i32; NUMBERS_PER_DRAW]> {
    if let Some(list) = first_field(raw, &NUMBER_LIST_KEYS) {
        let Some(entries) = list.as_array() else {
            bail!("lista de dezenas não é um array");
        };
        return numbers_from_list(entries);
    }
    numbers_from_fields(raw)
}

/// API shape: the six numbers nested as a list (extra entries beyond the
/// sixth are ignored, like the source did).
fn numbers_from_list(entries: &[Value]) -> Result<[i32; NUMBERS_PER_DRAW]> {
    if entries.len() < NUMBERS_PER_DRAW {
        bail!(
            "apenas {} dezenas encontradas (esperado {})",
            entries.len(),
            NUMBERS_PER_DRAW
        );
    }
    let mut numbers = [0i32; NUMBERS_PER_DRAW];
    for (slot, entry) in numbers.iter_mut().zip(entries.iter()) {
        *slot = match numeric_value(entry).and_then(|n| i32::try_from(n).ok()) {
            Some(n) => n,
            None => bail!("dezena inválida: {}", entry),
        };
    }
    Ok(numbers)
}

/// Sheet shape: six separately named fields, Bola1 through Bola6.
fn numbers_from_fields(raw: &Value) -> Result<[i32; NUMBERS_PER_DRAW]> {
    let mut numbers = [0i32; NUMBERS_PER_DRAW];
    for (index, slot) in numbers.iter_mut().enumerate() {
        let value = BALL_FIELD_PREFIXES
            .iter()
            .find_map(|prefix| raw.get(format!("{}{}", prefix, index + 1)))
            .and_then(numeric_value)
            .and_then(|n| i32::try_from(n).ok());
        *slot = match value {
            Some(n) => n,
            None => bail!("dezena {} ausente ou inválida", index + 1),
        };
    }
    Ok(numbers)
}
