use anyhow::{bail, Result};
use serde::Serialize;

use crate::frequency::FrequencyTable;

/// One dezena with its occurrence count, as placed by a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedNumber {
    pub number: u8,
    pub count: u32,
}

/// The `k` most frequent dezenas, most frequent first. Ties break toward
/// the lower number, so the same table always ranks the same way. With
/// `exclude_zero` set, dezenas that never came out are left off even when
/// that yields fewer than `k` entries.
pub fn top_k(table: &FrequencyTable, k: usize, exclude_zero: bool) -> Result<Vec<RankedNumber>> {
    if k == 0 {
        bail!("k deve ser maior que zero");
    }
    let mut ranked: Vec<RankedNumber> = table
        .iter()
        .filter(|&(_, count)| !exclude_zero || count > 0)
        .map(|(number, count)| RankedNumber { number, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));
    ranked.truncate(k);
    Ok(ranked)
}

/// The `k` least frequent dezenas, least frequent first, lower number on
/// ties. Zero-count dezenas lead the list by construction.
pub fn bottom_k(table: &FrequencyTable, k: usize) -> Result<Vec<RankedNumber>> {
    if k == 0 {
        bail!("k deve ser maior que zero");
    }
    let mut ranked: Vec<RankedNumber> = table
        .iter()
        .map(|(number, count)| RankedNumber { number, count })
        .collect();
    ranked.sort_by(|a, b| a.count.cmp(&b.count).then(a.number.cmp(&b.number)));
    ranked.truncate(k);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_frequencies;
    use crate::models::{DrawRecord, NUMBERS_PER_DRAW};

    fn draw(numbers: [i32; NUMBERS_PER_DRAW]) -> DrawRecord {
        DrawRecord {
            draw_id: 1,
            date: None,
            numbers,
        }
    }

    #[test]
    fn test_top_k_orders_by_count_then_number() {
        let draws = vec![
            draw([10, 10, 10, 5, 5, 1]),
            draw([10, 5, 20, 20, 20, 20]),
        ];
        let top = top_k(&count_frequencies(&draws), 4, false).unwrap();
        let pairs: Vec<(u8, u32)> = top.iter().map(|r| (r.number, r.count)).collect();
        // 10 and 20 tie at four; the lower dezena comes first.
        assert_eq!(pairs, vec![(10, 4), (20, 4), (5, 3), (1, 1)]);
    }

    #[test]
    fn test_top_k_including_zeros_always_fills_k() {
        let table = count_frequencies(&[draw([1, 2, 3, 4, 5, 6])]);
        let top = top_k(&table, 10, false).unwrap();
        assert_eq!(top.len(), 10);
        assert!(top[6..].iter().all(|r| r.count == 0));
    }

    #[test]
    fn test_top_k_excluding_zeros_may_fall_short() {
        let table = count_frequencies(&[draw([1, 2, 3, 4, 5, 6])]);
        let top = top_k(&table, 13, true).unwrap();
        assert_eq!(top.len(), 6);
        assert!(top.iter().all(|r| r.count > 0));
    }

    #[test]
    fn test_top_k_all_tied_picks_lowest_numbers() {
        let table = count_frequencies(&[draw([1, 2, 3, 4, 5, 6])]);
        let top = top_k(&table, 3, true).unwrap();
        let numbers: Vec<u8> = top.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_top_k_three_draw_history() {
        let draws = vec![
            draw([1, 2, 3, 4, 5, 6]),
            draw([1, 2, 3, 4, 5, 6]),
            draw([7, 8, 9, 10, 11, 12]),
        ];
        let top = top_k(&count_frequencies(&draws), 6, true).unwrap();
        let pairs: Vec<(u8, u32)> = top.iter().map(|r| (r.number, r.count)).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2)]);
    }

    #[test]
    fn test_top_k_larger_than_pool_caps_at_pool() {
        let table = count_frequencies(&[draw([1, 2, 3, 4, 5, 6])]);
        let top = top_k(&table, 200, false).unwrap();
        assert_eq!(top.len(), 60);
    }

    #[test]
    fn test_top_k_zero_k_is_error() {
        let table = FrequencyTable::new();
        assert!(top_k(&table, 0, false).is_err());
    }

    #[test]
    fn test_bottom_k_zero_counts_first() {
        let draws = vec![draw([1, 2, 3, 4, 5, 6]), draw([1, 2, 3, 4, 5, 7])];
        let bottom = bottom_k(&count_frequencies(&draws), 5).unwrap();
        let pairs: Vec<(u8, u32)> = bottom.iter().map(|r| (r.number, r.count)).collect();
        // 8..=60 never came out; the lowest of them lead.
        assert_eq!(pairs, vec![(8, 0), (9, 0), (10, 0), (11, 0), (12, 0)]);
    }

    #[test]
    fn test_bottom_k_zero_k_is_error() {
        let table = FrequencyTable::new();
        assert!(bottom_k(&table, 0).is_err());
    }

    #[test]
    fn test_rankings_are_deterministic() {
        let draws = vec![draw([7, 14, 21, 28, 35, 42]); 3];
        let table = count_frequencies(&draws);
        let first = top_k(&table, 10, false).unwrap();
        let second = top_k(&table, 10, false).unwrap();
        assert_eq!(first, second);
    }
}
