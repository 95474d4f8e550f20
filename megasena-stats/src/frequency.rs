use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::{DrawRecord, POOL_SIZE};

/// Occurrence count per dezena. All 60 bins exist from construction on: a
/// number that never came out reads as zero, never as missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; POOL_SIZE as usize],
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self {
            counts: [0; POOL_SIZE as usize],
        }
    }

    /// Count for one dezena; numbers outside 1..=60 read as zero.
    pub fn get(&self, number: u8) -> u32 {
        if number == 0 || number > POOL_SIZE {
            return 0;
        }
        self.counts[usize::from(number - 1)]
    }

    fn increment(&mut self, number: u8) {
        self.counts[usize::from(number - 1)] += 1;
    }

    /// `(dezena, contagem)` pairs in ascending number order, 1 through 60.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(index, &count)| (index as u8 + 1, count))
    }

    /// Sum over every bin. With clean input this is six times the number of
    /// draws counted; a shortfall means out-of-range values were skipped.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized as an object keyed by dezena in ascending order, the same
/// shape the generated artifact embeds.
impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (number, count) in self.iter() {
            map.serialize_entry(&number, &count)?;
        }
        map.end()
    }
}

/// Tally every declared number of every draw. A value is counted only when
/// it lies in 1..=60; anything else is skipped in silence, the same
/// permissive counting the sources get away with.
pub fn count_frequencies(draws: &[DrawRecord]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for draw in draws {
        for &number in &draw.numbers {
            if (1..=i32::from(POOL_SIZE)).contains(&number) {
                table.increment(number as u8);
            }
        }
    }
    table
}
