//! Reading store: the ordered collection of lab-test readings.
//!
//! The store exclusively owns its readings. It is populated once at startup
//! from the bundled dataset and is read-only for the lifetime of the
//! dashboard; `insert` exists for future write access and maintains the
//! ordering invariant. Taking `&mut self` for inserts is the single-writer
//! discipline: readers can never observe a partially inserted reading.

use crate::{Error, Reading, Result};

/// Ordered sequence of readings, non-decreasing by date, dates unique
#[derive(Clone, Debug, Default)]
pub struct ReadingStore {
    readings: Vec<Reading>,
}

impl ReadingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a batch of readings
    ///
    /// The batch is sorted by date; fails with `DuplicateDate` if two
    /// readings share one.
    pub fn from_readings(mut readings: Vec<Reading>) -> Result<Self> {
        readings.sort_by(|a, b| a.date.cmp(&b.date));

        for pair in readings.windows(2) {
            if pair[0].date == pair[1].date {
                return Err(Error::DuplicateDate { date: pair[0].date });
            }
        }

        tracing::debug!("Loaded {} readings into store", readings.len());
        Ok(Self { readings })
    }

    /// The full ordered sequence, immutable view
    pub fn all(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// The most recent reading by date
    pub fn latest(&self) -> Result<&Reading> {
        self.readings.last().ok_or(Error::InsufficientData {
            needed: 1,
            have: 0,
        })
    }

    /// The second-to-last reading by date
    pub fn previous(&self) -> Result<&Reading> {
        let have = self.readings.len();
        if have < 2 {
            return Err(Error::InsufficientData { needed: 2, have });
        }
        Ok(&self.readings[have - 2])
    }

    /// Insert a reading, maintaining sort order
    ///
    /// Fails with `DuplicateDate` if the date is already present.
    pub fn insert(&mut self, reading: Reading) -> Result<()> {
        match self
            .readings
            .binary_search_by(|r| r.date.cmp(&reading.date))
        {
            Ok(_) => Err(Error::DuplicateDate { date: reading.date }),
            Err(position) => {
                tracing::debug!("Inserting reading for {} at index {}", reading.date, position);
                self.readings.insert(position, reading);
                Ok(())
            }
        }
    }
}
