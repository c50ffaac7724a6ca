//! Sample agenda: a seeded number of synthetic appointments per weekday.

use chrono::NaiveDate;

use super::sample_data::SampleData;
use super::synthesizer::{EventSynthesizer, SeededStream};
use super::EventSource;
use crate::models::event::Event;
use crate::utils::date::is_weekend;

/// Upper bound on synthetic appointments per day; above the month cap so
/// some cells show "+N more".
pub const MAX_SAMPLE_EVENTS_PER_DAY: u32 = 8;

/// Demo [`EventSource`] backed by [`EventSynthesizer`].
///
/// Weekends are left empty. That is a property of the demo data only; the
/// appointment store returns whatever is booked.
#[derive(Debug, Clone)]
pub struct SampleEventSource {
    synthesizer: EventSynthesizer,
    seed: String,
    max_per_day: u32,
}

impl SampleEventSource {
    pub fn new(seed: impl Into<String>) -> Self {
        Self::with_data(seed, SampleData::default())
    }

    pub fn with_data(seed: impl Into<String>, data: SampleData) -> Self {
        Self {
            synthesizer: EventSynthesizer::new(data),
            seed: seed.into(),
            max_per_day: MAX_SAMPLE_EVENTS_PER_DAY,
        }
    }

    pub fn with_max_per_day(mut self, max_per_day: u32) -> Self {
        self.max_per_day = max_per_day;
        self
    }

    /// How many events the sample intends to place on `date`.
    pub fn intended_count(&self, date: NaiveDate) -> usize {
        if is_weekend(date) {
            return 0;
        }
        let count_seed = format!("{}#count", self.seed);
        SeededStream::new(&count_seed, date).below(self.max_per_day + 1) as usize
    }
}

impl EventSource for SampleEventSource {
    fn events_for_day(&self, date: NaiveDate) -> Vec<Event> {
        let count = self.intended_count(date);
        self.synthesizer.generate(count, &self.seed, date)
    }
}
