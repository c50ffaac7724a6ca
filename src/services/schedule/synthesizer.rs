//! Deterministic sample appointments.
//!
//! The same `(count, seed, date)` always yields the same events in the same
//! order, so paging away from a month and back shows an unchanged schedule.

use chrono::{Datelike, NaiveDate, NaiveTime};

use super::sample_data::SampleData;
use crate::models::event::{sort_by_time, Event, EventStatus};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

const FIRST_HOUR: u32 = 7;
const LAST_HOUR: u32 = 20;
const MINUTE_STEPS: [u32; 4] = [0, 15, 30, 45];

/// SplitMix64 stream keyed by an FNV-1a hash of a seed string and a date.
#[derive(Debug, Clone)]
pub struct SeededStream {
    state: u64,
}

impl SeededStream {
    pub fn new(seed: &str, date: NaiveDate) -> Self {
        let mut hash = FNV_OFFSET;
        let mut date_key = date.year().to_le_bytes().to_vec();
        date_key.extend([date.month() as u8, date.day() as u8]);
        for byte in seed.bytes().chain(date_key) {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        Self { state: hash }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform-ish value in `0..bound`; zero when `bound` is zero.
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as u32
    }

    pub fn chance(&mut self, percent: u32) -> bool {
        self.below(100) < percent
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.below(items.len() as u32) as usize)
    }
}

/// Produces plausible physiotherapy appointments from fixture data.
#[derive(Debug, Clone, Default)]
pub struct EventSynthesizer {
    data: SampleData,
}

impl EventSynthesizer {
    pub fn new(data: SampleData) -> Self {
        Self { data }
    }

    /// `count` events for `date`, sorted by time of day.
    pub fn generate(&self, count: usize, seed: &str, date: NaiveDate) -> Vec<Event> {
        let mut stream = SeededStream::new(seed, date);
        let mut events: Vec<Event> = (0..count)
            .filter_map(|index| self.synthesize_one(&mut stream, date, index))
            .collect();
        sort_by_time(&mut events);
        events
    }

    fn synthesize_one(&self, stream: &mut SeededStream, date: NaiveDate, index: usize) -> Option<Event> {
        let hour = FIRST_HOUR + stream.below(LAST_HOUR - FIRST_HOUR + 1);
        let minute = MINUTE_STEPS[stream.below(MINUTE_STEPS.len() as u32) as usize];
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;

        let subject = stream
            .pick(&self.data.patients)
            .cloned()
            .unwrap_or_else(|| format!("Patient {}", index + 1));
        let status = EventStatus::ALL[stream.below(EventStatus::ALL.len() as u32) as usize];
        let total = 5 + stream.below(16);
        let number = 1 + stream.below(total);

        let mut builder = Event::builder()
            .id(format!("{}-{:02}", date.format("%Y%m%d"), index))
            .time(time)
            .subject_name(subject)
            .status(status)
            .session(number, total);

        if let Some(procedure) = stream.pick(&self.data.procedures) {
            builder = builder.procedure(procedure.clone());
        }
        if stream.chance(70) {
            if let Some(complaint) = stream.pick(&self.data.complaints) {
                builder = builder.complaint(complaint.clone());
            }
        }

        match builder.build() {
            Ok(event) => Some(event),
            Err(err) => {
                log::warn!("Skipping malformed sample event for {}: {}", date, err);
                None
            }
        }
    }
}
