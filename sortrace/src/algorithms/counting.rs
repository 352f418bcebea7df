use alloc::vec;
use alloc::vec::Vec;

use crate::machine::{Event, Workspace};
use crate::{CountingKey, Highlight, SortError};

/// Counting sort over `min..=max` buckets.
///
/// Bucket indexes are computed when the run is created, so the precondition check happens
/// before any step and the machine itself needs no key bound. Placement walks the input
/// backwards, writing into the working array from a saved copy of the input.
#[derive(Clone, Debug)]
pub(crate) struct Counting<T> {
    buckets: Vec<usize>,
    counts: Vec<usize>,
    source: Vec<T>,
    phase: Phase,
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Tally { next: usize },
    Place { remaining: usize },
}

impl<T: Clone> Counting<T> {
    pub(crate) fn new(values: &[T], max_range: usize) -> Result<Self, SortError>
    where
        T: CountingKey,
    {
        let (min, max) = values
            .iter()
            .map(CountingKey::counting_key)
            .fold((i128::MAX, i128::MIN), |(lo, hi), k| (lo.min(k), hi.max(k)));

        let range = if values.is_empty() {
            0
        } else {
            // Keys fit in i64/u64, so the span fits in u128.
            max.abs_diff(min) + 1
        };
        if range > max_range as u128 {
            swarn!(range, limit = max_range, "counting sort range too large");
            return Err(SortError::CountingRangeTooLarge {
                range,
                limit: max_range,
            });
        }

        let buckets = values
            .iter()
            .map(|v| (v.counting_key() - min) as usize)
            .collect();
        Ok(Self {
            buckets,
            counts: vec![0; range as usize],
            source: Vec::new(),
            phase: Phase::Tally { next: 0 },
        })
    }

    pub(crate) fn advance(&mut self, ws: &mut Workspace<T>) -> Option<Event> {
        loop {
            match self.phase {
                Phase::Tally { next } if next < self.buckets.len() => {
                    self.counts[self.buckets[next]] += 1;
                    ws.count_comparison();
                    self.phase = Phase::Tally { next: next + 1 };
                    return Some(Event::compare(Highlight::single(next)));
                }
                Phase::Tally { .. } => {
                    // Prefix sums: counts[b] becomes one past the last slot of bucket b.
                    let mut total = 0usize;
                    for c in &mut self.counts {
                        total += *c;
                        *c = total;
                    }
                    self.source = ws.values.clone();
                    self.phase = Phase::Place {
                        remaining: self.buckets.len(),
                    };
                }
                Phase::Place { remaining: 0 } => return None,
                Phase::Place { remaining } => {
                    let index = remaining - 1;
                    let bucket = self.buckets[index];
                    self.counts[bucket] -= 1;
                    let slot = self.counts[bucket];
                    ws.values[slot] = self.source[index].clone();
                    self.phase = Phase::Place { remaining: index };
                    return Some(Event::overwrite(Highlight::single(slot)));
                }
            }
        }
    }
}
