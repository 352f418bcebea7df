use alloc::vec;
use alloc::vec::Vec;

use crate::Highlight;
use crate::machine::{Event, Workspace};

/// Quicksort with Lomuto partitioning around `values[high]`.
///
/// Pending subranges live on an explicit stack so the machine can pause between steps; the
/// left subrange is always finished before the right one, as the recursive form would.
#[derive(Clone, Debug)]
pub(crate) struct Quick {
    ranges: Vec<(usize, usize)>,
    active: Option<Partition>,
}

#[derive(Clone, Copy, Debug)]
struct Partition {
    low: usize,
    high: usize,
    store: usize,
    scan: usize,
    swap_due: bool,
}

impl Partition {
    fn new(low: usize, high: usize) -> Self {
        Self {
            low,
            high,
            store: low,
            scan: low,
            swap_due: false,
        }
    }
}

impl Quick {
    pub(crate) fn new(len: usize) -> Self {
        debug_assert!(len >= 2);
        Self {
            ranges: vec![(0, len - 1)],
            active: None,
        }
    }

    pub(crate) fn advance<T: Ord>(&mut self, ws: &mut Workspace<T>) -> Option<Event> {
        loop {
            let Some(mut p) = self.active.take() else {
                let (low, high) = self.ranges.pop()?;
                if low < high {
                    self.active = Some(Partition::new(low, high));
                }
                continue;
            };

            if p.swap_due {
                p.swap_due = false;
                ws.values.swap(p.store, p.scan);
                let event =
                    Event::swap(Highlight::pair(p.store, p.scan).with_pivot(p.high));
                p.store += 1;
                p.scan += 1;
                self.active = Some(p);
                return Some(event);
            }

            if p.scan < p.high {
                let scan = p.scan;
                ws.count_comparison();
                let event = Event::compare(Highlight::pair(scan, p.store).with_pivot(p.high));
                if ws.values[scan] < ws.values[p.high] {
                    p.swap_due = true;
                } else {
                    p.scan += 1;
                }
                self.active = Some(p);
                return Some(event);
            }

            // Scan finished: move the pivot between the two partitions.
            let Partition {
                low, high, store, ..
            } = p;
            ws.values.swap(store, high);
            self.ranges.push((store + 1, high));
            if store > low {
                self.ranges.push((low, store - 1));
            }
            return Some(Event::swap(Highlight::pair(store, high).with_pivot(store)));
        }
    }
}
