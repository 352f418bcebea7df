use crate::Highlight;
use crate::machine::{Event, Workspace};

/// Insertion sort by adjacent swaps. Stops scanning at the first non-inversion, so equal
/// elements never cross each other.
#[derive(Clone, Debug)]
pub(crate) struct Insertion {
    i: usize,
    j: usize,
    swap_at: Option<usize>,
}

impl Insertion {
    pub(crate) fn new() -> Self {
        Self {
            i: 1,
            j: 1,
            swap_at: None,
        }
    }

    pub(crate) fn advance<T: Ord>(&mut self, ws: &mut Workspace<T>) -> Option<Event> {
        if let Some(j) = self.swap_at.take() {
            ws.values.swap(j - 1, j);
            self.j = j - 1;
            return Some(Event::swap(Highlight::pair(j - 1, j).with_pivot(self.i)));
        }

        let n = ws.len();
        loop {
            if self.i >= n {
                return None;
            }
            if self.j > 0 {
                let j = self.j;
                ws.count_comparison();
                if ws.values[j - 1] > ws.values[j] {
                    self.swap_at = Some(j);
                } else {
                    self.j = 0;
                }
                return Some(Event::compare(Highlight::pair(j - 1, j).with_pivot(self.i)));
            }
            self.i += 1;
            self.j = self.i;
        }
    }
}
