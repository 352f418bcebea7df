use crate::Highlight;
use crate::machine::{Event, Workspace};

/// Bubble sort without early exit: `n * (n - 1) / 2` comparisons for every input.
#[derive(Clone, Debug, Default)]
pub(crate) struct Bubble {
    pass: usize,
    j: usize,
    swap_at: Option<usize>,
}

impl Bubble {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn advance<T: Ord>(&mut self, ws: &mut Workspace<T>) -> Option<Event> {
        if let Some(j) = self.swap_at.take() {
            ws.values.swap(j, j + 1);
            return Some(Event::swap(Highlight::pair(j, j + 1)));
        }

        let n = ws.len();
        loop {
            if self.pass >= n {
                return None;
            }
            if self.j + 1 < n - self.pass {
                let j = self.j;
                self.j += 1;
                ws.count_comparison();
                if ws.values[j] > ws.values[j + 1] {
                    self.swap_at = Some(j);
                }
                return Some(Event::compare(Highlight::pair(j, j + 1)));
            }
            self.pass += 1;
            self.j = 0;
        }
    }
}
