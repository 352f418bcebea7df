use crate::Highlight;
use crate::machine::{Event, Workspace};

#[derive(Clone, Debug)]
pub(crate) struct Selection {
    i: usize,
    j: usize,
    min: usize,
}

impl Selection {
    pub(crate) fn new() -> Self {
        Self { i: 0, j: 1, min: 0 }
    }

    pub(crate) fn advance<T: Ord>(&mut self, ws: &mut Workspace<T>) -> Option<Event> {
        let n = ws.len();
        loop {
            // The last slot holds the maximum once every earlier slot is settled.
            if self.i + 1 >= n {
                return None;
            }

            if self.j < n {
                let j = self.j;
                self.j += 1;
                ws.count_comparison();
                let event = Event::compare(Highlight::pair(self.min, j).with_pivot(self.i));
                if ws.values[j] < ws.values[self.min] {
                    self.min = j;
                }
                return Some(event);
            }

            let (i, min) = (self.i, self.min);
            self.i += 1;
            self.j = self.i + 1;
            self.min = self.i;
            if min != i {
                ws.values.swap(i, min);
                return Some(Event::swap(Highlight::pair(min, i)));
            }
        }
    }
}
