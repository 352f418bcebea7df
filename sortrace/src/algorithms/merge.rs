use alloc::vec::Vec;

use crate::Highlight;
use crate::machine::{Event, Workspace};

/// Top-down merge sort.
///
/// The recursion only decides *which* ranges get merged and in what order, so it is unrolled
/// up front into a post-order schedule. Each merge then runs as a resumable pass.
#[derive(Clone, Debug)]
pub(crate) struct Merge<T> {
    schedule: Vec<Span>,
    next: usize,
    active: Option<Pass<T>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
    start: usize,
    mid: usize,
    end: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug)]
struct Pass<T> {
    left: Vec<T>,
    right: Vec<T>,
    right_start: usize,
    i: usize,
    j: usize,
    k: usize,
    pick: Option<Side>,
}

impl<T: Clone> Pass<T> {
    fn new(values: &[T], span: Span) -> Self {
        Self {
            left: values[span.start..=span.mid].to_vec(),
            right: values[span.mid + 1..=span.end].to_vec(),
            right_start: span.mid + 1,
            i: 0,
            j: 0,
            k: span.start,
            pick: None,
        }
    }

    /// Writes the next element from `side` into `values[k]` and returns `k`.
    fn write(&mut self, side: Side, values: &mut [T]) -> usize {
        let k = self.k;
        match side {
            Side::Left => {
                values[k] = self.left[self.i].clone();
                self.i += 1;
            }
            Side::Right => {
                values[k] = self.right[self.j].clone();
                self.j += 1;
            }
        }
        self.k += 1;
        k
    }
}

fn plan(start: usize, end: usize, out: &mut Vec<Span>) {
    if start < end {
        let mid = start + (end - start) / 2;
        plan(start, mid, out);
        plan(mid + 1, end, out);
        out.push(Span { start, mid, end });
    }
}

impl<T: Ord + Clone> Merge<T> {
    pub(crate) fn new(len: usize) -> Self {
        let mut schedule = Vec::with_capacity(len.saturating_sub(1));
        if len > 0 {
            plan(0, len - 1, &mut schedule);
        }
        Self {
            schedule,
            next: 0,
            active: None,
        }
    }

    pub(crate) fn advance(&mut self, ws: &mut Workspace<T>) -> Option<Event> {
        loop {
            let Some(pass) = self.active.as_mut() else {
                let span = *self.schedule.get(self.next)?;
                self.next += 1;
                self.active = Some(Pass::new(&ws.values, span));
                continue;
            };

            if let Some(side) = pass.pick.take() {
                let k = pass.write(side, &mut ws.values);
                return Some(Event::overwrite(Highlight::single(k)));
            }

            let left_open = pass.i < pass.left.len();
            let right_open = pass.j < pass.right.len();
            if left_open && right_open {
                ws.count_comparison();
                // `<=` keeps equal elements in input order.
                pass.pick = Some(if pass.left[pass.i] <= pass.right[pass.j] {
                    Side::Left
                } else {
                    Side::Right
                });
                return Some(Event::compare(Highlight::pair(
                    pass.k,
                    pass.right_start + pass.j,
                )));
            }
            if left_open {
                let k = pass.write(Side::Left, &mut ws.values);
                return Some(Event::overwrite(Highlight::single(k)));
            }
            if right_open {
                let k = pass.write(Side::Right, &mut ws.values);
                return Some(Event::overwrite(Highlight::single(k)));
            }
            self.active = None;
        }
    }
}
