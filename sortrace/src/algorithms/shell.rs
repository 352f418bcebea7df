use crate::Highlight;
use crate::machine::{Event, Workspace};

/// Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.
///
/// While an element is held out of the array its slot still shows the old value, so
/// intermediate snapshots may contain a duplicate until the final placement.
#[derive(Clone, Debug)]
pub(crate) struct Shell<T> {
    gap: usize,
    i: usize,
    j: usize,
    held: Option<T>,
    stage: Stage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Scan,
    Shift,
    Place,
}

impl<T: Ord + Clone> Shell<T> {
    pub(crate) fn new(len: usize) -> Self {
        let gap = len / 2;
        Self {
            gap,
            i: gap,
            j: gap,
            held: None,
            stage: Stage::Scan,
        }
    }

    pub(crate) fn advance(&mut self, ws: &mut Workspace<T>) -> Option<Event> {
        let n = ws.len();
        loop {
            if self.gap == 0 {
                return None;
            }

            let Some(temp) = self.held.take() else {
                if self.i >= n {
                    self.gap /= 2;
                    self.i = self.gap;
                } else {
                    self.held = Some(ws.values[self.i].clone());
                    self.j = self.i;
                    self.stage = Stage::Scan;
                }
                continue;
            };

            let (gap, i, j) = (self.gap, self.i, self.j);
            match self.stage {
                Stage::Scan => {
                    if j >= gap {
                        ws.count_comparison();
                        self.stage = if ws.values[j - gap] > temp {
                            Stage::Shift
                        } else {
                            Stage::Place
                        };
                        self.held = Some(temp);
                        return Some(Event::compare(Highlight::pair(j - gap, j).with_pivot(i)));
                    }
                    self.stage = Stage::Place;
                    self.held = Some(temp);
                }
                Stage::Shift => {
                    ws.values[j] = ws.values[j - gap].clone();
                    self.j = j - gap;
                    self.stage = Stage::Scan;
                    self.held = Some(temp);
                    return Some(Event::overwrite(Highlight::pair(j, j - gap).with_pivot(i)));
                }
                Stage::Place => {
                    ws.values[j] = temp;
                    self.i += 1;
                    return Some(Event::overwrite(Highlight::single(j).with_pivot(i)));
                }
            }
        }
    }
}
