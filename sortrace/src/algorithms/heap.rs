use crate::Highlight;
use crate::machine::{Event, Workspace};

/// Heapsort: build a max-heap bottom-up, then repeatedly move the root behind the heap.
#[derive(Clone, Debug)]
pub(crate) struct Heap {
    phase: Phase,
    sift: Option<Sift>,
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    /// Sift down every internal node below `remaining`, highest first.
    Build { remaining: usize },
    /// The heap occupies `0..end`.
    Extract { end: usize },
}

#[derive(Clone, Copy, Debug)]
enum Stage {
    Left,
    Right,
    Settle,
}

/// An in-progress sift-down of `root` within a heap of `len` elements.
#[derive(Clone, Copy, Debug)]
struct Sift {
    len: usize,
    root: usize,
    largest: usize,
    stage: Stage,
}

impl Sift {
    fn new(len: usize, root: usize) -> Self {
        Self {
            len,
            root,
            largest: root,
            stage: Stage::Left,
        }
    }
}

impl Heap {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            phase: Phase::Build {
                remaining: len / 2,
            },
            sift: None,
        }
    }

    pub(crate) fn advance<T: Ord>(&mut self, ws: &mut Workspace<T>) -> Option<Event> {
        loop {
            if let Some(mut s) = self.sift.take() {
                match s.stage {
                    Stage::Left | Stage::Right => {
                        let child = match s.stage {
                            Stage::Left => {
                                s.stage = Stage::Right;
                                2 * s.root + 1
                            }
                            _ => {
                                s.stage = Stage::Settle;
                                2 * s.root + 2
                            }
                        };
                        if child < s.len {
                            ws.count_comparison();
                            let event = Event::compare(
                                Highlight::pair(s.largest, child).with_pivot(s.root),
                            );
                            if ws.values[child] > ws.values[s.largest] {
                                s.largest = child;
                            }
                            self.sift = Some(s);
                            return Some(event);
                        }
                        self.sift = Some(s);
                    }
                    Stage::Settle => {
                        if s.largest != s.root {
                            let (parent, child) = (s.root, s.largest);
                            ws.values.swap(parent, child);
                            self.sift = Some(Sift::new(s.len, child));
                            return Some(Event::swap(Highlight::pair(parent, child)));
                        }
                    }
                }
                continue;
            }

            match self.phase {
                Phase::Build { remaining: 0 } => {
                    self.phase = Phase::Extract { end: ws.len() };
                }
                Phase::Build { remaining } => {
                    self.phase = Phase::Build {
                        remaining: remaining - 1,
                    };
                    self.sift = Some(Sift::new(ws.len(), remaining - 1));
                }
                Phase::Extract { end } => {
                    if end <= 1 {
                        return None;
                    }
                    let last = end - 1;
                    ws.values.swap(0, last);
                    self.phase = Phase::Extract { end: last };
                    self.sift = Some(Sift::new(last, 0));
                    return Some(Event::swap(Highlight::pair(0, last)));
                }
            }
        }
    }
}
