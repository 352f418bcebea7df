// Example: trace a bubble sort and print every step.
use sortrace::{Run, StepKind};

fn main() {
    for step in Run::bubble(&[5u32, 3, 8, 1]) {
        let marker = match step.kind {
            StepKind::Compare => "cmp ",
            StepKind::Swap => "swap",
            StepKind::Overwrite => "set ",
            StepKind::Done => "done",
        };
        println!(
            "{marker} {:?} highlight={:?} comparisons={}",
            step.values,
            step.highlight.indices().collect::<Vec<_>>(),
            step.comparisons
        );
    }
}
