// Example: stop a run part-way through with a cancellation token.
use sortrace::{CancelToken, Run};

fn main() {
    let input: Vec<u32> = (1..=20).rev().collect();
    let token = CancelToken::new();
    let mut run = Run::quick(&input).with_cancel(token.clone());

    let mut last = None;
    for (i, step) in run.by_ref().enumerate() {
        last = Some(step);
        if i == 9 {
            // A playback controller would do this from its "stop" button.
            token.cancel();
        }
    }

    println!(
        "cancelled={} steps={} comparisons={}",
        run.is_cancelled(),
        run.steps_emitted(),
        run.comparisons()
    );
    if let Some(step) = last {
        println!("still visible: {:?}", step.values);
    }
}
