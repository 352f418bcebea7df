// Example: real-time playback on the current thread, cancelled from another thread.
use std::thread;
use std::time::Duration;

use sortrace::{Algorithm, CancelToken};
use sortrace_player::{Pacer, paced};

fn main() {
    let input: Vec<u32> = (1..=30).rev().collect();
    let token = CancelToken::new();

    let stopper = {
        let token = token.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(200));
            token.cancel();
        })
    };

    let mut run = match paced(Algorithm::Insertion, &input, Pacer::new(95), token) {
        Ok(run) => run,
        Err(err) => {
            eprintln!("cannot start: {err}");
            return;
        }
    };
    for step in run.by_ref() {
        println!("{:?} comparisons={}", step.kind, step.comparisons);
    }
    let _ = stopper.join();

    let stats = run.stats();
    println!(
        "{:?} after {} steps in {}ms",
        stats.status, stats.steps, stats.elapsed_ms
    );
}
