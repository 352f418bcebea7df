// Example: run every algorithm over the same input and compare step and comparison counts.
use sortrace::{Algorithm, Run, RunOptions, StepKind};

fn main() {
    let input: Vec<u32> = (0..64u32).map(|i| (i * 7919 + 13) % 1000).collect();

    for algorithm in Algorithm::ALL {
        let options = RunOptions::new().with_compare_steps(false);
        let run = match Run::with_options(algorithm, &input, options) {
            Ok(run) => run,
            Err(err) => {
                println!("{algorithm:>9}: {err}");
                continue;
            }
        };

        let mut mutations = 0usize;
        let mut comparisons = 0u64;
        for step in run {
            if step.kind != StepKind::Done {
                mutations += 1;
            }
            comparisons = step.comparisons;
        }
        println!(
            "{algorithm:>9}: mutations={mutations:>5} comparisons={comparisons:>5} stable={}",
            algorithm.is_stable()
        );
    }
}
