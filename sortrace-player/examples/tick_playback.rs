// Example: frame-loop playback without sleeping.
//
// An adapter would:
// - start a run when the user presses "sort"
// - call tick(now_ms) every frame
// - draw `current()` whenever tick returns a new step
use sortrace::Run;
use sortrace_player::{DelayCurve, Pacer, Player};

fn main() {
    let input = [9u32, 4, 7, 1, 8, 2, 6];
    let pacer = Pacer::new(80).with_curve(DelayCurve::SizeScaled { len: input.len() * 10 });
    let mut player = Player::new(pacer);
    player.start(Run::heap(&input), 0);

    let mut now_ms = 0u64;
    while player.is_playing() {
        if let Some(step) = player.tick(now_ms) {
            println!("t={now_ms:>4} {:?} {:?}", step.kind, step.values);
        }
        now_ms += 16;
    }

    let stats = player.stats();
    println!(
        "{:?}: steps={} comparisons={} elapsed={}ms",
        stats.status, stats.steps, stats.comparisons, stats.elapsed_ms
    );
}
