use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use finite_automata::prelude::*;

/// Recognizes words over `{a, b}` whose `n`-th symbol from the end is an `a`. The
/// automaton guesses the position, so after a few symbols `n + 1` states are active.
fn nth_from_end(n: usize) -> Automaton {
    let labels = (0..=n).map(|i| format!("q{i}")).collect::<Vec<_>>();
    let mut automaton = Automaton::new(Alphabet::new(['a', 'b']));
    for (i, label) in labels.iter().enumerate() {
        automaton
            .create_state(label.as_str(), i == 0, i == n)
            .unwrap();
    }
    automaton.create_transition("q0", "q0", 'a').unwrap();
    automaton.create_transition("q0", "q0", 'b').unwrap();
    automaton.create_transition("q0", "q1", 'a').unwrap();
    for i in 1..n {
        for symbol in ['a', 'b'] {
            automaton
                .create_transition(&labels[i], &labels[i + 1], symbol)
                .unwrap();
        }
    }
    automaton
}

fn recognition(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognize");
    let word = "ab".repeat(500);
    for n in [2, 8, 32] {
        let automaton = nth_from_end(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &word, |b, word| {
            b.iter(|| automaton.recognize(black_box(word.as_str())))
        });
    }
    group.finish();
}

criterion_group!(benches, recognition);
criterion_main!(benches);
