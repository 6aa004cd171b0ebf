use std::fmt::Display;

use itertools::Itertools;

use crate::prelude::*;

/// Prints the automaton as its quintuple `(Q, Σ, δ, q0, F)`, e.g.
/// ```text
/// M = (
///     {q0, q1},
///     {a, b},
///     {(q0,a)->q1},
///     q0,
///     {q1}
/// )
/// ```
/// where the indentation is a single tab and `-` stands in for a missing initial state.
impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let states = self.states().map(|(_, q)| q.label()).join(", ");
        let alphabet = self.alphabet().iter().join(", ");
        let transitions = self.transitions().map(|t| t.label()).join(", ");
        let initial = self
            .initial_state()
            .map_or("-", |(_, q)| q.label());
        let finals = self.final_states().map(|(_, q)| q.label()).join(", ");

        write!(
            f,
            "{} = (\n\t{{{states}}},\n\t{{{alphabet}}},\n\t{{{transitions}}},\n\t{initial},\n\t{{{finals}}}\n)",
            self.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn quintuple() {
        let mut automaton = AutomatonBuilder::new(Alphabet::new(['a', 'b', 'c', 'd', 'e']))
            .named("M")
            .with_states([
                ("q0", true, false),
                ("q1", false, true),
                ("q2", false, false),
                ("q3", false, true),
                ("q4", false, false),
            ])
            .with_transitions([
                ("q0", 'a', "q1"),
                ("q0", 'a', "q2"),
                ("q1", 'b', "q3"),
                ("q1", 'c', "q4"),
            ])
            .build()
            .unwrap();
        assert_eq!(
            automaton.to_string(),
            "M = (\n\t{q0, q1, q2, q3, q4},\n\t{a, b, c, d, e},\n\t\
             {(q0,a)->q1, (q0,a)->q2, (q1,b)->q3, (q1,c)->q4},\n\tq0,\n\t{q1, q3}\n)"
        );

        automaton.delete_state("q0").unwrap();
        assert!(automaton.to_string().contains("\n\t-,\n"));
    }
}
