use crate::prelude::*;

/// One row of a [`TransitionTable`], belonging to a single state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    /// Label of the state.
    pub label: String,
    /// Whether the state is initial.
    pub initial: bool,
    /// Whether the state is final.
    pub is_final: bool,
    /// For every symbol of the alphabet (in alphabet order) the labels of the states that
    /// are reached on it.
    pub cells: Vec<Vec<String>>,
}

impl TableRow {
    #[cfg_attr(not(feature = "table"), allow(dead_code))]
    fn decorated_label(&self) -> String {
        format!(
            "{}{}{}",
            if self.initial { "→" } else { "" },
            if self.is_final { "*" } else { "" },
            self.label
        )
    }
}

/// Read-only projection of an automaton into a grid of states × symbols, where each cell
/// holds the states reachable from the row's state on the column's symbol. It is computed
/// from the automaton on demand and never changes afterwards, take a new one after
/// mutating the automaton.
///
/// With the `table` feature (enabled by default) the table can be rendered through its
/// [`std::fmt::Display`] implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    symbols: Vec<Symbol>,
    rows: Vec<TableRow>,
}

impl TransitionTable {
    /// The column headers.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The rows in creation order of the states.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Gives the cell for the state called `label` and the given symbol.
    pub fn cell(&self, label: &str, symbol: &Symbol) -> Option<&[String]> {
        let column = self.symbols.iter().position(|s| s == symbol)?;
        self.rows
            .iter()
            .find(|row| row.label == label)
            .and_then(|row| row.cells.get(column))
            .map(Vec::as_slice)
    }
}

impl Automaton {
    /// Computes the [`TransitionTable`] of the automaton.
    pub fn transition_table(&self) -> TransitionTable {
        let successors = self.successor_map();
        let symbols = self.alphabet().iter().cloned().collect::<Vec<_>>();
        let rows = self
            .states()
            .map(|(id, state)| TableRow {
                label: state.label().to_string(),
                initial: state.is_initial(),
                is_final: state.is_final(),
                cells: symbols
                    .iter()
                    .map(|symbol| {
                        successors
                            .get(&(id, symbol))
                            .map(|targets| {
                                targets
                                    .iter()
                                    .map(|p| self.label_of(*p).to_string())
                                    .collect()
                            })
                            .unwrap_or_default()
                    })
                    .collect(),
            })
            .collect();
        TransitionTable { symbols, rows }
    }
}

#[cfg(feature = "table")]
mod render {
    use itertools::Itertools;
    use owo_colors::OwoColorize;

    use super::{TableRow, TransitionTable};

    fn render_cell(cell: &[String]) -> String {
        if cell.is_empty() {
            "-".to_string()
        } else {
            cell.iter().join(", ")
        }
    }

    impl TransitionTable {
        fn build<F: Fn(&TableRow) -> String>(&self, state_decorator: F) -> String {
            let mut builder = tabled::builder::Builder::default();
            builder.push_record(
                std::iter::once("State".to_string())
                    .chain(self.symbols.iter().map(|s| s.to_string())),
            );
            for row in &self.rows {
                builder.push_record(
                    std::iter::once(state_decorator(row))
                        .chain(row.cells.iter().map(|cell| render_cell(cell))),
                );
            }
            builder
                .build()
                .with(tabled::settings::Style::rounded())
                .to_string()
        }

        /// Renders the table with ANSI colors: the initial state is bold, final states
        /// are green.
        pub fn colored(&self) -> String {
            self.build(|row| {
                let label = row.decorated_label();
                match (row.initial, row.is_final) {
                    (true, true) => label.bold().green().to_string(),
                    (true, false) => label.bold().to_string(),
                    (false, true) => label.green().to_string(),
                    (false, false) => label,
                }
            })
        }
    }

    impl std::fmt::Display for TransitionTable {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.build(TableRow::decorated_label))
        }
    }
}
