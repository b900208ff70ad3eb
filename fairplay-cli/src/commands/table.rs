use comfy_table::{presets::UTF8_FULL, Table};
use fairplay_core::OutcomeTable;

/// Help screen: one row per player move, one column per computer move.
pub fn render_table(outcomes: &OutcomeTable) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec![String::new()];
    header.extend(outcomes.moves().iter().map(str::to_string));
    table.set_header(header);

    for (name, row) in outcomes.rows() {
        let mut cells = vec![name.to_string()];
        cells.extend(row.iter().map(|outcome| outcome.to_string()));
        table.add_row(cells);
    }

    format!(
        "Results are for the row move (you) against the column move (computer).\n{}",
        table
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairplay_core::{MoveSet, RuleEngine};

    fn rendered(list: &[&str]) -> String {
        let moves = MoveSet::new(list.iter().map(|s| s.to_string()).collect()).unwrap();
        render_table(&RuleEngine::new(moves).table())
    }

    #[test]
    fn test_table_lists_every_move() {
        let out = rendered(&["Rock", "Paper", "Scissors", "Lizard", "Spock"]);
        for name in ["Rock", "Paper", "Scissors", "Lizard", "Spock"] {
            // header plus row label
            assert_eq!(out.matches(name).count(), 2, "{}", name);
        }
    }

    #[test]
    fn test_table_outcome_counts() {
        let out = rendered(&["Rock", "Paper", "Scissors", "Lizard", "Spock"]);
        assert_eq!(out.matches("Draw").count(), 5);
        assert_eq!(out.matches("Win").count(), 10);
        assert_eq!(out.matches("Lose").count(), 10);
    }

    #[test]
    fn test_rows_have_equal_width() {
        let out = rendered(&["Rock", "Paper", "Scissors"]);
        let widths: Vec<usize> = out
            .lines()
            .skip(1)
            .map(|line| line.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
