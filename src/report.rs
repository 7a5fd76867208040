//! Console-facing rendering of selection results.
//!
//! Pure formatting over [`Selection`]; the library never prints. The
//! caller decides where the block goes (stdout, a log line, a file).

use crate::select::Selection;

/// Renders one selection as a human-readable block.
///
/// `label` identifies the dataset (typically the file name).
pub fn render(label: &str, selection: &Selection) -> String {
    let mut out = String::new();
    out.push_str(&format!("Results for {label}\n"));
    out.push_str(&format!("status: {}\n", selection.status.as_str()));
    for name in &selection.unresolved_locks {
        out.push_str(&format!("warning: locked '{name}' not found in dataset\n"));
    }
    if selection.is_solution_found() {
        out.push_str("selected:\n");
        for name in &selection.selected {
            out.push_str(&format!("  {name}\n"));
        }
        out.push_str(&format!("total value: {:.2}\n", selection.total_value));
        out.push_str(&format!("total weight: {:.2}\n", selection.total_weight));
    } else {
        out.push_str("no solution found\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::{Selection, SelectionStatus};

    fn found() -> Selection {
        Selection {
            status: SelectionStatus::Optimal,
            selected: vec!["B".into(), "C".into()],
            total_value: 12.0,
            total_weight: 30.0,
            unresolved_locks: vec![],
            solve_time_ms: 1,
        }
    }

    #[test]
    fn test_render_found() {
        let text = render("Last10All.csv", &found());
        assert!(text.contains("Results for Last10All.csv"));
        assert!(text.contains("status: optimal"));
        assert!(text.contains("  B\n"));
        assert!(text.contains("total value: 12.00"));
        assert!(text.contains("total weight: 30.00"));
        assert!(!text.contains("warning"));
    }

    #[test]
    fn test_render_infeasible() {
        let selection = Selection {
            status: SelectionStatus::Infeasible,
            selected: vec![],
            total_value: 0.0,
            total_weight: 0.0,
            unresolved_locks: vec![],
            solve_time_ms: 0,
        };
        let text = render("bad.csv", &selection);
        assert!(text.contains("status: infeasible"));
        assert!(text.contains("no solution found"));
        assert!(!text.contains("selected:"));
    }

    #[test]
    fn test_render_unresolved_locks() {
        let mut selection = found();
        selection.unresolved_locks = vec!["Nobody".into()];
        let text = render("x.csv", &selection);
        assert!(text.contains("warning: locked 'Nobody' not found in dataset"));
    }
}
