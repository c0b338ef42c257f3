//! Solve reports printed by the command-line tool.

use std::fmt::Display;

use serde::Serialize;

use crate::solver::Solver;
use crate::state::PuzzleState;

/// Summary of one search and the path it found
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    pub puzzle: String,
    pub total_configs: usize,
    pub unique_configs: usize,
    pub solved: bool,
    /// Rendered states along the path, start first; empty when unsolved
    pub steps: Vec<String>,
}

impl SolveReport {
    pub fn new<S>(puzzle: impl Into<String>, solver: &Solver<S>, path: &[S]) -> Self
    where
        S: PuzzleState + Display,
    {
        Self {
            puzzle: puzzle.into(),
            total_configs: solver.total_generated(),
            unique_configs: solver.unique_count(),
            solved: !path.is_empty(),
            steps: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Number of moves on the path, if there is one
    pub fn moves(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    pub fn render_text(&self) -> String {
        let mut out = format!(
            "{}\nTotal configs: {}\nUnique configs: {}\n",
            self.puzzle, self.total_configs, self.unique_configs
        );
        if self.steps.is_empty() {
            out.push_str("No solution\n");
        }
        for (i, step) in self.steps.iter().enumerate() {
            // boards span several lines
            let separator = if step.contains('\n') { "\n" } else { " " };
            out.push_str(&format!("Step {}:{}{}\n", i, separator, step));
        }
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
