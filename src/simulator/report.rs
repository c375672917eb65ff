//! Simulation report generation.

use serde::Serialize;

/// Outcome of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub frames: u64,
    pub flaps: u32,
    /// Ended by a crash rather than the frame cap.
    pub crashed: bool,
    pub reached_milestone: bool,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub generated_at: String,
    pub num_runs: u32,
    pub runs_crashed: u32,
    pub runs_timed_out: u32,
    pub runs_reached_milestone: u32,

    pub avg_score: f64,
    pub best_score: u32,
    pub avg_frames: f64,
    pub avg_flaps: f64,

    /// Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let runs_crashed = runs.iter().filter(|r| r.crashed).count() as u32;
        let runs_reached_milestone = runs.iter().filter(|r| r.reached_milestone).count() as u32;

        let mean = |value: fn(&RunStats) -> f64| -> f64 {
            if runs.is_empty() {
                0.0
            } else {
                runs.iter().map(value).sum::<f64>() / num_runs as f64
            }
        };

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            num_runs,
            runs_crashed,
            runs_timed_out: num_runs - runs_crashed,
            runs_reached_milestone,
            avg_score: mean(|r| r.score as f64),
            best_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_frames: mean(|r| r.frames as f64),
            avg_flaps: mean(|r| r.flaps as f64),
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════\n");
        report.push_str("              SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} crashed, {} hit the frame cap\n\n",
            self.num_runs, self.runs_crashed, self.runs_timed_out
        ));
        report.push_str(&format!("  Avg Score:        {:.2}\n", self.avg_score));
        report.push_str(&format!("  Best Score:       {}\n", self.best_score));
        report.push_str(&format!("  Avg Frames:       {:.0}\n", self.avg_frames));
        report.push_str(&format!("  Avg Flaps:        {:.1}\n", self.avg_flaps));
        report.push_str(&format!(
            "  Milestone Runs:   {} ({:.1}%)\n",
            self.runs_reached_milestone,
            if self.num_runs > 0 {
                self.runs_reached_milestone as f64 * 100.0 / self.num_runs as f64
            } else {
                0.0
            }
        ));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, frames: u64, crashed: bool) -> RunStats {
        RunStats {
            score,
            frames,
            flaps: 10,
            crashed,
            reached_milestone: score >= 10,
        }
    }

    #[test]
    fn test_aggregates() {
        let report = SimReport::from_runs(vec![run(2, 300, true), run(12, 900, false)]);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs_crashed, 1);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.runs_reached_milestone, 1);
        assert_eq!(report.best_score, 12);
        assert!((report.avg_score - 7.0).abs() < f64::EPSILON);
        assert!((report.avg_frames - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert!(report.avg_score.abs() < f64::EPSILON);
        assert!(report.to_text().contains("Runs: 0 total"));
    }

    #[test]
    fn test_json_has_fields() {
        let report = SimReport::from_runs(vec![run(3, 100, true)]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["best_score"], 3);
        assert_eq!(json["run_stats"].as_array().unwrap().len(), 1);
    }
}
