use crate::report::CheckResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
}

impl Grade {
    pub fn label(self) -> &'static str {
        match self {
            Grade::A => "A - Excellent!",
            Grade::B => "B - Good Progress",
            Grade::C => "C - Keep Working",
        }
    }
}

/// Pass/total counts over every check that actually ran. Short-circuited
/// checks were never recorded, so they do not dilute the percentage.
#[derive(Debug, Clone, Copy)]
pub struct Score {
    pub passed: usize,
    pub total: usize,
}

impl Score {
    pub fn from_results(results: &[CheckResult]) -> Self {
        Self {
            passed: results.iter().filter(|r| r.passed).count(),
            total: results.len(),
        }
    }

    /// Always in [0, 100]; an empty run scores 0 rather than NaN.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64 * 100.0
        }
    }

    pub fn grade(&self) -> Grade {
        let pct = self.percentage();
        if pct >= 80.0 {
            Grade::A
        } else if pct >= 60.0 {
            Grade::B
        } else {
            Grade::C
        }
    }

    /// Drives the process exit code: 0 when true, 1 otherwise.
    pub fn passing(&self) -> bool {
        self.percentage() >= 60.0
    }
}
