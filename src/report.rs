use crate::score::{Grade, Score};
use colored::{ColoredString, Colorize};

/// One graded assertion: a pass/fail flag, the line shown to the learner,
/// and an optional remediation hint printed under failures.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub passed: bool,
    pub message: String,
    pub hint: Option<String>,
}

/// Accumulates scored check results in execution order, echoing each one to
/// stdout as it is recorded. Informational lines never land here, so the
/// final score only covers checks that actually ran.
#[derive(Debug, Default)]
pub struct Reporter {
    results: Vec<CheckResult>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pass(&mut self, message: &str) {
        status_line(true, message, None);
        self.results.push(CheckResult {
            passed: true,
            message: message.to_string(),
            hint: None,
        });
    }

    pub fn fail(&mut self, message: &str, hint: Option<&str>) {
        status_line(false, message, hint);
        self.results.push(CheckResult {
            passed: false,
            message: message.to_string(),
            hint: hint.map(str::to_string),
        });
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }
}

/// Prints a pass/fail marker without recording anything. Used for
/// environment readiness, which is informational and never scored.
pub fn status_line(passed: bool, message: &str, hint: Option<&str>) {
    if passed {
        println!("  {} {message}", "✓".green());
    } else {
        println!("  {} {message}", "✗".red());
        if let Some(hint) = hint {
            println!("    {}", format!("↳ Hint: {hint}").yellow());
        }
    }
}

pub fn header(text: &str) {
    let rule = "=".repeat(65);
    println!("\n{}", rule.blue().bold());
    println!("{}", format!("  {text}").blue().bold());
    println!("{}\n", rule.blue().bold());
}

pub fn section(text: &str) {
    println!("\n{}", format!("▶ {text}").cyan().bold());
    println!("{}", "-".repeat(50));
}

pub fn info(message: &str) {
    println!("  {} {message}", "ℹ".blue());
}

pub fn warn(message: &str) {
    println!("\n{}", format!("⚠ {message}").yellow());
}

pub fn print_summary(score: &Score) {
    header("FINAL SCORE");

    println!(
        "  Checks Passed: {} / {}",
        score.passed.to_string().green(),
        score.total
    );
    println!("  Score: {}", format!("{:.1}%", score.percentage()).bold());

    const BAR_WIDTH: usize = 40;
    let filled = if score.total == 0 {
        0
    } else {
        BAR_WIDTH * score.passed / score.total
    };
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

    let grade = score.grade();
    let paint = |s: String| -> ColoredString {
        match grade {
            Grade::A => s.green(),
            Grade::B => s.yellow(),
            Grade::C => s.red(),
        }
    };

    println!("\n  [{}]", paint(bar));
    println!("\n  Grade: {}", paint(grade.label().to_string()).bold());

    match grade {
        Grade::A => println!(
            "\n  {}",
            "Challenge complete! You've mastered state migration.".green()
        ),
        Grade::B => println!(
            "\n  {}",
            "Good progress! Complete the remaining tasks.".yellow()
        ),
        Grade::C => println!("\n  {}", "Keep working. Check the hints above.".yellow()),
    }
}
