use owo_colors::OwoColorize;

/// Colors a requirement-diff summary for terminal output.
///
/// Added lines are green, modified yellow, removed red, section headers bold
/// and impacted-module bullets cyan. With `enabled == false` the text is
/// returned untouched so redirected output stays plain.
pub struct SummaryStyler {
    enabled: bool,
}

impl SummaryStyler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn style(&self, summary: &str) -> String {
        if !self.enabled {
            return summary.to_string();
        }

        summary
            .lines()
            .map(|line| self.style_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn style_line(&self, line: &str) -> String {
        if line.starts_with("**") {
            line.bold().to_string()
        } else if line.starts_with("+ ") {
            line.green().to_string()
        } else if line.starts_with("~ ") {
            line.yellow().to_string()
        } else if line.starts_with("- ") {
            line.red().to_string()
        } else if line.starts_with('•') {
            line.cyan().to_string()
        } else {
            line.to_string()
        }
    }
}
