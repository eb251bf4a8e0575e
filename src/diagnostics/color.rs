pub fn red(s: &str) -> String { format!("\x1b[31m{}\x1b[0m", s) }
pub fn yellow(s: &str) -> String { format!("\x1b[33m{}\x1b[0m", s) }
pub fn blue(s: &str) -> String { format!("\x1b[34m{}\x1b[0m", s) }
pub fn bold(s: &str) -> String { format!("\x1b[1m{}\x1b[0m", s) }

pub fn error_tag(stage: &str) -> String { bold(&red(&format!("{} error:", stage))) }
pub fn warning_tag(stage: &str) -> String { bold(&yellow(&format!("{} warning:", stage))) }

pub fn excerpt(line_text: &str) -> String {
    format!("  {} {}", blue("|"), line_text.trim_end())
}
