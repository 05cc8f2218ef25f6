use colored::*;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 6;

pub fn header(msg: &str, quiet: bool) {
    if quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black(),
    );

    eprintln!("{line}");
}

pub fn key_value(key: &str, value: &str) {
    println!("{}{} {}", format!("{key:<width$}", width = KEY_WIDTH).bright_black(), ":".bright_black(), value);
}

/// Always printed, even when quiet. Goes to stdout so scripts can read it.
pub fn verdict(client: &str, permitted: bool) {
    let word: ColoredString = if permitted {
        "permitted".green().bold()
    } else {
        "denied".red().bold()
    };
    println!("{client} {word}");
}
