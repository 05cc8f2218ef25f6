use anyhow::Context;
use colored::*;
use tracing::{debug, info};

use crate::terminal::print;
use ipgate_common::{config::Config, parse_ip_range};

/// Strictly parses `ranges` and lists what it contains.
pub fn validate(ranges: &str, cfg: &Config) -> anyhow::Result<()> {
    let set = parse_ip_range(ranges).context("allow-list rejected")?;

    let len: usize = set.len();
    let unit: &str = if len == 1 { "range has" } else { "ranges have" };
    info!("{len} {unit} been parsed successfully");

    if cfg.quiet {
        return Ok(());
    }

    for range in &set {
        let family: &str = if range.is_ipv4() { "IPv4" } else { "IPv6" };
        let kind: ColoredString = match (range.is_ipv4(), range.prefix()) {
            (true, 32) | (false, 128) => "host".cyan(),
            _ => "network".bright_blue(),
        };
        debug!("{range} is an {family} entry");
        print::key_value(family, &format!("{} {}", range.to_string().bold(), kind));
    }

    Ok(())
}
