use anyhow::Context;
use tracing::{info, warn};

use crate::terminal::print;
use ipgate_common::permitted_ip;

/// Runs the fail-closed membership check and prints the verdict.
pub fn check(client: &str, ranges: &str) -> anyhow::Result<bool> {
    let permitted: bool = permitted_ip(client, ranges)
        .with_context(|| format!("cannot check client '{client}'"))?;

    if permitted {
        info!("{client} is inside the allow-list");
    } else {
        warn!("{client} is not inside the allow-list");
    }

    print::verdict(client, permitted);
    Ok(permitted)
}
