//! corebind - Main Entry Point
//! Resolves the basic binding, starts the computer, prints its status.

mod logging;

use anyhow::Result;
use tracing::info;

use corebind_infra_system::{assemble, Binding};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // 1. Initialize logging (stderr only)
    logging::init_logging()?;

    info!("corebind v{} starting...", VERSION);

    // 2. Resolve binding and assemble (DI wiring)
    let binding = Binding::basic();
    let mut computer = assemble(&binding);

    // 3. Activate
    computer.start();

    // 4. Report
    println!("{}", computer.report_line());

    info!(unit = %computer.unit_kind(), power = %computer.power_state(), "Done");

    Ok(())
}
