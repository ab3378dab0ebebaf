//! hrm - Entry Point
//!
//! Binary entry point for the host resource metrics CLI.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `hrm memory` | Memory usage |
//! | `hrm disk [PATH]` | Filesystem usage |
//! | `hrm battery soc\|soh [NAME]` | Battery charge or health |
//! | `hrm cpu [--instant]` | CPU load |
//! | `hrm watch` | All of the above, periodically |

use clap::Parser;
use hrm::cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli).await
}
