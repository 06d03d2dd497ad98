mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::parse_cli;
use workflow::{RunMode, SearchWorkflow};

fn main() -> Result<ExitCode> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let mode = if cli.batch {
		RunMode::Batch(cli.output)
	} else {
		RunMode::Interactive
	};

	SearchWorkflow::from_config(resolved)?.run(mode)
}
