use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Manage a prism project store and render its preview")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// JSON store holding the project files and settings
	#[arg(long, short = 's', value_name = "PATH", default_value = "prism.json")]
	pub store: PathBuf,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// List stored files
	Ls,
	/// Write the welcome project into an empty store
	Seed,
	/// Create an empty file
	New {
		/// File name, e.g. `about.html`
		name: String,
	},
	/// Rename a file
	Mv {
		/// Current name.
		from: String,
		/// New name.
		to: String,
	},
	/// Delete a file
	Rm {
		/// File name.
		name: String,
	},
	/// Copy files from disk into the store
	Import {
		/// Paths to import; the file name becomes the identifier.
		#[arg(required = true)]
		paths: Vec<PathBuf>,
	},
	/// Print a stored file
	Export {
		/// File name.
		name: String,
		/// Write to this path instead of stdout
		#[arg(long, short = 'o', value_name = "PATH")]
		out: Option<PathBuf>,
	},
	/// Compile the preview document
	Preview {
		/// Write to this path instead of stdout
		#[arg(long, short = 'o', value_name = "PATH")]
		out: Option<PathBuf>,
	},
	/// Show or change settings
	Settings {
		/// Advance to the next theme
		#[arg(long)]
		cycle_theme: bool,
		/// Grow the font one step
		#[arg(long, conflicts_with = "zoom_out")]
		zoom_in: bool,
		/// Shrink the font one step
		#[arg(long)]
		zoom_out: bool,
	},
}
