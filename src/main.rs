use palc::Parser;
use rofer::cli::*;

fn main() {
	let rofer = rofer::Rofer;

	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(e) = rofer.run_file(&path) {
				eprintln!("Failed run file: {e}");
			}
		}
		Mode::Repl => rofer.run_prompt(),
	}
}
