use std::{env, io::ErrorKind, process};

use nscale_cli::CliError;

fn main() {
    env_logger::init();

    match nscale_cli::run_in_shell_env(env::args()) {
        Ok(()) => {}
        // `nscale 24 440 | head` closes stdout before the table is complete
        Err(CliError::IoError(err)) if err.kind() == ErrorKind::BrokenPipe => {}
        Err(err) => {
            println!("{err}");
            process::exit(1);
        }
    }
}
