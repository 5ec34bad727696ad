//! An interactive to-do list.
//! Set the RUST_LOG environment variable to see what happens under the hood.

use std::error::Error;
use std::io::{stdin, stdout};

use todo_list::shell::Shell;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let stdin = stdin();
    let stdout = stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run()?;

    log::info!("{} tasks are discarded", shell.list().len());
    Ok(())
}
