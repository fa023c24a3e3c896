//! Game process spawning

use std::io;
use std::path::Path;
use std::process::{Child, Command};

/// Spawn the game directly (no shell) with its own directory as the working
/// directory. stdio is inherited and the child is never waited on here.
pub fn spawn_game(executable: &Path, arguments: &[String]) -> io::Result<Child> {
    // Relative program paths are ambiguous once current_dir is set
    let executable = std::path::absolute(executable)?;

    let mut cmd = Command::new(&executable);
    cmd.args(arguments);
    if let Some(dir) = executable.parent() {
        cmd.current_dir(dir);
    }

    cmd.spawn()
}
