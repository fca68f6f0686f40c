//! Shell completion scripts for `sqm`, generated from its clap definition
use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use clap_complete_nushell::Nushell;

use crate::SeqMatchOptions;

/// Available shells for completion generation
#[derive(Clone, Copy, clap::ValueEnum, PartialEq, Eq, Debug)]
pub enum Shell {
    /// Bourne Again SHell
    Bash,
    /// Elvish shell
    Elvish,
    /// Friendly Interactive SHell
    Fish,
    /// Nushell (nu)
    Nushell,
    /// PowerShell
    PowerShell,
    /// Zsh
    Zsh,
}

const BIN_NAME: &str = "sqm";

/// Writes the completion script of `shell` for every `sqm` flag to `output`
pub fn generate_to<W: Write>(shell: Shell, output: &mut W) {
    let mut cmd = SeqMatchOptions::command();
    match shell {
        Shell::Bash => generate(clap_complete::Shell::Bash, &mut cmd, BIN_NAME, output),
        Shell::Elvish => generate(clap_complete::Shell::Elvish, &mut cmd, BIN_NAME, output),
        Shell::Fish => generate(clap_complete::Shell::Fish, &mut cmd, BIN_NAME, output),
        Shell::Nushell => generate(Nushell, &mut cmd, BIN_NAME, output),
        Shell::PowerShell => generate(clap_complete::Shell::PowerShell, &mut cmd, BIN_NAME, output),
        Shell::Zsh => generate(clap_complete::Shell::Zsh, &mut cmd, BIN_NAME, output),
    }
}

/// Prints the completion script of `shell`
pub fn print(shell: Shell) {
    generate_to(shell, &mut io::stdout().lock())
}
