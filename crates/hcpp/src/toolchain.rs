//! Compiling and running the generated source with an external C++ compiler.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use ecow::EcoString;

use crate::Result;

/// The external compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// The compiler program, e.g. `g++` or `clang++`.
    pub cxx: PathBuf,
    /// The language standard passed as `--std=<std>`.
    pub std: EcoString,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            cxx: PathBuf::from("g++"),
            std: "c++14".into(),
        }
    }
}

impl Toolchain {
    /// The executable produced for `source`: its file stem, next to it.
    pub fn executable_for(source: &Path) -> PathBuf {
        let dir = source
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut name = source.file_stem().unwrap_or(source.as_os_str()).to_owned();
        name.push(std::env::consts::EXE_SUFFIX);
        dir.join(name)
    }

    /// Builds the compile command without running it.
    pub fn compile_command(&self, source: &Path) -> Command {
        let mut cmd = Command::new(&self.cxx);
        cmd.arg(format!("--std={}", self.std))
            .arg(source)
            .arg("-o")
            .arg(Self::executable_for(source));
        cmd
    }

    /// Compiles `source`, returning the path of the executable.
    pub fn compile(&self, source: &Path) -> Result<PathBuf> {
        let mut cmd = self.compile_command(source);
        log::info!("running compiler: {cmd:?}");

        let status = cmd.status()?;
        if !status.success() {
            return Err(format!("{} failed with {status}", self.cxx.display()).into());
        }
        Ok(Self::executable_for(source))
    }

    /// Runs a compiled executable, inheriting the standard streams.
    pub fn run(&self, executable: &Path) -> Result<ExitStatus> {
        log::info!("running {}", executable.display());
        Ok(Command::new(executable).status()?)
    }
}
