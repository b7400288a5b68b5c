#![doc = include_str!("../README.md")]

use std::{io::Write, path::PathBuf, process::exit};

use clap::Parser;
use hcpp::{Hcpp, HcppFeat, Result, toolchain::Toolchain};

/// Converts a tagged HTML document into C++ source.
#[derive(Debug, Clone, Parser)]
#[clap(name = "hcpp", arg_required_else_help = true)]
pub struct ConvertArgs {
    /// Path to the HTML document
    #[clap(value_name = "INPUT")]
    pub input: PathBuf,

    /// Compiles and runs the generated source when it starts with `r`
    #[clap(value_name = "MODE", default_value = None)]
    pub mode: Option<String>,

    /// Directory to write `<title>` into
    #[clap(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Prints the source to stdout instead of writing a file
    #[clap(long, conflicts_with = "mode")]
    pub stdout: bool,

    /// Spaces per nesting level
    #[clap(long, value_name = "N", default_value_t = 4)]
    pub indent_width: usize,

    /// Indents with tabs instead of spaces
    #[clap(long, conflicts_with = "indent_width")]
    pub tabs: bool,

    /// The C++ compiler used in run mode
    #[clap(long, env = "HCPP_CXX", value_name = "PROGRAM", default_value = "g++")]
    pub cxx: PathBuf,

    /// The language standard used in run mode
    #[clap(long, env = "HCPP_STD", value_name = "STD", default_value = "c++14")]
    pub std: String,
}

impl ConvertArgs {
    fn indent(&self) -> String {
        if self.tabs {
            "\t".to_owned()
        } else {
            " ".repeat(self.indent_width)
        }
    }

    fn should_run(&self) -> bool {
        self.mode.as_deref().is_some_and(|mode| mode.starts_with('r'))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = ConvertArgs::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        exit(1);
    }
}

fn run(args: ConvertArgs) -> Result<()> {
    let source = Hcpp::new()
        .with_feature(HcppFeat {
            indent: args.indent().into(),
        })
        .convert_file(&args.input)?;

    if args.stdout {
        std::io::stdout().write_all(source.text.as_bytes())?;
        return Ok(());
    }

    let output = source.write_to(&args.out_dir)?;
    log::info!("generated {}", output.display());

    if args.should_run() {
        let toolchain = Toolchain {
            cxx: args.cxx,
            std: args.std.into(),
        };
        let executable = toolchain.compile(&output)?;
        let status = toolchain.run(&executable)?;
        if !status.success() {
            exit(status.code().unwrap_or(1));
        }
    }

    Ok(())
}
