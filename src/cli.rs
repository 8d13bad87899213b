use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::annotation::{Annotations, Assignment};
use crate::flags::Flags;
use crate::generator::RegexMaker;

#[derive(Parser, Debug)]
#[command(author, version, about = "Build a regex from an annotated example", long_about = None)]
pub struct Cli {
    /// Example string to generalize
    #[arg(value_name = "EXAMPLE")]
    pub example: String,

    /// Replace a literal with a built-in type, e.g. any_number=2
    #[arg(short = 'a', long = "annotate", value_name = "TYPE=VALUE")]
    pub annotations: Vec<Assignment>,

    /// Replace a literal with a custom type registered by --custom
    #[arg(short = 'n', long = "new-type", value_name = "TYPE=VALUE")]
    pub new_types: Vec<Assignment>,

    /// Register a custom type, e.g. two_digits=\d{2}
    #[arg(short = 'c', long = "custom", value_name = "NAME=FRAGMENT")]
    pub custom: Vec<Assignment>,

    /// Further examples to OR onto the pattern; literals are located with
    /// the same annotations
    #[arg(short = 'm', long = "merge", value_name = "EXAMPLE")]
    pub merge: Vec<String>,

    /// Wrap every substituted fragment in a capture group
    #[arg(long)]
    pub capture: bool,

    /// Regex flags, any of "gimsuy"
    #[arg(short = 'f', long, default_value = "")]
    pub flags: Flags,

    /// Match the pattern against standard input
    #[arg(long)]
    pub stdin: bool,

    /// Print only capture groups when matching
    #[arg(long, requires = "stdin")]
    pub captures_only: bool,

    /// Print standard input with matches replaced by this template
    #[arg(short = 'r', long, requires = "stdin", value_name = "TEMPLATE")]
    pub replace: Option<String>,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut input = String::new();
    if cli.stdin {
        io::stdin().read_to_string(&mut input)?;
    }
    let stdout = io::stdout();
    run_with(cli, &input, &mut stdout.lock())
}

/// Does the work of [`run`], reading `input` in place of standard input and
/// writing to `out`. `input` is ignored unless `--stdin` was given.
pub fn run_with(cli: Cli, input: &str, out: &mut impl Write) -> Result<()> {
    let mut maker = RegexMaker::new();
    for Assignment { name, value } in cli.custom {
        maker.add_custom(name, value);
    }

    let annotations: Annotations = cli.annotations.into_iter().collect();
    let new_types: Annotations = cli.new_types.into_iter().collect();
    let new_types = (!new_types.is_empty()).then_some(&new_types);

    maker
        .try_synthesize(&cli.example, &annotations, cli.capture, cli.flags, new_types)
        .with_context(|| format!("Could not build a pattern from {:?}", cli.example))?;
    for example in &cli.merge {
        maker
            .try_combine(example, &annotations, cli.capture, cli.flags, new_types)
            .with_context(|| format!("Could not merge {:?}", example))?;
    }

    let Some(pattern) = maker.current() else {
        bail!("No pattern was produced");
    };
    log::debug!("Pattern: {}", pattern);

    if !cli.stdin {
        writeln!(out, "{}", pattern)?;
        return Ok(());
    }

    let input = input.trim_end();
    log::debug!("Input: {:?}", input);

    if let Some(template) = cli.replace {
        writeln!(out, "{}", maker.replace(input, &template, None))?;
        return Ok(());
    }

    let values = maker.match_all(input, cli.captures_only);
    if values.is_empty() {
        bail!("Pattern does not match.");
    }
    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}
