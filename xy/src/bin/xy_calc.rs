// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `xy_calc`: apply one vector operation from the command line.
//!
//! ```text
//! xy_calc --kind u16 --policy ceil --xy 65530 20 add 10 -13.5
//! (65535, 7)
//! {"x":65535,"y":7}
//! ```

use clap::{Args, Parser, Subcommand};
use r3bl_xy::{BinaryOp, Coercion, DEFAULT_LOG_FILE_PATH, Scalar, ScalarKindId,
              TracingConfig, WriterArg, XY, try_initialize_logging_global,
              with_scalar_kind};

#[derive(Debug, Parser)]
#[command(bin_name = "xy_calc")]
#[command(about = "Bounded XY vector calculator")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[arg(
        long,
        short = 'k',
        default_value = "u16",
        help = "Kind of both components: u4 u8 u16 u32 i4 i8 i16 i32 fraction float"
    )]
    pub kind: ScalarKindId,

    #[arg(
        long,
        short = 'p',
        default_value = "cast",
        help = "Coercion policy: cast clamp ceil floor round trunc"
    )]
    pub policy: Coercion,

    #[arg(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        allow_negative_numbers = true,
        required = true,
        help = "Starting vector, coerced with the chosen policy"
    )]
    pub xy: Vec<f64>,

    #[command(flatten)]
    pub log_options: LogOption,

    #[command(subcommand)]
    pub command: CLICommand,
}

#[derive(Debug, Args)]
pub struct LogOption {
    #[arg(global = true, long, default_value = "info", help = "trace debug info warn error")]
    pub log_level: tracing::Level,

    #[arg(global = true, long, default_value = "none", help = "stdout stderr file none")]
    pub log_writer: WriterArg,

    #[arg(global = true, long, default_value = DEFAULT_LOG_FILE_PATH)]
    pub log_file: String,
}

impl From<&LogOption> for TracingConfig {
    fn from(it: &LogOption) -> Self {
        Self {
            level: it.log_level,
            writer: it.log_writer,
            log_file_path: it.log_file.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum CLICommand {
    #[clap(about = "Replace the vector with (ax, ay)")]
    Set(PairArg),
    #[clap(about = "Add (ax, ay)")]
    Add(PairArg),
    #[clap(about = "Subtract (ax, ay)")]
    Sub(PairArg),
    #[clap(about = "Multiply by (ax, ay), per component")]
    Mul(PairArg),
    #[clap(about = "Divide by (ax, ay), per component")]
    Div(PairArg),
    #[clap(about = "Per component minimum with (ax, ay)")]
    Min(PairArg),
    #[clap(about = "Per component maximum with (ax, ay)")]
    Max(PairArg),
    #[clap(about = "Per component magnitude")]
    Abs,
    #[clap(about = "Print x * y")]
    Area,
    #[clap(about = "Print the Euclidean length")]
    Magnitude,
    #[clap(about = "Print the dot product with (ax, ay)")]
    Dot(PairArg),
}

#[derive(Debug, Clone, Copy, Args)]
pub struct PairArg {
    #[arg(allow_negative_numbers = true)]
    pub ax: f64,
    #[arg(allow_negative_numbers = true)]
    pub ay: f64,
}

impl PairArg {
    fn pair(self) -> (f64, f64) { (self.ax, self.ay) }
}

impl CLICommand {
    fn binary_op(self) -> Option<(BinaryOp, PairArg)> {
        match self {
            CLICommand::Add(pair) => Some((BinaryOp::Add, pair)),
            CLICommand::Sub(pair) => Some((BinaryOp::Sub, pair)),
            CLICommand::Mul(pair) => Some((BinaryOp::Mul, pair)),
            CLICommand::Div(pair) => Some((BinaryOp::Div, pair)),
            CLICommand::Min(pair) => Some((BinaryOp::Min, pair)),
            CLICommand::Max(pair) => Some((BinaryOp::Max, pair)),
            _ => None,
        }
    }
}

/// Runs the command for the concrete kind `K`, and returns the lines to print.
fn run<K: Scalar>(cli_arg: &CLIArg) -> miette::Result<Vec<String>> {
    let &[x, y] = cli_arg.xy.as_slice() else {
        miette::bail!("--xy takes exactly two numbers");
    };
    let policy = cli_arg.policy;

    let mut it = XY::<K>::try_new_with(policy, (x, y))?;
    tracing::debug!(message = "Start", kind = K::KIND.name, %policy, xy = %it);

    let derived = match cli_arg.command {
        CLICommand::Set(pair) => {
            it.assign_with(policy, pair.pair())?;
            None
        }
        CLICommand::Abs => {
            it.abs_with(policy)?;
            None
        }
        CLICommand::Area => Some(it.area_with(policy)?),
        CLICommand::Magnitude => Some(it.magnitude_with(policy)?),
        CLICommand::Dot(pair) => Some(it.dot_with(policy, pair.pair())?),
        command => {
            if let Some((op, pair)) = command.binary_op() {
                it.combine_with(op, policy, pair.pair())?;
            }
            None
        }
    };

    Ok(match derived {
        Some(value) => vec![value.to_string()],
        None => vec![it.to_string(), it.ser_to_string()?],
    })
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    try_initialize_logging_global(TracingConfig::from(&cli_arg.log_options))?;

    let lines = with_scalar_kind!(cli_arg.kind, K => run::<K>(&cli_arg))?;
    for line in lines {
        println!("{line}");
    }

    Ok(())
}
