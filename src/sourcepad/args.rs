use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sourcepad")]
#[command(
    about = "Keep track of the sources you read, with a recycle bin",
    long_about = "Runs a single command when one is given, e.g.\n\n  \
                  sourcepad add \"Algorithm Researchers\" y/article t/research\n\n\
                  and reads commands from standard input otherwise."
)]
pub struct Cli {
    /// Directory holding config.json and the saved collections
    #[arg(long, env = "SOURCEPAD_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Start in recycle bin mode
    #[arg(long)]
    pub bin: bool,

    /// Log what sourcepad is doing to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run, in the same syntax as the interactive prompt
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
