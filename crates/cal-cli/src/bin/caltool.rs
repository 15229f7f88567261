use clap::{Parser, Subcommand};

use cal_cli::commands::{config_ops, convert_ops};
use cal_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "caltool", about = "Arabic to CAL transliteration tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Arabic words to CAL code
    Convert {
        /// Custom CAL table (TOML) replacing the embedded one
        #[arg(long)]
        table: Option<String>,
        /// Arabic words
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Convert a text file word by word, keeping line structure
    ConvertFile {
        /// Custom CAL table (TOML) replacing the embedded one
        #[arg(long)]
        table: Option<String>,
        /// Input file (stdin when omitted)
        input: Option<String>,
    },
    /// Convert one JSON value per line (non-string values pass through)
    ConvertJsonl {
        /// Custom CAL table (TOML) replacing the embedded one
        #[arg(long)]
        table: Option<String>,
        /// Input file (stdin when omitted)
        input: Option<String>,
    },
    /// Show how each position of a word is mapped
    Explain {
        /// Arabic word
        word: String,
        /// Custom CAL table (TOML) replacing the embedded one
        #[arg(long)]
        table: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// CAL table operations
    Table {
        #[command(subcommand)]
        action: TableAction,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// Print the embedded default table
    Export,
    /// Validate a table file
    Validate {
        /// Table file (TOML)
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { table, words } => {
            config_ops::use_table(table.as_deref());
            convert_ops::convert_cmd(&words);
        }
        Command::ConvertFile { table, input } => {
            config_ops::use_table(table.as_deref());
            convert_ops::convert_file_cmd(input.as_deref());
        }
        Command::ConvertJsonl { table, input } => {
            config_ops::use_table(table.as_deref());
            convert_ops::convert_jsonl_cmd(input.as_deref());
        }
        Command::Explain { word, table, json } => {
            config_ops::use_table(table.as_deref());
            convert_ops::explain_cmd(&word, json);
        }
        Command::Table { action } => match action {
            TableAction::Export => config_ops::table_export(),
            TableAction::Validate { file } => config_ops::table_validate(&file),
        },
    }
}
