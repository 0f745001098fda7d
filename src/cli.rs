//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use textkit::{Param, Tab, Tool, ToolParameters};

#[derive(Parser)]
#[command(
    name = "textkit",
    version,
    about = "Line-oriented text tools: trim, dedupe, sort, extract, replace",
    long_about = "Apply line-oriented text transformations to stdin or a file.\n\n\
                  The `session` command keeps a document and its tool settings\n\
                  in a JSON state file between runs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the available tools.
    Tools,

    /// Transform input text and print the result.
    Apply(ApplyArgs),

    /// Print character, word, line and sentence counts.
    Stats {
        /// Read from this file instead of stdin.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Work on a document persisted in a state file.
    Session(SessionArgs),
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Tool name, e.g. trimLines or sortAlphabetical.
    #[arg(value_parser = parse_tool)]
    pub tool: Tool,

    /// Read from this file instead of stdin.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Args)]
pub struct ParamArgs {
    #[arg(long, default_value = "")]
    pub prefix: String,

    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Separator for joinLines.
    #[arg(long, default_value = " ")]
    pub separator: String,

    /// Field delimiter for extractColumn.
    #[arg(long, default_value = ",")]
    pub delimiter: String,

    /// Zero-based column for extractColumn.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub column: String,

    #[arg(long, default_value = "")]
    pub find: String,

    #[arg(long, default_value = "")]
    pub replace: String,

    /// Treat --find as a regular expression.
    #[arg(long)]
    pub regex: bool,

    #[arg(long)]
    pub case_sensitive: bool,

    /// Sort in descending order.
    #[arg(long)]
    pub descending: bool,
}

impl ParamArgs {
    pub fn to_params(&self) -> ToolParameters {
        ToolParameters {
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            join_separator: self.separator.clone(),
            extract_delimiter: self.delimiter.clone(),
            extract_index: self.column.clone(),
            find_text: self.find.clone(),
            replace_text: self.replace.clone(),
            is_regex: self.regex,
            is_case_sensitive: self.case_sensitive,
            sort_descending: self.descending,
            ..ToolParameters::default()
        }
    }
}

#[derive(Args)]
pub struct SessionArgs {
    /// JSON file holding the persisted session.
    #[arg(long, value_name = "FILE")]
    pub state: PathBuf,

    /// JSON file with session settings (debounce_ms, history_limit, notice_ms).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Quiet period before a debounced write, overriding the config file.
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Number of undo snapshots kept, overriding the config file.
    #[arg(long, value_name = "N")]
    pub history_limit: Option<usize>,

    #[command(subcommand)]
    pub action: SessionAction,
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Print the document; statistics go to stderr.
    Show,

    /// Replace the document with new text.
    Edit {
        /// Read from this file instead of stdin.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Apply a tool with the stored parameters.
    Apply {
        #[arg(value_parser = parse_tool)]
        tool: Tool,
    },

    /// Change a stored tool parameter.
    Set {
        #[arg(value_enum)]
        param: ParamArg,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Select the active tool tab.
    Tab { tab: Tab },

    /// Empty the document.
    Clear,

    /// Switch between the dark and light theme.
    Theme,

    /// Copy the document to the system clipboard.
    Copy,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ParamArg {
    Prefix,
    Suffix,
    Separator,
    Delimiter,
    Column,
    Find,
    Replace,
    Regex,
    CaseSensitive,
    Descending,
}

impl From<ParamArg> for Param {
    fn from(arg: ParamArg) -> Self {
        match arg {
            ParamArg::Prefix => Param::Prefix,
            ParamArg::Suffix => Param::Suffix,
            ParamArg::Separator => Param::JoinSeparator,
            ParamArg::Delimiter => Param::ExtractDelimiter,
            ParamArg::Column => Param::ExtractIndex,
            ParamArg::Find => Param::FindText,
            ParamArg::Replace => Param::ReplaceText,
            ParamArg::Regex => Param::IsRegex,
            ParamArg::CaseSensitive => Param::IsCaseSensitive,
            ParamArg::Descending => Param::SortDescending,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_tool(s: &str) -> Result<Tool, String> {
    s.parse::<Tool>().map_err(|e| e.to_string())
}
