use std::error::Error;
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use textkit::{Clipboard, JsonFileStore, SessionBuilder, SessionConfig, Stats, Tool};

mod cli;
mod console;
mod logging;

use crate::cli::{ApplyArgs, Cli, Command, LogFormatArg, SessionAction, SessionArgs};
use crate::console::{ConsoleRenderer, format_stats};
use crate::logging::{LogConfig, LogFormat, init_logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    init_logging(
        &LogConfig::from_verbosity(cli.verbose)
            .with_format(format)
            .with_ansi(std::io::stderr().is_terminal()),
    );

    let result = match cli.command {
        Command::Tools => {
            for tool in Tool::ALL {
                println!("{tool}");
            }
            Ok(())
        }
        Command::Apply(args) => run_apply(&args),
        Command::Stats { input } => read_input(input.as_deref()).map(|text| {
            println!("{}", format_stats(&Stats::of(&text)));
        }),
        Command::Session(args) => run_session(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is::<Reported>() {
                eprintln!("error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run_apply(args: &ApplyArgs) -> Result<(), Box<dyn Error>> {
    let text = read_input(args.input.as_deref())?;
    let transform = args.tool.with_params(&args.params.to_params());
    let output = transform.apply(&text)?;
    println!("{output}");
    Ok(())
}

async fn run_session(args: SessionArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::from_json_file(path)?,
        None => SessionConfig::default(),
    };
    if let Some(ms) = args.debounce_ms {
        config.debounce_ms = ms;
    }
    if let Some(limit) = args.history_limit {
        config.history_limit = limit;
    }
    tracing::debug!(?config, "session config");
    let store = Arc::new(JsonFileStore::new(&args.state));
    let mut session = SessionBuilder::new(store, default_clipboard(), ConsoleRenderer::default())
        .config(config)
        .build();
    if !session.restore().await {
        tracing::info!(path = %args.state.display(), "no stored session, starting empty");
    }

    let outcome = match args.action {
        SessionAction::Show => {
            println!("{}", session.text());
            let view = session.renderer();
            eprintln!("{}  theme: {}", format_stats(&view.stats), view.theme);
            Ok(())
        }
        SessionAction::Edit { input } => {
            session.edit_text(read_input(input.as_deref())?);
            Ok(())
        }
        SessionAction::Apply { tool } => match session.apply_tool(tool) {
            Ok(()) => {
                println!("{}", session.text());
                Ok(())
            }
            Err(_) => Err(Reported),
        },
        SessionAction::Set { param, value } => {
            session.set_param(param.into(), &value)?;
            Ok(())
        }
        SessionAction::Tab { tab } => {
            session.select_tab(tab);
            Ok(())
        }
        SessionAction::Clear => {
            session.clear();
            Ok(())
        }
        SessionAction::Theme => {
            let theme = session.toggle_theme();
            println!("{theme}");
            Ok(())
        }
        SessionAction::Copy => session.copy().await.map_err(|_| Reported),
    };

    session.flush().await?;
    outcome.map_err(Into::into)
}

/// A failure the session already showed through its renderer.
#[derive(Debug, thiserror::Error)]
#[error("failure already reported")]
struct Reported;

/// Read all of `path`, or stdin when no path is given. One trailing line
/// break is dropped so it does not count as an extra empty line.
fn read_input(path: Option<&Path>) -> Result<String, Box<dyn Error>> {
    let mut text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn default_clipboard() -> Arc<dyn Clipboard> {
    #[cfg(feature = "clipboard")]
    {
        Arc::new(textkit::SystemClipboard)
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Arc::new(textkit::NoClipboard)
    }
}
