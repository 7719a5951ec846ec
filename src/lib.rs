//! clipstash: upload clipboard content to object storage under a
//! content-derived name and hand back its URL.

pub mod bootstrap;
pub mod cli;
pub mod output;

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use cs_app::UploadOutcome;
use cs_core::ports::SystemClipboardPort;
use cs_core::{AppConfig, ClassifyOptions};
use cs_platform::LocalClipboard;

use crate::bootstrap::{config, wiring};
use crate::cli::Cli;

/// How a run ended; maps onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::Failure => ExitCode::FAILURE,
        }
    }
}

/// Run one upload against the system clipboard and stdout.
pub async fn run(cli: Cli) -> ExitCode {
    let app_config = config::load(cli.env_file.as_deref());
    let mut stdout = std::io::stdout();
    run_with(&cli, app_config, LocalClipboard::new, &mut stdout)
        .await
        .into()
}

/// Run one upload with the given configuration and clipboard.
///
/// User-facing messages go to `out`. A clipboard that cannot be opened is
/// treated like an empty one.
pub async fn run_with<C, F, W>(
    cli: &Cli,
    app_config: anyhow::Result<AppConfig>,
    open_clipboard: F,
    out: &mut W,
) -> RunStatus
where
    C: SystemClipboardPort,
    F: FnOnce() -> anyhow::Result<C>,
    W: Write,
{
    let app_config = match app_config {
        Ok(app_config) => app_config,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Failed to read config");
            let _ = writeln!(out, "Failed to read config: {e:#}");
            return RunStatus::Failure;
        }
    };

    let clipboard = match open_clipboard() {
        Ok(clipboard) => Arc::new(clipboard),
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "System clipboard unavailable");
            return nothing_to_upload(out);
        }
    };

    let options = ClassifyOptions {
        raw_markdown: cli.raw_markdown,
    };
    let upload = wiring::build_upload(&app_config, clipboard.clone(), options);

    match upload.execute(cli.content_type.as_ref()).await {
        Ok(UploadOutcome::NothingToUpload) => nothing_to_upload(out),
        Ok(UploadOutcome::Stored { locator, .. }) => {
            match output::emit(cli.output, &locator, clipboard.as_ref(), out) {
                Ok(()) => RunStatus::Success,
                Err(e) => {
                    eprintln!("Failed to write result: {e:#}");
                    RunStatus::Failure
                }
            }
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Upload failed");
            eprintln!("Upload failed: {e:#}");
            RunStatus::Failure
        }
    }
}

fn nothing_to_upload<W: Write>(out: &mut W) -> RunStatus {
    let _ = writeln!(out, "Nothing to upload");
    RunStatus::Success
}
