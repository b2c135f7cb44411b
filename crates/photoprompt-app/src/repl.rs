//! Interactive reply loop.
//!
//! Analysis runs on spawned tasks so input keeps being read while the remote
//! calls are pending. `:open` and `:clear` take effect immediately; results
//! for an image that is no longer current are dropped by the controller.

use std::io::Write;
use std::path::PathBuf;

use photoprompt_common::{ImageOrigin, NotificationLevel, Result};
use photoprompt_session::{AcquireOutcome, AnalysisOutcome, ImageSource, PipelineController, Stage};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

use crate::source::PathSource;

const HELP: &str = "Type a reply and press Enter to save it. Commands: :open PATH, :clear, :quit";

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Open(&'a str),
    Clear,
    Quit,
    Help,
    Reply(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            ":quit" | ":q" => Command::Quit,
            ":clear" => Command::Clear,
            ":help" | ":open" => Command::Help,
            _ => match trimmed.strip_prefix(":open ") {
                Some(path) if !path.trim().is_empty() => Command::Open(path.trim()),
                _ => Command::Reply(line),
            },
        }
    }
}

/// Loop state besides the controller itself.
#[derive(Default)]
struct Pending {
    jobs: JoinSet<AnalysisOutcome>,
    /// A reply typed while the opener was still being generated.
    reply: Option<String>,
}

/// Ask `source` for an image. Failures are reported on `out` and leave the
/// session as it was.
pub async fn acquire<W: Write>(
    controller: &mut PipelineController,
    source: &dyn ImageSource,
    origin: ImageOrigin,
    label: &str,
    out: &mut W,
) -> Result<()> {
    match controller.acquire(source, origin).await {
        Ok(AcquireOutcome::Selected) => {}
        Ok(outcome) => debug!(?outcome, %origin, "no image selected"),
        Err(e) => writeln!(out, "Couldn't open {label}: {e}")?,
    }
    show_notifications(controller, out)
}

/// Analyze whatever is selected, then read lines from `input` until it ends
/// or the user quits. At end of input, running analyses are awaited.
pub async fn run<R, W>(controller: &mut PipelineController, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut pending = Pending::default();
    start_analysis(controller, &mut pending, out)?;

    let mut lines = input.lines();
    let mut input_open = true;
    while input_open || !pending.jobs.is_empty() {
        tokio::select! {
            Some(joined) = pending.jobs.join_next(), if !pending.jobs.is_empty() => {
                finish(controller, joined, &mut pending, out)?;
            }
            line = lines.next_line(), if input_open => match line? {
                Some(line) => {
                    if !handle_line(controller, &line, &mut pending, out).await? {
                        break;
                    }
                }
                None => input_open = false,
            },
            else => break,
        }
    }
    Ok(())
}

/// Returns `false` when the user asked to quit.
async fn handle_line<W: Write>(
    controller: &mut PipelineController,
    line: &str,
    pending: &mut Pending,
    out: &mut W,
) -> Result<bool> {
    let command = Command::parse(line);
    debug!(?command, "input");
    match command {
        Command::Quit => return Ok(false),
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Clear => {
            controller.clear();
            pending.reply = None;
            writeln!(out, "Cleared. Use :open PATH to pick another photo.")?;
        }
        Command::Open(path) => {
            let source = PathSource::new(Some(PathBuf::from(path)));
            acquire(controller, &source, ImageOrigin::Gallery, path, out).await?;
            if controller.stage() == Stage::ImageSelected {
                pending.reply = None;
            }
            start_analysis(controller, pending, out)?;
        }
        Command::Reply(text) => match controller.stage() {
            Stage::Analyzing => {
                pending.reply = Some(text.to_string());
                writeln!(
                    out,
                    "Still analyzing. Your reply will be sent once the opener is ready."
                )?;
            }
            Stage::AnalysisReady => submit_reply(controller, text, out)?,
            _ => writeln!(out, "Nothing to reply to yet. Use :open PATH to pick a photo.")?,
        },
    }
    show_notifications(controller, out)?;
    Ok(true)
}

fn start_analysis<W: Write>(
    controller: &mut PipelineController,
    pending: &mut Pending,
    out: &mut W,
) -> Result<()> {
    match controller.stage() {
        Stage::ImageSelected => {
            if let Some(job) = controller.begin_analysis() {
                writeln!(out, "Analyzing {}...", job.image().locator())?;
                pending.jobs.spawn(job.run());
            }
        }
        Stage::Idle => writeln!(out, "No photo selected. Use :open PATH to pick one.")?,
        _ => {}
    }
    Ok(())
}

fn finish<W: Write>(
    controller: &mut PipelineController,
    joined: std::result::Result<AnalysisOutcome, JoinError>,
    pending: &mut Pending,
    out: &mut W,
) -> Result<()> {
    let outcome = match joined {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %e, "analysis task failed");
            if pending.jobs.is_empty() && controller.stage() == Stage::Analyzing {
                controller.clear();
                pending.reply = None;
                writeln!(out, "Analysis failed. Use :open PATH to try again.")?;
            }
            return Ok(());
        }
    };

    if !controller.complete(outcome) {
        return Ok(());
    }
    show_notifications(controller, out)?;

    let session = controller.session();
    match (session.stage(), session.caption(), session.prompt()) {
        (Stage::AnalysisReady, Some(caption), Some(prompt)) => {
            writeln!(out, "\nCaption: {caption}\n\n{prompt}\n")?;
            writeln!(out, "{HELP}")?;
        }
        (Stage::Error, _, _) => writeln!(out, "Use :open PATH to pick another photo.")?,
        _ => {}
    }

    match pending.reply.take() {
        Some(reply) if controller.stage() == Stage::AnalysisReady => {
            submit_reply(controller, &reply, out)?;
            show_notifications(controller, out)?;
        }
        _ => {}
    }
    Ok(())
}

fn submit_reply<W: Write>(
    controller: &mut PipelineController,
    text: &str,
    out: &mut W,
) -> Result<()> {
    controller.edit_response(text);
    match controller.save() {
        Some(saved) => {
            writeln!(out, "Saved: {}", saved.response)?;
            writeln!(out, "Use :open PATH for another photo, or :quit.")?;
        }
        None => writeln!(out, "Save is disabled until you type a reply.")?,
    }
    Ok(())
}

fn show_notifications<W: Write>(controller: &mut PipelineController, out: &mut W) -> Result<()> {
    for notice in controller.notifications().drain() {
        let tag = match notice.level {
            NotificationLevel::Info => "info",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        };
        writeln!(out, "[{tag}] {}: {}", notice.title, notice.body)?;
    }
    Ok(())
}
