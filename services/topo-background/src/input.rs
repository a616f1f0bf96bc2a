//! Line protocol for driving the background from a host process.
//!
//! ```text
//! 1280x720        resize to 1280 by 720
//! theme dark      switch theme (light, dark or toggle)
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{broadcast, mpsc};
use topo_common::{Theme, TopoError, TopoResult, Viewport};
use tracing::{info, warn};

use crate::resize::ResizeSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeCommand {
    Set(Theme),
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Resize(Viewport),
    Theme(ThemeCommand),
}

/// Parse one input line. `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> TopoResult<Option<HostEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("theme"), Some("toggle"), None) => Ok(Some(HostEvent::Theme(ThemeCommand::Toggle))),
        (Some("theme"), Some(name), None) => {
            Ok(Some(HostEvent::Theme(ThemeCommand::Set(Theme::parse(name)?))))
        }
        (Some("theme"), _, _) => Err(TopoError::InvalidTheme(line.to_string())),
        _ => Viewport::parse(line).map(|v| Some(HostEvent::Resize(v))),
    }
}

/// Read host events from `reader` and publish them until end of input or
/// `shutdown` fires, whichever comes first.
///
/// Invalid lines are logged and skipped. Returns the number of events
/// forwarded.
pub async fn forward_host_events<R>(
    reader: R,
    signal: &ResizeSignal,
    themes: &mpsc::Sender<ThemeCommand>,
    mut shutdown: broadcast::Receiver<()>,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut forwarded = 0;

    loop {
        let line = tokio::select! {
            _ = shutdown.recv() => {
                info!("Stopped reading host events");
                break;
            }
            line = lines.next_line() => match line? {
                Some(line) => line,
                None => break,
            },
        };

        match parse_line(&line) {
            Ok(Some(HostEvent::Resize(viewport))) => {
                signal.notify(viewport);
                forwarded += 1;
            }
            Ok(Some(HostEvent::Theme(command))) => {
                if themes.send(command).await.is_err() {
                    break;
                }
                forwarded += 1;
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, line = %line, "Ignoring input line"),
        }
    }

    Ok(forwarded)
}
