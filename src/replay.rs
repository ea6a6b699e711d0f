//! Replay of recorded input events.
//!
//! An event script is plain text, one intent per line:
//!
//! ```text
//! # open the third photo, zoom twice, browse on
//! click 2
//! zoom-in
//! wheel -1
//! next
//! key Escape
//! scroll 0.35
//! ```
//!
//! Blank lines and `#` comments are skipped. [`replay`] feeds the parsed
//! intents through a [`PageController`] in order and records what each one
//! did, which makes viewer behavior reproducible from the command line.

use crate::controller::{Intent, PageController, Render};
use crate::viewer::ViewerSnapshot;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptEvent {
    /// 1-based line number in the script.
    pub line: usize,
    pub intent: Intent,
}

/// Outcome of one replayed event.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    pub line: usize,
    pub intent: String,
    pub changed: bool,
    pub viewer: ViewerSnapshot,
    /// Counter label while the lightbox is open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter: Option<String>,
    /// Background parameters, for scroll events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<crate::scroll::VisualParams>,
}

/// Parse a whole script.
pub fn parse_script(source: &str) -> Result<Vec<ScriptEvent>, ReplayError> {
    let mut events = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        let intent = parse_intent(text).map_err(|message| ReplayError::Parse { line, message })?;
        events.push(ScriptEvent { line, intent });
    }
    Ok(events)
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ReplayError> {
    let source = fs::read_to_string(path)?;
    parse_script(&source)
}

fn parse_intent(text: &str) -> Result<Intent, String> {
    let mut parts = text.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("too many arguments in '{text}'"));
    }

    let no_arg = |intent: Intent| match arg {
        None => Ok(intent),
        Some(_) => Err(format!("'{command}' takes no argument")),
    };
    let required = || arg.ok_or_else(|| format!("'{command}' needs an argument"));

    match command {
        "open" => parse_number(required()?).map(Intent::Open),
        "click" => parse_number(required()?).map(Intent::PreviewClick),
        "wheel" => parse_number(required()?).map(Intent::Wheel),
        "scroll" => {
            let progress: f64 = parse_number(required()?)?;
            if progress.is_nan() {
                return Err("scroll progress must be a number".to_string());
            }
            Ok(Intent::Scroll(progress))
        }
        "key" => {
            let key = required()?;
            Intent::from_key(key).ok_or_else(|| format!("no shortcut for key '{key}'"))
        }
        "close" => no_arg(Intent::Close),
        "next" => no_arg(Intent::Next),
        "prev" => no_arg(Intent::Prev),
        "zoom-in" => no_arg(Intent::ZoomIn),
        "zoom-out" => no_arg(Intent::ZoomOut),
        "reset" => no_arg(Intent::ResetZoom),
        other => Err(format!("unknown event '{other}'")),
    }
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("'{value}' is not a valid number"))
}

/// Run `events` through `controller`, recording each step.
pub fn replay(controller: &mut PageController, events: &[ScriptEvent]) -> Vec<ReplayStep> {
    events
        .iter()
        .map(|event| {
            let render = controller.apply(event.intent);
            ReplayStep {
                line: event.line,
                intent: event.intent.to_string(),
                changed: render != Render::Unchanged,
                viewer: controller.snapshot(),
                counter: controller.session().counter_label(),
                backdrop: match render {
                    Render::Backdrop(params) => Some(params),
                    _ => None,
                },
            }
        })
        .collect()
}
