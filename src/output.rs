//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure — no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Skyline Vista Apartments
//!     Slug: skyline-vista
//!     Photos: 8 (5 shown, + 3 photos)
//!     Reviews: 3
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Skyline Vista Apartments → property/skyline-vista/index.html
//!
//! Generated 2 pages
//! ```
//!
//! ## Replay
//!
//! ```text
//! 001 open 1 → open 2 / 3 @ 1x
//! 002 next → open 3 / 3 @ 1x
//! 003 close → closed
//! 004 next → closed (unchanged)
//! 005 scroll 0.6 → hue 132.00°, opacity 0.700
//! ```

use crate::config::PageConfig;
use crate::gallery;
use crate::generate::GeneratedPage;
use crate::replay::ReplayStep;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Check
// ============================================================================

/// Summarize a loaded config: what the page will show.
pub fn format_check_output(config: &PageConfig) -> Vec<String> {
    let slice = gallery::preview_slice(&config.images);
    let photos = match slice.overflow_badge() {
        Some(badge) => format!(
            "{} ({} shown, {})",
            config.images.len(),
            slice.shown.len(),
            badge
        ),
        None => format!("{} ({} shown)", config.images.len(), slice.shown.len()),
    };
    vec![
        config.listing.name.clone(),
        format!("{}Slug: {}", indent(1), config.slug),
        format!("{}Photos: {}", indent(1), photos),
        format!("{}Reviews: {}", indent(1), config.listing.reviews.len()),
    ]
}

/// Print check output to stdout.
pub fn print_check_output(config: &PageConfig) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Format generate output: one line per written page plus a total.
pub fn format_generate_output(pages: &[GeneratedPage]) -> Vec<String> {
    let mut lines: Vec<String> = pages
        .iter()
        .map(|page| format!("{} \u{2192} {}", page.title, page.path))
        .collect();
    lines.push(String::new());
    let noun = if pages.len() == 1 { "page" } else { "pages" };
    lines.push(format!("Generated {} {}", pages.len(), noun));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(pages: &[GeneratedPage]) {
    for line in format_generate_output(pages) {
        println!("{}", line);
    }
}

// ============================================================================
// Replay
// ============================================================================

/// Format one replayed event as a single line.
///
/// Scroll events show the background parameters; everything else shows the
/// lightbox state after the event.
pub fn format_replay_step(index: usize, step: &ReplayStep) -> String {
    let outcome = match (&step.backdrop, &step.counter) {
        (Some(params), _) => format!(
            "hue {:.2}\u{b0}, opacity {:.3}",
            params.hue_degrees, params.overlay_opacity
        ),
        (None, Some(counter)) => format!("open {} @ {}x", counter, step.viewer.scale),
        (None, None) => "closed".to_string(),
    };
    let marker = if step.changed { "" } else { " (unchanged)" };
    format!(
        "{} {} \u{2192} {}{}",
        format_index(index),
        step.intent,
        outcome,
        marker
    )
}

/// Print replay steps to stdout, as text or one JSON object per line.
pub fn print_replay_output(steps: &[ReplayStep], json: bool) -> Result<(), serde_json::Error> {
    for (i, step) in steps.iter().enumerate() {
        if json {
            println!("{}", serde_json::to_string(step)?);
        } else {
            println!("{}", format_replay_step(i + 1, step));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
