//! Single event consumer for the property page.
//!
//! [`PageController`] owns the image set and the lightbox session and applies
//! input events one at a time, in arrival order. Each call to
//! [`PageController::apply`] returns a [`Render`] telling the render layer
//! what, if anything, to redraw.
//!
//! Scroll events never touch the session. They map straight to
//! [`VisualParams`] which are returned and not kept: the latest scroll event
//! always wins.

use crate::gallery::{self, ImageSet};
use crate::scroll::{self, VisualParams};
use crate::viewer::{ViewerSession, ViewerSnapshot};
use std::fmt;

/// One discrete input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Open(i64),
    Close,
    Next,
    Prev,
    ZoomIn,
    ZoomOut,
    /// Raw wheel delta; only its sign is used.
    Wheel(f64),
    ResetZoom,
    /// Normalized page scroll progress.
    Scroll(f64),
    /// Click on a preview tile, by position in the grid.
    PreviewClick(usize),
}

impl Intent {
    /// Keyboard shortcut for a key name as reported by the browser
    /// (`KeyboardEvent.key`).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::Close),
            "+" | "=" => Some(Self::ZoomIn),
            "-" => Some(Self::ZoomOut),
            "0" => Some(Self::ResetZoom),
            _ => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Open(index) => write!(f, "open {index}"),
            Intent::Close => f.write_str("close"),
            Intent::Next => f.write_str("next"),
            Intent::Prev => f.write_str("prev"),
            Intent::ZoomIn => f.write_str("zoom-in"),
            Intent::ZoomOut => f.write_str("zoom-out"),
            Intent::Wheel(delta) => write!(f, "wheel {delta:+}"),
            Intent::ResetZoom => f.write_str("reset"),
            Intent::Scroll(progress) => write!(f, "scroll {progress}"),
            Intent::PreviewClick(position) => write!(f, "click {position}"),
        }
    }
}

/// What the render layer must redraw after an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Render {
    /// Nothing visible changed.
    Unchanged,
    /// The lightbox changed; redraw it from this snapshot.
    Viewer(ViewerSnapshot),
    /// Reapply these parameters to the background layer.
    Backdrop(VisualParams),
}

/// Everything the lightbox needs to draw the current image.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerFrame<'a> {
    pub image: &'a str,
    pub alt: String,
    pub counter: String,
    /// CSS transform, anchored at the image centre.
    pub transform: String,
}

/// Owns the page's interactive state.
#[derive(Debug, Clone)]
pub struct PageController {
    images: ImageSet,
    session: ViewerSession,
}

impl PageController {
    pub fn new(images: ImageSet) -> Self {
        let session = images.session();
        Self { images, session }
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn session(&self) -> &ViewerSession {
        &self.session
    }

    pub fn snapshot(&self) -> ViewerSnapshot {
        self.session.snapshot()
    }

    /// Apply one event.
    pub fn apply(&mut self, intent: Intent) -> Render {
        let before = self.session.snapshot();
        match intent {
            Intent::Scroll(progress) if progress.is_nan() => return Render::Unchanged,
            Intent::Scroll(progress) => return Render::Backdrop(scroll::map(progress)),
            Intent::PreviewClick(position) => {
                gallery::preview_slice(&self.images).open_tile(position, &mut self.session);
            }
            Intent::Open(index) => self.session.open(index),
            Intent::Close => self.session.close(),
            Intent::Next => self.session.next(),
            Intent::Prev => self.session.prev(),
            Intent::ZoomIn => self.session.zoom_in(),
            Intent::ZoomOut => self.session.zoom_out(),
            Intent::Wheel(delta) => self.session.zoom_by_wheel(delta),
            Intent::ResetZoom => self.session.reset_zoom(),
        }
        let after = self.session.snapshot();
        if after == before {
            Render::Unchanged
        } else {
            Render::Viewer(after)
        }
    }

    /// The frame to draw, if the lightbox is open.
    pub fn frame(&self) -> Option<ViewerFrame<'_>> {
        let index = self.session.current_index()?;
        let image = self.images.get(index)?;
        Some(ViewerFrame {
            image,
            alt: format!("Photo {}", index + 1),
            counter: self.session.counter_label()?,
            transform: format!("scale({})", self.session.scale()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(n: usize) -> PageController {
        PageController::new((0..n).map(|i| format!("img-{i}")).collect())
    }

    #[test]
    fn open_reports_viewer_change() {
        let mut c = controller(3);
        let render = c.apply(Intent::Open(1));
        assert_eq!(
            render,
            Render::Viewer(ViewerSnapshot {
                is_open: true,
                current_index: 1,
                scale: 1.0,
            })
        );
    }

    #[test]
    fn stray_events_after_close_are_unchanged() {
        let mut c = controller(3);
        c.apply(Intent::Open(0));
        c.apply(Intent::Close);
        for intent in [
            Intent::Next,
            Intent::Prev,
            Intent::ZoomIn,
            Intent::ZoomOut,
            Intent::Wheel(-1.0),
            Intent::Close,
            Intent::ResetZoom,
        ] {
            assert_eq!(c.apply(intent), Render::Unchanged, "{intent}");
        }
    }

    #[test]
    fn zoom_at_limit_is_unchanged() {
        let mut c = controller(2);
        c.apply(Intent::Open(0));
        assert_eq!(c.apply(Intent::ZoomOut), Render::Unchanged);
        assert_eq!(c.apply(Intent::Wheel(3.0)), Render::Unchanged);
    }

    #[test]
    fn scroll_always_returns_backdrop() {
        let mut c = controller(0);
        let first = c.apply(Intent::Scroll(0.6));
        let second = c.apply(Intent::Scroll(0.6));
        assert_eq!(first, second);
        match first {
            Render::Backdrop(params) => {
                assert!((params.overlay_opacity - 0.7).abs() < 1e-9);
            }
            other => panic!("expected backdrop, got {other:?}"),
        }
    }

    #[test]
    fn scroll_does_not_touch_viewer() {
        let mut c = controller(3);
        c.apply(Intent::Open(2));
        c.apply(Intent::ZoomIn);
        let before = c.snapshot();
        c.apply(Intent::Scroll(0.9));
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn nan_scroll_is_ignored() {
        let mut c = controller(3);
        assert_eq!(c.apply(Intent::Scroll(f64::NAN)), Render::Unchanged);
    }

    #[test]
    fn preview_click_opens_lightbox() {
        let mut c = controller(8);
        c.apply(Intent::PreviewClick(4));
        assert_eq!(c.session().current_index(), Some(4));
    }

    #[test]
    fn preview_click_past_grid_is_ignored() {
        let mut c = controller(8);
        assert_eq!(c.apply(Intent::PreviewClick(6)), Render::Unchanged);
        assert!(!c.session().is_open());
    }

    #[test]
    fn empty_set_never_opens() {
        let mut c = controller(0);
        assert_eq!(c.apply(Intent::Open(0)), Render::Unchanged);
        assert_eq!(c.apply(Intent::PreviewClick(0)), Render::Unchanged);
        assert!(c.frame().is_none());
    }

    #[test]
    fn frame_describes_current_image() {
        let mut c = controller(8);
        c.apply(Intent::Open(2));
        c.apply(Intent::ZoomIn);
        let frame = c.frame().unwrap();
        assert_eq!(frame.image, "img-2");
        assert_eq!(frame.alt, "Photo 3");
        assert_eq!(frame.counter, "3 / 8");
        assert_eq!(frame.transform, "scale(1.25)");
    }

    #[test]
    fn keyboard_shortcuts_map_to_intents() {
        assert_eq!(Intent::from_key("ArrowLeft"), Some(Intent::Prev));
        assert_eq!(Intent::from_key("ArrowRight"), Some(Intent::Next));
        assert_eq!(Intent::from_key("Escape"), Some(Intent::Close));
        assert_eq!(Intent::from_key("+"), Some(Intent::ZoomIn));
        assert_eq!(Intent::from_key("="), Some(Intent::ZoomIn));
        assert_eq!(Intent::from_key("-"), Some(Intent::ZoomOut));
        assert_eq!(Intent::from_key("0"), Some(Intent::ResetZoom));
        assert_eq!(Intent::from_key("Enter"), None);
    }

    #[test]
    fn intents_display_in_script_syntax() {
        assert_eq!(Intent::Open(2).to_string(), "open 2");
        assert_eq!(Intent::Wheel(1.0).to_string(), "wheel +1");
        assert_eq!(Intent::Wheel(-1.0).to_string(), "wheel -1");
        assert_eq!(Intent::Scroll(0.35).to_string(), "scroll 0.35");
        assert_eq!(Intent::PreviewClick(4).to_string(), "click 4");
    }
}
