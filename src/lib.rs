//! # Property View
//!
//! A static property-detail page with an interactive photo lightbox and a
//! scroll-reactive background.
//!
//! # Architecture: Core and Layout
//!
//! The page is mostly static layout: listing copy, reviews, a pricing card,
//! map and video embeds, a footer. Only two parts have behavior, and those
//! form the core of the crate:
//!
//! ```text
//! scroll progress ──▶ scroll::map ──▶ VisualParams ──▶ background layer
//!
//! tile click ──▶ gallery::PreviewSlice ──▶ ViewerSession::open
//! buttons / wheel / keys ─────────────────▶ ViewerSession ──▶ lightbox
//! ```
//!
//! All input flows through one [`controller::PageController`], which applies
//! events in arrival order and returns an explicit [`controller::Render`]
//! notification per event. Nothing is reactive or shared; every transition
//! is synchronous and total.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scale`] | Zoom bounds (1×–3×), step sizes, clamp |
//! | [`viewer`] | Lightbox state machine: open/closed, index, scale |
//! | [`scroll`] | Pure scroll progress → hue/opacity mapping |
//! | [`gallery`] | Image set, 5-tile preview slice, overflow badge, tile routing |
//! | [`controller`] | Single event consumer, keyboard shortcuts, render notifications |
//! | [`listing`] | Static listing content and star-rating breakdown |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation, CSS variables |
//! | [`generate`] | Maud rendering of the landing and property pages |
//! | [`replay`] | Text event scripts driven through the controller |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Clamp, Never Fail
//!
//! The lightbox is a presentational control: its worst case must still be a
//! valid picture. Out-of-range indices wrap, scales clamp, and input while
//! the lightbox is closed is ignored. None of the core operations return
//! `Result`.
//!
//! ## Zoom Survives Navigation
//!
//! `next`/`prev` keep the current scale so a visitor can flip through photos
//! at the same magnification. Only `open` and `close` reset it.
//!
//! ## One Source of Constants
//!
//! The generated page embeds a small script for the browser side. It reads
//! zoom bounds, step sizes and scroll control points from `data-*`
//! attributes written from this crate's constants, so the browser and the
//! tested Rust core cannot drift apart.

pub mod config;
pub mod controller;
pub mod gallery;
pub mod generate;
pub mod listing;
pub mod output;
pub mod replay;
pub mod scale;
pub mod scroll;
pub mod viewer;
