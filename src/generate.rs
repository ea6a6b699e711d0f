//! HTML site generation.
//!
//! Loads the page config and renders the static site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                  # Landing card linking to the property
//! ├── assets/                     # Copied from content/assets/ if present
//! └── property/
//!     └── skyline-vista/
//!         └── index.html          # Property detail page
//! ```
//!
//! ## Render Parameters
//!
//! The interactive parts of the page are driven by the same state the
//! [`controller`](crate::controller) module exposes:
//!
//! - the background layer starts from [`scroll::map`]`(0.0)` and carries the
//!   control points as `data-*` attributes,
//! - the preview grid is the [`gallery::preview_slice`] of the image set,
//! - the lightbox is rendered from a [`PageController`] (closed on a fresh
//!   page) and carries the zoom bounds and steps from [`scale`].
//!
//! `static/page.js` reads those attributes, so the browser applies the
//! exact constants the Rust core is tested against.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.

use crate::config::{self, ConfigError, PageConfig};
use crate::controller::PageController;
use crate::gallery::{self, ImageSet, PreviewSlice};
use crate::listing::{Listing, StarFill};
use crate::scale;
use crate::scroll::{self, VisualParams};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A page written by [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub title: String,
    /// Path relative to the output directory.
    pub path: String,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/page.js");

/// Render the site for `content_dir` into `output_dir`.
pub fn generate(content_dir: &Path, output_dir: &Path) -> Result<Vec<GeneratedPage>, GenerateError> {
    let config = config::load_config(content_dir)?;
    write_site(&config, content_dir, output_dir)
}

/// Render an already-loaded config into `output_dir`.
pub fn write_site(
    config: &PageConfig,
    content_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<GeneratedPage>, GenerateError> {
    let css = page_css(config);
    let mut pages = Vec::new();

    fs::create_dir_all(output_dir)?;

    let assets = content_dir.join("assets");
    if assets.is_dir() {
        let dst = output_dir.join("assets");
        fs::create_dir_all(&dst)?;
        copy_dir_recursive(&assets, &dst)?;
    }

    let landing = render_landing(config, &css);
    fs::write(output_dir.join("index.html"), landing.into_string())?;
    pages.push(GeneratedPage {
        title: "Home".to_string(),
        path: "index.html".to_string(),
    });

    let page_dir = output_dir.join("property").join(&config.slug);
    fs::create_dir_all(&page_dir)?;
    let controller = PageController::new(config.images.clone());
    let property = render_property_page(config, &controller, &css);
    fs::write(page_dir.join("index.html"), property.into_string())?;
    pages.push(GeneratedPage {
        title: config.listing.name.clone(),
        path: property_page_path(&config.slug),
    });

    Ok(pages)
}

/// Output path of the property page, relative to the site root.
pub fn property_page_path(slug: &str) -> String {
    format!("property/{slug}/index.html")
}

fn page_css(config: &PageConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_motion_css(&config.motion),
        CSS_STATIC
    )
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Fixed full-viewport gradient layer driven by scroll progress.
pub fn render_backdrop(params: &VisualParams) -> Markup {
    html! {
        div.backdrop
            aria-hidden="true"
            style=(params.style_css())
            data-hue-stops=(stops_json(&scroll::HUE_STOPS))
            data-opacity-stops=(stops_json(&scroll::OPACITY_STOPS)) {}
    }
}

fn stops_json(stops: &[(f64, f64)]) -> String {
    serde_json::to_string(stops).unwrap_or_default()
}

/// Row of five stars for a rating.
pub fn render_stars(value: f64) -> Markup {
    let fill = StarFill::from_rating(value);
    html! {
        span.stars role="img" aria-label={ (value) " out of 5" } {
            @for _ in 0..fill.full {
                span.star.full { "★" }
            }
            @if fill.half {
                span.star.half { "★" }
            }
            @for _ in 0..fill.empty {
                span.star.empty { "★" }
            }
        }
    }
}

fn render_hero(listing: &Listing) -> Markup {
    html! {
        section.hero {
            div.hero-card.enter.enter-hero {
                div {
                    h1 { (listing.name) }
                    p.location { (listing.location) }
                }
                div.hero-rating {
                    (render_stars(listing.rating))
                    p.muted {
                        (listing.rating) " out of 5 \u{2022} " (listing.review_count) " reviews"
                    }
                }
            }
        }
    }
}

/// Inline preview grid: first tile spans two rows, the last shown tile
/// carries the overflow badge.
pub fn render_preview_grid(slice: &PreviewSlice<'_>) -> Markup {
    let badge = slice.overflow_badge();
    html! {
        section.gallery {
            div.preview-grid.enter {
                @for (idx, src) in slice.shown.iter().enumerate() {
                    button.preview-tile.lead[idx == 0] type="button" data-index=(idx) {
                        img src=(src) alt={ "Property " (idx + 1) } loading="lazy";
                        @if slice.is_badge_tile(idx) {
                            @if let Some(badge) = &badge {
                                span.overflow-badge { (badge) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_markdown(source: &str) -> Markup {
    let parser = Parser::new(source);
    let mut body = String::new();
    md_html::push_html(&mut body, parser);
    PreEscaped(body)
}

fn render_details(listing: &Listing) -> Markup {
    html! {
        div.card {
            h2 { "Property Details" }
            ul.highlights {
                @for item in &listing.highlights {
                    li { (item) }
                }
            }
            div.description { (render_markdown(&listing.description)) }
        }
    }
}

fn render_reviews(listing: &Listing) -> Markup {
    html! {
        div.card {
            h3 { "What we say" }
            div.editorial {
                (render_stars(listing.editorial.rating))
                blockquote { "\u{201c}" (listing.editorial.quote) "\u{201d}" }
            }
        }
        @if !listing.reviews.is_empty() {
            div.card {
                h3 { "What tenants say" }
                div.reviews {
                    @for (i, review) in listing.reviews.iter().enumerate() {
                        div.review.enter style={ "--enter-index: " (i) } {
                            div.review-header {
                                p.reviewer { (review.name) }
                                (render_stars(review.rating))
                            }
                            p.muted { (review.text) }
                        }
                    }
                }
            }
        }
    }
}

fn render_video(listing: &Listing) -> Markup {
    html! {
        @if !listing.video.embed_url.is_empty() {
            div.card.video {
                div.video-frame {
                    iframe src=(listing.video.embed_url)
                        title="Property walkthrough video"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                        allowfullscreen {}
                }
                p.muted { "▶ " (listing.video.caption) }
            }
        }
    }
}

fn render_pricing(listing: &Listing) -> Markup {
    let pricing = &listing.pricing;
    html! {
        aside.pricing.enter {
            div.card.pricing-card {
                div.price {
                    span.amount { (pricing.amount) }
                    span.period { "/ " (pricing.period) }
                }
                p.muted { (pricing.terms) }
                ul.perks {
                    @for perk in &pricing.perks {
                        li { (perk) }
                    }
                }
                button.cta type="button" { "Schedule a tour" }
                button.share type="button" { "Share" }
            }
        }
    }
}

fn render_map(listing: &Listing) -> Markup {
    html! {
        @if !listing.map.embed_url.is_empty() {
            section.map.enter {
                div.map-frame {
                    iframe title="Map" src=(listing.map.embed_url) loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade" allowfullscreen {}
                    @if !listing.map.open_url.is_empty() {
                        a.cta.map-link href=(listing.map.open_url) target="_blank" rel="noopener" {
                            "Open exact location"
                        }
                    }
                }
            }
        }
    }
}

fn render_footer(listing: &Listing) -> Markup {
    let footer = &listing.footer;
    html! {
        footer.site-footer {
            div.footer-columns {
                div {
                    p.footer-heading { (footer.brand) }
                    p { (footer.tagline) }
                }
                @for column in &footer.columns {
                    div {
                        p.footer-heading { (column.heading) }
                        ul {
                            @for link in &column.links {
                                li { a href="#" { (link) } }
                            }
                        }
                    }
                }
            }
            p.copyright { "© " (footer.brand) ". All rights reserved." }
        }
    }
}

/// Lightbox overlay. Hidden unless the controller's session is open.
pub fn render_lightbox(controller: &PageController) -> Markup {
    let frame = controller.frame();
    let images_json = serde_json::to_string(controller.images().as_slice()).unwrap_or_default();
    html! {
        div.lightbox
            hidden[frame.is_none()]
            data-images=(images_json)
            data-min-scale=(scale::MIN_SCALE)
            data-max-scale=(scale::MAX_SCALE)
            data-button-step=(scale::BUTTON_STEP)
            data-wheel-step=(scale::WHEEL_STEP) {
            div.lightbox-toolbar {
                span.counter { @if let Some(frame) = &frame { (frame.counter) } }
                div.lightbox-actions {
                    button type="button" data-action="zoom-in" aria-label="Zoom in" { "+" }
                    button type="button" data-action="zoom-out" aria-label="Zoom out" { "−" }
                    button type="button" data-action="reset" aria-label="Reset zoom" { "Reset" }
                    button type="button" data-action="close" aria-label="Close" { "×" }
                }
            }
            div.lightbox-stage {
                @if let Some(frame) = &frame {
                    img.lightbox-image src=(frame.image) alt=(frame.alt)
                        style={ "transform: " (frame.transform) };
                } @else {
                    img.lightbox-image alt="";
                }
                button.lightbox-nav.prev type="button" data-action="prev" aria-label="Previous photo" { "‹" }
                button.lightbox-nav.next type="button" data-action="next" aria-label="Next photo" { "›" }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Landing page: a single card linking to the property.
fn render_landing(config: &PageConfig, css: &str) -> Markup {
    let href = format!("property/{}/", config.slug);
    let content = html! {
        main.landing {
            div.card.landing-card.enter.enter-hero {
                h1 { (config.listing.name) }
                p.muted { "A property page with gallery, reviews, video, and map." }
                a.cta href=(href) { "Open Property Details" }
            }
        }
    };
    base_document(&config.listing.name, css, Some("landing-view"), content)
}

/// The property detail page.
fn render_property_page(config: &PageConfig, controller: &PageController, css: &str) -> Markup {
    let listing = &config.listing;
    let images: &ImageSet = controller.images();
    let slice = gallery::preview_slice(images);
    let content = html! {
        (render_backdrop(&scroll::map(0.0)))
        (render_hero(listing))
        (render_preview_grid(&slice))
        section.main-grid {
            div.main-column.enter {
                (render_details(listing))
                (render_reviews(listing))
                (render_video(listing))
            }
            (render_pricing(listing))
        }
        (render_map(listing))
        (render_footer(listing))
        (render_lightbox(controller))
        script { (PreEscaped(JS)) }
    };
    base_document(&listing.name, css, Some("property-view"), content)
}

// ============================================================================
// Tests
// ============================================================================
