//! Static listing content: the copy, reviews and pricing around the viewer.
//!
//! None of this has state beyond being shown. It is loaded from the
//! `[listing]` section of `config.toml` and handed to the renderer as-is.
//! Defaults reproduce the Skyline Vista demo listing.

use serde::{Deserialize, Serialize};

/// Number of stars in a rating row.
pub const STAR_COUNT: u8 = 5;

/// Everything shown on the property page apart from the photos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Listing {
    /// Property name, used as the page heading and `<title>`.
    pub name: String,
    /// Location line under the heading.
    pub location: String,
    /// Aggregate rating out of 5.
    pub rating: f64,
    pub review_count: u32,
    /// Short facts shown as a grid (bedrooms, floor, ...).
    pub highlights: Vec<String>,
    /// Markdown description.
    pub description: String,
    pub editorial: Editorial,
    pub reviews: Vec<Review>,
    pub video: Video,
    pub pricing: Pricing,
    pub map: MapLocation,
    pub footer: Footer,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            name: "Skyline Vista Apartments".to_string(),
            location: "Midtown, New York \u{2022} 2.1 km from Central Park".to_string(),
            rating: 4.6,
            review_count: 238,
            highlights: [
                "3 Bedrooms",
                "2 Bathrooms",
                "1,450 sq ft",
                "Floor 18",
                "City View",
                "Pet Friendly",
            ]
            .map(String::from)
            .to_vec(),
            description: "Experience modern living with floor-to-ceiling windows, an \
                open-concept kitchen with marble countertops, and smart-home automation \
                throughout. The building includes a rooftop pool, fitness center, and \
                24/7 concierge."
                .to_string(),
            editorial: Editorial::default(),
            reviews: Review::defaults(),
            video: Video::default(),
            pricing: Pricing::default(),
            map: MapLocation::default(),
            footer: Footer::default(),
        }
    }
}

/// The house review ("What we say").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Editorial {
    pub rating: f64,
    pub quote: String,
}

impl Default for Editorial {
    fn default() -> Self {
        Self {
            rating: 4.8,
            quote: "A rare blend of location, design, and amenities. Perfect for urban \
                professionals who value both style and convenience."
                .to_string(),
        }
    }
}

/// A tenant review ("What tenants say").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Review {
    pub name: String,
    pub rating: f64,
    pub text: String,
}

impl Review {
    fn defaults() -> Vec<Self> {
        [
            (
                "Emily R.",
                5.0,
                "Loved the view and the building staff is incredibly helpful.",
            ),
            (
                "Marcus L.",
                4.0,
                "Great gym and pool. Elevators can be busy during rush hours.",
            ),
            (
                "Priya S.",
                4.5,
                "Apartments are bright and well insulated. Noise is minimal.",
            ),
        ]
        .into_iter()
        .map(|(name, rating, text)| Review {
            name: name.to_string(),
            rating,
            text: text.to_string(),
        })
        .collect()
    }
}

/// Walkthrough video embed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Video {
    /// Embed URL; the section is omitted when empty.
    pub embed_url: String,
    pub caption: String,
}

impl Default for Video {
    fn default() -> Self {
        Self {
            embed_url: "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&modestbranding=1"
                .to_string(),
            caption: "Watch a short walkthrough of the apartment and amenities.".to_string(),
        }
    }
}

/// Pricing card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Pricing {
    /// Display price including currency, e.g. `"$4,250"`.
    pub amount: String,
    pub period: String,
    pub terms: String,
    pub perks: Vec<String>,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            amount: "$4,250".to_string(),
            period: "month".to_string(),
            terms: "Utilities not included \u{2022} 12-month lease".to_string(),
            perks: ["No broker fee", "1 month free", "Furnished", "Parking optional"]
                .map(String::from)
                .to_vec(),
        }
    }
}

/// Map embed and the link behind "Open exact location".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapLocation {
    /// Embed URL; the section is omitted when empty.
    pub embed_url: String,
    pub open_url: String,
}

impl Default for MapLocation {
    fn default() -> Self {
        Self {
            embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3021.9428219362323\
                !2d-73.98773122366027!3d40.74844053510043!2m3!1f0!2f0!3f0!3m2!1i1024!2i768\
                !4f13.1!3m3!1m2!1s0x89c259ae30c9b1b5%3A0x3f518d42e4d9d8f\
                !2sEmpire%20State%20Building!5e0!3m2!1sen!2sus!4v1700000000000"
                .to_string(),
            open_url: "https://www.google.com/maps?q=40.748817,-73.985428".to_string(),
        }
    }
}

/// Site footer: brand blurb plus link columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Footer {
    pub brand: String,
    pub tagline: String,
    pub columns: Vec<FooterColumn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterColumn {
    pub heading: String,
    pub links: Vec<String>,
}

impl Default for Footer {
    fn default() -> Self {
        let column = |heading: &str, links: [&str; 3]| FooterColumn {
            heading: heading.to_string(),
            links: links.map(String::from).to_vec(),
        };
        Self {
            brand: "Skyline".to_string(),
            tagline: "Modern homes curated for city living. Crafted with care.".to_string(),
            columns: vec![
                column("Explore", ["Apartments", "Townhomes", "Penthouses"]),
                column("Company", ["About", "Careers", "Contact"]),
                column("Legal", ["Privacy", "Terms", "Cookies"]),
            ],
        }
    }
}

/// How a rating splits into full, half and empty stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarFill {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarFill {
    /// `full = floor(v)`, a half star when the fraction is at least 0.5, and
    /// empty stars for the rest of the row. Ratings are clamped to `[0, 5]`.
    pub fn from_rating(value: f64) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, f64::from(STAR_COUNT))
        };
        let full = value.floor() as u8;
        let half = full < STAR_COUNT && value.fract() >= 0.5;
        Self {
            full,
            half,
            empty: STAR_COUNT - full - u8::from(half),
        }
    }
}
