//! Static in-process configuration: the source list, the per-category
//! placeholder image pools, and the response cap. Edited by redeploying, not
//! by runtime input.

use crate::types::{Category, Source};

/// Maximum number of articles returned by the endpoint.
pub const RESPONSE_LIMIT: usize = 100;

/// Last-resort placeholder when a category pool is somehow empty.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1600&auto=format&fit=crop";

/// Default sources: PAGASA and DOLE advisories, government outlets (PIA,
/// PTV), and two major PH headline feeds.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new(
            "PAGASA",
            "https://www.pagasa.dost.gov.ph/index.php/press-releases?format=feed&type=rss",
        ),
        Source::new("DOLE", "https://www.dole.gov.ph/news/feed/"),
        Source::new("PIA", "https://pia.gov.ph/rss/articles"),
        Source::new("PTV", "https://www.ptvnews.ph/feed/"),
        Source::new("Inquirer", "https://newsinfo.inquirer.net/feed"),
        Source::new("Philstar", "https://www.philstar.com/rss/headlines"),
    ]
}

const TOP_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1483721310020-03333e577078?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1495020689067-958852a7765e?q=80&w=1600&auto=format&fit=crop",
];

const NATION_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1554050857-c84a8abdb5e2?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?q=80&w=1600&auto=format&fit=crop",
];

const METRO_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1508057198894-247b23fe5ade?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1494526585095-c41746248156?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1486304873000-235643847519?q=80&w=1600&auto=format&fit=crop",
];

const BUSINESS_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1526304640581-d334cdbbf45e?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1507679799987-c73779587ccf?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?q=80&w=1600&auto=format&fit=crop",
];

const WORLD_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1500534314209-a25ddb2bd429?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1526778548025-fa2f459cd5c1?q=80&w=1600&auto=format&fit=crop",
];

const SPORTS_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1517649763962-0c623066013b?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1502877338535-766e1452684a?q=80&w=1600&auto=format&fit=crop",
];

const TECH_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1518779578993-ec3579fee39f?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=1600&auto=format&fit=crop",
];

const SHOWBIZ_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1518895949257-7621c3c786d7?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1499364615650-ec38552f4f34?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?q=80&w=1600&auto=format&fit=crop",
];

/// Placeholder image pool for a category, used when an item carries no media.
pub fn image_pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Top => &TOP_IMAGES,
        Category::Nation => &NATION_IMAGES,
        Category::Metro => &METRO_IMAGES,
        Category::Business => &BUSINESS_IMAGES,
        Category::World => &WORLD_IMAGES,
        Category::Sports => &SPORTS_IMAGES,
        Category::Tech => &TECH_IMAGES,
        Category::Showbiz => &SHOWBIZ_IMAGES,
    }
}
