//! Deterministic category placeholders for items without media.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::config;
use crate::types::Category;

/// Selects a placeholder image from the per-category pools.
///
/// Seeded selection is a pure function of the seed, so the same article maps
/// to the same placeholder across requests and process restarts. The
/// seedless path cycles an explicit per-category counter; that ordering is
/// not deterministic under concurrent requests and nothing relies on it.
pub struct FallbackImages {
    round_robin: Mutex<HashMap<Category, usize>>,
}

impl FallbackImages {
    pub fn new() -> Self {
        Self {
            round_robin: Mutex::new(HashMap::new()),
        }
    }

    pub fn image_for(&self, category: Category, seed: Option<&str>) -> &'static str {
        let pool = config::image_pool(category);
        if pool.is_empty() {
            return config::FALLBACK_IMAGE;
        }

        if let Some(seed) = seed.filter(|s| !s.is_empty()) {
            return pool[stable_hash(seed) as usize % pool.len()];
        }

        let mut counters = self
            .round_robin
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let index = counters.entry(category).or_insert(0);
        *index = (*index + 1) % pool.len();
        pool[*index]
    }
}

impl Default for FallbackImages {
    fn default() -> Self {
        Self::new()
    }
}

/// 31-based rolling hash over UTF-16 code units with wrapping 32-bit
/// arithmetic. The exact output values are pinned by tests: placeholder
/// selection must stay stable across runs and platforms.
pub fn stable_hash(s: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in s.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    h.unsigned_abs()
}
