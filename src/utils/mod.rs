//! Shared utilities.

mod hash;
pub mod scale;

pub use hash::{content_hash, fingerprint};
pub use scale::{
    Level, MAX_LEVEL, format_level, format_pillar_score, format_points, format_score,
    normalize_flag, normalize_level,
};
