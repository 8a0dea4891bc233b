//! Pure string and URL helpers used when rendering story rows.

mod domain;
mod referrer;
mod relative_time;
mod truncate;

pub use domain::extract_domain;
pub use referrer::{
    ReferrerParam, ReferrerRule, ReferrerTable, add_or_update_referrer,
    add_or_update_referrer_with,
};
pub use relative_time::{
    Distance, DistanceUnit, format_distance_abbrev, format_distance_abbrev_from, strict_distance,
};
pub use truncate::{
    DEFAULT_MAX_LENGTH, DEFAULT_WORD_MAX_LENGTH, TruncateOptions, truncate_comment,
    truncate_long_words,
};
