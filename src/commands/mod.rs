pub mod ago;
pub mod domain;
pub mod referrer;
pub mod rows;
pub mod truncate;
