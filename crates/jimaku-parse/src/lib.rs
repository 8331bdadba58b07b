pub mod title;

pub use title::{clean_title, normalize_string, parse_release_title, ReleaseTitle};
