pub mod display;

pub use display::{format_thousands, outbound_host, short_link, truncate_chars};
