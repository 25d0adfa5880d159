// Shared screen chrome

pub mod footer;
pub mod header;

pub use footer::Footer;
pub use header::Header;
