//! Read-only JSON API mirroring the listing & detail pages.

pub mod artist;
pub mod show;
pub mod venue;
