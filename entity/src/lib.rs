pub mod prelude;

pub mod area;
pub mod artist;
pub mod genres;
pub mod show;
pub mod venue;
