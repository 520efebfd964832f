mod artist;
mod show;
mod venue;

use super::*;
