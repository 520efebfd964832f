//! Shared test tooling for the Fyyur crates.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures a
//! test needs, and the resulting [`TestContext`] exposes the in-memory database, a session,
//! and fixture helpers for inserting further records while the test runs.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{test_setup_with_fyyur_tables, TestBuilder, TestContext, TestError};
}

/// Build a [`TestContext`] with every Fyyur table created.
#[macro_export]
macro_rules! test_setup_with_fyyur_tables {
    () => {{
        $crate::TestBuilder::new().with_fyyur_tables().build().await
    }};
}
