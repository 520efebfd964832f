//! Declarative test builder.
//!
//! Builder methods only queue work; tables and fixtures are created in order when
//! `build()` is called.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    DbBackend, EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
    include_fyyur_tables: bool,

    areas: Vec<(String, String)>, // (city, state)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            include_fyyur_tables: false,
            areas: Vec::new(),
        }
    }

    /// Create the area, venue, artist and show tables, including the unique
    /// (city, state) index on areas.
    pub fn with_fyyur_tables(mut self) -> Self {
        self.include_fyyur_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fyyur_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), fyyur_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(Area).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an area during `build()`.
    pub fn with_mock_area(mut self, city: impl Into<String>, state: impl Into<String>) -> Self {
        self.areas.push((city.into(), state.into()));
        self
    }

    /// Build the test context.
    ///
    /// Creates the queued tables and indexes, then inserts queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Connecting, creating tables, or inserting fixtures failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut tables = Vec::new();
        let mut indexes = Vec::new();

        if self.include_fyyur_tables {
            let schema = Schema::new(DbBackend::Sqlite);
            tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Area),
                schema.create_table_from_entity(entity::prelude::Venue),
                schema.create_table_from_entity(entity::prelude::Artist),
                schema.create_table_from_entity(entity::prelude::Show),
            ]);
            indexes.push(
                Index::create()
                    .name("idx-area-city-state")
                    .table(entity::area::Entity)
                    .col(entity::area::Column::City)
                    .col(entity::area::Column::State)
                    .unique()
                    .to_owned(),
            );
        }

        tables.extend(self.tables);
        indexes.extend(self.indexes);
        context.with_schema(tables, indexes).await?;

        for (city, state) in self.areas {
            context.fyyur().insert_mock_area(&city, &state).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
