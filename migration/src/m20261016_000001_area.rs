use sea_orm_migration::{prelude::*, schema::*};

// Guards the (city, state) lookup-then-insert in the area resolver against
// concurrent requests creating the same pair.
static IDX_AREA_CITY_STATE: &str = "idx-area-city-state";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Area::Table)
                    .if_not_exists()
                    .col(pk_auto(Area::Id))
                    .col(string_len(Area::City, 120))
                    .col(string_len(Area::State, 120))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AREA_CITY_STATE)
                    .table(Area::Table)
                    .col(Area::City)
                    .col(Area::State)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AREA_CITY_STATE)
                    .table(Area::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Area::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Area {
    Table,
    Id,
    City,
    State,
}
