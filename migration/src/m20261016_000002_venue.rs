use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261016_000001_area::Area;

static IDX_VENUE_AREA_ID: &str = "idx-venue-area_id";
static FK_VENUE_AREA_ID: &str = "fk-venue-area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venue::Table)
                    .if_not_exists()
                    .col(pk_auto(Venue::Id))
                    .col(string(Venue::Name))
                    .col(integer(Venue::AreaId))
                    .col(json(Venue::Genres))
                    .col(string_len_null(Venue::Address, 120))
                    .col(string_len_null(Venue::Phone, 20))
                    .col(string_len_null(Venue::Website, 120))
                    .col(string_len_null(Venue::FacebookLink, 120))
                    .col(string_len(Venue::ImageLink, 500))
                    .col(boolean(Venue::SeekingTalent).default(false))
                    .col(text_null(Venue::SeekingDescription))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VENUE_AREA_ID)
                    .table(Venue::Table)
                    .col(Venue::AreaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VENUE_AREA_ID)
                    .from_tbl(Venue::Table)
                    .from_col(Venue::AreaId)
                    .to_tbl(Area::Table)
                    .to_col(Area::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VENUE_AREA_ID)
                    .table(Venue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VENUE_AREA_ID)
                    .table(Venue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Venue::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Venue {
    Table,
    Id,
    Name,
    AreaId,
    Genres,
    Address,
    Phone,
    Website,
    FacebookLink,
    ImageLink,
    SeekingTalent,
    SeekingDescription,
}
