use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261016_000001_area::Area;

static IDX_ARTIST_AREA_ID: &str = "idx-artist-area_id";
static FK_ARTIST_AREA_ID: &str = "fk-artist-area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artist::Table)
                    .if_not_exists()
                    .col(pk_auto(Artist::Id))
                    .col(string(Artist::Name))
                    .col(integer(Artist::AreaId))
                    .col(json(Artist::Genres))
                    .col(string_len_null(Artist::Phone, 20))
                    .col(string_len_null(Artist::Website, 120))
                    .col(string_len_null(Artist::FacebookLink, 120))
                    .col(string_len(Artist::ImageLink, 500))
                    .col(boolean(Artist::SeekingVenue).default(false))
                    .col(text_null(Artist::SeekingDescription))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARTIST_AREA_ID)
                    .table(Artist::Table)
                    .col(Artist::AreaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIST_AREA_ID)
                    .from_tbl(Artist::Table)
                    .from_col(Artist::AreaId)
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
                    .name(FK_ARTIST_AREA_ID)
                    .table(Artist::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ARTIST_AREA_ID)
                    .table(Artist::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Artist::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Artist {
    Table,
    Id,
    Name,
    AreaId,
    Genres,
    Phone,
    Website,
    FacebookLink,
    ImageLink,
    SeekingVenue,
    SeekingDescription,
}
