use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261016_000002_venue::Venue, m20261016_000003_artist::Artist};

static IDX_SHOW_ARTIST_ID: &str = "idx-show-artist_id";
static IDX_SHOW_VENUE_ID: &str = "idx-show-venue_id";
static FK_SHOW_ARTIST_ID: &str = "fk-show-artist_id";
static FK_SHOW_VENUE_ID: &str = "fk-show-venue_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Show::Table)
                    .if_not_exists()
                    .col(pk_auto(Show::Id))
                    .col(integer(Show::ArtistId))
                    .col(integer(Show::VenueId))
                    .col(timestamp(Show::StartTime))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOW_ARTIST_ID)
                    .table(Show::Table)
                    .col(Show::ArtistId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOW_VENUE_ID)
                    .table(Show::Table)
                    .col(Show::VenueId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHOW_ARTIST_ID)
                    .from_tbl(Show::Table)
                    .from_col(Show::ArtistId)
                    .to_tbl(Artist::Table)
                    .to_col(Artist::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHOW_VENUE_ID)
                    .from_tbl(Show::Table)
                    .from_col(Show::VenueId)
                    .to_tbl(Venue::Table)
                    .to_col(Venue::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHOW_VENUE_ID)
                    .table(Show::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHOW_ARTIST_ID)
                    .table(Show::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHOW_VENUE_ID)
                    .table(Show::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHOW_ARTIST_ID)
                    .table(Show::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Show::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Show {
    Table,
    Id,
    ArtistId,
    VenueId,
    StartTime,
}
