use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000001_create_community_table::Community;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BumpEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(BumpEvent::Id))
                    .col(integer(BumpEvent::CommunityId))
                    .col(string(BumpEvent::UserId))
                    .col(timestamp(BumpEvent::BumpedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bump_event_community_id")
                            .from(BumpEvent::Table, BumpEvent::CommunityId)
                            .to(Community::Table, Community::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // User cooldown lookups scan a user's most recent events
        manager
            .create_index(
                Index::create()
                    .name("idx_bump_event_user_id_bumped_at")
                    .table(BumpEvent::Table)
                    .col(BumpEvent::UserId)
                    .col(BumpEvent::BumpedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_bump_event_user_id_bumped_at")
                    .table(BumpEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BumpEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BumpEvent {
    Table,
    Id,
    CommunityId,
    UserId,
    BumpedAt,
}
