use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Community::Table)
                    .if_not_exists()
                    .col(pk_auto(Community::Id))
                    .col(string_uniq(Community::ExternalId))
                    .col(string(Community::Name))
                    .col(text(Community::Description))
                    .col(string_null(Community::IconUrl))
                    .col(string(Community::InviteCode))
                    .col(integer(Community::MemberCount).default(0))
                    .col(string(Community::OwnerId))
                    .col(text(Community::Tags).default("[]"))
                    .col(boolean(Community::IsActive).default(true))
                    .col(timestamp_null(Community::LastBumpAt))
                    .col(
                        timestamp(Community::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Community::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Owner management views and the per-owner active limit filter on owner_id
        manager
            .create_index(
                Index::create()
                    .name("idx_community_owner_id")
                    .table(Community::Table)
                    .col(Community::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_community_owner_id")
                    .table(Community::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Community::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Community {
    Table,
    Id,
    ExternalId,
    Name,
    Description,
    IconUrl,
    InviteCode,
    MemberCount,
    OwnerId,
    Tags,
    IsActive,
    LastBumpAt,
    CreatedAt,
    UpdatedAt,
}
