use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Listings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Listings::Name).string().not_null())
                    .col(ColumnDef::new(Listings::Description).string().not_null())
                    .col(ColumnDef::new(Listings::Category).string().not_null())
                    .col(ColumnDef::new(Listings::OfferType).string().not_null())
                    // Nullable: for-loan listings carry no price
                    .col(ColumnDef::new(Listings::Price).double())
                    .col(ColumnDef::new(Listings::Contact).string().not_null())
                    .col(ColumnDef::new(Listings::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Listings::OwnerName).string().not_null())
                    .col(
                        ColumnDef::new(Listings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Listings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Owner lookups and the newest-first feed both have an index
        manager
            .create_index(
                Index::create()
                    .name("idx_listings_owner_id")
                    .table(Listings::Table)
                    .col(Listings::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_listings_created_at")
                    .table(Listings::Table)
                    .col(Listings::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Listings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Listings {
    Table,
    Id,
    Name,
    Description,
    Category,
    OfferType,
    Price,
    Contact,
    OwnerId,
    OwnerName,
    CreatedAt,
    UpdatedAt,
}
