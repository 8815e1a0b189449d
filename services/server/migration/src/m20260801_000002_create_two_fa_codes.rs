use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // user_id is the primary key: the one-active-code-per-user invariant
        // is enforced by the table itself, rotation is an upsert.
        manager
            .create_table(
                Table::create()
                    .table(TwoFaCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TwoFaCodes::UserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TwoFaCodes::Code).string().not_null())
                    .col(
                        ColumnDef::new(TwoFaCodes::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TwoFaCodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TwoFaCodes::Table, TwoFaCodes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TwoFaCodes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TwoFaCodes {
    Table,
    UserId,
    Code,
    ExpiresAt,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
