use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttendanceEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceEvents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceEvents::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceEvents::LocationId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceEvents::Kind).string().not_null())
                    .col(
                        ColumnDef::new(AttendanceEvents::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceEvents::Latitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceEvents::Longitude)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceEvents::Status).string())
                    .col(ColumnDef::new(AttendanceEvents::Notes).string())
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceEvents::Table, AttendanceEvents::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(AttendanceEvents::Table)
                    .col(AttendanceEvents::UserId)
                    .name("idx_attendance_events_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AttendanceEvents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AttendanceEvents {
    Table,
    Id,
    UserId,
    LocationId,
    Kind,
    RecordedAt,
    Latitude,
    Longitude,
    Status,
    Notes,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
