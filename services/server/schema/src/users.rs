use sea_orm::entity::prelude::*;

/// Account record for both employees and admins.
/// `email` doubles as the login identifier; `nim_nip` is the external
/// student/staff reference number.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: String,
    pub nim_nip: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::two_fa_codes::Entity")]
    TwoFaCodes,
    #[sea_orm(has_many = "super::attendance_events::Entity")]
    AttendanceEvents,
}

impl Related<super::two_fa_codes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TwoFaCodes.def()
    }
}

impl Related<super::attendance_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceEvents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
