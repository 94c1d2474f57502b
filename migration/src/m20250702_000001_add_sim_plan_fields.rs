use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum SimCards {
    Table,
    PlanDetails,
    EntryDate,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(SimCards::Table)
                    .add_column(ColumnDef::new(SimCards::PlanDetails).string().null())
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(SimCards::Table)
                    .add_column(ColumnDef::new(SimCards::EntryDate).date().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(SimCards::Table)
                    .drop_column(SimCards::EntryDate)
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(SimCards::Table)
                    .drop_column(SimCards::PlanDetails)
                    .to_owned(),
            )
            .await
    }
}
