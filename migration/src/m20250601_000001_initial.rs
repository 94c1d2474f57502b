use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
    ClientName,
    ContactPerson,
    Phone,
    Email,
    Address,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SimCards {
    Table,
    Id,
    SimNumber,
    Provider,
    Status,
    UsedInSerial,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Devices {
    Table,
    Id,
    SerialNumber,
    OemSerial,
    ProductName,
    Model,
    Connectivity,
    InstallationDate,
    ActivationDate,
    ValidityMonths,
    RenewalDate,
    DeviceUid,
    SimNumber,
    EndUser,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Postgres ENUM types
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("connectivity"))
                    .values(vec![
                        Alias::new("4g"),
                        Alias::new("2g"),
                        Alias::new("nb_iot"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("sim_provider"))
                    .values(vec![
                        Alias::new("vi"),
                        Alias::new("airtel"),
                        Alias::new("jio"),
                        Alias::new("bsnl"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("sim_status"))
                    .values(vec![Alias::new("available"), Alias::new("used")])
                    .to_owned(),
            )
            .await?;

        // Client master
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clients::ClientName).string().not_null())
                    .col(ColumnDef::new(Clients::ContactPerson).string().null())
                    .col(ColumnDef::new(Clients::Phone).string().null())
                    .col(ColumnDef::new(Clients::Email).string().null())
                    .col(ColumnDef::new(Clients::Address).string().null())
                    .col(
                        ColumnDef::new(Clients::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Clients::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clients_client_name")
                    .table(Clients::Table)
                    .col(Clients::ClientName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // SIM inventory
        manager
            .create_table(
                Table::create()
                    .table(SimCards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SimCards::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SimCards::SimNumber).string().not_null())
                    .col(
                        ColumnDef::new(SimCards::Provider)
                            .custom(Alias::new("sim_provider"))
                            .null(), // Null for SIMs auto-registered from a dispatch
                    )
                    .col(
                        ColumnDef::new(SimCards::Status)
                            .custom(Alias::new("sim_status"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(SimCards::UsedInSerial).string().null())
                    .col(
                        ColumnDef::new(SimCards::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SimCards::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sim_cards_sim_number")
                    .table(SimCards::Table)
                    .col(SimCards::SimNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sim_cards_status")
                    .table(SimCards::Table)
                    .col(SimCards::Status)
                    .to_owned(),
            )
            .await?;

        // Dispatched devices
        manager
            .create_table(
                Table::create()
                    .table(Devices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Devices::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Devices::SerialNumber).string().not_null())
                    .col(ColumnDef::new(Devices::OemSerial).string().null())
                    .col(ColumnDef::new(Devices::ProductName).string().not_null())
                    .col(ColumnDef::new(Devices::Model).string().null())
                    .col(
                        ColumnDef::new(Devices::Connectivity)
                            .custom(Alias::new("connectivity"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Devices::InstallationDate).date().null())
                    .col(ColumnDef::new(Devices::ActivationDate).date().null())
                    .col(ColumnDef::new(Devices::ValidityMonths).integer().not_null())
                    .col(
                        ColumnDef::new(Devices::RenewalDate)
                            .date()
                            .null(), // Null whenever the activation date is unknown
                    )
                    .col(ColumnDef::new(Devices::DeviceUid).string().null())
                    .col(ColumnDef::new(Devices::SimNumber).string().null())
                    .col(ColumnDef::new(Devices::EndUser).string().not_null())
                    .col(
                        ColumnDef::new(Devices::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Devices::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_devices_serial_number")
                    .table(Devices::Table)
                    .col(Devices::SerialNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_devices_end_user")
                    .table(Devices::Table)
                    .col(Devices::EndUser)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_devices_renewal_date")
                    .table(Devices::Table)
                    .col(Devices::RenewalDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Devices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SimCards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new("sim_status")).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new("sim_provider")).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new("connectivity")).to_owned())
            .await
    }
}
