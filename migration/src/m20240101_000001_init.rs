use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ========== HOUSES ==========
        manager
            .create_table(
                Table::create()
                    .table(Houses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Houses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Houses::Name)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Houses::CreatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // ========== CROPS ==========
        // crop_number is unique across all houses, not per house
        manager
            .create_table(
                Table::create()
                    .table(Crops::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Crops::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Crops::CropNumber)
                            .string_len(10)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Crops::CropName).string_len(30).not_null())
                    .col(ColumnDef::new(Crops::StartDate).string().not_null())
                    .col(ColumnDef::new(Crops::HouseName).string_len(20).not_null())
                    .col(ColumnDef::new(Crops::CreatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crops_house")
                            .from(Crops::Table, Crops::HouseName)
                            .to(Houses::Table, Houses::Name),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_crops_house_name")
                    .table(Crops::Table)
                    .col(Crops::HouseName)
                    .to_owned(),
            )
            .await?;

        // ========== DAYS ==========
        // Day labels are unique across all crops
        manager
            .create_table(
                Table::create()
                    .table(Days::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Days::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Days::Day)
                            .string_len(10)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Days::Date).string())
                    .col(ColumnDef::new(Days::CropNumber).string_len(10).not_null())
                    .col(ColumnDef::new(Days::CreatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_days_crop")
                            .from(Days::Table, Days::CropNumber)
                            .to(Crops::Table, Crops::CropNumber),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_days_crop_number")
                    .table(Days::Table)
                    .col(Days::CropNumber)
                    .to_owned(),
            )
            .await?;

        // ========== CONDITIONS ==========
        // At most one per day; the unique key turns racing inserts into conflicts
        manager
            .create_table(
                Table::create()
                    .table(Conditions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conditions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Conditions::Temperature).double())
                    .col(ColumnDef::new(Conditions::Humidity).double())
                    .col(ColumnDef::new(Conditions::Time).string_len(20))
                    .col(
                        ColumnDef::new(Conditions::DayNo)
                            .string_len(10)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Conditions::CreatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conditions_day")
                            .from(Conditions::Table, Conditions::DayNo)
                            .to(Days::Table, Days::Day),
                    )
                    .to_owned(),
            )
            .await?;

        // ========== HARVESTS ==========
        manager
            .create_table(
                Table::create()
                    .table(Harvests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Harvests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Harvests::Punnets).integer())
                    .col(
                        ColumnDef::new(Harvests::DayNo)
                            .string_len(10)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Harvests::CreatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_harvests_day")
                            .from(Harvests::Table, Harvests::DayNo)
                            .to(Days::Table, Days::Day),
                    )
                    .to_owned(),
            )
            .await?;

        // ========== ACTIVITIES ==========
        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Activities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Activities::Description).string_len(100))
                    .col(
                        ColumnDef::new(Activities::DayNo)
                            .string_len(10)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Activities::CreatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activities_day")
                            .from(Activities::Table, Activities::DayNo)
                            .to(Days::Table, Days::Day),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Harvests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Conditions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Days::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Crops::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Houses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Houses {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Crops {
    Table,
    Id,
    CropNumber,
    CropName,
    StartDate,
    HouseName,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Days {
    Table,
    Id,
    Day,
    Date,
    CropNumber,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Conditions {
    Table,
    Id,
    Temperature,
    Humidity,
    Time,
    DayNo,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Harvests {
    Table,
    Id,
    Punnets,
    DayNo,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Activities {
    Table,
    Id,
    Description,
    DayNo,
    CreatedAt,
}
