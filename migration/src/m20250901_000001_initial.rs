use sea_orm_migration::prelude::*;
use sea_orm_migration::prelude::extension::postgres::Type;

#[derive(DeriveIden)]
enum Claims {
    Table,
    Id,
    ClaimType,
    PlayerName,
    PlayerEmail,
    PlayerPhone,
    OutfitDescription,
    TeeTime,
    CourseId,
    Hole,
    PaymentMethod,
    PrizeAmountCents,
    Status,
    Notes,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum Players {
    Table,
    Id,
    PlayerEmail,
    PlayerName,
    PlayerPhone,
    Points,
    CoursesPlayed,
    Awards,
    QualifiedForMillion,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Name,
    Address,
    City,
    Description,
    GolfPro,
    Manager,
    HoleNumber,
    Yardage,
    Phone,
    Email,
    Lat,
    Lng,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tournaments {
    Table,
    Id,
    Name,
    Date,
    Location,
    Registration,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Company,
    Notes,
    JoinDate,
    LastActivity,
    TotalBookings,
    Status,
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    TxnDate,
    Customer,
    Description,
    AmountCents,
    Status,
    TxnType,
    Category,
    Course,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Specials {
    Table,
    Id,
    Title,
    Description,
    DiscountAmount,
    DiscountType,
    ValidFrom,
    ValidUntil,
    Status,
    UsageCount,
    MaxUsage,
    Code,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    EventType,
    Payload,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("claim_type"))
                    .values(vec![Alias::new("birdie"), Alias::new("hole_in_one")])
                    .to_owned(),
            )
            .await?;
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("claim_status"))
                    .values(vec![
                        Alias::new("pending"),
                        Alias::new("verified"),
                        Alias::new("rejected"),
                    ])
                    .to_owned(),
            )
            .await?;
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("transaction_status"))
                    .values(vec![
                        Alias::new("completed"),
                        Alias::new("pending"),
                        Alias::new("failed"),
                    ])
                    .to_owned(),
            )
            .await?;
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("transaction_type"))
                    .values(vec![Alias::new("income"), Alias::new("expense")])
                    .to_owned(),
            )
            .await?;
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("transaction_category"))
                    .values(vec![
                        Alias::new("daily_play"),
                        Alias::new("shootout_tournament"),
                        Alias::new("course"),
                        Alias::new("marketing"),
                    ])
                    .to_owned(),
            )
            .await?;
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("discount_type"))
                    .values(vec![Alias::new("percentage"), Alias::new("fixed")])
                    .to_owned(),
            )
            .await?;
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("special_status"))
                    .values(vec![
                        Alias::new("active"),
                        Alias::new("inactive"),
                        Alias::new("expired"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Claims::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Claims::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Claims::ClaimType)
                            .custom(Alias::new("claim_type"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Claims::PlayerName).string_len(255).not_null())
                    .col(ColumnDef::new(Claims::PlayerEmail).string_len(255).not_null())
                    .col(ColumnDef::new(Claims::PlayerPhone).string_len(50).null())
                    .col(ColumnDef::new(Claims::OutfitDescription).text().null())
                    .col(ColumnDef::new(Claims::TeeTime).string_len(50).null())
                    .col(ColumnDef::new(Claims::CourseId).string_len(255).null())
                    .col(ColumnDef::new(Claims::Hole).string_len(20).null())
                    .col(ColumnDef::new(Claims::PaymentMethod).string_len(50).null())
                    .col(ColumnDef::new(Claims::PrizeAmountCents).big_integer().not_null())
                    .col(
                        ColumnDef::new(Claims::Status)
                            .custom(Alias::new("claim_status"))
                            .not_null()
                            .default(Expr::cust("'pending'::claim_status")),
                    )
                    .col(ColumnDef::new(Claims::Notes).text().null())
                    .col(
                        ColumnDef::new(Claims::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_claims_status")
                    .table(Claims::Table)
                    .col(Claims::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_claims_player_email")
                    .table(Claims::Table)
                    .col(Claims::PlayerEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Players::PlayerEmail)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Players::PlayerName).string_len(255).null())
                    .col(ColumnDef::new(Players::PlayerPhone).string_len(50).null())
                    .col(ColumnDef::new(Players::Points).big_integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Players::CoursesPlayed)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Players::Awards)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Players::QualifiedForMillion)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Courses::Address).string_len(255).null())
                    .col(ColumnDef::new(Courses::City).string_len(100).null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::GolfPro).string_len(255).null())
                    .col(ColumnDef::new(Courses::Manager).string_len(255).null())
                    .col(ColumnDef::new(Courses::HoleNumber).integer().null())
                    .col(ColumnDef::new(Courses::Yardage).integer().null())
                    .col(ColumnDef::new(Courses::Phone).string_len(50).null())
                    .col(ColumnDef::new(Courses::Email).string_len(255).null())
                    .col(ColumnDef::new(Courses::Lat).double().null())
                    .col(ColumnDef::new(Courses::Lng).double().null())
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tournaments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tournaments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tournaments::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Tournaments::Date).string_len(100).null())
                    .col(ColumnDef::new(Tournaments::Location).string_len(255).null())
                    .col(ColumnDef::new(Tournaments::Registration).string_len(255).null())
                    .col(
                        ColumnDef::new(Tournaments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Customers::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Customers::Phone).string_len(50).null())
                    .col(ColumnDef::new(Customers::Company).string_len(255).null())
                    .col(ColumnDef::new(Customers::Notes).text().null())
                    .col(
                        ColumnDef::new(Customers::JoinDate)
                            .date()
                            .not_null()
                            .default(Expr::cust("CURRENT_DATE")),
                    )
                    .col(ColumnDef::new(Customers::LastActivity).date().null())
                    .col(
                        ColumnDef::new(Customers::TotalBookings)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Customers::Status)
                            .string_len(50)
                            .not_null()
                            .default("active"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::TxnDate).date().not_null())
                    .col(ColumnDef::new(Transactions::Customer).string_len(255).not_null())
                    .col(ColumnDef::new(Transactions::Description).text().not_null())
                    .col(ColumnDef::new(Transactions::AmountCents).big_integer().not_null())
                    .col(
                        ColumnDef::new(Transactions::Status)
                            .custom(Alias::new("transaction_status"))
                            .not_null()
                            .default(Expr::cust("'pending'::transaction_status")),
                    )
                    .col(
                        ColumnDef::new(Transactions::TxnType)
                            .custom(Alias::new("transaction_type"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Category)
                            .custom(Alias::new("transaction_category"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::Course).string_len(255).null())
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_transactions_status")
                    .table(Transactions::Table)
                    .col(Transactions::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Specials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Specials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Specials::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Specials::Description).text().null())
                    .col(ColumnDef::new(Specials::DiscountAmount).big_integer().not_null())
                    .col(
                        ColumnDef::new(Specials::DiscountType)
                            .custom(Alias::new("discount_type"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Specials::ValidFrom).date().null())
                    .col(ColumnDef::new(Specials::ValidUntil).date().null())
                    .col(
                        ColumnDef::new(Specials::Status)
                            .custom(Alias::new("special_status"))
                            .not_null()
                            .default(Expr::cust("'active'::special_status")),
                    )
                    .col(
                        ColumnDef::new(Specials::UsageCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Specials::MaxUsage).big_integer().null())
                    .col(ColumnDef::new(Specials::Code).string_len(100).null())
                    .col(
                        ColumnDef::new(Specials::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Events::EventType).string_len(100).null())
                    .col(
                        ColumnDef::new(Events::Payload)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
