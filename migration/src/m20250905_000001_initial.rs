use sea_orm_migration::prelude::*;
use sea_orm_migration::prelude::extension::postgres::Type;

/// 学生账户（RFID 卡绑定）
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    RfidId,
    Username,
    PinHash,
    Name,
    StudentId,
    Email,
    LoginAttempts,
    AccountLocked,
    LockedUntil,
    LastLogin,
    CreatedAt,
}

/// 积分余额（每个账户一行, rfid_id 为主键）
#[derive(DeriveIden)]
enum UserPoints {
    Table,
    RfidId,
    TotalPoints,
    TotalBottles,
    LastUpdated,
}

/// 登录会话（不透明 token）
#[derive(DeriveIden)]
enum UserSessions {
    Table,
    Id,
    UserId,
    SessionToken,
    ExpiresAt,
    IpAddress,
    CreatedAt,
}

/// 登录尝试流水（user_id 可空: 用户名不存在时也记一条）
#[derive(DeriveIden)]
enum LoginAttempts {
    Table,
    Id,
    UserId,
    IpAddress,
    Success,
    AttemptedAt,
}

/// 投瓶流水（只追加）
#[derive(DeriveIden)]
enum BottleHistory {
    Table,
    Id,
    RfidId,
    MachineId,
    BottlesInserted,
    PointsEarned,
    SensorReadings,
    Status,
    SuspicionReason,
    InsertionTime,
}

/// 兑换券目录
#[derive(DeriveIden)]
enum CouponsCatalog {
    Table,
    Id,
    CouponName,
    Description,
    PointsRequired,
    CouponValue,
    ValidityDays,
    IsActive,
    CreatedAt,
}

/// 已兑换记录
#[derive(DeriveIden)]
enum RedeemedCoupons {
    Table,
    Id,
    RfidId,
    CouponId,
    PointsUsed,
    RedemptionCode,
    Status,
    ExpiryDate,
    RedeemedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 状态枚举类型
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("bottle_status"))
                    .values(vec![Alias::new("valid"), Alias::new("suspicious")])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("redemption_status"))
                    .values(vec![
                        Alias::new("active"),
                        Alias::new("used"),
                        Alias::new("expired"),
                    ])
                    .to_owned(),
            )
            .await?;

        // 账户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::RfidId).string_len(64).not_null())
                    .col(ColumnDef::new(Users::Username).string_len(64).not_null())
                    .col(ColumnDef::new(Users::PinHash).string_len(255).not_null())
                    .col(ColumnDef::new(Users::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Users::StudentId).string_len(64).not_null())
                    .col(ColumnDef::new(Users::Email).string_len(255).null())
                    .col(
                        ColumnDef::new(Users::LoginAttempts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::AccountLocked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::LockedUntil).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Users::LastLogin).timestamp_with_time_zone().null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
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
                    .name("idx_users_rfid_unique")
                    .table(Users::Table)
                    .col(Users::RfidId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_username_unique")
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 积分余额表（rfid_id 主键, 一个账户一行）
        manager
            .create_table(
                Table::create()
                    .table(UserPoints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserPoints::RfidId)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserPoints::TotalPoints)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserPoints::TotalBottles)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserPoints::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_points_rfid")
                            .from(UserPoints::Table, UserPoints::RfidId)
                            .to(Users::Table, Users::RfidId),
                    )
                    .to_owned(),
            )
            .await?;

        // 会话表
        manager
            .create_table(
                Table::create()
                    .table(UserSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserSessions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserSessions::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(UserSessions::SessionToken)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserSessions::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserSessions::IpAddress).string_len(45).null())
                    .col(
                        ColumnDef::new(UserSessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_sessions_user")
                            .from(UserSessions::Table, UserSessions::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_sessions_token_unique")
                    .table(UserSessions::Table)
                    .col(UserSessions::SessionToken)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 登录尝试流水表
        manager
            .create_table(
                Table::create()
                    .table(LoginAttempts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LoginAttempts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LoginAttempts::UserId).big_integer().null())
                    .col(ColumnDef::new(LoginAttempts::IpAddress).string_len(45).null())
                    .col(ColumnDef::new(LoginAttempts::Success).boolean().not_null())
                    .col(
                        ColumnDef::new(LoginAttempts::AttemptedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_login_attempts_user")
                            .from(LoginAttempts::Table, LoginAttempts::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 投瓶流水表
        manager
            .create_table(
                Table::create()
                    .table(BottleHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BottleHistory::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BottleHistory::RfidId).string_len(64).not_null())
                    .col(ColumnDef::new(BottleHistory::MachineId).string_len(64).null())
                    .col(
                        ColumnDef::new(BottleHistory::BottlesInserted)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BottleHistory::PointsEarned)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BottleHistory::SensorReadings).json_binary().null())
                    .col(
                        ColumnDef::new(BottleHistory::Status)
                            .custom(Alias::new("bottle_status"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(BottleHistory::SuspicionReason).text().null())
                    .col(
                        ColumnDef::new(BottleHistory::InsertionTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bottle_history_rfid")
                            .from(BottleHistory::Table, BottleHistory::RfidId)
                            .to(Users::Table, Users::RfidId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bottle_history_rfid")
                    .table(BottleHistory::Table)
                    .col(BottleHistory::RfidId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bottle_history_status")
                    .table(BottleHistory::Table)
                    .col(BottleHistory::Status)
                    .to_owned(),
            )
            .await?;

        // 兑换券目录表
        manager
            .create_table(
                Table::create()
                    .table(CouponsCatalog::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CouponsCatalog::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CouponsCatalog::CouponName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CouponsCatalog::Description).text().null())
                    .col(
                        ColumnDef::new(CouponsCatalog::PointsRequired)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CouponsCatalog::CouponValue)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CouponsCatalog::ValidityDays)
                            .integer()
                            .not_null()
                            .default(30),
                    )
                    .col(
                        ColumnDef::new(CouponsCatalog::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(CouponsCatalog::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // 已兑换记录表
        manager
            .create_table(
                Table::create()
                    .table(RedeemedCoupons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RedeemedCoupons::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RedeemedCoupons::RfidId).string_len(64).not_null())
                    .col(ColumnDef::new(RedeemedCoupons::CouponId).big_integer().not_null())
                    .col(ColumnDef::new(RedeemedCoupons::PointsUsed).big_integer().not_null())
                    .col(
                        ColumnDef::new(RedeemedCoupons::RedemptionCode)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RedeemedCoupons::Status)
                            .custom(Alias::new("redemption_status"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RedeemedCoupons::ExpiryDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RedeemedCoupons::RedeemedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_redeemed_coupons_rfid")
                            .from(RedeemedCoupons::Table, RedeemedCoupons::RfidId)
                            .to(Users::Table, Users::RfidId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_redeemed_coupons_coupon")
                            .from(RedeemedCoupons::Table, RedeemedCoupons::CouponId)
                            .to(CouponsCatalog::Table, CouponsCatalog::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_redeemed_coupons_rfid")
                    .table(RedeemedCoupons::Table)
                    .col(RedeemedCoupons::RfidId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RedeemedCoupons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CouponsCatalog::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BottleHistory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LoginAttempts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserSessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserPoints::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new("redemption_status")).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new("bottle_status")).to_owned())
            .await?;
        Ok(())
    }
}
