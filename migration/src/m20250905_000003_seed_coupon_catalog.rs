use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 初始兑换券目录（coupon_value 单位: 美分）
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = r#"
            INSERT INTO coupons_catalog (coupon_name, description, points_required, coupon_value, validity_days)
            VALUES
                ('Cafeteria Drink Voucher', 'Free drink at any campus cafeteria', 50, 150, 30),
                ('Snack Bar Coupon', 'Discount snack at the student snack bar', 100, 300, 30),
                ('Campus Store $5 Voucher', '$5 off at the campus store', 250, 500, 60),
                ('Cafeteria Meal Voucher', 'Free standard meal at the main cafeteria', 400, 800, 30),
                ('Eco Tote Bag', 'Reusable campus tote bag', 600, 1200, 90)
        "#;
        manager.get_connection().execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM coupons_catalog")
            .await?;
        Ok(())
    }
}
