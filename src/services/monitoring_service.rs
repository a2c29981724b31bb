use std::sync::Arc;

use crate::entities::{BottleStatus, bottle_history_entity as bottle_history, user_point_entity as user_points};
use crate::error::{AppError, AppResult};
use crate::models::{AddBottleRequest, AddBottleResponse, MachineStatsResponse, SuspiciousActivityResponse};
use crate::services::classifier::{InsertionClassifier, NoopClassifier};
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult, Set, Statement,
    TransactionTrait,
};

#[derive(Clone)]
pub struct MonitoringService {
    pool: DatabaseConnection,
    classifier: Arc<dyn InsertionClassifier>,
}

impl MonitoringService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self::with_classifier(pool, Arc::new(NoopClassifier))
    }

    pub fn with_classifier(pool: DatabaseConnection, classifier: Arc<dyn InsertionClassifier>) -> Self {
        Self { pool, classifier }
    }

    /// 记录一次投瓶并为账户累加积分。
    ///
    /// 调用方（回收机）给出的瓶数/积分直接采信, 缺省 1 瓶 10 分。
    /// 状态在落库前由分类器谓词定死; 积分累加走数据库侧的
    /// ON CONFLICT 原子自增, 并发投瓶不会丢更新。
    pub async fn record_bottle_event(&self, request: AddBottleRequest) -> AppResult<AddBottleResponse> {
        let bottles = request.bottles.unwrap_or(1);
        let points = request.points.unwrap_or(10);

        if bottles <= 0 || points < 0 {
            return Err(AppError::ValidationError(
                "Bottle and point counts must be positive".to_string(),
            ));
        }

        let suspicion_reason = self
            .classifier
            .classify(&request.rfid, request.sensor_data.as_ref());
        let status = if suspicion_reason.is_some() {
            BottleStatus::Suspicious
        } else {
            BottleStatus::Valid
        };

        let txn = self.pool.begin().await?;

        bottle_history::ActiveModel {
            rfid_id: Set(request.rfid.clone()),
            machine_id: Set(request.machine_id.clone()),
            bottles_inserted: Set(bottles),
            points_earned: Set(points),
            sensor_readings: Set(request.sensor_data.clone()),
            status: Set(status.clone()),
            suspicion_reason: Set(suspicion_reason),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        user_points::Entity::insert(user_points::ActiveModel {
            rfid_id: Set(request.rfid.clone()),
            total_points: Set(points),
            total_bottles: Set(bottles),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(user_points::Column::RfidId)
                .value(
                    user_points::Column::TotalPoints,
                    Expr::col((user_points::Entity, user_points::Column::TotalPoints)).add(points),
                )
                .value(
                    user_points::Column::TotalBottles,
                    Expr::col((user_points::Entity, user_points::Column::TotalBottles)).add(bottles),
                )
                .value(user_points::Column::LastUpdated, Expr::value(Utc::now()))
                .to_owned(),
        )
        .exec(&txn)
        .await?;

        txn.commit().await?;

        Ok(AddBottleResponse {
            status,
            points_added: points,
            bottles_added: bottles,
        })
    }

    /// 每台回收机的累计统计
    pub async fn machine_stats(&self) -> AppResult<Vec<MachineStatsResponse>> {
        let rows = MachineStatsResponse::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                machine_id,
                COUNT(*)::bigint AS total_operations,
                COALESCE(SUM(bottles_inserted), 0)::bigint AS total_bottles,
                COALESCE(SUM(points_earned), 0)::bigint AS total_points,
                (COUNT(*) FILTER (WHERE status = 'suspicious'))::bigint AS suspicious_count,
                MAX(insertion_time) AS last_activity
            FROM bottle_history
            GROUP BY machine_id
            ORDER BY machine_id
            "#
            .to_string(),
        ))
        .all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// 最近的可疑投瓶记录（带学生信息, 最多 50 条）
    pub async fn suspicious_activities(&self) -> AppResult<Vec<SuspiciousActivityResponse>> {
        let rows = SuspiciousActivityResponse::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                bh.id, bh.rfid_id, bh.machine_id, bh.bottles_inserted, bh.points_earned,
                bh.suspicion_reason, bh.insertion_time, u.name, u.student_id
            FROM bottle_history bh
            JOIN users u ON bh.rfid_id = u.rfid_id
            WHERE bh.status = 'suspicious'
            ORDER BY bh.insertion_time DESC
            LIMIT 50
            "#
            .to_string(),
        ))
        .all(&self.pool)
        .await?;
        Ok(rows)
    }
}
