use chrono::{DateTime, Utc};
use contracts::domain::a001_washing_report::StoredReport;
use contracts::enums::report_type::ReportType;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_washing_report")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub report_type: String,
    /// Flat form JSON
    pub form_data: String,
    pub user_id: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for StoredReport {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let report_type = ReportType::parse(&m.report_type)
            .ok_or_else(|| anyhow::anyhow!("Unknown report type '{}' in report {}", m.report_type, m.id))?;
        Ok(StoredReport {
            id: m.id,
            report_type,
            form_data: serde_json::from_str(&m.form_data)?,
            user_id: m.user_id,
            user_name: m.user_name,
            created_at: m.created_at,
        })
    }
}

pub async fn insert(db: &DatabaseConnection, report: &StoredReport) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(report.id.clone()),
        report_type: Set(report.report_type.code().to_string()),
        form_data: Set(serde_json::to_string(&report.form_data)?),
        user_id: Set(report.user_id.clone()),
        user_name: Set(report.user_name.clone()),
        created_at: Set(report.created_at),
    };
    active.insert(db).await?;
    Ok(())
}

pub async fn get_by_id(db: &DatabaseConnection, id: &str) -> anyhow::Result<Option<StoredReport>> {
    Entity::find_by_id(id.to_string())
        .one(db)
        .await?
        .map(StoredReport::try_from)
        .transpose()
}

/// Newest first, optionally of one report type. Returns the page and the total count.
pub async fn list_paginated(
    db: &DatabaseConnection,
    report_type: Option<ReportType>,
    limit: u64,
    offset: u64,
) -> anyhow::Result<(Vec<StoredReport>, u64)> {
    let mut query = Entity::find();
    if let Some(report_type) = report_type {
        query = query.filter(Column::ReportType.eq(report_type.code()));
    }

    let total = query.clone().count(db).await?;

    let items = query
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .offset(offset)
        .all(db)
        .await?
        .into_iter()
        .map(StoredReport::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok((items, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::{connect, ensure_schema};
    use chrono::TimeZone;
    use serde_json::json;

    async fn memory_db() -> DatabaseConnection {
        let db = connect("sqlite::memory:").await.unwrap();
        ensure_schema(&db).await.unwrap();
        db
    }

    fn report(id: &str, report_type: ReportType, minute: u32) -> StoredReport {
        StoredReport {
            id: id.to_string(),
            report_type,
            form_data: json!({ "reportType": report_type.display_name(), "notes": id }),
            user_id: "u1".to_string(),
            user_name: "Tester".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 4, 1, 9, minute, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = memory_db().await;
        let stored = report("r1", ReportType::HtTesting, 0);
        insert(&db, &stored).await.unwrap();

        let loaded = get_by_id(&db, "r1").await.unwrap().unwrap();
        assert_eq!(loaded, stored);
        assert!(get_by_id(&db, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filters_and_pages() {
        let db = memory_db().await;
        insert(&db, &report("a", ReportType::HomeWash, 1)).await.unwrap();
        insert(&db, &report("b", ReportType::PullingTest, 2)).await.unwrap();
        insert(&db, &report("c", ReportType::HomeWash, 3)).await.unwrap();

        let (items, total) = list_paginated(&db, None, 2, 0).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(
            items.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["c", "b"]
        );

        let (items, total) = list_paginated(&db, Some(ReportType::HomeWash), 10, 1)
            .await
            .unwrap();
        assert_eq!(total, 2);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "a");
    }
}
