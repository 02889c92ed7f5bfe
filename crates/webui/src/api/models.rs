//! Wire types for the writer-reports API.
//!
//! All statistics are server-computed; the client never derives `avg_views`
//! or any summary field locally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked content author with article/view statistics.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Writer {
    /// Server-assigned, unique.
    pub id: String,
    pub name: String,
    pub articles: u64,
    pub views: u64,
    /// Server-computed, typically `views / articles`.
    pub avg_views: f64,
}

/// Aggregate over all writers, recomputed by the server on every list fetch.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Summary {
    pub total_writers: u64,
    pub total_articles: u64,
    pub total_views: u64,
    pub avg_views_per_article: f64,
}

/// Envelope returned by `GET /writers`. Writer order is server order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WriterData {
    pub writers: Vec<Writer>,
    pub summary: Summary,
}

/// Body of `POST /writers`.
#[derive(Debug, Serialize)]
pub struct NewWriter<'a> {
    pub name: &'a str,
}

/// Body of `PUT /writers/{id}`. Overwrites both counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatsUpdate {
    pub articles: u64,
    pub views: u64,
}

/// Body of `POST /export`. Dates serialize as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExportRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::{ExportRequest, NewWriter, StatsUpdate, WriterData};
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn writer_data_deserializes_from_list_response() {
        let body = json!({
            "writers": [
                {"id": "1", "name": "Jane Doe", "articles": 10, "views": 5000, "avg_views": 500},
                {"id": "2", "name": "John Roe", "articles": 0, "views": 0, "avg_views": 0},
            ],
            "summary": {
                "total_writers": 2,
                "total_articles": 10,
                "total_views": 5000,
                "avg_views_per_article": 500,
            },
        });

        let data: WriterData = serde_json::from_value(body).unwrap();
        assert_eq!(data.writers.len(), 2);
        assert_eq!(data.writers[0].id, "1");
        assert_eq!(data.writers[0].name, "Jane Doe");
        assert_eq!(data.writers[0].articles, 10);
        assert_eq!(data.writers[0].views, 5000);
        assert_eq!(data.summary.total_writers, 2);
        assert_eq!(data.summary.avg_views_per_article, 500.0);
    }

    #[test]
    fn new_writer_body_shape() {
        let body = serde_json::to_value(NewWriter { name: "Jane Doe" }).unwrap();
        assert_eq!(body, json!({"name": "Jane Doe"}));
    }

    #[test]
    fn stats_update_body_shape() {
        let body = serde_json::to_value(StatsUpdate {
            articles: 10,
            views: 5000,
        })
        .unwrap();
        assert_eq!(body, json!({"articles": 10, "views": 5000}));
    }

    #[test]
    fn export_request_serializes_calendar_dates() {
        let body = serde_json::to_value(ExportRequest {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"start_date": "2024-01-01", "end_date": "2024-12-31"})
        );
    }
}
