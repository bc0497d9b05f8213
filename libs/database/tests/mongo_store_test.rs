//! MongoDocumentStore against a real MongoDB container.

use database::mongodb::{
    DocumentStore, MongoDocumentStore, Record, bson::doc, check_health,
};
use serde::{Deserialize, Serialize};
use test_utils::{TestDataBuilder, TestMongo};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Glove {
    slug: String,
    sizes: Vec<String>,
    warmth: i32,
}

impl Record for Glove {
    const COLLECTION: &'static str = "glove";
}

fn glove(slug: &str, warmth: i32, sizes: &[&str]) -> Glove {
    Glove {
        slug: slug.to_string(),
        sizes: sizes.iter().map(|s| s.to_string()).collect(),
        warmth,
    }
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_then_query_round_trips() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_create_then_query_round_trips");
    let store = MongoDocumentStore::<Glove>::new(&mongo.database(&builder.database_name()));

    let created = store.create(glove("mitt", 7, &["S", "M"])).await.unwrap();
    assert_eq!(created.id.len(), 24);

    let found = store.query(doc! { "slug": "mitt" }, Some(1)).await.unwrap();
    assert_eq!(found, vec![created]);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_query_operators_and_limit() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_query_operators_and_limit");
    let store = MongoDocumentStore::<Glove>::new(&mongo.database(&builder.database_name()));

    store.create(glove("liner", 2, &["S"])).await.unwrap();
    store.create(glove("shell", 5, &["M", "L"])).await.unwrap();
    store.create(glove("expedition", 9, &["L", "XL"])).await.unwrap();

    let large = store
        .query(doc! { "sizes": { "$in": ["L"] }, "warmth": { "$gte": 6 } }, None)
        .await
        .unwrap();
    assert_eq!(large.len(), 1);
    assert_eq!(large[0].data.slug, "expedition");

    let capped = store.query(doc! {}, Some(2)).await.unwrap();
    assert_eq!(capped.len(), 2);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_reads_documents_with_string_timestamps() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_reads_documents_with_string_timestamps");
    let db = mongo.database(&builder.database_name());
    let store = MongoDocumentStore::<Glove>::new(&db);

    store
        .collection()
        .insert_one(doc! {
            "slug": "legacy",
            "sizes": ["M"],
            "warmth": 3,
            "created_at": "2024-02-01T08:30:00.250000",
            "updated_at": "2024-02-01T08:30:00.250000",
        })
        .await
        .unwrap();

    let found = store.query(doc! { "slug": "legacy" }, None).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].created_at.timestamp_subsec_millis(), 250);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_health_check_reports_healthy() {
    let mongo = TestMongo::new().await;
    let status = check_health(&mongo.client()).await;
    assert!(status.healthy);
}
