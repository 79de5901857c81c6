use countries_api::lifecycle::CountrySystem;
use countries_api::model::{seed_countries, CountryCreate, CountryId};
use serde_json::json;
use std::collections::HashSet;

fn payload(value: serde_json::Value) -> CountryCreate {
    CountryCreate::try_from(value).expect("payload must be an object")
}

/// Appends against the seed, then reads back the whole collection.
#[tokio::test]
async fn test_appends_continue_after_seed_in_order() {
    let system = CountrySystem::new(32, seed_countries());

    let names = ["Germany", "Peru", "Japan"];
    for name in names {
        system
            .country_client
            .add_country(payload(json!({ "name": name })))
            .await
            .expect("Failed to add country");
    }

    let countries = system
        .country_client
        .list_countries()
        .await
        .expect("Failed to list countries");

    let ids: Vec<u32> = countries.iter().map(|c| c.id().0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    let appended: Vec<_> = countries[3..]
        .iter()
        .filter_map(|c| c.get("name"))
        .collect();
    assert_eq!(appended, names);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_list_is_idempotent() {
    let system = CountrySystem::new(32, seed_countries());

    let first = system.country_client.list_countries().await.unwrap();
    let second = system.country_client.list_countries().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first, seed_countries());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_caller_supplied_id_is_overwritten() {
    let system = CountrySystem::new(32, seed_countries());

    let stored = system
        .country_client
        .add_country(payload(json!({"id": 999, "name": "X"})))
        .await
        .unwrap();
    assert_eq!(stored.id(), CountryId(4));
    assert_eq!(stored.get("id"), Some(&json!(4)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_collection_starts_at_one() {
    let system = CountrySystem::new(32, Vec::new());

    let first = system
        .country_client
        .add_country(payload(json!({"name": "Chile"})))
        .await
        .unwrap();
    let second = system
        .country_client
        .add_country(payload(json!({"name": "Peru"})))
        .await
        .unwrap();

    assert_eq!(first.id(), CountryId(1));
    assert_eq!(second.id(), CountryId(2));

    system.shutdown().await.unwrap();
}

/// Concurrent appends are serialized by the actor: no duplicate and no lost ids.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_get_distinct_ids() {
    // A small channel forces callers to queue.
    let system = CountrySystem::new(4, seed_countries());

    let mut handles = vec![];
    for i in 0..50 {
        let client = system.country_client.clone();
        handles.push(tokio::spawn(async move {
            client
                .add_country(CountryCreate::try_from(json!({ "name": format!("c{}", i) })).unwrap())
                .await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let stored = handle.await.unwrap().expect("append failed");
        assert!(ids.insert(stored.id().0), "duplicate id {}", stored.id());
    }
    assert_eq!(ids, (4..54).collect::<HashSet<u32>>());

    // The list order matches id order, since each append took the next id.
    let countries = system.country_client.list_countries().await.unwrap();
    assert_eq!(countries.len(), 53);
    assert!(countries.windows(2).all(|w| w[0].id() < w[1].id()));

    system.shutdown().await.unwrap();
}
