use bee_api::bee_actor::BeeError;
use bee_api::clients::actor_client::ActorClient;
use bee_api::lifecycle::BeeSystem;
use std::collections::HashSet;

/// Create then read back through the real actor.
#[tokio::test]
async fn test_created_bee_can_be_fetched() {
    let system = BeeSystem::new();

    let bee = system
        .bee_client
        .create_bee("Scout".to_string())
        .await
        .expect("Failed to create bee");

    let fetched = system
        .bee_client
        .get(bee.id)
        .await
        .expect("Failed to get bee")
        .expect("Bee not found");
    assert_eq!(fetched, bee);
    assert_eq!(fetched.name, "Scout");

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let system = BeeSystem::new();
    let client = &system.bee_client;

    assert!(client.get(404).await.unwrap().is_none());
    assert_eq!(
        client.update_bee(404, "Ghost".to_string()).await,
        Err(BeeError::NotFound(404))
    );
    assert_eq!(client.delete_bee(404).await, Err(BeeError::NotFound(404)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_changes_only_the_target_name() {
    let system = BeeSystem::new();
    let client = &system.bee_client;

    let scout = client.create_bee("Scout".to_string()).await.unwrap();
    let nurse = client.create_bee("Nurse".to_string()).await.unwrap();

    let renamed = client.update_bee(scout.id, "Worker".to_string()).await.unwrap();
    assert_eq!(renamed.id, scout.id);
    assert_eq!(renamed.name, "Worker");

    let untouched = client.get(nurse.id).await.unwrap().unwrap();
    assert_eq!(untouched, nurse);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleted_bee_is_gone_and_id_not_reused() {
    let system = BeeSystem::new();
    let client = &system.bee_client;

    let first = client.create_bee("Drone".to_string()).await.unwrap();
    let removed = client.delete_bee(first.id).await.unwrap();
    assert_eq!(removed, first);
    assert!(client.get(first.id).await.unwrap().is_none());

    let second = client.create_bee("Drone".to_string()).await.unwrap();
    assert_ne!(second.id, first.id);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_reflects_creates_and_deletes() {
    let system = BeeSystem::new();
    let client = &system.bee_client;

    let mut ids = Vec::new();
    for name in ["a", "b", "c", "d", "e"] {
        ids.push(client.create_bee(name.to_string()).await.unwrap().id);
    }
    client.delete_bee(ids[1]).await.unwrap();
    client.delete_bee(ids[3]).await.unwrap();
    client.update_bee(ids[4], "queen".to_string()).await.unwrap();

    let bees = client.list().await.unwrap();
    let names: Vec<&str> = bees.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(bees.len(), 3);
    assert_eq!(names, vec!["a", "c", "queen"]);

    system.shutdown().await.unwrap();
}

/// Concurrent creates are linearized by the actor and never share an id.
#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let system = BeeSystem::new();

    let mut handles = vec![];
    for i in 0..50 {
        let client = system.bee_client.clone();
        handles.push(tokio::spawn(async move {
            client.create_bee(format!("bee-{}", i)).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let bee = handle.await.unwrap().expect("create failed");
        assert!(ids.insert(bee.id), "duplicate id {}", bee.id);
    }

    assert_eq!(system.bee_client.list().await.unwrap().len(), 50);

    system.shutdown().await.unwrap();
}
