use spectrum_core::models::color::ColorType;
use spectrum_core::models::personality::PersonalityType;
use spectrum_core::models::result::ResultFields;
use spectrum_core::models::scores::ScoreVector;
use spectrum_storage::error::StorageError;
use spectrum_storage::{MemoryResultStore, ResultStore};
use uuid::Uuid;

fn fields(user_id: Option<Uuid>) -> ResultFields {
    ResultFields {
        user_id,
        scores: ScoreVector {
            fiery_red: 33,
            sunshine_yellow: 20,
            earth_green: 28,
            cool_blue: 20,
        },
        unconscious_scores: None,
        dominant_color: ColorType::FieryRed,
        secondary_color: ColorType::EarthGreen,
        personality_type: PersonalityType::Director,
    }
}

#[tokio::test]
async fn create_assigns_id_and_keeps_fields() {
    let store = MemoryResultStore::new();
    let user = Some(Uuid::new_v4());

    let a = store.create_result(fields(user)).await.unwrap();
    let b = store.create_result(fields(user)).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(a.user_id, user);
    assert_eq!(a.personality_type, PersonalityType::Director);
    assert_eq!(a.scores.total(), 101);
}

#[tokio::test]
async fn results_are_scoped_to_their_owner() {
    let store = MemoryResultStore::new();
    let alice = Some(Uuid::new_v4());
    let bob = Some(Uuid::new_v4());

    let first = store.create_result(fields(alice)).await.unwrap();
    let second = store.create_result(fields(alice)).await.unwrap();
    store.create_result(fields(bob)).await.unwrap();
    store.create_result(fields(None)).await.unwrap();

    let alice_results = store.results_by_user(alice).await.unwrap();
    assert_eq!(alice_results.len(), 2);
    assert!(alice_results[0].created_at <= alice_results[1].created_at);
    let ids: Vec<Uuid> = alice_results.iter().map(|r| r.id).collect();
    assert!(ids.contains(&first.id) && ids.contains(&second.id));

    assert_eq!(store.results_by_user(None).await.unwrap().len(), 1);
    assert!(store.results_by_user(Some(Uuid::new_v4())).await.unwrap().is_empty());

    // Another user's id does not reach the result.
    assert!(matches!(
        store.get_result(bob, first.id).await,
        Err(StorageError::NotFound { .. })
    ));
}

#[tokio::test]
async fn delete_removes_the_result() {
    let store = MemoryResultStore::new();
    let user = Some(Uuid::new_v4());
    let result = store.create_result(fields(user)).await.unwrap();

    assert_eq!(store.get_result(user, result.id).await.unwrap(), result);
    store.delete_result(user, result.id).await.unwrap();

    assert!(matches!(
        store.get_result(user, result.id).await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(
        store.delete_result(user, result.id).await,
        Err(StorageError::NotFound { .. })
    ));
}
