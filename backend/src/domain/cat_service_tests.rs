//! Tests for the cat directory service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    MockFeedingRepository, MockObjectStorage, MockPhotoRepository, UserRepository,
};
use crate::domain::{
    Age, Breed, CatName, Description, ErrorCode, PasswordHash, ToyDraft, User, UserId, Username,
};
use crate::outbound::memory::MemoryStore;
use crate::outbound::storage::MemoryObjectStorage;

struct Harness {
    store: MemoryStore,
    storage: MemoryObjectStorage,
    service: CatDirectoryService,
}

impl Harness {
    fn with_storage(storage: Arc<dyn ObjectStorage>) -> (MemoryStore, CatDirectoryService) {
        let store = MemoryStore::new();
        let service = CatDirectoryService::new(CatDirectoryPorts {
            cats: Arc::new(store.cats()),
            toys: Arc::new(store.toys()),
            feedings: Arc::new(store.feedings()),
            photos: Arc::new(store.photos()),
            storage,
        });
        (store, service)
    }

    async fn user(&self, name: &str) -> RequestContext {
        let user = User::new(UserId::random(), Username::new(name).expect("username"));
        self.store
            .users()
            .insert(&user, &PasswordHash::new("$argon2id$fixture"))
            .await
            .expect("insert user");
        RequestContext::new(*user.id())
    }

    async fn toy(&self, name: &str) -> Toy {
        self.store
            .toys()
            .insert(&ToyDraft::try_from_parts(name, "red").expect("toy"))
            .await
            .expect("insert toy")
    }
}

#[fixture]
fn harness() -> Harness {
    let storage = MemoryObjectStorage::new("cats");
    let (store, service) = Harness::with_storage(Arc::new(storage.clone()));
    Harness {
        store,
        storage,
        service,
    }
}

fn new_cat(name: &str) -> NewCat {
    NewCat {
        name: CatName::new(name).expect("name"),
        breed: Breed::new("Tabby").expect("breed"),
        description: Description::new("orange").expect("description"),
        age: Age::new(3).expect("age"),
    }
}

fn feeding_form(date: Option<&str>, meal: Option<&str>) -> FeedingForm {
    FeedingForm {
        date: date.map(str::to_owned),
        meal: meal.map(str::to_owned),
    }
}

#[rstest]
#[tokio::test]
async fn list_is_scoped_to_the_caller(harness: Harness) {
    let alice = harness.user("alice").await;
    let bob = harness.user("bob").await;
    let fig = harness
        .service
        .create(&alice, new_cat("Fig"))
        .await
        .expect("create");

    let alice_cats = harness.service.list_scoped(&alice).await.expect("list");
    assert_eq!(alice_cats, vec![fig.clone()]);
    assert_eq!(fig.owner(), alice.user_id());
    assert!(harness.service.list_scoped(&bob).await.expect("list").is_empty());
}

#[rstest]
#[tokio::test]
async fn single_cat_operations_ignore_ownership(harness: Harness) {
    let alice = harness.user("alice").await;
    let fig = harness
        .service
        .create(&alice, new_cat("Fig"))
        .await
        .expect("create");

    let fetched = harness.service.get_unscoped(fig.id()).await.expect("get");
    assert_eq!(fetched, fig);

    let changes = CatChanges {
        breed: Breed::new("Siamese").expect("breed"),
        description: Description::new("").expect("description"),
        age: Age::new(4).expect("age"),
    };
    let updated = harness
        .service
        .update_unscoped(fig.id(), changes)
        .await
        .expect("update");
    assert_eq!(updated.name().as_ref(), "Fig");
    assert_eq!(updated.breed().as_ref(), "Siamese");
}

#[rstest]
#[tokio::test]
async fn missing_cats_are_not_found(harness: Harness) {
    let missing = CatId::new(404).expect("id");
    let err = harness.service.get_unscoped(missing).await.expect_err("missing");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "cat 404 not found");
    let err = harness
        .service
        .delete_unscoped(missing)
        .await
        .expect_err("missing");
    assert_eq!(err.code(), ErrorCode::NotFound);
    let err = harness
        .service
        .detail_unscoped(missing)
        .await
        .expect_err("missing");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn detail_splits_toys_into_owned_and_not_owned(harness: Harness) {
    let alice = harness.user("alice").await;
    let fig = harness
        .service
        .create(&alice, new_cat("Fig"))
        .await
        .expect("create");
    let ball = harness.toy("Ball").await;
    let mouse = harness.toy("Mouse").await;
    let feather = harness.toy("Feather").await;
    harness
        .service
        .associate_toy(fig.id(), mouse.id())
        .await
        .expect("associate");

    let detail = harness.service.detail_unscoped(fig.id()).await.expect("detail");
    assert_eq!(detail.cat, fig);
    assert_eq!(detail.toys, vec![mouse]);
    assert_eq!(detail.toys_not_owned, vec![ball, feather]);
    assert_eq!(detail.feeding_form, FeedingFormDescriptor::default());

    let again = harness.service.detail_unscoped(fig.id()).await.expect("detail");
    assert_eq!(again, detail);
}

#[rstest]
#[tokio::test]
async fn associating_twice_keeps_one_association(harness: Harness) {
    let alice = harness.user("alice").await;
    let fig = harness
        .service
        .create(&alice, new_cat("Fig"))
        .await
        .expect("create");
    let ball = harness.toy("Ball").await;

    harness
        .service
        .associate_toy(fig.id(), ball.id())
        .await
        .expect("first");
    harness
        .service
        .associate_toy(fig.id(), ball.id())
        .await
        .expect("second");
    let detail = harness.service.detail_unscoped(fig.id()).await.expect("detail");
    assert_eq!(detail.toys, vec![ball.clone()]);

    harness
        .service
        .dissociate_toy(fig.id(), ball.id())
        .await
        .expect("dissociate");
    harness
        .service
        .dissociate_toy(fig.id(), ball.id())
        .await
        .expect("dissociate again");
    let detail = harness.service.detail_unscoped(fig.id()).await.expect("detail");
    assert!(detail.toys.is_empty());
    assert_eq!(detail.toys_not_owned, vec![ball]);
}

#[rstest]
#[tokio::test]
async fn associating_an_unknown_toy_is_not_found(harness: Harness) {
    let alice = harness.user("alice").await;
    let fig = harness
        .service
        .create(&alice, new_cat("Fig"))
        .await
        .expect("create");
    let err = harness
        .service
        .associate_toy(fig.id(), ToyId::new(77).expect("id"))
        .await
        .expect_err("unknown toy");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn feedings_are_validated_then_recorded(harness: Harness) {
    let alice = harness.user("alice").await;
    let fig = harness
        .service
        .create(&alice, new_cat("Fig"))
        .await
        .expect("create");

    let older = harness
        .service
        .add_feeding(fig.id(), feeding_form(Some("2024-01-14"), Some("D")))
        .await
        .expect("feeding");
    let newer = harness
        .service
        .add_feeding(fig.id(), feeding_form(Some("2024-01-15"), Some("B")))
        .await
        .expect("feeding");

    let detail = harness.service.detail_unscoped(fig.id()).await.expect("detail");
    assert_eq!(detail.feedings, vec![newer, older]);
}

#[rstest]
#[case(feeding_form(None, Some("B")), "date")]
#[case(feeding_form(Some("2024-01-15"), None), "meal")]
#[case(feeding_form(Some("2024-01-15"), Some("X")), "meal")]
#[tokio::test]
async fn invalid_feedings_persist_nothing(
    harness: Harness,
    #[case] form: FeedingForm,
    #[case] field: &str,
) {
    let alice = harness.user("alice").await;
    let fig = harness
        .service
        .create(&alice, new_cat("Fig"))
        .await
        .expect("create");

    let err = harness
        .service
        .add_feeding(fig.id(), form)
        .await
        .expect_err("invalid form");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        err.details().and_then(|d| d.get("field")),
        Some(&serde_json::json!(field))
    );
    let detail = harness.service.detail_unscoped(fig.id()).await.expect("detail");
    assert!(detail.feedings.is_empty());
}

#[rstest]
#[tokio::test]
async fn photos_are_uploaded_then_recorded(harness: Harness) {
    let alice = harness.user("alice").await;
    let fig = harness
        .service
        .create(&alice, new_cat("Fig"))
        .await
        .expect("create");

    let photo = harness
        .service
        .add_photo(
            fig.id(),
            Some(PhotoUpload::new("fig.JPG", Some("image/jpeg".to_owned()), vec![7; 16])),
        )
        .await
        .expect("upload")
        .expect("photo recorded");

    assert!(photo.url().starts_with("memory://cats/"));
    assert!(photo.url().ends_with(".jpg"));
    assert_eq!(harness.storage.len().await, 1);
    let detail = harness.service.detail_unscoped(fig.id()).await.expect("detail");
    assert_eq!(detail.photos, vec![photo]);
}

#[rstest]
#[case(None)]
#[case(Some(PhotoUpload::new("empty.png", None, Vec::new())))]
#[tokio::test]
async fn absent_or_empty_uploads_do_nothing(#[case] upload: Option<PhotoUpload>) {
    let mut storage = MockObjectStorage::new();
    storage.expect_put_object().never();
    let mut photos = MockPhotoRepository::new();
    photos.expect_insert().never();
    let store = MemoryStore::new();
    let service = CatDirectoryService::new(CatDirectoryPorts {
        cats: Arc::new(store.cats()),
        toys: Arc::new(store.toys()),
        feedings: Arc::new(MockFeedingRepository::new()),
        photos: Arc::new(photos),
        storage: Arc::new(storage),
    });

    let result = service
        .add_photo(CatId::new(1).expect("id"), upload)
        .await
        .expect("no-op");
    assert!(result.is_none());
}

#[rstest]
#[tokio::test]
async fn photo_upload_for_unknown_cat_skips_storage() {
    let mut storage = MockObjectStorage::new();
    storage.expect_put_object().never();
    let (_store, service) = Harness::with_storage(Arc::new(storage));

    let err = service
        .add_photo(
            CatId::new(9).expect("id"),
            Some(PhotoUpload::new("a.png", None, vec![1])),
        )
        .await
        .expect_err("missing cat");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn taken_photo_keys_are_retried() {
    let mut storage = MockObjectStorage::new();
    let mut seq = mockall::Sequence::new();
    storage
        .expect_put_object()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|key, _, _| Err(ObjectStorageError::key_exists(key.as_str())));
    storage
        .expect_put_object()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|key, _, _| Ok(format!("https://s3.example/cats/{key}")));
    let (store, service) = Harness::with_storage(Arc::new(storage));
    let harness_ctx = {
        let user = User::new(UserId::random(), Username::new("alice").expect("username"));
        store
            .users()
            .insert(&user, &PasswordHash::new("$argon2id$fixture"))
            .await
            .expect("user");
        RequestContext::new(*user.id())
    };
    let fig = service
        .create(&harness_ctx, new_cat("Fig"))
        .await
        .expect("create");

    let photo = service
        .add_photo(fig.id(), Some(PhotoUpload::new("a.png", None, vec![1])))
        .await
        .expect("upload")
        .expect("photo");
    assert!(photo.url().starts_with("https://s3.example/cats/"));
}

#[rstest]
#[tokio::test]
async fn upload_failures_persist_nothing() {
    let mut storage = MockObjectStorage::new();
    storage
        .expect_put_object()
        .times(1)
        .returning(|_, _, _| Err(ObjectStorageError::upload("access denied")));
    let (store, service) = Harness::with_storage(Arc::new(storage));
    let user = User::new(UserId::random(), Username::new("alice").expect("username"));
    store
        .users()
        .insert(&user, &PasswordHash::new("$argon2id$fixture"))
        .await
        .expect("user");
    let fig = service
        .create(&RequestContext::new(*user.id()), new_cat("Fig"))
        .await
        .expect("create");

    let err = service
        .add_photo(fig.id(), Some(PhotoUpload::new("a.png", None, vec![1])))
        .await
        .expect_err("upload failure");
    assert_eq!(err.code(), ErrorCode::UploadFailed);
    let detail = service.detail_unscoped(fig.id()).await.expect("detail");
    assert!(detail.photos.is_empty());
}

#[rstest]
#[tokio::test]
async fn deleting_a_cat_removes_its_records(harness: Harness) {
    let alice = harness.user("alice").await;
    let fig = harness
        .service
        .create(&alice, new_cat("Fig"))
        .await
        .expect("create");
    harness
        .service
        .add_feeding(fig.id(), feeding_form(Some("2024-01-15"), Some("L")))
        .await
        .expect("feeding");
    harness
        .service
        .add_photo(fig.id(), Some(PhotoUpload::new("a.png", None, vec![1])))
        .await
        .expect("photo");

    harness.service.delete_unscoped(fig.id()).await.expect("delete");

    assert!(
        harness
            .store
            .feedings()
            .list_for_cat(fig.id())
            .await
            .expect("feedings")
            .is_empty()
    );
    assert!(
        harness
            .store
            .photos()
            .list_for_cat(fig.id())
            .await
            .expect("photos")
            .is_empty()
    );
    assert!(harness.service.list_scoped(&alice).await.expect("list").is_empty());
}
