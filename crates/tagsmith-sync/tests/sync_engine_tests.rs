//! Sync engine integration tests
//!
//! Exercises the full fetch -> compile -> diff -> push sequence against an
//! in-memory platform, including dry runs and the no-op path.

mod common;

use common::{remote_extension, text_definition, InMemoryPlatform};
use pretty_assertions::assert_eq;
use tagsmith_sync::{compile_definitions, SyncEngine, SyncOptions};

#[tokio::test]
async fn changed_extension_is_pushed() {
    let defs = vec![text_definition(1, "greeting", "hello")];
    let current = compile_definitions(&defs).unwrap();

    // Remote holds stale code for the same (id, type)
    let platform = InMemoryPlatform::new(vec![remote_extension(1, "greeting", "stale")]);
    let mut engine = SyncEngine::new(platform);

    let summary = engine.sync(&defs, &SyncOptions::default()).await.unwrap();
    assert_eq!(summary.generated, 1);
    assert_eq!(summary.pushed, 1);
    assert_eq!(summary.diff.update_list[0].code, current.extensions[0].code);
}

#[tokio::test]
async fn in_sync_remote_pushes_nothing() {
    let defs = vec![text_definition(1, "greeting", "hello")];
    let compiled = compile_definitions(&defs).unwrap();

    let mut remote = remote_extension(1, "greeting", "");
    remote.code = compiled.extensions[0].code.clone();

    let platform = InMemoryPlatform::new(vec![remote]);
    let mut engine = SyncEngine::new(platform);

    let summary = engine.sync(&defs, &SyncOptions::default()).await.unwrap();
    assert_eq!(summary.pushed, 0);
    assert!(summary.diff.is_clean());
}

#[tokio::test]
async fn missing_remote_counterpart_is_reported_not_created() {
    let defs = vec![text_definition(1, "greeting", "hello")];
    let platform = InMemoryPlatform::new(vec![]);
    let mut engine = SyncEngine::new(platform);

    let summary = engine.sync(&defs, &SyncOptions::default()).await.unwrap();
    assert_eq!(summary.pushed, 0);
    assert_eq!(summary.diff.not_found_list.len(), 1);
    assert_eq!(summary.diff.not_found_list[0].id, 1);
}

#[tokio::test]
async fn dry_run_computes_the_diff_without_pushing() {
    let defs = vec![
        text_definition(1, "a", "one"),
        text_definition(2, "b", "two"),
    ];
    let platform = InMemoryPlatform::new(vec![
        remote_extension(1, "a", "stale"),
        remote_extension(2, "b", "stale"),
    ]);
    let mut engine = SyncEngine::new(platform);

    let summary = engine
        .sync(&defs, &SyncOptions { dry_run: true })
        .await
        .unwrap();
    assert_eq!(summary.diff.update_list.len(), 2);
    assert_eq!(summary.pushed, 0);
}

#[tokio::test]
async fn updates_are_pushed_in_local_order() {
    let defs = vec![
        text_definition(5, "e", "x"),
        text_definition(2, "b", "y"),
        text_definition(9, "i", "z"),
    ];
    let platform = InMemoryPlatform::new(vec![
        remote_extension(5, "e", "stale"),
        remote_extension(2, "b", "stale"),
        remote_extension(9, "i", "stale"),
    ]);
    let mut engine = SyncEngine::new(platform);

    engine.sync(&defs, &SyncOptions::default()).await.unwrap();
    assert_eq!(engine_saved_ids(&engine), vec![5, 2, 9]);
}

#[tokio::test]
async fn duplicate_local_ids_abort_before_any_push() {
    let defs = vec![text_definition(1, "a", "x"), text_definition(1, "b", "y")];
    let platform = InMemoryPlatform::new(vec![remote_extension(1, "a", "stale")]);
    let mut engine = SyncEngine::new(platform);

    let err = engine.sync(&defs, &SyncOptions::default()).await.unwrap_err();
    assert!(err.to_string().contains('1'));
    assert!(engine_saved_ids(&engine).is_empty());
}

#[tokio::test]
async fn connect_failure_stops_the_run() {
    let mut platform = InMemoryPlatform::new(vec![]);
    platform.fail_connect = true;
    let mut engine = SyncEngine::new(platform);

    let err = engine
        .sync(&[text_definition(1, "a", "x")], &SyncOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("connection"));
}

fn engine_saved_ids(engine: &SyncEngine<InMemoryPlatform>) -> Vec<u64> {
    engine.platform_ref().saved_ids()
}
