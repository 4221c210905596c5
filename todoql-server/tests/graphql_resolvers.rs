//! Resolver behavior through the executable schema

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use async_graphql::{Request, Variables};
use async_trait::async_trait;
use serde_json::{json, Value};
use todoql_server::db::StoreResult;
use todoql_server::{
    build_schema, NewTodo, SqliteTodoStore, Todo, TodoChanges, TodoSchema, TodoStore,
};

async fn run(schema: &TodoSchema, query: &str) -> Value {
    serde_json::to_value(schema.execute(query).await).unwrap()
}

fn error_code(response: &Value) -> Option<&str> {
    response["errors"][0]["extensions"]["code"].as_str()
}

#[tokio::test]
async fn todo_list_returns_seed_data() {
    let schema = build_schema(common::shared(common::seeded_store().await));

    let response = run(&schema, "{ todoList { id text done } }").await;

    assert!(response.get("errors").is_none());
    let list = response["data"]["todoList"].as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(
        list[0],
        json!({"id": 1, "text": "A todo not to forget", "done": false})
    );
}

#[tokio::test]
async fn created_todo_appears_in_list() {
    let schema = build_schema(common::shared(common::seeded_store().await));

    let created = run(
        &schema,
        r#"mutation { createTodo(text: "buy milk") { id text done } }"#,
    )
    .await;
    let id = created["data"]["createTodo"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["createTodo"]["done"], false);

    let response = run(&schema, "{ todoList { id text done } }").await;
    let list = response["data"]["todoList"].as_array().unwrap();

    assert!(list.contains(&json!({"id": id, "text": "buy milk", "done": false})));
}

#[tokio::test]
async fn repeated_creates_get_distinct_ids() {
    let schema = build_schema(common::shared(common::empty_store().await));

    let mut ids = HashSet::new();
    for text in ["one", "two", "three"] {
        let response = run(
            &schema,
            &format!(r#"mutation {{ createTodo(text: "{}") {{ id }} }}"#, text),
        )
        .await;
        ids.insert(response["data"]["createTodo"]["id"].as_i64().unwrap());
    }

    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn list_count_matches_creates_plus_seed() {
    let store = common::seeded_store().await;
    let schema = build_schema(common::shared(store.clone()));

    for i in 0..4 {
        run(
            &schema,
            &format!(r#"mutation {{ createTodo(text: "item {}") {{ id }} }}"#, i),
        )
        .await;
    }

    let response = run(&schema, "{ todoList { id } }").await;
    assert_eq!(response["data"]["todoList"].as_array().unwrap().len(), 3 + 4);
    assert_eq!(store.count().await.unwrap(), 7);
}

#[tokio::test]
async fn todo_without_id_is_empty_value() {
    let schema = build_schema(common::shared(common::seeded_store().await));

    let response = run(&schema, "{ todo { id text done } }").await;

    assert!(response.get("errors").is_none());
    assert_eq!(
        response["data"]["todo"],
        json!({"id": 0, "text": "", "done": false})
    );
}

#[tokio::test]
async fn todo_with_missing_id_is_not_found() {
    let schema = build_schema(common::shared(common::seeded_store().await));

    let response = run(&schema, "{ todo(id: 404) { id text done } }").await;

    assert_eq!(response["data"]["todo"], Value::Null);
    assert_eq!(error_code(&response), Some("NOT_FOUND"));
}

#[tokio::test]
async fn todo_with_wrong_typed_id_is_validation_error() {
    let store = common::seeded_store().await;
    let schema = build_schema(common::shared(store));

    let response = run(&schema, r#"{ todo(id: "b") { id } }"#).await;

    assert!(response["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert_eq!(response["data"], Value::Null);
}

#[tokio::test]
async fn update_then_read_reflects_done() {
    let schema = build_schema(common::shared(common::seeded_store().await));

    let updated = run(
        &schema,
        "mutation { updateTodo(id: 2, done: true) { id text done } }",
    )
    .await;
    assert_eq!(
        updated["data"]["updateTodo"],
        json!({"id": 2, "text": "This is the most important", "done": true})
    );

    let read = run(&schema, "{ todo(id: 2) { done } }").await;
    assert_eq!(read["data"]["todo"]["done"], true);
}

#[tokio::test]
async fn update_bumps_stored_version() {
    let store = common::seeded_store().await;
    let schema = build_schema(common::shared(store.clone()));

    run(&schema, "mutation { updateTodo(id: 1, done: true) { id } }").await;
    run(&schema, "mutation { updateTodo(id: 1, done: false) { id } }").await;

    let stored = store.get_by_id(1).await.unwrap();
    assert_eq!(stored.version, 3);
    assert!(!stored.done);
}

#[tokio::test]
async fn update_without_done_leaves_row_untouched() {
    let store = common::seeded_store().await;
    let schema = build_schema(common::shared(store.clone()));

    let response = run(&schema, "mutation { updateTodo(id: 3) { id done } }").await;

    assert_eq!(response["data"]["updateTodo"], json!({"id": 3, "done": false}));
    assert_eq!(store.get_by_id(3).await.unwrap().version, 1);
}

#[tokio::test]
async fn update_text_only() {
    let schema = build_schema(common::shared(common::seeded_store().await));

    let response = run(
        &schema,
        r#"mutation { updateTodo(id: 3, text: "rewritten") { text done } }"#,
    )
    .await;

    assert_eq!(
        response["data"]["updateTodo"],
        json!({"text": "rewritten", "done": false})
    );
}

#[tokio::test]
async fn update_missing_id_is_not_found() {
    let schema = build_schema(common::shared(common::seeded_store().await));

    let response = run(&schema, "mutation { updateTodo(id: 99, done: true) { id } }").await;

    assert_eq!(response["data"]["updateTodo"], Value::Null);
    assert_eq!(error_code(&response), Some("NOT_FOUND"));
}

#[tokio::test]
async fn create_without_text_is_rejected_and_persists_nothing() {
    let store = common::seeded_store().await;
    let schema = build_schema(common::shared(store.clone()));

    let response = run(&schema, "mutation { createTodo { id } }").await;

    assert!(response["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn create_with_wrong_typed_text_is_rejected() {
    let store = common::seeded_store().await;
    let schema = build_schema(common::shared(store.clone()));

    let response = run(&schema, "mutation { createTodo(text: 12) { id } }").await;

    assert!(response["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn create_with_overlong_text_is_validation_error() {
    let store = common::empty_store().await;
    let schema = build_schema(common::shared(store.clone()));

    let request = Request::new("mutation Create($text: String!) { createTodo(text: $text) { id } }")
        .variables(Variables::from_json(json!({ "text": "x".repeat(2000) })));
    let response = serde_json::to_value(schema.execute(request).await).unwrap();

    assert_eq!(error_code(&response), Some("VALIDATION"));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn variables_bind_typed_arguments() {
    let schema = build_schema(common::shared(common::seeded_store().await));

    let request = Request::new(
        "mutation Mark($id: Int!, $done: Boolean) { updateTodo(id: $id, done: $done) { id done } }",
    )
    .variables(Variables::from_json(json!({ "id": 1, "done": true })));
    let response = serde_json::to_value(schema.execute(request).await).unwrap();

    assert_eq!(response["data"]["updateTodo"], json!({"id": 1, "done": true}));
}

#[tokio::test]
async fn version_is_not_queryable() {
    let schema = build_schema(common::shared(common::seeded_store().await));

    let response = run(&schema, "{ todoList { id version } }").await;

    assert!(response["errors"].as_array().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn failed_update_keeps_sibling_create() {
    let store = common::seeded_store().await;
    let schema = build_schema(common::shared(store.clone()));

    let response = run(
        &schema,
        r#"mutation {
            createTodo(text: "survives") { text }
            updateTodo(id: 99, done: true) { id }
        }"#,
    )
    .await;

    assert_eq!(response["data"]["createTodo"], json!({"text": "survives"}));
    assert_eq!(response["data"]["updateTodo"], Value::Null);
    assert_eq!(error_code(&response), Some("NOT_FOUND"));
    assert_eq!(store.count().await.unwrap(), 4);
}

/// Store that lands a competing write between a caller's read and its write
struct InterleavedWriter {
    inner: SqliteTodoStore,
}

#[async_trait]
impl TodoStore for InterleavedWriter {
    async fn get_by_id(&self, id: i64) -> StoreResult<Todo> {
        self.inner.get_by_id(id).await
    }

    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        self.inner.find_all().await
    }

    async fn insert(&self, todo: NewTodo) -> StoreResult<Todo> {
        self.inner.insert(todo).await
    }

    async fn update_columns(
        &self,
        id: i64,
        expected_version: i64,
        changes: TodoChanges,
    ) -> StoreResult<Todo> {
        let competing = TodoChanges {
            text: Some("written elsewhere".into()),
            ..Default::default()
        };
        self.inner
            .update_columns(id, expected_version, competing)
            .await?;
        self.inner.update_columns(id, expected_version, changes).await
    }

    async fn count(&self) -> StoreResult<i64> {
        self.inner.count().await
    }
}

#[tokio::test]
async fn concurrent_write_surfaces_as_conflict() {
    let inner = common::seeded_store().await;
    let schema = build_schema(Arc::new(InterleavedWriter {
        inner: inner.clone(),
    }));

    let response = run(&schema, "mutation { updateTodo(id: 1, done: true) { id done } }").await;

    assert_eq!(response["data"]["updateTodo"], Value::Null);
    assert_eq!(error_code(&response), Some("CONFLICT"));

    let stored = inner.get_by_id(1).await.unwrap();
    assert_eq!(stored.text, "written elsewhere");
    assert!(!stored.done);
    assert_eq!(stored.version, 2);
}
