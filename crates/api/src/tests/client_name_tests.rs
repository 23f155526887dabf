// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{TestContext, create_test_context};
use crate::ApiError;

#[tokio::test]
async fn test_unknown_client_has_no_name() {
    let ctx: TestContext = create_test_context();

    assert!(ctx.client_names.get_client_name("c1").await.unwrap().is_none());
    assert_eq!(
        ctx.client_names.display_name("c1").await.unwrap(),
        "Anonymous participant"
    );
}

#[tokio::test]
async fn test_save_client_name_trims() {
    let ctx: TestContext = create_test_context();

    let saved: String = ctx
        .client_names
        .save_client_name("c1", "  Alice  ")
        .await
        .unwrap();

    assert_eq!(saved, "Alice");
    assert_eq!(
        ctx.client_names.get_client_name("c1").await.unwrap().as_deref(),
        Some("Alice")
    );
    assert_eq!(ctx.client_names.display_name("c1").await.unwrap(), "Alice");
}

#[tokio::test]
async fn test_blank_client_name_is_rejected() {
    let ctx: TestContext = create_test_context();

    let err: ApiError = ctx
        .client_names
        .save_client_name("c1", "   ")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::InvalidInput {
            message: String::from("Missing name")
        }
    );
    assert!(ctx.client_names.get_client_name("c1").await.unwrap().is_none());
}
