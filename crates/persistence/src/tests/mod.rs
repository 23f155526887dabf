// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use std::sync::Arc;

use crate::{LotteryRepository, SqliteBlobStore};

pub fn create_test_store() -> SqliteBlobStore {
    SqliteBlobStore::new_in_memory().expect("Failed to create in-memory blob store")
}

pub fn create_test_repository() -> LotteryRepository {
    LotteryRepository::new(Arc::new(create_test_store()))
}
