//! In-memory [`UserApi`] for command and UI tests.
//!
//! # Example
//!
//! ```ignore
//! use dormmeal_business::test_utils::{RecordingUserApi, ApiCall, sample_users};
//!
//! let api = RecordingUserApi::with_users(sample_users());
//! api.fail_next_update();
//! // ... dispatch commands against `Arc::new(api.clone())`
//! assert_eq!(api.count(ApiCall::is_fetch), 1);
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::user_management::{ApiResult, UserApi, UserApiError};
use crate::{User, UserId, UserStatus};

/// One call observed by [`RecordingUserApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    GetUsers,
    UpdateUser(UserId, User),
    DeleteUser(UserId),
}

impl ApiCall {
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::GetUsers)
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Self::UpdateUser(..))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Self::DeleteUser(_))
    }
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    calls: Vec<ApiCall>,
    fail_fetch: bool,
    fail_update: bool,
    fail_delete: bool,
}

/// Serves a shared in-memory list and records every call.
///
/// Successful updates and deletes are applied to the list, so a follow-up
/// fetch sees them. Clones share the same list and log.
#[derive(Debug, Clone, Default)]
pub struct RecordingUserApi {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingUserApi {
    pub fn with_users(users: Vec<User>) -> Self {
        let api = Self::default();
        api.lock().users = users;
        api
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn fail_fetches(&self) {
        self.lock().fail_fetch = true;
    }

    pub fn fail_next_update(&self) {
        self.lock().fail_update = true;
    }

    pub fn fail_next_delete(&self) {
        self.lock().fail_delete = true;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    pub fn count(&self, predicate: impl Fn(&ApiCall) -> bool) -> usize {
        self.lock().calls.iter().filter(|call| predicate(call)).count()
    }

    pub fn users(&self) -> Vec<User> {
        self.lock().users.clone()
    }
}

fn injected_failure() -> UserApiError {
    UserApiError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[async_trait]
impl UserApi for RecordingUserApi {
    async fn get_users(&self) -> ApiResult<Vec<User>> {
        let mut inner = self.lock();
        inner.calls.push(ApiCall::GetUsers);
        if inner.fail_fetch {
            return Err(injected_failure());
        }
        Ok(inner.users.clone())
    }

    async fn update_user(&self, id: UserId, user: &User) -> ApiResult<()> {
        let mut inner = self.lock();
        inner.calls.push(ApiCall::UpdateUser(id, user.clone()));
        if std::mem::take(&mut inner.fail_update) {
            return Err(injected_failure());
        }
        if let Some(existing) = inner.users.iter_mut().find(|u| u.id == id) {
            *existing = user.clone();
        }
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        let mut inner = self.lock();
        inner.calls.push(ApiCall::DeleteUser(id));
        if std::mem::take(&mut inner.fail_delete) {
            return Err(injected_failure());
        }
        inner.users.retain(|u| u.id != id);
        Ok(())
    }
}

/// Three students with distinct names, emails and rooms.
pub fn sample_users() -> Vec<User> {
    vec![
        User::new("1", "Asha Rao", "asha@hostel.edu", "B-204", UserStatus::Active),
        User::new("2", "Ben Okafor", "ben.o@mail.com", "A-110", UserStatus::Inactive),
        User::new("3", "Chen Wei", "cwei@hostel.edu", "B-210", UserStatus::Active),
    ]
}
