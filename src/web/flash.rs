//! Values that survive exactly one redirect.
//!
//! Every `take_*` reads and removes, so a refresh does not show the same
//! message twice.

use tower_sessions::Session;
use tower_sessions::session::Error;

use crate::constants::session_keys;
use crate::models::ReviewFormState;

pub struct Flash {
    session: Session,
}

impl Flash {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn set_errors(&self, errors: &[String]) -> Result<(), Error> {
        self.session.insert(session_keys::FLASH_ERRORS, errors).await
    }

    pub async fn set_success(&self, message: &str) -> Result<(), Error> {
        self.session.insert(session_keys::FLASH_SUCCESS, message).await
    }

    pub async fn set_old_input(&self, form: &ReviewFormState) -> Result<(), Error> {
        self.session.insert(session_keys::REVIEW_OLD_INPUT, form).await
    }

    pub async fn take_errors(&self) -> Result<Vec<String>, Error> {
        Ok(self
            .session
            .remove::<Vec<String>>(session_keys::FLASH_ERRORS)
            .await?
            .unwrap_or_default())
    }

    pub async fn take_success(&self) -> Result<Option<String>, Error> {
        self.session.remove(session_keys::FLASH_SUCCESS).await
    }

    pub async fn take_old_input(&self) -> Result<Option<ReviewFormState>, Error> {
        self.session.remove(session_keys::REVIEW_OLD_INPUT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tower_sessions::MemoryStore;

    fn flash() -> Flash {
        Flash::new(Session::new(None, Arc::new(MemoryStore::default()), None))
    }

    #[tokio::test]
    async fn test_values_are_read_once() {
        let flash = flash();
        flash.set_errors(&["Title is required.".to_string()]).await.unwrap();
        flash.set_success("Thanks!").await.unwrap();

        assert_eq!(flash.take_errors().await.unwrap(), vec!["Title is required."]);
        assert_eq!(flash.take_success().await.unwrap().as_deref(), Some("Thanks!"));

        assert!(flash.take_errors().await.unwrap().is_empty());
        assert!(flash.take_success().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_old_input_round_trip() {
        let flash = flash();
        let form = ReviewFormState {
            title: Some("Great pizza".to_string()),
            rating: Some("9".to_string()),
            ..Default::default()
        };
        flash.set_old_input(&form).await.unwrap();

        assert_eq!(flash.take_old_input().await.unwrap(), Some(form));
        assert_eq!(flash.take_old_input().await.unwrap(), None);
    }
}
