use tower_sessions::Session;

use crate::{model::flash::FlashMessage, server::error::Error};

pub const SESSION_FLASH_KEY: &str = "fyyur:flash";

/// Flash messages queued for the next rendered page.
pub struct SessionFlash;

impl SessionFlash {
    /// Queue a message, keeping any not yet displayed
    pub async fn push(session: &Session, message: FlashMessage) -> Result<(), Error> {
        let mut messages = session
            .get::<Vec<FlashMessage>>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default();
        messages.push(message);

        session.insert(SESSION_FLASH_KEY, messages).await?;

        Ok(())
    }

    /// Remove and return every queued message in the order they were pushed
    pub async fn take(session: &Session) -> Result<Vec<FlashMessage>, Error> {
        Ok(session
            .remove::<Vec<FlashMessage>>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default())
    }
}
