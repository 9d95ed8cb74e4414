use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{Bot, BotId};

/// Storage abstraction so bots can live in memory, a file, or the upstream platform.
pub trait BotRepository: Send + Sync {
    fn insert(&self, bot: Bot) -> Result<Bot, BotRepositoryError>;
    fn list(&self) -> Result<Vec<Bot>, BotRepositoryError>;
    fn fetch(&self, uid: &BotId) -> Result<Option<Bot>, BotRepositoryError>;
    fn update(&self, bot: Bot) -> Result<(), BotRepositoryError>;
    fn delete(&self, uid: &BotId) -> Result<(), BotRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BotRepositoryError {
    #[error("bot already exists")]
    Conflict,
    #[error("bot not found")]
    NotFound,
    #[error("bot store unavailable: {0}")]
    Unavailable(String),
}

/// Process-local store keeping bots in creation order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBotRepository {
    bots: Arc<Mutex<Vec<Bot>>>,
}

impl InMemoryBotRepository {
    fn guard(&self) -> Result<MutexGuard<'_, Vec<Bot>>, BotRepositoryError> {
        self.bots
            .lock()
            .map_err(|_| BotRepositoryError::Unavailable("bot store lock poisoned".to_string()))
    }
}

impl BotRepository for InMemoryBotRepository {
    fn insert(&self, bot: Bot) -> Result<Bot, BotRepositoryError> {
        let mut bots = self.guard()?;
        if bots.iter().any(|existing| existing.uid == bot.uid) {
            return Err(BotRepositoryError::Conflict);
        }
        bots.push(bot.clone());
        Ok(bot)
    }

    fn list(&self) -> Result<Vec<Bot>, BotRepositoryError> {
        Ok(self.guard()?.clone())
    }

    fn fetch(&self, uid: &BotId) -> Result<Option<Bot>, BotRepositoryError> {
        let bots = self.guard()?;
        Ok(bots.iter().find(|bot| &bot.uid == uid).cloned())
    }

    fn update(&self, bot: Bot) -> Result<(), BotRepositoryError> {
        let mut bots = self.guard()?;
        let slot = bots
            .iter_mut()
            .find(|existing| existing.uid == bot.uid)
            .ok_or(BotRepositoryError::NotFound)?;
        *slot = bot;
        Ok(())
    }

    fn delete(&self, uid: &BotId) -> Result<(), BotRepositoryError> {
        let mut bots = self.guard()?;
        let before = bots.len();
        bots.retain(|bot| &bot.uid != uid);
        if bots.len() == before {
            return Err(BotRepositoryError::NotFound);
        }
        Ok(())
    }
}
