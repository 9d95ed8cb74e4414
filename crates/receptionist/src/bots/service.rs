use std::sync::Arc;

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::info;

use super::domain::{Bot, BotId, CreateBotRequest, UpdateBotRequest};
use super::repository::{BotRepository, BotRepositoryError};

const UID_SUFFIX_LEN: usize = 9;

fn next_bot_uid() -> BotId {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(UID_SUFFIX_LEN)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect();
    BotId(format!("bot_{}_{suffix}", Utc::now().timestamp_millis()))
}

/// Service wrapping bot validation and persistence.
pub struct BotService<R> {
    repository: Arc<R>,
}

impl<R> BotService<R>
where
    R: BotRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Result<Vec<Bot>, BotServiceError> {
        Ok(self.repository.list()?)
    }

    pub fn get(&self, uid: &BotId) -> Result<Bot, BotServiceError> {
        let bot = self
            .repository
            .fetch(uid)?
            .ok_or(BotRepositoryError::NotFound)?;
        Ok(bot)
    }

    pub fn create(&self, request: CreateBotRequest) -> Result<Bot, BotServiceError> {
        require_text("name", &request.name)?;
        require_text("prompt", &request.prompt)?;

        let bot = Bot::from_request(next_bot_uid(), request, Utc::now());
        let stored = self.repository.insert(bot)?;
        info!(uid = %stored.uid.0, name = %stored.name, "bot created");
        Ok(stored)
    }

    pub fn update(&self, uid: &BotId, request: UpdateBotRequest) -> Result<Bot, BotServiceError> {
        if let Some(name) = &request.name {
            require_text("name", name)?;
        }
        if let Some(prompt) = &request.prompt {
            require_text("prompt", prompt)?;
        }

        let mut bot = self.get(uid)?;
        bot.apply(request, Utc::now());
        self.repository.update(bot.clone())?;
        info!(uid = %bot.uid.0, "bot updated");
        Ok(bot)
    }

    pub fn delete(&self, uid: &BotId) -> Result<(), BotServiceError> {
        self.repository.delete(uid)?;
        info!(uid = %uid.0, "bot deleted");
        Ok(())
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), BotServiceError> {
    if value.trim().is_empty() {
        return Err(BotServiceError::Validation { field });
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum BotServiceError {
    #[error("{field} must not be blank")]
    Validation { field: &'static str },
    #[error(transparent)]
    Repository(#[from] BotRepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bots::domain::{BotStatus, DEFAULT_VOICE, RECEPTIONIST_PROMPT};
    use crate::bots::repository::InMemoryBotRepository;

    fn service() -> BotService<InMemoryBotRepository> {
        BotService::new(Arc::new(InMemoryBotRepository::default()))
    }

    fn request(name: &str) -> CreateBotRequest {
        CreateBotRequest {
            name: name.to_string(),
            description: "Main lobby".to_string(),
            prompt: RECEPTIONIST_PROMPT.to_string(),
            voice: None,
        }
    }

    #[test]
    fn generated_uid_has_timestamp_and_suffix() {
        let uid = next_bot_uid();
        let parts: Vec<_> = uid.0.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "bot");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), UID_SUFFIX_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn create_then_get_round_trips_through_repository() {
        let service = service();
        let created = service.create(request("Front Desk")).expect("bot created");
        assert_eq!(created.voice, DEFAULT_VOICE);

        let fetched = service.get(&created.uid).expect("bot fetched");
        assert_eq!(fetched, created);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = service().create(request("  ")).expect_err("blank name rejected");
        assert!(matches!(err, BotServiceError::Validation { field: "name" }));
    }

    #[test]
    fn update_unknown_bot_is_not_found() {
        let err = service()
            .update(&BotId("missing".to_string()), UpdateBotRequest::default())
            .expect_err("unknown bot");
        assert!(matches!(
            err,
            BotServiceError::Repository(BotRepositoryError::NotFound)
        ));
    }

    #[test]
    fn update_persists_changes() {
        let service = service();
        let created = service.create(request("Front Desk")).expect("bot created");
        service
            .update(
                &created.uid,
                UpdateBotRequest {
                    status: Some(BotStatus::Inactive),
                    ..UpdateBotRequest::default()
                },
            )
            .expect("bot updated");

        let fetched = service.get(&created.uid).expect("bot fetched");
        assert_eq!(fetched.status, BotStatus::Inactive);
        assert!(fetched.updated_at >= created.updated_at);
    }

    #[test]
    fn delete_removes_bot_from_listing() {
        let service = service();
        let created = service.create(request("Front Desk")).expect("bot created");
        service.delete(&created.uid).expect("bot deleted");
        assert!(service.list().expect("list").is_empty());
    }
}
