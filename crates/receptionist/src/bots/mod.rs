//! Receptionist bot configurations managed on behalf of the voice platform.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    Bot, BotId, BotStatus, CreateBotRequest, UpdateBotRequest, DEFAULT_VOICE, RECEPTIONIST_PROMPT,
};
pub use repository::{BotRepository, BotRepositoryError, InMemoryBotRepository};
pub use router::bot_router;
pub use service::{BotService, BotServiceError};
