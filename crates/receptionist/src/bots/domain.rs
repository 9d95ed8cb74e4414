use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_VOICE: &str = "default";

/// System prompt for the headquarters receptionist persona.
pub const RECEPTIONIST_PROMPT: &str = "You are a professional receptionist AI for TechCorp headquarters. Your role is to:

1. Greet callers professionally and introduce yourself
2. Ask for the employee name they wish to visit or meet
3. Use the provided function to look up employee information and location
4. Provide helpful information about the employee's location, department, and availability
5. Offer to connect them or provide directions
6. Handle calls courteously and efficiently

Key behaviors:
- Always be polite and professional
- Speak clearly and at a moderate pace
- Ask for clarification if you don't understand
- Provide complete information about employee location and department
- If an employee is not available, offer alternatives or suggest the best time to call back
- Thank callers for calling TechCorp

When you receive employee information from the function call, make sure to mention:
- The employee's full name
- Their department
- Their location (floor and room number)
- Their extension number
- Whether they are currently available

Keep responses concise but informative.";

/// Identifier wrapper for bot configurations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BotId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    pub uid: BotId,
    pub name: String,
    pub description: String,
    pub prompt: String,
    pub voice: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: BotStatus,
}

impl Bot {
    pub fn from_request(uid: BotId, request: CreateBotRequest, now: DateTime<Utc>) -> Self {
        Self {
            uid,
            name: request.name,
            description: request.description,
            prompt: request.prompt,
            voice: request
                .voice
                .filter(|voice| !voice.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_VOICE.to_string()),
            created_at: now,
            updated_at: now,
            status: BotStatus::Active,
        }
    }

    /// Merge the provided fields and bump `updated_at`.
    pub fn apply(&mut self, update: UpdateBotRequest, now: DateTime<Utc>) {
        let UpdateBotRequest {
            name,
            description,
            prompt,
            voice,
            status,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(prompt) = prompt {
            self.prompt = prompt;
        }
        if let Some(voice) = voice {
            self.voice = voice;
        }
        if let Some(status) = status {
            self.status = status;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBotRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub prompt: String,
    #[serde(default)]
    pub voice: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBotRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub status: Option<BotStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 18, 10, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn request() -> CreateBotRequest {
        CreateBotRequest {
            name: "Front Desk".to_string(),
            description: "Lobby line".to_string(),
            prompt: RECEPTIONIST_PROMPT.to_string(),
            voice: None,
        }
    }

    #[test]
    fn new_bot_defaults_voice_and_status() {
        let bot = Bot::from_request(BotId("bot_1".to_string()), request(), created_at());
        assert_eq!(bot.voice, DEFAULT_VOICE);
        assert_eq!(bot.status, BotStatus::Active);
        assert_eq!(bot.created_at, bot.updated_at);
    }

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut bot = Bot::from_request(BotId("bot_1".to_string()), request(), created_at());
        let later = created_at() + chrono::Duration::minutes(5);
        bot.apply(
            UpdateBotRequest {
                voice: Some("alloy".to_string()),
                status: Some(BotStatus::Inactive),
                ..UpdateBotRequest::default()
            },
            later,
        );

        assert_eq!(bot.name, "Front Desk");
        assert_eq!(bot.voice, "alloy");
        assert_eq!(bot.status, BotStatus::Inactive);
        assert_eq!(bot.updated_at, later);
        assert_eq!(bot.created_at, created_at());
    }

    #[test]
    fn status_serializes_lowercase() {
        let bot = Bot::from_request(BotId("bot_1".to_string()), request(), created_at());
        let value = serde_json::to_value(&bot).expect("serializes");
        assert_eq!(value["status"], "active");
        assert_eq!(value["uid"], "bot_1");
    }
}
