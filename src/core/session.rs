use crate::domain::model::{IdSequence, NewUser, PersonId, User};
use crate::domain::ports::Contactable;
use crate::utils::error::{PortalError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackReceipt {
    pub user_id: PersonId,
    pub message: String,
}

impl FeedbackReceipt {
    pub fn acknowledgement(&self) -> String {
        format!(
            "Feedback submitted by User ID: {} - {}",
            self.user_id, self.message
        )
    }
}

/// The single current-user slot plus the id sequence every person draws from.
#[derive(Debug, Default)]
pub struct Session {
    ids: IdSequence,
    current: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每次註冊都建立新使用者並覆蓋目前的使用者
    pub fn register(&mut self, details: NewUser) -> &User {
        let user = User::new(&mut self.ids, details);
        tracing::info!("👤 Registered user {} ({})", user.id(), user.name());
        if let Some(previous) = self.current.take() {
            tracing::debug!("Replacing previously registered user {}", previous.id());
        }
        self.current.insert(user)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn login(&self) -> Result<&User> {
        let user = self
            .current
            .as_ref()
            .ok_or_else(|| PortalError::no_active_user("log in"))?;
        tracing::info!("🔑 User {} logged in", user.id());
        Ok(user)
    }

    pub fn update_contact(&mut self, new_email: &str, new_phone_number: &str) -> Result<&User> {
        let user = self
            .current
            .as_mut()
            .ok_or_else(|| PortalError::no_active_user("update contact information"))?;
        user.update_contact_info(new_email.to_string(), new_phone_number.to_string());
        tracing::info!("📇 Contact information updated for user {}", user.id());
        Ok(&*user)
    }

    /// Feedback is acknowledged but never stored.
    pub fn submit_feedback(&self, message: &str) -> Result<FeedbackReceipt> {
        let user = self
            .current
            .as_ref()
            .ok_or_else(|| PortalError::no_active_user("submit feedback"))?;
        tracing::info!(
            "💬 Feedback from user {} ({} chars)",
            user.id(),
            message.chars().count()
        );
        Ok(FeedbackReceipt {
            user_id: user.id(),
            message: message.to_string(),
        })
    }

    /// Copy of the current user under a new id. The slot itself is left as is.
    pub fn duplicate_current(&mut self) -> Option<User> {
        let user = self.current.as_ref()?;
        Some(user.duplicate(&mut self.ids))
    }

    pub fn issued_ids(&self) -> u32 {
        self.ids.issued()
    }
}
