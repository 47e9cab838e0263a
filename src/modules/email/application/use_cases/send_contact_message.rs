use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::email::application::ports::outgoing::EmailSender;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum SendContactMessageError {
    Validation(String),
    SendFailed(String),
}

impl std::fmt::Display for SendContactMessageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SendContactMessageError::Validation(msg) => write!(f, "validation failed: {}", msg),
            SendContactMessageError::SendFailed(msg) => write!(f, "mail send failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait ISendContactMessageUseCase: Send + Sync {
    async fn execute(&self, message: ContactMessage) -> Result<(), SendContactMessageError>;
}

/// Forwards a visitor message to the club inbox as a plain HTML mail.
pub struct SendContactMessageUseCase {
    sender: Arc<dyn EmailSender + Send + Sync>,
    inbox: String,
}

impl SendContactMessageUseCase {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, inbox: &str) -> Self {
        Self {
            sender,
            inbox: inbox.to_string(),
        }
    }
}

#[async_trait]
impl ISendContactMessageUseCase for SendContactMessageUseCase {
    async fn execute(&self, message: ContactMessage) -> Result<(), SendContactMessageError> {
        if message.name.trim().is_empty() {
            return Err(SendContactMessageError::Validation(
                "name must not be empty".to_string(),
            ));
        }

        let reply_to = message.email.trim();
        if reply_to.is_empty() || !reply_to.contains('@') {
            return Err(SendContactMessageError::Validation(
                "email must be a valid address".to_string(),
            ));
        }

        if message.message.trim().is_empty() {
            return Err(SendContactMessageError::Validation(
                "message must not be empty".to_string(),
            ));
        }

        let subject = format!("New contact message from {}", message.name.trim());
        let body = format!(
            "<p><strong>From:</strong> {} &lt;{}&gt;</p><p>{}</p>",
            message.name.trim(),
            reply_to,
            message.message.trim()
        );

        self.sender
            .send_email(&self.inbox, &subject, &body)
            .await
            .map_err(SendContactMessageError::SendFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::email::adapter::outgoing::mock_sender::MockEmailSender;

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            message: "When is the next mint?".to_string(),
        }
    }

    #[tokio::test]
    async fn test_execute_sends_to_configured_inbox() {
        let sender = Arc::new(MockEmailSender::new());
        let use_case = SendContactMessageUseCase::new(sender.clone(), "hello@utopia.club");

        use_case.execute(sample_message()).await.unwrap();

        let sent = sender.get_sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "hello@utopia.club");
        assert!(sent[0].1.contains("Alice"));
        assert!(sent[0].2.contains("When is the next mint?"));
    }

    #[tokio::test]
    async fn test_execute_rejects_invalid_email() {
        let sender = Arc::new(MockEmailSender::new());
        let use_case = SendContactMessageUseCase::new(sender.clone(), "hello@utopia.club");

        let mut message = sample_message();
        message.email = "not-an-address".to_string();

        let err = use_case.execute(message).await.unwrap_err();
        assert!(matches!(err, SendContactMessageError::Validation(_)));
        assert!(sender.get_sent_emails().is_empty());
    }

    #[tokio::test]
    async fn test_execute_rejects_empty_message() {
        let sender = Arc::new(MockEmailSender::new());
        let use_case = SendContactMessageUseCase::new(sender, "hello@utopia.club");

        let mut message = sample_message();
        message.message = "   ".to_string();

        let err = use_case.execute(message).await.unwrap_err();
        assert!(matches!(err, SendContactMessageError::Validation(_)));
    }

    #[tokio::test]
    async fn test_execute_maps_transport_failure() {
        struct FailingSender;

        #[async_trait]
        impl EmailSender for FailingSender {
            async fn send_email(&self, _: &str, _: &str, _: &str) -> Result<(), String> {
                Err("connection refused".to_string())
            }
        }

        let use_case = SendContactMessageUseCase::new(Arc::new(FailingSender), "hello@utopia.club");

        let err = use_case.execute(sample_message()).await.unwrap_err();
        assert!(matches!(err, SendContactMessageError::SendFailed(_)));
    }
}
