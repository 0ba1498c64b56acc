pub mod azure_sentiment;
pub mod azure_speech;
pub mod sentiment;
pub mod synthesis;

pub use azure_sentiment::AzureSentimentClient;
pub use azure_speech::AzureSpeechClient;
pub use sentiment::{SentimentClient, SentimentError};
pub use synthesis::{SpeechSynthesisClient, SynthesisError};
