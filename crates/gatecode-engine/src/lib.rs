pub mod authenticator;
pub mod config;
pub mod decoder;
pub mod flow;
pub mod input;
pub mod transport;

pub use authenticator::CodeAuthenticatorService;
pub use config::AuthConfig;
pub use decoder::StatusDecoder;
pub use flow::OnboardingFlow;
pub use input::CodeBuffer;
pub use transport::HttpStatusTransport;
