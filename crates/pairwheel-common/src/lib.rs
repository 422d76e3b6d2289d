pub mod errors;
pub mod events;
pub mod id;
pub mod person;
pub mod types;

pub use errors::{ConfigError, PairingError, PairwheelError};
pub use events::{EventBus, SessionEvent};
pub use id::SessionId;
pub use person::Person;
pub use types::RoundState;

pub type Result<T> = std::result::Result<T, PairwheelError>;
