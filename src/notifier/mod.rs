pub mod error;
pub mod policy;
pub mod prompt;

pub use error::NotifierError;
pub use policy::{NotifierOptions, UpdateNotifier};
pub use prompt::{notify, PromptOptions, PromptResponse, PromptService};
