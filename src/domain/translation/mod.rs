pub mod artifact;
pub mod credential;
pub mod dto;
pub mod error;
pub mod service;
pub mod validator;

pub use artifact::{artifact_filename, AudioArtifact, AUDIO_MIME_TYPE};
pub use credential::Credential;
pub use error::{PipelineError, Stage, SynthesisError, TranslationError, ValidationError};
pub use service::{TranslationOutcome, TranslationService, TranslationServiceApi};
pub use validator::validate;
