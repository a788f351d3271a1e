//! Naming Conventions puzzle: variant choice, submission checks and the
//! instance wired to its host

pub mod animation;
pub mod collaborators;
pub mod labels;
pub mod naming_conventions;
pub mod selector;
pub mod set_once;
pub mod validator;

pub use animation::JiggleAnimation;
pub use collaborators::{DisplaySink, InputEvent, InputSource, ReportSink};
pub use naming_conventions::{NamingConventions, PressOutcome};
pub use selector::{Selection, VariantSelector, INDEX_BOUND};
pub use set_once::SetOnce;
pub use validator::{
    InputVector, SubmissionValidator, ValidationResult, BUTTON_COUNT, SUBMIT_BUTTON,
};
