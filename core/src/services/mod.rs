//! Business services of the SMS pipeline.

pub mod callback;
pub mod delivery;
pub mod submission;

pub use callback::CallbackService;
pub use delivery::{
    CallbackSender, DeliverySimulator, OutcomeSource, ThreadRngOutcomes, DELIVERY_SUCCESS_RATE,
    ERROR_REASONS,
};
pub use submission::{NoRecovery, PublishRecovery, SubmissionService};
