mod policy;
mod view;

pub use policy::{
    apply_transition, QuickAction, TransitionError, TransitionNotice, TransitionOutcome,
    TransitionRequest,
};
pub use view::{snapshot, BoardColumnView, BoardCounts, BoardFilter, BoardSnapshot, CaseCardView, RiskBand};
