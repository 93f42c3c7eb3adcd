// Collaborators around the pure core: input coalescing and render model.
pub mod debounce;
pub mod presenter;

pub use debounce::{Debouncer, Ticket};
pub use presenter::{present, AdvisoryPanel, BalanceTone, BalanceView, Presentation};
