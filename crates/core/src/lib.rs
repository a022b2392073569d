pub mod catalog;
pub mod config;
pub mod filter;
pub mod form;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod views;

pub use catalog::{Catalog, Category, DescriptionBlock, ProjectEntry};
pub use config::{Thresholds, Timings};
pub use filter::{FilterController, FilterTransition};
pub use form::{FormMessage, FormPhase, FormState, SubmitOutcome};
pub use modal::{ModalController, ModalState};
pub use nav::{MenuState, SectionSpan};
pub use reveal::RevealSet;
