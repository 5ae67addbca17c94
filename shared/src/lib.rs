pub mod edit;
pub mod error;
pub mod ops;
pub mod state;
pub mod styles;
pub mod types;

pub use edit::{Draft, EditState};
pub use error::AccordionError;
pub use state::AccordionState;
pub use styles::{AccordionStyles, Declarations};
pub use types::*;
