pub mod error;
pub mod request;
pub mod sheet;

pub use error::{HostError, RenumberError, Result};
pub use request::{RenumberOutcome, RenumberRequest, Selection};
pub use sheet::{AttributeDefinition, DefinitionId, Sheet, SheetId};
