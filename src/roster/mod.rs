pub mod loader;
pub mod operator;
pub mod validate;

pub use loader::{load_roster_file, parse_roster, LoadError};
pub use operator::{Operator, DEFAULT_POTENTIAL};
pub use validate::{
    validate_roster, FieldDiagnostic, RosterError, ValidatedRoster, REQUIRED_FIELDS,
};
