mod error;
mod filter;
mod registry;
mod rule;

pub use error::FilterError;
pub use filter::{FilterExpr, Pattern};
pub use registry::{ActionFactory, FnFactory, Registry, RegistryBuilder, TermFactory};
pub use rule::{Action, Rule, Term};
