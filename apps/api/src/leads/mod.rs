// Lead Directory: bulk fetch from the leads table, cached and searched in memory.

pub mod directory;
pub mod handlers;
pub mod search;
pub mod source;

pub use directory::LeadDirectory;
pub use source::{LeadSource, PgLeadSource};
