// Kernel - infrastructure shared by all command domains
//
// Traits for external services, the dependency container, and mocks for
// tests.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{CommandDeps, SlackAdapter};
pub use test_dependencies::{MockSlackService, UpdateMessageCall};
pub use traits::BaseSlackService;
