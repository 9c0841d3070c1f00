mod contact;
mod id;
mod photo;
mod project;
mod visit;
mod visit_detail;

pub use contact::*;
pub use id::*;
pub use photo::*;
pub use project::*;
pub use visit::*;
pub use visit_detail::*;
