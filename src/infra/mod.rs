//! Infrastructure adapters for application storage, interviewer directories and notices.

pub mod directory;
pub mod notify;
pub mod store;

pub use directory::{InMemoryInterviewerDirectory, InterviewerDirectory};
pub use notify::{InMemoryNotifier, TracingNotifier};
pub use store::InMemoryApplicationStore;
