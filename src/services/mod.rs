pub mod email_fetcher;
pub mod submitter;
pub mod transport;

pub use email_fetcher::*;
pub use submitter::*;
pub use transport::*;
