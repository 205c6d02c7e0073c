pub mod company_extractor;
pub mod data_persistance;
pub mod error;
pub mod page_fetcher;
pub mod react_agent;

pub use company_extractor::*;
pub use data_persistance::*;
pub use error::*;
pub use page_fetcher::*;
pub use react_agent::*;
