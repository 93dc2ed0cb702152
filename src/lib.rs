//! Bid matcher library: opportunity matching and ranking engine

pub mod analysis;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod matching;
pub mod output;
pub mod profile;
pub mod sources;

pub use config::Config;
pub use error::{BidMatcherError, Result};
pub use matching::{MatchResult, Matcher};
pub use profile::CapabilityProfile;
pub use sources::Opportunity;
