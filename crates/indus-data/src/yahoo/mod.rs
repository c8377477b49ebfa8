//! Yahoo Finance company profile lookups.

pub mod profile;

pub use profile::{CompanyProfile, YahooProfileProvider};
