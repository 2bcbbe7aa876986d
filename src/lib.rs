//! # tjpb-dl
//!
//! Library for downloading monthly payroll PDFs from the transparency
//! portal of the TJPB (Tribunal de Justiça da Paraíba).
//!
//! The portal lists payroll files inside containers whose `id` attribute
//! encodes the reference period (`arquivos-2013-mes-01`, or `arquivos-2011`
//! for years predating the monthly breakdown). tjpb-dl fetches that page,
//! selects the links for a requested month and year, derives a canonical
//! filename per link and streams each PDF to disk.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tjpb_dl::{Config, Crawler};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let crawler = Crawler::new(Config::default())?;
//!
//!     // January 2013: downloads remuneracoes-servidores-tjpb-01-2013.pdf
//!     // and remuneracoes-magistrados-tjpb-01-2013.pdf into the current
//!     // directory.
//!     for path in crawler.crawl(1, 2013).await? {
//!         println!("saved {}", path.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! All network calls are awaited strictly in sequence: one GET for the
//! listing page, one GET per file. There is no retry, caching or
//! concurrency layer; a failed download removes its partial output file
//! and surfaces the error to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Fetching, downloading and saving payroll files
pub mod crawler;
/// Error types
pub mod error;
/// Canonical output filename derivation
pub mod filename;
/// Link selection over the parsed listing page
pub mod page;
/// Core types and payroll summary records
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use crawler::Crawler;
pub use error::{Error, Result};
pub use filename::base_name;
pub use page::find_payroll_links;
pub use types::{
    AgencyBasic, AgencySummary, AgencyTotalsYear, Employee, MonthTotals, PayrollLink, State,
};
