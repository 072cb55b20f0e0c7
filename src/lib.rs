//! Secret Sweeper — maintenance CLI for Google Secret Manager.
//!
//! Enumerates all secrets and versions in a project, caches snapshots
//! locally, and disables stale enabled versions while keeping the newest
//! version active per secret.
//!
//! # Quick start
//!
//! ```no_run
//! use sweeper::api::Sweeper;
//! use sweeper::config::Config;
//!
//! let config = Config::from_env(Some("my-project"))?;
//! let mut sweeper = Sweeper::remote(&config, true)?;
//! let report = sweeper.sweep(true)?;
//! println!("{} secrets checked, {} stale versions", report.secrets, report.disabled());
//! # Ok::<(), sweeper::error::SweeperError>(())
//! ```

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod model;
pub mod policy;
pub mod snapshot;
pub mod source;
pub mod types;
