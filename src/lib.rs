//! byok-catalog: model catalog resolution for bring-your-own-key chat models.
//!
//! Decides which model ids a user sees in the model picker and what each one
//! advertises (vision, tool calling, token limits). A possibly stale remote
//! manifest is merged with a locally authored override table, and access is
//! gated on account-tier flags. A small classifier maps chat participants to
//! analytics mode labels.
//!
//! # Quick Start
//!
//! ```
//! use byok_catalog::prelude::*;
//!
//! # fn main() -> byok_catalog::error::Result<()> {
//! let flags = AccountTierFlags::default();
//! assert!(byok_catalog::eligibility::is_enabled(&flags));
//!
//! let overrides = OverrideTable::builtin();
//! let remote = vec![RemoteModelEntry::new("claude-sonnet-4-0")];
//! let catalog = byok_catalog::catalog::resolve("Anthropic", &remote, &overrides)?;
//!
//! let sonnet = catalog.get("claude-sonnet-4-0").expect("resolved");
//! assert_eq!(sonnet.origin, Origin::Merged);
//! assert_eq!(sonnet.capabilities.max_output_tokens, 64_000);
//!
//! assert_eq!(byok_catalog::intents::classify("workspace"), ModeLabel::Ask);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod intents;
pub mod models;
pub mod prelude;
pub mod provider;
pub mod util;
