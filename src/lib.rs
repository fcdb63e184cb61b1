//! Release and changelog helpers for RPM spec files.
//!
//! Packaging tools that manage `%autorelease` and `%autochangelog` need a
//! handful of small operations on a package's dist-git checkout:
//!
//! - **EVR handling** - parse `[epoch:]version[-release]` and order it the way rpm does
//! - **Spec introspection** - detect the `%autorelease` / `%autochangelog` macros
//! - **Version query** - render the spec's version through `rpm --specfile`
//! - **Git access** - read and move HEAD through the system `git`
//! - **Koji sessions** - construct or adopt a build-system session handle
//!
//! Everything that spawns a process goes through a
//! [`CommandRunner`](core::process::CommandRunner), so callers can substitute
//! their own.
//!
//! # Example
//!
//! ```rust,ignore
//! use autospec::core::context::AutospecContext;
//! use autospec::rpm::specfile::{specfile_uses_rpmautospec, AutospecChecks};
//!
//! let ctx = AutospecContext::load(std::path::Path::new("."), None)?;
//! let uses = specfile_uses_rpmautospec(&ctx.rpm(), "foo.spec".as_ref(), AutospecChecks::default())?;
//! let version = ctx.rpm().current_version("foo".as_ref(), None, true).version();
//! let head = ctx.git("foo".as_ref()).head_commit(&[])?;
//! ```

pub mod core;
pub mod koji;
pub mod rpm;

pub use crate::core::error::{AutospecError, AutospecResult};
pub use crate::core::process::{CommandRunner, SystemRunner, run_command};
pub use crate::core::vcs::SystemGit;
pub use crate::koji::{KojiSession, SessionSource, koji_init};
pub use crate::rpm::evr::{Evr, parse_evr};
pub use crate::rpm::query::SpecVersion;
pub use crate::rpm::specfile::{AutospecChecks, check_autochangelog_presence, specfile_uses_rpmautospec};
pub use crate::rpm::{AUTORELEASE_MACRO, AUTORELEASE_SENTINEL, Rpm};
