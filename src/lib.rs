//! # devfolio
//!
//! A personal DevOps portfolio for the terminal.
//!
//! devfolio renders a searchable project catalog, a skills grid, a career
//! timeline, and a contact card, and ships two collections of reusable
//! infrastructure templates (Dockerfiles and CI/CD pipelines) that can be
//! printed or saved to disk byte-for-byte.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌─────────────┐
//! │   Builtin    │──▶│   Catalog    │──▶│  Rendering  │
//! │ data + TOML  │   │   filter     │   │ text / JSON │
//! └──────────────┘   └──────────────┘   └──────┬──────┘
//!                                              │
//!                           ┌──────────────────┤
//!                           ▼                  ▼
//!                     ┌──────────┐       ┌──────────┐
//!                     │  Export  │       │   HTTP   │
//!                     │ (files)  │       │ fetch +  │
//!                     └──────────┘       │  relay   │
//!                                        └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! folio projects                  # list all projects
//! folio projects kubernetes       # filter by keyword
//! folio save slack                # save a project's showcase document
//! folio templates                 # list Dockerfile and pipeline templates
//! folio templates save node
//! folio contact send --name "Ada" --email ada@example.com --message "Hi"
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`catalog`] | Case-insensitive substring filtering |
//! | [`builtin`] | Builtin portfolio content |
//! | [`export`] | Literal file export |
//! | [`fetch`] | Remote document download |
//! | [`relay`] | Contact mail-relay client |
//! | [`projects`] | Project listing command |
//! | [`save`] | Project document download command |
//! | [`templates`] | Template list/show/save commands |
//! | [`skills`] | Skill matrix command |
//! | [`timeline`] | Career timeline command |
//! | [`about`] | Introduction block command |
//! | [`contact`] | Contact card and relay send commands |

pub mod about;
pub mod builtin;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod export;
pub mod fetch;
pub mod models;
pub mod projects;
pub mod relay;
pub mod save;
pub mod skills;
pub mod templates;
pub mod timeline;

/// User-Agent sent on every outbound HTTP request.
pub const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));
