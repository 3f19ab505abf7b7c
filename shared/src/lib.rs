//! # Shared Site Content Library
//!
//! Content and helpers shared between the Leptos front end (`site-web`) and the preview
//! host (`site-server`).
//!
//! ## Structure
//!
//! - **[`footer`]**: Footer content tables and their integrity check
//!   - **[`footer::FOOTER`]**: The site's footer content
//!   - **[`footer::FooterContent::validate`]**: Catch authoring mistakes before deploy
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::destination_kind`]**: Classify link destinations
//!   - **[`utils::copyright_line`]**: Format the copyright text
//!
//! ## Wire Format
//!
//! Content types implement `Serialize` only; they are `&'static` tables compiled into
//! the binary and never read back. Field names stay **snake_case** in JSON and enum
//! variants are lowercased.
//!
//! ```rust
//! use shared::footer::FOOTER;
//!
//! let json = serde_json::to_string(&FOOTER).unwrap();
//! assert!(json.contains("\"title\":\"Services\""));
//! ```

pub mod footer;
pub mod utils;

pub use footer::{
    Brand, ContentError, FooterContent, Glyph, LinkGroup, LinkItem, SocialLink, FOOTER,
};
pub use utils::{copyright_line, destination_kind, DestinationKind};
