//! Output generation for aggregated headlines.
//!
//! # Submodules
//!
//! - [`text`]: Terminal listing of headlines and links
//! - [`json`]: Writes a [`Digest`](crate::models::Digest) to a dated JSON file
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── morning.json
//!     ├── afternoon.json
//!     └── evening.json
//! ```

pub mod json;
pub mod text;
