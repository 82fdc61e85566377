//! News Store - File-Backed News Text
//!
//! Holds a single free-form "news" string as the entire contents of one file.
//! The text is stored raw, with its lightweight markup tags intact, and is
//! expanded to Discord markdown only when read for display.
//!
//! # Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), news_store::NewsError> {
//! use news_store::NewsStore;
//!
//! let store = NewsStore::new("update.txt");
//! store.save("[b]v0.3[/b][br][li]new serve animation").await?;
//! println!("{}", store.load().await?);
//! # Ok(())
//! # }
//! ```

mod error;
pub mod markup;
mod store;

pub use error::NewsError;
pub use store::{NewsStore, PLACEHOLDER};
