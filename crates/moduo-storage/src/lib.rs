//! Type-safe key-value persistence layer for Moduo.
//!
//! Stores each key as a standalone JSON document under a root directory,
//! mirroring the write-whole-document semantics of web local storage. The
//! stores in `moduo-commerce` treat writes as best-effort: a failed write is
//! logged and never rolls back an in-memory mutation.
//!
//! # Example
//!
//! ```rust,ignore
//! use moduo_storage::KvStore;
//!
//! let store = KvStore::open(".moduo")?;
//! store.set("moduo-cart", &cart_state)?;
//! let state: Option<CartState> = store.get("moduo-cart")?;
//! ```

mod error;
mod kv;

pub use error::StorageError;
pub use kv::KvStore;
