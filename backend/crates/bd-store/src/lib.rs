//! In-memory sprint record storage
//!
//! Records live for the lifetime of the process. A `SprintStore` is a cheap
//! cloneable handle; every clone sees the same records.

pub mod clock;
pub mod error;
pub mod id_generator;
pub mod sprint_store;

pub use clock::{Clock, SystemClock};
pub use error::{Result as StoreResult, StoreError};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use sprint_store::SprintStore;
