pub mod app;
pub mod errors;
pub mod fs_op;
pub mod input;
pub mod runner;
pub mod ui;

pub use crate::app::{App, Editor, InputKind, Mode};
pub use crate::fs_op::{Entry, EntryKind, FileStore, IoErrorClass, StoreError};
