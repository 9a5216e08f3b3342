//! Core library modules.
//!
//! - **Task Data**: [`task`], [`store`], [`validation`]
//! - **Persistence**: [`csv_file`], [`error`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//! - **Presentation**: [`view`]
//!
//! ```rust
//! use todo_list::libs::store::TaskStore;
//! use todo_list::libs::task::Priority;
//!
//! let mut store = TaskStore::new();
//! store.add("Buy milk", "Personal", Priority::Low);
//! assert_eq!(store.search("milk").len(), 1);
//! ```

pub mod config;
pub mod csv_file;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod store;
pub mod task;
pub mod validation;
pub mod view;
