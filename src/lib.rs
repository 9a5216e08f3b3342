//! # todo-list
//!
//! A small personal task tracker: an ordered list of tasks with a category,
//! a priority and a completion status, searchable by keyword and saved to a
//! plain CSV file.
//!
//! ## Features
//!
//! - **Task Store**: add, edit, complete and delete tasks with stable ids
//! - **Search**: case-insensitive keyword match over every text field
//! - **Validation**: field rules checked before anything reaches the store
//! - **CSV Files**: export and import in a fixed `id,name,category,priority,status` layout
//! - **Interactive Form**: a prompt-driven stand-in for a desktop to-do window
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_list::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
