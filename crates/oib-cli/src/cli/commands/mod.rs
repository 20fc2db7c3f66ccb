//! CLI command handlers. Each command is in its own file for clarity and line limit.

mod boards;
mod completions;
mod distributors;
mod files;
mod man;
mod os_list;
mod url;

pub use boards::run_boards;
pub use completions::run_completions;
pub use distributors::run_distributors;
pub use files::run_files;
pub use man::run_man;
pub use os_list::run_os;
pub use url::run_url;
