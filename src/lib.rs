pub mod config;
pub mod walker;
pub mod parser;
pub mod collector;
pub mod scanner;
pub mod output;


pub use config::Config;
pub use collector::ModuleCollector;
pub use parser::extract_module_names;
pub use scanner::{ModuleScanner, ScanReport};
pub use walker::TreeWalker;
