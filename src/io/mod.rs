pub mod reader;

pub use reader::{ReaderConfig, YamlReader};
