pub mod document;
pub mod matrix;
pub mod node;
pub mod path;
pub mod readable;

pub use document::Document;
pub use matrix::Matrix;
pub use node::Node;
pub use path::LabelPath;
pub use readable::Readable;
