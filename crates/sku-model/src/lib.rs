pub mod error;
pub mod normalize;
pub mod report;

pub use error::{MapperError, Result};
pub use normalize::{is_blank, normalize_sku};
pub use report::AnnotateReport;
