pub use option_ext::OrUnknown;
pub use report::render;

pub mod report;

mod option_ext;
