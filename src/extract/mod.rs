pub mod cache;
pub mod descriptor;
pub mod extractor;
pub mod labels;
pub mod visibility;
