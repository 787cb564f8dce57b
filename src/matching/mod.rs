pub mod keywords;
pub mod matcher;
pub mod profile;
pub mod scorer;
