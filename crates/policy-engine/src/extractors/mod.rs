pub mod keywords;
pub mod numeric;
