pub mod pages;
pub mod survey;
