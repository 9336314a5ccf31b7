pub mod note;
pub mod pages;
