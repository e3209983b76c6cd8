pub mod ebook;
pub mod interface;
pub mod lesson_view;
pub mod playground;
pub mod syntax;
