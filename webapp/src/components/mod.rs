pub mod navigation;
pub mod search_bar;
