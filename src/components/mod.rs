//! UI Components
//!
//! Leptos components for the news page.

mod article_card;
mod article_grid;
mod error_panel;
mod header;
mod loading_spinner;
mod pagination_bar;
mod reader_panel;
mod search_bar;
mod sort_select;

pub use article_card::ArticleCard;
pub use article_grid::ArticleGrid;
pub use error_panel::ErrorPanel;
pub use header::Header;
pub use loading_spinner::LoadingSpinner;
pub use pagination_bar::PaginationBar;
pub use reader_panel::ReaderPanel;
pub use search_bar::SearchBar;
pub use sort_select::SortSelect;
