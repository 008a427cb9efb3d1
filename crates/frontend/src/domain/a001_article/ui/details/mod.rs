//! Article review UI
//!
//! - view_model.rs: state and commands (save, publish, suggestions)
//! - view.rs: route component and layout

mod view;
mod view_model;

pub use view::ReviewArticle;
pub use view_model::ArticleReviewVm;
