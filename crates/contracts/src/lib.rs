//! Wire contracts shared by the SEO-Copilot dashboard.
//!
//! Holds the DTOs exchanged with the article-generation backend and the
//! pure transforms the views rely on (suggestion parsing, lenient numeric
//! input, date formatting). Nothing in here touches the browser.

pub mod domain;
pub mod shared;
