pub mod a001_article;
pub mod a002_generation_config;
