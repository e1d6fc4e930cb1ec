//! Flutter bridge surface over `foodie_core`.

pub mod api;
