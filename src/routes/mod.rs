mod graphql;
mod index;

pub use graphql::{graphql, graphql_or_explorer, GRAPHQL_PATH};
pub use index::{health_check, index};
