use juniper::GraphQLObject;

use crate::{domain::Page, models::{Meal, Restaurant, Rfid}};

use super::Context;

#[derive(GraphQLObject, Debug, Clone, PartialEq)]
#[graphql(context = Context)]
pub struct PageInfo{
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>
}

// Declares the edge and connection object types wrapping one node type
macro_rules! connection {
    ($connection:ident, $edge:ident, $node:ty) => {
        #[derive(GraphQLObject)]
        #[graphql(context = Context)]
        pub struct $edge{
            pub node: $node,
            pub cursor: String
        }

        #[derive(GraphQLObject)]
        #[graphql(context = Context)]
        pub struct $connection{
            pub edges: Vec<$edge>,
            pub page_info: PageInfo,
            pub total_count: i32
        }

        impl From<Page<$node>> for $connection {
            fn from(page: Page<$node>) -> Self {
                let window = page.window;
                let total_count = i32::try_from(page.total).unwrap_or(i32::MAX);

                let edges: Vec<$edge> = page
                    .into_edges()
                    .map(|(cursor, node)| $edge{ node, cursor })
                    .collect();

                let page_info = PageInfo{
                    has_next_page: window.has_next_page,
                    has_previous_page: window.has_previous_page,
                    start_cursor: edges.first().map(|edge| edge.cursor.clone()),
                    end_cursor: edges.last().map(|edge| edge.cursor.clone())
                };

                $connection{ edges, page_info, total_count }
            }
        }
    };
}

connection!(RestaurantConnection, RestaurantEdge, Restaurant);
connection!(RfidConnection, RfidEdge, Rfid);
connection!(MealConnection, MealEdge, Meal);
