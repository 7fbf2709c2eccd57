//! GraphQL type definitions for Relay-style connections.

/// Information about the current page of a connection.
#[derive(Debug, Clone, async_graphql::SimpleObject)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

impl From<segue_core::PageInfo> for PageInfo {
    fn from(info: segue_core::PageInfo) -> Self {
        Self {
            has_next_page: info.has_next_page,
            has_previous_page: info.has_previous_page,
            start_cursor: info.start_cursor,
            end_cursor: info.end_cursor,
        }
    }
}

/// Generate Relay-style connection types (Edge + Connection) with a
/// `From` impl off the core connection.
///
/// `$node` is the GraphQL object type, `$model` the domain model it is
/// built `From`. The calling crate must depend on `async-graphql` and
/// `segue-core`.
#[macro_export]
macro_rules! connection_types {
    ($node:ty, $model:ty, $edge:ident, $connection:ident) => {
        #[derive(::async_graphql::SimpleObject)]
        pub struct $edge {
            pub node: $node,
            pub cursor: ::std::string::String,
        }

        #[derive(::async_graphql::SimpleObject)]
        pub struct $connection {
            pub edges: ::std::vec::Vec<$edge>,
            pub page_info: $crate::PageInfo,
        }

        impl ::std::convert::From<::segue_core::Connection<$model>> for $connection {
            fn from(conn: ::segue_core::Connection<$model>) -> Self {
                Self {
                    edges: conn
                        .edges
                        .into_iter()
                        .map(|e| $edge {
                            node: <$node>::from(e.node),
                            cursor: e.cursor,
                        })
                        .collect(),
                    page_info: $crate::PageInfo::from(conn.page_info),
                }
            }
        }
    };
}
