//! Type definitions for the application shell.
//!
//! - [`Route`] - which view the current path dispatches to

/// A parsed navigational path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Dashboard,
    /// `/posts/{id}`; the id may be empty for `/posts/`
    PostDetail { post_id: String },
    /// Any other path
    NotFound { path: String },
}

impl Default for Route {
    fn default() -> Self {
        Route::Dashboard
    }
}

impl Route {
    /// Dispatch a path to a route.
    ///
    /// A single trailing slash after the post id is accepted, so
    /// `/posts/5/` is post `5` while `/posts/` binds an empty id.
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Route::Dashboard;
        }

        if let Some(rest) = path.strip_prefix("/posts/") {
            let post_id = rest.strip_suffix('/').unwrap_or(rest);
            if !post_id.contains('/') {
                return Route::PostDetail {
                    post_id: post_id.to_string(),
                };
            }
        }

        Route::NotFound {
            path: path.to_string(),
        }
    }

    /// The path this route was parsed from (normalized).
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::PostDetail { post_id } => format!("/posts/{}", post_id),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dashboard() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Dashboard);
    }

    #[test]
    fn test_parse_post_detail() {
        assert_eq!(
            Route::parse("/posts/17"),
            Route::PostDetail {
                post_id: "17".to_string()
            }
        );
        assert_eq!(
            Route::parse("/posts/17/"),
            Route::PostDetail {
                post_id: "17".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty_post_id() {
        assert_eq!(
            Route::parse("/posts/"),
            Route::PostDetail {
                post_id: String::new()
            }
        );
    }

    #[test]
    fn test_parse_not_found() {
        for path in ["/posts", "/users/1", "/posts/1/comments", "/about"] {
            assert_eq!(
                Route::parse(path),
                Route::NotFound {
                    path: path.to_string()
                },
                "path {}",
                path
            );
        }
    }

    #[test]
    fn test_path_round_trip() {
        assert_eq!(Route::Dashboard.path(), "/");
        assert_eq!(Route::parse("/posts/3/").path(), "/posts/3");
        assert_eq!(Route::parse("/nope").path(), "/nope");
    }
}
