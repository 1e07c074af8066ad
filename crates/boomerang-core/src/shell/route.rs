//! Route table.

use std::fmt;

/// The views reachable from the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Notebooks,
    Tasks,
}

impl Route {
    /// Every route, in link order.
    pub const ALL: [Route; 2] = [Route::Notebooks, Route::Tasks];

    /// The path segment this route is mounted at.
    pub fn segment(self) -> &'static str {
        match self {
            Route::Notebooks => "notebooks",
            Route::Tasks => "tasks",
        }
    }

    /// Absolute link path, e.g. `/notebooks`.
    pub fn path(self) -> String {
        format!("/{}", self.segment())
    }

    /// Link label.
    pub fn title(self) -> &'static str {
        match self {
            Route::Notebooks => "Notebooks",
            Route::Tasks => "Tasks",
        }
    }

    /// Match a path against the table.
    ///
    /// Leading and trailing slashes are ignored. There is no wildcard route,
    /// so anything else resolves to `None`.
    pub fn resolve(path: &str) -> Option<Route> {
        let segment = path.trim().trim_matches('/');
        Route::ALL.into_iter().find(|r| r.segment() == segment)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_both_segments() {
        assert_eq!(Route::resolve("notebooks"), Some(Route::Notebooks));
        assert_eq!(Route::resolve("/notebooks"), Some(Route::Notebooks));
        assert_eq!(Route::resolve("/tasks/"), Some(Route::Tasks));
    }

    #[test]
    fn unmatched_paths_do_not_resolve() {
        assert_eq!(Route::resolve("/"), None);
        assert_eq!(Route::resolve("/notebooks/42"), None);
        assert_eq!(Route::resolve("/Tasks"), None);
    }

    #[test]
    fn path_round_trips_through_resolve() {
        for route in Route::ALL {
            assert_eq!(Route::resolve(&route.path()), Some(route));
        }
    }
}
