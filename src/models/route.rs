//! Hash-based client routes.
//!
//! The editor is parameterized by the in-memory selection held in
//! `AppContext`, never by URL parameters, so routes carry no data.

use crate::utils::dom;

/// Client-visible routes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing page with user info and repository list: `#/`
    #[default]
    Landing,
    /// Login screen: `#/login`
    Login,
    /// OAuth success callback: `#/auth/success`
    AuthSuccess,
    /// OAuth error callback: `#/auth/error`
    AuthError,
    /// Sign-out in progress: `#/signout`
    SignOut,
    /// Repository browser and editor: `#/editor`
    Editor,
}

impl AppRoute {
    /// Parse a URL hash into a route. Unknown hashes land on the landing page.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        // Ignore any query suffix, e.g. `#/auth/success?provider=github`.
        let path = path.split('?').next().unwrap_or_default();

        match path {
            "login" => Self::Login,
            "auth/success" | "auth/github/success" => Self::AuthSuccess,
            "auth/error" | "auth/github/error" => Self::AuthError,
            "signout" | "auth/github/signout" => Self::SignOut,
            "editor" | "code_editor" => Self::Editor,
            _ => Self::Landing,
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> &'static str {
        match self {
            Self::Landing => "#/",
            Self::Login => "#/login",
            Self::AuthSuccess => "#/auth/success",
            Self::AuthError => "#/auth/error",
            Self::SignOut => "#/signout",
            Self::Editor => "#/editor",
        }
    }

    /// Current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route. Fires `hashchange`, which the router observes.
    pub fn push(&self) {
        dom::set_hash(self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Landing);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Landing);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Landing);
        assert_eq!(AppRoute::from_hash("#/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_hash("#/auth/success"), AppRoute::AuthSuccess);
        assert_eq!(
            AppRoute::from_hash("#/auth/github/success?x=1"),
            AppRoute::AuthSuccess
        );
        assert_eq!(AppRoute::from_hash("#/auth/error/"), AppRoute::AuthError);
        assert_eq!(AppRoute::from_hash("#/signout"), AppRoute::SignOut);
        assert_eq!(AppRoute::from_hash("#/editor"), AppRoute::Editor);
        assert_eq!(AppRoute::from_hash("#/nowhere"), AppRoute::Landing);
    }

    #[test]
    fn test_route_round_trip() {
        for route in [
            AppRoute::Landing,
            AppRoute::Login,
            AppRoute::AuthSuccess,
            AppRoute::AuthError,
            AppRoute::SignOut,
            AppRoute::Editor,
        ] {
            assert_eq!(AppRoute::from_hash(route.to_hash()), route);
        }
    }
}
