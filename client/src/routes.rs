//! Semantic navigation surface.
//!
//! The routing library itself is an external collaborator; this module only
//! names the destinations the client layer can point at and converts them
//! to and from paths.

/// Tab on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    Password,
    Delete,
}

impl ProfileTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileTab::Password => "password",
            ProfileTab::Delete => "delete",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "password" => Some(ProfileTab::Password),
            "delete" => Some(ProfileTab::Delete),
            _ => None,
        }
    }
}

/// Navigation destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    SignIn,
    SignUp,
    /// Verification token arrives as a query parameter from the email link
    VerifyEmail {
        token: Option<String>,
    },
    Profile {
        tab: Option<ProfileTab>,
    },
    AdminVideos,
    AdminVideoUpload,
    AdminVideoEdit {
        id: String,
    },
    AdminComments,
    PlaylistDetails {
        id: String,
    },
}

impl Route {
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::SignIn => "/auth/signin".to_string(),
            Route::SignUp => "/auth/signup".to_string(),
            Route::VerifyEmail { token: None } => "/auth/verify-email".to_string(),
            Route::VerifyEmail { token: Some(token) } => {
                format!("/auth/verify-email?token={}", token)
            }
            Route::Profile { tab: None } => "/profile".to_string(),
            Route::Profile { tab: Some(tab) } => format!("/profile/{}", tab.as_str()),
            Route::AdminVideos => "/admin/videos".to_string(),
            Route::AdminVideoUpload => "/admin/videos/upload".to_string(),
            Route::AdminVideoEdit { id } => format!("/admin/videos/{}/edit", id),
            Route::AdminComments => "/admin/comments".to_string(),
            Route::PlaylistDetails { id } => format!("/playlists/{}", id),
        }
    }

    pub fn parse(path: &str) -> Option<Route> {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        let segments: Vec<&str> = path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["auth", "signin"] => Some(Route::SignIn),
            ["auth", "signup"] => Some(Route::SignUp),
            ["auth", "verify-email"] => Some(Route::VerifyEmail {
                token: query.and_then(query_token),
            }),
            ["profile"] => Some(Route::Profile { tab: None }),
            ["profile", tab] => ProfileTab::from_str(tab).map(|tab| Route::Profile { tab: Some(tab) }),
            ["admin", "videos"] => Some(Route::AdminVideos),
            ["admin", "videos", "upload"] => Some(Route::AdminVideoUpload),
            ["admin", "videos", id, "edit"] => Some(Route::AdminVideoEdit { id: (*id).to_string() }),
            ["admin", "comments"] => Some(Route::AdminComments),
            ["playlists", id] => Some(Route::PlaylistDetails { id: (*id).to_string() }),
            _ => None,
        }
    }

    /// Whether this destination is part of the authentication flow
    pub fn is_auth_route(&self) -> bool {
        matches!(
            self,
            Route::SignIn | Route::SignUp | Route::VerifyEmail { .. }
        )
    }
}

/// Whether a raw path points into the authentication flow.
///
/// Used by the session layer before the path is even resolvable, so a
/// sign-in redirect can never loop back into itself.
pub fn is_auth_path(path: &str) -> bool {
    path == "/auth" || path.starts_with("/auth/")
}

fn query_token(query: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == "token" && !v.is_empty()).then(|| v.to_string())
    })
}
