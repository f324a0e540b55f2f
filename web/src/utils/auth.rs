use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use leptos::prelude::*;
use serde::Deserialize;
use shared_types::CurrentUser;

pub const AUTH_TOKEN_KEY: &str = "hotel_auth_token";

#[derive(Debug, Deserialize, Clone)]
struct Claims {
    sub: String, // User ID
    #[serde(default)]
    name: Option<String>,
}

/// Ambient signed-in user, provided once at the app root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: RwSignal<Option<CurrentUser>>,
}

impl AuthContext {
    pub fn user(&self) -> Signal<Option<CurrentUser>> {
        self.user.into()
    }
}

/// Reads the stored token after hydration and exposes the user as context.
/// Tokens are not verified here; that belongs to the auth service.
pub fn provide_auth_context() -> AuthContext {
    let user = RwSignal::new(None::<CurrentUser>);

    Effect::new(move |_| {
        user.set(get_authenticated_user());
    });

    let context = AuthContext { user };
    provide_context(context);
    context
}

pub fn use_current_user() -> Signal<Option<CurrentUser>> {
    use_context::<AuthContext>()
        .map(|context| context.user())
        .unwrap_or_else(|| Signal::derive(|| None))
}

/// Gets the user from the token in localStorage, if there is a readable one.
pub fn get_authenticated_user() -> Option<CurrentUser> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let token = storage.get_item(AUTH_TOKEN_KEY).ok().flatten()?;
        decode_token(&token)
    }

    #[cfg(not(feature = "hydrate"))]
    {
        // On server side, we don't have access to localStorage
        None
    }
}

/// Reads the user out of a JWT payload segment. The signature is not checked.
pub fn decode_token(token: &str) -> Option<CurrentUser> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 || parts[1].is_empty() {
        return None;
    }

    let payload = URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .ok()?;
    parse_claims(&payload)
}

fn parse_claims(json: &[u8]) -> Option<CurrentUser> {
    let claims = serde_json::from_slice::<Claims>(json).ok()?;
    if claims.sub.is_empty() {
        return None;
    }
    Some(CurrentUser {
        id: claims.sub,
        name: claims.name,
    })
}
