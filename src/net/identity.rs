//! Identity-provider client: credentials, session continuity, and
//! identity-change notifications.
//!
//! ARCHITECTURE
//! ============
//! The provider owns credential verification and session persistence; this
//! module keeps only a bearer token (localStorage) and an in-memory view of
//! the current identity. Consumers observe changes through `subscribe`,
//! which replays the last resolved state to late subscribers so the session
//! manager never misses the initial resolution.
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections carry a closed `AuthCode`; raw provider error strings
//! never leave this module. Transport failures are stringly-typed and mapped
//! to the generic fallback message downstream.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(any(test, target_arch = "wasm32"))]
use serde::Deserialize;

use crate::net::types::Identity;

#[cfg(target_arch = "wasm32")]
use crate::config::ServiceConfig;

/// Rejection categories reported by the identity provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthCode {
    /// Sign-up attempted with an email that already has an account.
    EmailInUse,
    /// Sign-in or reset attempted for an unknown email.
    NotFound,
    /// Sign-in attempted with an incorrect password.
    WrongPassword,
    /// The submitted email is malformed.
    InvalidEmail,
    /// The provider is rate-limiting this client.
    RateLimited,
    /// The provider rejected the password as too weak.
    WeakPassword,
    /// Any unmapped or transport-level failure.
    Other,
}

impl AuthCode {
    /// Map a raw provider error identifier to a closed code. Provider
    /// messages may carry a trailing explanation (`"WEAK_PASSWORD : ..."`),
    /// so only the leading token is considered.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let token = raw
            .trim()
            .split(|c: char| c == ':' || c.is_whitespace())
            .next()
            .unwrap_or_default();
        match token {
            "EMAIL_EXISTS" => Self::EmailInUse,
            "EMAIL_NOT_FOUND" => Self::NotFound,
            "INVALID_PASSWORD" => Self::WrongPassword,
            "INVALID_EMAIL" => Self::InvalidEmail,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::RateLimited,
            "WEAK_PASSWORD" => Self::WeakPassword,
            _ => Self::Other,
        }
    }
}

/// Errors returned by identity operations.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider rejected the request")]
    Rejected { code: AuthCode },
    #[error("identity request failed: {0}")]
    Transport(String),
    #[error("identity service is not configured")]
    NotConfigured,
}

impl IdentityError {
    /// The closed rejection code for this error; transport and configuration
    /// failures collapse to [`AuthCode::Other`].
    #[must_use]
    pub fn code(&self) -> AuthCode {
        match self {
            Self::Rejected { code } => *code,
            Self::Transport(_) | Self::NotConfigured => AuthCode::Other,
        }
    }
}

/// Callback invoked with the current identity on every state change.
pub type IdentityCallback = Rc<dyn Fn(Option<Identity>)>;

#[derive(Default)]
struct HubInner {
    listeners: Vec<(u64, IdentityCallback)>,
    next_id: u64,
    /// True once the first identity resolution (restore or explicit
    /// sign-in/out) has completed.
    resolved: bool,
    current: Option<Identity>,
}

/// Registry of identity-change listeners with last-state replay.
///
/// A module-level instance backs the free `subscribe`/`unsubscribe`
/// functions; tests exercise standalone instances directly.
#[derive(Clone, Default)]
pub struct IdentityHub {
    inner: Rc<RefCell<HubInner>>,
}

impl IdentityHub {
    /// Register a listener and return its subscription id. If an identity
    /// state has already been resolved it is replayed immediately.
    pub fn subscribe(&self, callback: IdentityCallback) -> u64 {
        let (id, replay) = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            let id = inner.next_id;
            inner.listeners.push((id, callback.clone()));
            let replay = inner.resolved.then(|| inner.current.clone());
            (id, replay)
        };
        if let Some(current) = replay {
            callback(current);
        }
        id
    }

    /// Remove a listener. Unknown ids are ignored, so release is idempotent.
    pub fn unsubscribe(&self, id: u64) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Record the new identity state and fan it out to all listeners.
    pub fn notify(&self, identity: Option<Identity>) {
        // Snapshot the callbacks first; a listener may subscribe or
        // unsubscribe reentrantly while being notified.
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            inner.resolved = true;
            inner.current = identity.clone();
            inner
                .listeners
                .iter()
                .map(|(_, callback)| callback.clone())
                .collect::<Vec<_>>()
        };
        for callback in callbacks {
            callback(identity.clone());
        }
    }

    /// The last notified identity, if any resolution has happened.
    #[must_use]
    pub fn current(&self) -> Option<Identity> {
        self.inner.borrow().current.clone()
    }

    /// Whether the first identity resolution has completed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.inner.borrow().resolved
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

thread_local! {
    static HUB: IdentityHub = IdentityHub::default();
    #[cfg(target_arch = "wasm32")]
    static ACTIVE_TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Subscribe to identity-change notifications; returns a subscription id
/// for [`unsubscribe`].
pub fn subscribe(callback: IdentityCallback) -> u64 {
    HUB.with(|hub| hub.subscribe(callback))
}

/// Release a subscription created by [`subscribe`].
pub fn unsubscribe(id: u64) {
    HUB.with(|hub| hub.unsubscribe(id));
}

fn notify(identity: Option<Identity>) {
    HUB.with(|hub| hub.notify(identity));
}

/// Bearer token of the active session, for authenticated document requests.
#[cfg(target_arch = "wasm32")]
pub(crate) fn active_token() -> Option<String> {
    ACTIVE_TOKEN.with(|token| token.borrow().clone())
}

#[cfg(target_arch = "wasm32")]
fn set_active_token(token: Option<String>) {
    ACTIVE_TOKEN.with(|cell| *cell.borrow_mut() = token);
}

// =============================================================
// Provider wire formats
// =============================================================

/// Token grant returned by sign-up/sign-in.
#[cfg(any(test, target_arch = "wasm32"))]
#[derive(Debug, Deserialize)]
struct TokenGrant {
    #[serde(rename = "localId")]
    local_id: String,
    #[serde(rename = "idToken")]
    id_token: String,
    email: String,
    #[serde(rename = "displayName", default)]
    display_name: Option<String>,
}

#[cfg(any(test, target_arch = "wasm32"))]
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[cfg(any(test, target_arch = "wasm32"))]
#[derive(Debug, Deserialize)]
struct LookupUser {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
    #[serde(rename = "displayName", default)]
    display_name: Option<String>,
    #[serde(rename = "emailVerified", default)]
    email_verified: bool,
}

/// Identity claims from a fresh token grant. Email verification is unknown
/// at grant time and reported false until the next lookup.
#[cfg(any(test, target_arch = "wasm32"))]
fn grant_identity(grant: &TokenGrant) -> Identity {
    Identity {
        id: grant.local_id.clone(),
        email: grant.email.clone(),
        display_name: grant.display_name.clone(),
        email_verified: false,
    }
}

#[cfg(any(test, target_arch = "wasm32"))]
fn lookup_identity(response: LookupResponse) -> Option<Identity> {
    response.users.into_iter().next().map(|user| Identity {
        id: user.local_id,
        email: user.email,
        display_name: user.display_name,
        email_verified: user.email_verified,
    })
}

/// Extract the closed rejection code from a provider error body of the form
/// `{"error":{"message":"EMAIL_EXISTS"}}`. Unparseable bodies map to
/// [`AuthCode::Other`].
#[cfg(any(test, target_arch = "wasm32"))]
fn rejection_code(body: &str) -> AuthCode {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return AuthCode::Other;
    };
    value["error"]["message"]
        .as_str()
        .map_or(AuthCode::Other, AuthCode::parse)
}

// =============================================================
// Browser session persistence
// =============================================================

#[cfg(target_arch = "wasm32")]
const SESSION_TOKEN_KEY: &str = "blackcat.session-token";

#[cfg(target_arch = "wasm32")]
fn stored_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(SESSION_TOKEN_KEY).ok()?
}

#[cfg(target_arch = "wasm32")]
fn store_token(token: Option<&str>) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    let result = match token {
        Some(token) => storage.set_item(SESSION_TOKEN_KEY, token),
        None => storage.remove_item(SESSION_TOKEN_KEY),
    };
    if result.is_err() {
        log::warn!("failed to update persisted session token");
    }
}

// =============================================================
// Provider operations
// =============================================================

/// Begin the session lifecycle: restore any persisted session, then emit the
/// first identity-change notification. Call once at application start.
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    leptos::task::spawn_local(async {
        let Some(config) = ServiceConfig::from_build_env() else {
            log::warn!("identity service not configured; auth flows disabled");
            notify(None);
            return;
        };
        let Some(token) = stored_token() else {
            notify(None);
            return;
        };
        match lookup(&config, &token).await {
            Ok(identity) => {
                set_active_token(Some(token));
                notify(Some(identity));
            }
            Err(err) => {
                log::warn!("session restore failed, signing out: {err}");
                store_token(None);
                notify(None);
            }
        }
    });
}

/// Create an account with the given credentials.
///
/// # Errors
///
/// `Rejected` with `EmailInUse`, `InvalidEmail`, or `WeakPassword` on
/// provider rejection; `Transport`/`NotConfigured` otherwise.
pub async fn sign_up(email: &str, password: &str) -> Result<Identity, IdentityError> {
    #[cfg(target_arch = "wasm32")]
    {
        let config = configured()?;
        let grant = request_grant(&config, "signUp", email, password).await?;
        Ok(adopt_session(&config, grant).await)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (email, password);
        Err(IdentityError::NotConfigured)
    }
}

/// Sign in with the given credentials.
///
/// # Errors
///
/// `Rejected` with `NotFound`, `WrongPassword`, `InvalidEmail`, or
/// `RateLimited` on provider rejection; `Transport`/`NotConfigured`
/// otherwise.
pub async fn sign_in(email: &str, password: &str) -> Result<Identity, IdentityError> {
    #[cfg(target_arch = "wasm32")]
    {
        let config = configured()?;
        let grant = request_grant(&config, "signInWithPassword", email, password).await?;
        Ok(adopt_session(&config, grant).await)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (email, password);
        Err(IdentityError::NotConfigured)
    }
}

/// End the current session and notify subscribers.
pub async fn sign_out() {
    #[cfg(target_arch = "wasm32")]
    {
        store_token(None);
        set_active_token(None);
        notify(None);
    }
}

/// Ask the provider to email a password-reset link.
///
/// # Errors
///
/// `Rejected` with `NotFound` or `InvalidEmail` on provider rejection.
pub async fn send_password_reset(email: &str) -> Result<(), IdentityError> {
    #[cfg(target_arch = "wasm32")]
    {
        let config = configured()?;
        let body = serde_json::json!({ "requestType": "PASSWORD_RESET", "email": email });
        post_accepting(&config, "sendOobCode", &body).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = email;
        Err(IdentityError::NotConfigured)
    }
}

/// Ask the provider to email a verification link for the current session.
///
/// # Errors
///
/// `Transport` when no session is active or the request fails.
pub async fn send_email_verification() -> Result<(), IdentityError> {
    #[cfg(target_arch = "wasm32")]
    {
        let config = configured()?;
        let token = active_token()
            .ok_or_else(|| IdentityError::Transport("no active session".to_owned()))?;
        let body = serde_json::json!({ "requestType": "VERIFY_EMAIL", "idToken": token });
        post_accepting(&config, "sendOobCode", &body).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(IdentityError::NotConfigured)
    }
}

/// Update the display name on the current session's identity. Subscribers
/// are re-notified with the updated claims on success.
///
/// # Errors
///
/// `Transport` when no session is active or the request fails.
pub async fn update_display_name(name: &str) -> Result<(), IdentityError> {
    #[cfg(target_arch = "wasm32")]
    {
        let config = configured()?;
        let token = active_token()
            .ok_or_else(|| IdentityError::Transport("no active session".to_owned()))?;
        let body = serde_json::json!({
            "idToken": token,
            "displayName": name,
            "returnSecureToken": false,
        });
        post_accepting(&config, "update", &body).await?;
        HUB.with(|hub| {
            if let Some(mut identity) = hub.current() {
                identity.display_name = Some(name.to_owned());
                hub.notify(Some(identity));
            }
        });
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = name;
        Err(IdentityError::NotConfigured)
    }
}

#[cfg(target_arch = "wasm32")]
fn configured() -> Result<ServiceConfig, IdentityError> {
    ServiceConfig::from_build_env().ok_or(IdentityError::NotConfigured)
}

/// Persist the grant, resolve full claims, and notify subscribers.
#[cfg(target_arch = "wasm32")]
async fn adopt_session(config: &ServiceConfig, grant: TokenGrant) -> Identity {
    // Lookup refreshes the email-verified claim; the grant is a good-enough
    // fallback if it fails.
    let identity = match lookup(config, &grant.id_token).await {
        Ok(identity) => identity,
        Err(_) => grant_identity(&grant),
    };
    store_token(Some(&grant.id_token));
    set_active_token(Some(grant.id_token));
    notify(Some(identity.clone()));
    identity
}

#[cfg(target_arch = "wasm32")]
async fn request_grant(
    config: &ServiceConfig,
    operation: &str,
    email: &str,
    password: &str,
) -> Result<TokenGrant, IdentityError> {
    let body = serde_json::json!({
        "email": email,
        "password": password,
        "returnSecureToken": true,
    });
    let resp = post_raw(config, operation, &body).await?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(IdentityError::Rejected { code: rejection_code(&body) });
    }
    resp.json::<TokenGrant>()
        .await
        .map_err(|e| IdentityError::Transport(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn lookup(config: &ServiceConfig, token: &str) -> Result<Identity, IdentityError> {
    let body = serde_json::json!({ "idToken": token });
    let resp = post_raw(config, "lookup", &body).await?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(IdentityError::Rejected { code: rejection_code(&body) });
    }
    let parsed = resp
        .json::<LookupResponse>()
        .await
        .map_err(|e| IdentityError::Transport(e.to_string()))?;
    lookup_identity(parsed)
        .ok_or_else(|| IdentityError::Transport("lookup returned no identity".to_owned()))
}

/// POST where only success/failure matters (reset and verification mails,
/// display-name updates).
#[cfg(target_arch = "wasm32")]
async fn post_accepting(
    config: &ServiceConfig,
    operation: &str,
    body: &serde_json::Value,
) -> Result<(), IdentityError> {
    let resp = post_raw(config, operation, body).await?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(IdentityError::Rejected { code: rejection_code(&body) });
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
async fn post_raw(
    config: &ServiceConfig,
    operation: &str,
    body: &serde_json::Value,
) -> Result<gloo_net::http::Response, IdentityError> {
    gloo_net::http::Request::post(&config.identity_endpoint(operation))
        .json(body)
        .map_err(|e| IdentityError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| IdentityError::Transport(e.to_string()))
}
