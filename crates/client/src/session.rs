use shared_types::{AppError, AuthUser, LoginRequest, Notice};
use tokio::sync::watch;
use validator::Validate;

use crate::identity::{IdentityProvider, IdentityUser, ProfileStore};

/// Combines the identity service with the profile store and publishes the
/// resulting `AuthUser` (or `None`) to subscribers.
pub struct SessionProvider<I, P> {
    identity: I,
    profiles: P,
    session: watch::Sender<Option<AuthUser>>,
}

impl<I: IdentityProvider, P: ProfileStore> SessionProvider<I, P> {
    pub fn new(identity: I, profiles: P) -> Self {
        let (session, _) = watch::channel(None);
        Self {
            identity,
            profiles,
            session,
        }
    }

    pub fn current(&self) -> Option<AuthUser> {
        self.session.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<AuthUser>> {
        self.session.subscribe()
    }

    /// Rebuild the session from whatever account the identity service still
    /// holds. A missing profile or a failed lookup leaves no session.
    #[tracing::instrument(skip(self))]
    pub async fn restore(&self) -> Option<AuthUser> {
        let user = match self.identity.current_user() {
            Some(identity) => match self.resolve(identity).await {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Could not restore session");
                    None
                }
            },
            None => None,
        };
        self.session.send_replace(user.clone());
        user
    }

    /// Validate the form, sign in and look up the user's role. On any failure
    /// the identity is signed out and no session is published.
    #[tracing::instrument(skip(self, form), fields(email = %form.email))]
    pub async fn sign_in(&self, form: &LoginRequest) -> Result<AuthUser, AppError> {
        form.validate()?;
        let identity = self.identity.sign_in(&form.email, &form.password).await?;
        match self.resolve(identity).await {
            Ok(user) => {
                tracing::info!(uid = %user.uid, role = user.role.as_str(), "Session started");
                self.session.send_replace(Some(user.clone()));
                Ok(user)
            }
            Err(e) => {
                self.identity.sign_out();
                self.session.send_replace(None);
                Err(e)
            }
        }
    }

    pub fn sign_out(&self) {
        self.identity.sign_out();
        self.session.send_replace(None);
        tracing::info!("Session ended");
    }

    /// End the session when a notice says the server no longer accepts the
    /// credentials. Returns whether it did.
    pub fn end_if_rejected(&self, notice: &Notice) -> bool {
        if !notice.requires_login {
            return false;
        }
        tracing::info!("Session rejected by the server");
        self.sign_out();
        true
    }

    async fn resolve(&self, identity: IdentityUser) -> Result<AuthUser, AppError> {
        match self.profiles.role_of(&identity.uid).await? {
            Some(role) => Ok(AuthUser {
                uid: identity.uid,
                email: identity.email,
                role,
            }),
            None => Err(AppError::not_found("User not found in the directory")),
        }
    }
}
