use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::dto::auth_dto::{ProfileUpdatePayload, SignUpPayload};
use crate::error::{Error, Result};
use crate::models::user::UserProfile;
use crate::session::{restore, Session, SessionStore};
use crate::table_store::rows::{NewUserRow, UserRow, UserRowUpdate};
use crate::table_store::{RowQuery, TableStoreClient};
use crate::utils::{crypto, time, token};

/// A restored session together with the key it is stored under.
#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub key: String,
    pub session: Session,
}

impl ActiveSession {
    pub fn profile(&self) -> &UserProfile {
        &self.session.profile
    }
}

#[derive(Debug, Clone)]
pub struct SignedIn {
    pub token: String,
    pub profile: UserProfile,
}

#[derive(Clone)]
pub struct AuthService {
    store: TableStoreClient,
    users_table: u32,
    sessions: Arc<dyn SessionStore>,
    jwt_secret: String,
    session_ttl_hours: i64,
}

impl AuthService {
    pub fn new(
        store: TableStoreClient,
        users_table: u32,
        sessions: Arc<dyn SessionStore>,
        jwt_secret: String,
        session_ttl_hours: i64,
    ) -> Self {
        Self {
            store,
            users_table,
            sessions,
            jwt_secret,
            session_ttl_hours,
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        let query = RowQuery::new().filter_equal("Email", email);
        let page = self.store.get::<UserRow>(self.users_table, &query).await?;
        Ok(page.results.into_iter().next())
    }

    /// Creates the user record. Fails with [`Error::EmailAlreadyExists`]
    /// before any write when the e-mail is taken.
    #[instrument(skip(self, payload), fields(email = %payload.email))]
    pub async fn sign_up(&self, payload: &SignUpPayload) -> Result<UserProfile> {
        let email = payload.email.trim().to_lowercase();

        if self.find_by_email(&email).await?.is_some() {
            info!("sign-up rejected: e-mail already registered");
            return Err(Error::EmailAlreadyExists);
        }

        let hashed = crypto::hash_password(&payload.password).await?;
        let record = NewUserRow {
            nome: payload.name.trim(),
            empresa: payload.company.trim(),
            telefone: payload.phone.trim(),
            email: &email,
            senha_hash: &hashed,
        };
        let created: UserRow = self.store.post(self.users_table, &record).await?;
        info!(user_id = created.id, "user created");
        Ok(UserProfile::from(created))
    }

    /// Verifies the credentials and opens a session. Unknown e-mail and wrong
    /// password produce the same error.
    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn> {
        let email = email.trim().to_lowercase();

        let Some(user) = self.find_by_email(&email).await? else {
            debug!("sign-in failed: no user with this e-mail");
            return Err(Error::InvalidCredentials);
        };

        let Some(stored_hash) = user.password_hash() else {
            warn!(user_id = user.id, "sign-in refused: account has no password hash");
            return Err(Error::InvalidAccount);
        };

        if !crypto::verify_password(password, stored_hash).await? {
            debug!(user_id = user.id, "sign-in failed: password mismatch");
            return Err(Error::InvalidCredentials);
        }

        let profile = UserProfile::from(user);
        let key = token::generate_session_key();
        self.sessions.save(&key, &Session::new(profile.clone()))?;
        let token = token::issue_token(profile.id, &key, &self.jwt_secret, self.session_ttl_hours)?;

        info!(user_id = profile.id, "user signed in");
        Ok(SignedIn { token, profile })
    }

    pub fn sign_out(&self, session: &ActiveSession) -> Result<()> {
        self.sessions.clear(&session.key)?;
        info!(user_id = session.profile().id, "user signed out");
        Ok(())
    }

    /// Resolves a bearer token to its session. Every failure, including an
    /// unreadable stored session, reads as "not signed in". Sessions older
    /// than the TTL are removed from the store.
    pub fn restore(&self, bearer: &str) -> Option<ActiveSession> {
        let claims = match token::decode_token(bearer, &self.jwt_secret) {
            Ok(claims) => claims,
            Err(err) => {
                debug!(error = %err, "rejected bearer token");
                return None;
            }
        };

        let session = restore(self.sessions.as_ref(), &claims.sid)?;
        if session.is_expired(self.session_ttl_hours, time::now()) {
            info!(user_id = session.profile.id, "stored session expired");
            if let Err(err) = self.sessions.clear(&claims.sid) {
                warn!(error = %err, "expired session could not be cleared");
            }
            return None;
        }
        if session.profile.id.to_string() != claims.sub {
            warn!("session does not belong to the token subject");
            return None;
        }
        Some(ActiveSession {
            key: claims.sid,
            session,
        })
    }

    /// Merges the given fields into the profile, on the users table and in
    /// the session.
    #[instrument(skip(self, active, update), fields(user_id = active.profile().id))]
    pub async fn update_profile(
        &self,
        active: &ActiveSession,
        update: ProfileUpdatePayload,
    ) -> Result<UserProfile> {
        let fields = UserRowUpdate {
            nome: update.name,
            empresa: update.company,
            telefone: update.phone,
            avatar_url: update.avatar_url,
        };
        let row: UserRow = self
            .store
            .patch(self.users_table, active.profile().id, &fields)
            .await?;

        let mut session = active.session.clone();
        session.profile = UserProfile::from(row);
        self.sessions.save(&active.key, &session)?;
        Ok(session.profile)
    }

    pub fn set_calendar_connected(&self, active: &ActiveSession, connected: bool) -> Result<Session> {
        let mut session = active.session.clone();
        session.google_calendar_connected = connected;
        self.sessions.save(&active.key, &session)?;
        info!(user_id = session.profile.id, connected, "calendar connection updated");
        Ok(session)
    }
}
