/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::application::interfaces::{
    CommonService, FaxHistoryService, FaxJobService, NumberInfoService, OnlineStorageService,
    SessionService, ShoppingService, UserInfoService,
};
use crate::application::services::{
    CommonServiceImpl, FaxHistoryServiceImpl, FaxJobServiceImpl, NumberInfoServiceImpl,
    OnlineStorageServiceImpl, SessionServiceImpl, ShoppingServiceImpl, UserInfoServiceImpl,
};
use crate::error::AppError;
use crate::model::group::ActionGroup;
use crate::model::http::HttpClient;
use crate::model::responses::ApiResponse;
use crate::model::retry::PollConfig;
use crate::model::state;
use serde_json::Value;
use std::sync::Arc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// How [`PamFax::get_state`] fetches the fax state
#[derive(Debug, Clone)]
pub enum FetchMode {
    /// A single fetch, whatever it returns
    Immediate,
    /// Fetch until a JSON state document arrives, within the given bounds
    Blocking {
        /// Attempt and delay bounds
        poll: PollConfig,
        /// Stops the fetch loop with `AppError::Cancelled` when triggered
        cancel: CancellationToken,
    },
}

impl FetchMode {
    /// Blocking fetch that can only end by a document or by running out of attempts
    #[must_use]
    pub fn blocking(poll: PollConfig) -> Self {
        Self::Blocking {
            poll,
            cancel: CancellationToken::new(),
        }
    }
}

/// Logged-in client exposing every PamFax action
///
/// Construction performs the login; a `PamFax` value always carries a valid
/// user token. All eight action groups share one transport and can also be
/// reached individually through their accessors.
#[derive(Debug)]
pub struct PamFax {
    config: Arc<Config>,
    http: Arc<HttpClient>,
    session: Session,
    common: CommonServiceImpl,
    fax_history: FaxHistoryServiceImpl,
    fax_job: FaxJobServiceImpl,
    number_info: NumberInfoServiceImpl,
    online_storage: OnlineStorageServiceImpl,
    session_service: SessionServiceImpl,
    shopping: ShoppingServiceImpl,
    user_info: UserInfoServiceImpl,
}

impl PamFax {
    /// Logs in and builds the client
    ///
    /// # Returns
    /// * `Ok(PamFax)` - Client bound to the new user token
    /// * `Err(AppError::LoginFailed)` - If the credentials were rejected
    /// * `Err(AppError)` - On transport failure
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http = Arc::new(HttpClient::new(&config.rest_api, config.identity.clone())?);
        let session = Auth::new(config.clone(), http.clone()).login().await?;
        info!("Connected to {}", http.base_url());
        Ok(Self::with_session(config, http, session))
    }

    /// Logs in again with the same configuration, returning a new client
    ///
    /// The current client keeps its old token and stays usable until the
    /// server expires it.
    pub async fn relogin(&self) -> Result<Self, AppError> {
        let session = Auth::new(self.config.clone(), self.http.clone())
            .login()
            .await?;
        Ok(Self::with_session(
            self.config.clone(),
            self.http.clone(),
            session,
        ))
    }

    fn with_session(config: Arc<Config>, http: Arc<HttpClient>, session: Session) -> Self {
        let credentials = session.credentials();
        Self {
            common: CommonServiceImpl::new(credentials, http.clone()),
            fax_history: FaxHistoryServiceImpl::new(credentials, http.clone()),
            fax_job: FaxJobServiceImpl::new(credentials, http.clone()),
            number_info: NumberInfoServiceImpl::new(credentials, http.clone()),
            online_storage: OnlineStorageServiceImpl::new(credentials, http.clone()),
            session_service: SessionServiceImpl::new(credentials, http.clone()),
            shopping: ShoppingServiceImpl::new(credentials, http.clone()),
            user_info: UserInfoServiceImpl::new(credentials, http.clone()),
            config,
            http,
            session,
        }
    }

    /// Configuration the client was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Session obtained at login
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn common(&self) -> &CommonServiceImpl {
        &self.common
    }

    pub fn fax_history(&self) -> &FaxHistoryServiceImpl {
        &self.fax_history
    }

    pub fn fax_job(&self) -> &FaxJobServiceImpl {
        &self.fax_job
    }

    pub fn number_info(&self) -> &NumberInfoServiceImpl {
        &self.number_info
    }

    pub fn online_storage(&self) -> &OnlineStorageServiceImpl {
        &self.online_storage
    }

    pub fn session_service(&self) -> &SessionServiceImpl {
        &self.session_service
    }

    pub fn shopping(&self) -> &ShoppingServiceImpl {
        &self.shopping
    }

    pub fn user_info(&self) -> &UserInfoServiceImpl {
        &self.user_info
    }

    /// Fetches the state of the current fax
    ///
    /// With [`FetchMode::Blocking`] the state is fetched until a JSON
    /// document arrives, whatever its result code; application errors are
    /// returned to the caller like any other response. Running out of
    /// attempts yields `AppError::PollExhausted`.
    pub async fn get_state(&self, mode: FetchMode) -> Result<ApiResponse, AppError> {
        match mode {
            FetchMode::Immediate => self.get_fax_state().await,
            FetchMode::Blocking { poll, cancel } => {
                self.poll_fax_state(&poll, &cancel, |response| response.as_json().is_some())
                    .await
            }
        }
    }

    /// Polls the fax state until `predicate` accepts a successful document
    ///
    /// # Arguments
    /// * `poll` - Attempt and delay bounds
    /// * `cancel` - Stops the poll with `AppError::Cancelled` when triggered
    /// * `predicate` - Condition on the `GetFaxState` document
    ///
    /// # Returns
    /// * `Ok(Value)` - The first accepted document
    /// * `Err(AppError::PollExhausted)` - No document accepted within `poll.max_attempts`
    /// * `Err(AppError::Cancelled)` - `cancel` fired first
    /// * `Err(AppError)` - Transport errors abort the poll immediately
    pub async fn wait_for_state<F>(
        &self,
        poll: &PollConfig,
        cancel: &CancellationToken,
        predicate: F,
    ) -> Result<Value, AppError>
    where
        F: Fn(&Value) -> bool,
    {
        self.poll_fax_state(poll, cancel, |response| {
            response.is_success() && response.as_json().is_some_and(&predicate)
        })
        .await?
        .into_json()
    }

    /// Waits until no file of the current fax is converting
    pub async fn wait_until_converted(
        &self,
        poll: &PollConfig,
        cancel: &CancellationToken,
    ) -> Result<Value, AppError> {
        self.wait_for_state(poll, cancel, |doc| !state::is_converting(doc))
            .await
    }

    /// Waits until the current fax reports `ready_to_send`
    pub async fn wait_until_ready_to_send(
        &self,
        poll: &PollConfig,
        cancel: &CancellationToken,
    ) -> Result<Value, AppError> {
        self.wait_for_state(poll, cancel, state::is_ready_to_send)
            .await
    }

    /// Whether any file of a `GetFaxState` document is still converting
    pub fn is_converting(&self, fax_state: &Value) -> bool {
        state::is_converting(fax_state)
    }

    async fn poll_fax_state<F>(
        &self,
        poll: &PollConfig,
        cancel: &CancellationToken,
        accept: F,
    ) -> Result<ApiResponse, AppError>
    where
        F: Fn(&ApiResponse) -> bool,
    {
        let max_attempts = poll.max_attempts();
        let mut interval = poll.initial_interval();

        for attempt in 1..=max_attempts {
            let response = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(AppError::Cancelled),
                response = self.get_fax_state() => response?,
            };
            if accept(&response) {
                debug!("Fax state accepted after {} attempt(s)", attempt);
                return Ok(response);
            }
            if attempt == max_attempts {
                break;
            }

            debug!(
                "Fax state not ready (attempt {}/{}), retrying in {:?}",
                attempt, max_attempts, interval
            );
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(AppError::Cancelled),
                _ = sleep(interval) => {}
            }
            interval = poll.next_interval(interval);
        }

        warn!("Fax state polling gave up after {} attempts", max_attempts);
        Err(AppError::PollExhausted {
            attempts: max_attempts,
        })
    }
}

impl CommonService for PamFax {
    fn common_group(&self) -> &ActionGroup {
        self.common.common_group()
    }
}

impl FaxHistoryService for PamFax {
    fn fax_history_group(&self) -> &ActionGroup {
        self.fax_history.fax_history_group()
    }
}

impl FaxJobService for PamFax {
    fn fax_job_group(&self) -> &ActionGroup {
        self.fax_job.fax_job_group()
    }
}

impl NumberInfoService for PamFax {
    fn number_info_group(&self) -> &ActionGroup {
        self.number_info.number_info_group()
    }
}

impl OnlineStorageService for PamFax {
    fn online_storage_group(&self) -> &ActionGroup {
        self.online_storage.online_storage_group()
    }
}

impl SessionService for PamFax {
    fn session_group(&self) -> &ActionGroup {
        self.session_service.session_group()
    }
}

impl ShoppingService for PamFax {
    fn shopping_group(&self) -> &ActionGroup {
        self.shopping.shopping_group()
    }
}

impl UserInfoService for PamFax {
    fn user_info_group(&self) -> &ActionGroup {
        self.user_info.user_info_group()
    }
}
