//! Hit parameter assembly and request dispatch.
//!
//! Each tracking method builds the common parameter prefix, appends its
//! hit-specific keys, and fires one form-encoded POST at the `/collect`
//! path of the configured endpoint. There is no retry, batching, or
//! response inspection; the call resolves once the transport completes.

use anyhow::Context;
use reqwest::Client;
use tracing::debug;

use crate::config::TrackerConfig;
use crate::error::Result;
use crate::params::Params;

/// Marks a hit as the start or end of a logical visit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionControl {
    #[default]
    None,
    Start,
    End,
}

/// Optional pageview fields.
///
/// `screen_resolution`, `viewport_size`, `document_encoding`,
/// `screen_colors` and `user_language` are accepted but are not attached
/// to the outgoing request; only `user_id` and `session` take effect.
#[derive(Debug, Clone, Default)]
pub struct PageviewOptions {
    pub user_id: Option<String>,
    pub screen_resolution: Option<String>,
    pub viewport_size: Option<String>,
    pub document_encoding: Option<String>,
    pub screen_colors: Option<String>,
    pub user_language: Option<String>,
    pub session: SessionControl,
}

/// Fire-and-forget client for the form-encoded hit collection protocol.
///
/// A `Tracker` holds read-only session configuration and a shared HTTP
/// client; tracking methods may be called concurrently from any number of
/// tasks. Configuration is not validated locally, and transport failures
/// propagate untouched to the caller.
pub struct Tracker {
    config: TrackerConfig,
    client: Client,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("uatrack/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client for hit collection")?;

        Ok(Self { config, client })
    }

    /// Send a pageview hit for `path`.
    ///
    /// `title` is attached as `dt` when non-blank; `opts.session` adds
    /// `sc=start` / `sc=end` when not [`SessionControl::None`].
    pub async fn pageview(
        &self,
        path: &str,
        title: &str,
        customer_id: &str,
        opts: &PageviewOptions,
    ) -> Result<()> {
        let params = self.pageview_params(path, title, customer_id, opts);
        self.send_collect(&params).await
    }

    /// Send a pageview that opens a visit session (`sc=start`).
    pub async fn start_pageview(
        &self,
        path: &str,
        title: &str,
        customer_id: &str,
        opts: &PageviewOptions,
    ) -> Result<()> {
        let opts = PageviewOptions {
            session: SessionControl::Start,
            ..opts.clone()
        };
        self.pageview(path, title, customer_id, &opts).await
    }

    /// Send a pageview that closes a visit session (`sc=end`).
    pub async fn stop_pageview(
        &self,
        path: &str,
        title: &str,
        customer_id: &str,
        opts: &PageviewOptions,
    ) -> Result<()> {
        let opts = PageviewOptions {
            session: SessionControl::End,
            ..opts.clone()
        };
        self.pageview(path, title, customer_id, &opts).await
    }

    /// Send a custom event hit.
    pub async fn event(
        &self,
        category: &str,
        action: &str,
        label: Option<&str>,
        value: Option<i64>,
        customer_id: &str,
        user_id: Option<&str>,
    ) -> Result<()> {
        let params = self.event_params(category, action, label, value, customer_id, user_id);
        self.send_collect(&params).await
    }

    /// Send an exception hit. `fatal` maps to `exf=1` / `exf=0`.
    pub async fn exception(
        &self,
        description: &str,
        fatal: bool,
        customer_id: &str,
        user_id: Option<&str>,
    ) -> Result<()> {
        let params = self.exception_params(description, fatal, customer_id, user_id);
        self.send_collect(&params).await
    }

    /// Send a user timing hit for `time_ms` milliseconds.
    pub async fn timing(
        &self,
        category: &str,
        variable_name: &str,
        label: Option<&str>,
        time_ms: i64,
        customer_id: &str,
        user_id: Option<&str>,
    ) -> Result<()> {
        let params =
            self.timing_params(category, variable_name, label, time_ms, customer_id, user_id);
        self.send_collect(&params).await
    }

    fn pageview_params(
        &self,
        path: &str,
        title: &str,
        customer_id: &str,
        opts: &PageviewOptions,
    ) -> Params {
        let mut params =
            self.common_params("pageview", customer_id, opts.user_id.as_deref());
        params.push("dp", path);
        params.push_if_present("dt", Some(title));
        match opts.session {
            SessionControl::Start => params.push("sc", "start"),
            SessionControl::End => params.push("sc", "end"),
            SessionControl::None => {}
        }
        params
    }

    fn event_params(
        &self,
        category: &str,
        action: &str,
        label: Option<&str>,
        value: Option<i64>,
        customer_id: &str,
        user_id: Option<&str>,
    ) -> Params {
        let mut params = self.common_params("event", customer_id, user_id);
        params.push("ec", category);
        params.push("ea", action);
        params.push_if_present("el", label);
        if let Some(v) = value {
            params.push("ev", v.to_string());
        }
        params
    }

    fn exception_params(
        &self,
        description: &str,
        fatal: bool,
        customer_id: &str,
        user_id: Option<&str>,
    ) -> Params {
        let mut params = self.common_params("exception", customer_id, user_id);
        params.push("exd", description);
        params.push("exf", if fatal { "1" } else { "0" });
        params
    }

    fn timing_params(
        &self,
        category: &str,
        variable_name: &str,
        label: Option<&str>,
        time_ms: i64,
        customer_id: &str,
        user_id: Option<&str>,
    ) -> Params {
        let mut params = self.common_params("timing", customer_id, user_id);
        params.push("utc", category);
        params.push("utv", variable_name);
        params.push("utt", time_ms.to_string());
        params.push_if_present("utl", label);
        params
    }

    /// Common prefix shared by every hit type, in protocol order.
    ///
    /// `cid` is positionally mandatory and is never blank-filtered; the
    /// session-wide fields from the configuration are.
    fn common_params(
        &self,
        hit_type: &'static str,
        customer_id: &str,
        user_id: Option<&str>,
    ) -> Params {
        let mut params = Params::new();
        params.push("v", "1");
        params.push("tid", self.config.tracking_id.clone());
        params.push("cid", customer_id);
        params.push("t", hit_type);

        params.push_if_present("uid", user_id);
        params.push_if_present("ds", self.config.data_source.as_deref());
        params.push_if_present("an", self.config.application_name.as_deref());
        params.push_if_present("aid", self.config.application_id.as_deref());
        params.push_if_present("av", self.config.application_version.as_deref());
        params.push_if_present("aiid", self.config.application_installer_id.as_deref());

        params
    }

    async fn send_collect(&self, params: &Params) -> Result<()> {
        let url = format!("{}/collect", self.config.endpoint.trim_end_matches('/'));
        debug!(url = %url, pairs = params.pairs().len(), "sending collect request");

        // Response body and status are discarded; completion of the send
        // is the only signal this layer reports.
        self.client.post(&url).form(params.pairs()).send().await?;
        Ok(())
    }
}
