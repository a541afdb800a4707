//! State management module for the SolForge TUI application.
//!
//! This module provides a decomposed state architecture, separating
//! concerns into:
//!
//! - [`FormsState`] - the three operation forms (create, mint, send)
//! - [`DataState`] - wallet snapshot and transaction history
//! - [`UiState`] - presentation concerns (focus, popup, toast)
//! - [`AppConfig`] - persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                       App                           │
//! ├──────────────┬──────────────┬───────────────────────┤
//! │  FormsState  │  DataState   │       UiState         │
//! │  - creator   │  - snapshot  │  - focus              │
//! │  - minter    │  - history   │  - popup              │
//! │  - sender    │  - fetch seq │  - toast              │
//! └──────────────┴──────────────┴───────────────────────┘
//! ```
//!
//! Background tasks (snapshot refreshes, the transfer watcher, submission
//! tasks) communicate with the main loop through an unbounded message
//! channel; the connected session address is broadcast to them over a
//! watch channel so their lifetime is scoped to the session.

use std::path::PathBuf;
use std::sync::Arc;

use arboard::Clipboard;
use tokio::sync::{mpsc, watch};

use crate::client::RpcClient;
use crate::domain::{Cluster, Pubkey, SignatureRecord, WalletSnapshot};
use crate::notify::Notifier;
use crate::wallet::WalletSession;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_commands;
mod app_lifecycle;
mod app_messages;

pub mod config;
pub mod data;
pub mod forms;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::{DataState, HistoryState};
pub use forms::{CreatorForm, FormKind, FormsState, MinterField, MinterForm, SenderField, SenderForm};
pub use ui_state::{Focus, PopupState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// The outcome of a successful form submission.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Signature of the confirmed transaction.
    pub signature: String,
    /// The freshly created mint address (token creation only).
    pub mint: Option<String>,
}

/// Messages sent between async tasks and the main app loop.
#[derive(Debug)]
pub enum AppMessage {
    /// The periodic refresh interval elapsed while connected.
    RefreshTick,
    /// A watched token account changed on the ledger.
    TokenAccountChanged,
    /// A snapshot refresh completed (tagged with its fetch sequence).
    SnapshotFetched {
        seq: u64,
        result: Result<WalletSnapshot, String>,
    },
    /// The transaction history fetch completed.
    HistoryFetched(Result<Vec<SignatureRecord>, String>),
    /// A form submission finished.
    SubmitFinished {
        form: FormKind,
        result: Result<SubmitOutcome, String>,
    },
    /// A toast notification to display.
    Toast(String),
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options that can be passed when starting the application.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Cluster override from the command line.
    pub cluster: Option<Cluster>,
    /// Keypair file override from the command line.
    pub keypair_path: Option<PathBuf>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// Holds the decomposed sub-states, the optional wallet session, the RPC
/// client and the async communication channels.
pub struct App {
    // ========================================================================
    // Sub-states (decomposed concerns)
    // ========================================================================
    /// Operation form state.
    pub forms: FormsState,

    /// Wallet snapshot and transaction history.
    pub data: DataState,

    /// UI state - focus, popup, toast.
    pub ui: UiState,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// The cluster this run is connected to.
    pub cluster: Cluster,

    /// The connected wallet session, if any. Shared with submission tasks
    /// so they can sign without blocking the UI.
    pub session: Option<Arc<WalletSession>>,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for UI animations.
    pub animation_tick: u64,

    /// Path the wallet session is loaded from on connect.
    pub(crate) keypair_path: PathBuf,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // NOTE: Channel sends use `let _ = tx.send(...)` throughout this module.
    // This is intentional fire-and-forget: receivers may be dropped during
    // shutdown, and we don't want to propagate those errors.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Watch channel broadcasting the connected session address. Background
    /// tasks stop when the address they were started for is gone.
    pub(crate) session_tx: watch::Sender<Option<Pubkey>>,

    /// Injected notification port; toasts flow through it rather than
    /// through a process-wide sink.
    pub(crate) notifier: Notifier,

    // ========================================================================
    // Network Client
    // ========================================================================
    /// RPC client for cluster requests.
    pub(crate) client: RpcClient,

    /// Next fetch sequence number handed to a snapshot refresh.
    pub(crate) next_fetch_seq: u64,

    /// System clipboard handle, if one is available.
    pub(crate) clipboard: Option<Clipboard>,
}

impl App {
    /// Returns the connected session address, if any.
    #[must_use]
    pub fn session_pubkey(&self) -> Option<Pubkey> {
        self.session.as_ref().map(|s| s.pubkey())
    }
}

#[cfg(test)]
impl App {
    /// Builds a disconnected app with no background tasks, for tests.
    pub(crate) fn new_for_tests() -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (session_tx, _session_rx) = watch::channel(None);
        let notifier = Notifier::new(message_tx.clone());

        Self {
            forms: FormsState::default(),
            data: DataState::new(),
            ui: UiState::new(),
            cluster: Cluster::Devnet,
            session: None,
            exit: false,
            animation_tick: 0,
            keypair_path: PathBuf::from("/nonexistent/id.json"),
            message_tx,
            message_rx,
            session_tx,
            notifier,
            client: RpcClient::new(Cluster::Devnet),
            next_fetch_seq: 0,
            clipboard: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
