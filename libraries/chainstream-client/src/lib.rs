//! ChainStream Client
//!
//! Client side of the "support the artist" feature.
//!
//! # Features
//!
//! - **Wallet session**: connect, restore, balance and chain tracking over an
//!   injected `WalletProvider`
//! - **Payments**: `PaymentRecorder::pay_artist` against the REST backend
//! - **Settings**: JSON file store for the playback session's settings
//!
//! Every async operation takes a `CancellationToken`; a cancelled operation
//! returns `ClientError::Cancelled` and leaves state untouched.
//!
//! # Example
//!
//! ```ignore
//! use chainstream_client::{notification, ClientConfig, HttpBackend, PaymentRecorder, WalletSession};
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! let (notifications, _rx) = notification::channel();
//! let wallet = Arc::new(WalletSession::with_provider(provider, notifications.clone()));
//! let backend = Arc::new(HttpBackend::new(ClientConfig::new("http://localhost:5000"))?);
//! let recorder = PaymentRecorder::new(wallet, backend, notifications);
//!
//! let tx = recorder.pay_artist(2, 0.01, &CancellationToken::new()).await?;
//! println!("Paid {} ETH to {}", tx.amount, tx.artist);
//! ```

mod backend;
mod cancel;
mod config;
mod error;
pub mod notification;
mod recorder;
mod settings_file;
pub mod wallet;

pub use backend::{HttpBackend, PayRequest, PaymentBackend, PaymentReceipt};
pub use config::{ClientConfig, CONNECT_TIMEOUT, REQUEST_TIMEOUT};
pub use error::{ClientError, Result};
pub use notification::{Notification, NotificationVariant};
pub use recorder::PaymentRecorder;
pub use settings_file::FileSettings;
pub use wallet::{WalletEvent, WalletProvider, WalletRequest, WalletSession, WalletState};

// Re-exported so callers need not depend on tokio-util directly
pub use tokio_util::sync::CancellationToken;
