use thiserror::Error;

/// Internal failures indicating unexpected behavior rather than bad input.
///
/// All variants result in a 500 Internal Server Error with a generic message returned
/// to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// bcrypt failed to hash a password.
    #[error("Failed to hash password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// jsonwebtoken failed to sign a token.
    #[error("Failed to sign token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),

    /// Ledger totals exceeded the range of `Decimal`.
    #[error("Ledger totals overflowed")]
    LedgerOverflow,

    /// A task on the blocking thread pool panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}
