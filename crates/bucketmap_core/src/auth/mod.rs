//! Identity verification seam.
//!
//! # Responsibility
//! - Define the contract the store uses to gate access to saved places.
//! - Keep platform verification details (biometrics, passcode) outside
//!   the core crate.
//!
//! # Invariants
//! - Verification has exactly two outcomes: verified, or failed with a
//!   reason.
//! - Completion callbacks may arrive on any thread; callers marshal the
//!   result back onto the owning thread before touching state.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Outcome of one verification request.
pub type VerificationResult = Result<(), VerificationFailure>;

/// Completion callback invoked by the platform when verification ends.
pub type VerificationCompletion = Box<dyn FnOnce(VerificationResult) + Send + 'static>;

/// Reason a verification request did not end in success.
///
/// The store treats every failure the same (a generic retry prompt); the
/// reason is preserved for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationFailure {
    /// The user dismissed the prompt.
    Cancelled,
    /// The platform refuses further attempts after repeated failures.
    LockedOut,
    /// The presented identity did not match the enrolled one.
    NotRecognized,
    /// Any other platform-reported failure.
    Other(String),
}

impl Display for VerificationFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => write!(f, "verification cancelled by the user"),
            Self::LockedOut => write!(f, "verification locked out after repeated failures"),
            Self::NotRecognized => write!(f, "identity not recognized"),
            Self::Other(details) => write!(f, "verification failed: {details}"),
        }
    }
}

impl Error for VerificationFailure {}

/// External capability performing identity verification.
///
/// The store only cares about availability and the two-outcome result;
/// how verification happens (Face ID, fingerprint, PIN) is a host
/// concern.
pub trait Authenticator {
    /// Returns whether the device can run identity verification at all.
    fn can_verify(&self) -> bool;

    /// Starts one verification attempt with a user-facing justification.
    ///
    /// # Contract
    /// - `completion` is invoked exactly once, possibly on another
    ///   thread.
    /// - There is no cancellation; the platform owns the prompt
    ///   lifetime and any timeout.
    fn request_verification(&self, reason: &str, completion: VerificationCompletion);
}
