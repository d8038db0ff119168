//! Saved-places state container.
//!
//! # Responsibility
//! - Own the place list, selection, viewport, and unlock state observed
//!   by the presentation layer.
//! - Persist the list through the repository seam after every mutation.
//! - Broker identity verification through the authenticator seam.
//!
//! # Invariants
//! - All state mutation happens on the owning thread; verification
//!   completions are applied only by `pump_authentication`.
//! - The document on disk equals the in-memory list right after every
//!   successful save.
//! - Load/save failures never propagate to callers; they are logged and
//!   reported to the optional diagnostic hook.

use crate::auth::{Authenticator, VerificationResult};
use crate::model::place::Place;
use crate::model::viewport::Viewport;
use crate::repo::place_repo::{PlaceRepository, RepoError};
use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{info, warn};

/// User-facing justification shown by the platform verification prompt.
const VERIFICATION_REASON: &str = "Please authenticate yourself to unlock your places.";

/// Message shown when the device has no verification capability.
const UNSUPPORTED_DEVICE_MESSAGE: &str =
    "Sorry, your device does not support biometric authentication.";

/// Message shown when a verification attempt fails for any reason.
const VERIFICATION_FAILED_MESSAGE: &str = "Unable to authenticate you; please try again";

/// Initial placeholder for the authentication error message.
const DEFAULT_AUTHENTICATION_ERROR: &str = "Unknown error";

/// Persistence operation observed by the diagnostic hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Load,
    Save,
}

/// Optional observer for swallowed load/save failures.
///
/// Loading and saving deliberately favor availability: the store falls
/// back to an empty list or keeps its in-memory edits, and the failure
/// only reaches the log. The hook lets tests and host diagnostics see
/// those failures without changing that contract.
pub type StorageErrorHook = Box<dyn FnMut(StorageOp, &RepoError)>;

/// State container for the bucket-list map screen.
///
/// Owned and mutated by a single thread (the host UI thread). The only
/// cross-thread traffic is the verification completion, which travels
/// through an internal channel and is applied by `pump_authentication`.
pub struct PlaceStore<R: PlaceRepository, A: Authenticator> {
    repo: R,
    authenticator: A,
    places: Vec<Place>,
    selected: Option<Place>,
    viewport: Viewport,
    unlocked: bool,
    authentication_error: String,
    show_authentication_error: bool,
    verification_tx: Sender<VerificationResult>,
    verification_rx: Receiver<VerificationResult>,
    storage_error_hook: Option<StorageErrorHook>,
}

impl<R: PlaceRepository, A: Authenticator> PlaceStore<R, A> {
    /// Opens the store, loading previously saved places.
    ///
    /// # Contract
    /// - Any load failure (missing document, unreadable file, malformed
    ///   JSON) falls back to an empty list and never propagates.
    pub fn open(repo: R, authenticator: A) -> Self {
        Self::open_with_diagnostics(repo, authenticator, None)
    }

    /// Opens the store with a diagnostic hook installed before the
    /// initial load, so load failures are observable.
    pub fn open_with_diagnostics(
        repo: R,
        authenticator: A,
        storage_error_hook: Option<StorageErrorHook>,
    ) -> Self {
        let (verification_tx, verification_rx) = unbounded();
        let mut store = Self {
            repo,
            authenticator,
            places: Vec::new(),
            selected: None,
            viewport: Viewport::default(),
            unlocked: false,
            authentication_error: DEFAULT_AUTHENTICATION_ERROR.to_string(),
            show_authentication_error: false,
            verification_tx,
            verification_rx,
            storage_error_hook,
        };
        store.load_places();
        store
    }

    fn load_places(&mut self) {
        match self.repo.load() {
            Ok(places) => {
                info!(
                    "event=places_load module=store status=ok count={}",
                    places.len()
                );
                self.places = places;
            }
            Err(err) => {
                warn!("event=places_load module=store status=error fallback=empty error={err}");
                self.report_storage_error(StorageOp::Load, &err);
                self.places = Vec::new();
            }
        }
    }

    /// Serializes the current list through the repository.
    ///
    /// Save failures are logged and reported to the hook; the in-memory
    /// list stays authoritative and no retry is attempted.
    fn persist(&mut self) {
        match self.repo.save(&self.places) {
            Ok(()) => info!(
                "event=places_save module=store status=ok count={}",
                self.places.len()
            ),
            Err(err) => {
                warn!("event=places_save module=store status=error error={err}");
                self.report_storage_error(StorageOp::Save, &err);
            }
        }
    }

    fn report_storage_error(&mut self, op: StorageOp, err: &RepoError) {
        if let Some(hook) = self.storage_error_hook.as_mut() {
            hook(op, err);
        }
    }

    /// Saved places in insertion order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Currently selected place, if any.
    pub fn selected_place(&self) -> Option<&Place> {
        self.selected.as_ref()
    }

    /// Sets or clears the selection.
    ///
    /// The selection is a by-value copy matched by id later; it goes
    /// stale when no list entry carries its id anymore.
    pub fn set_selected_place(&mut self, place: Option<Place>) {
        self.selected = place;
    }

    /// Current map viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Updates the viewport from the host map camera.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Whether verification succeeded at some point in this process.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Last authentication error message.
    pub fn authentication_error(&self) -> &str {
        &self.authentication_error
    }

    /// Whether the host should currently present the error message.
    pub fn show_authentication_error(&self) -> bool {
        self.show_authentication_error
    }

    /// Clears the error visibility flag once the host dismissed it.
    pub fn dismiss_authentication_error(&mut self) {
        self.show_authentication_error = false;
    }

    /// Drops a new place at the current viewport center.
    ///
    /// # Contract
    /// - Appends exactly one entry with a fresh id, placeholder title,
    ///   and empty description.
    /// - Persists the list afterwards.
    pub fn add_place(&mut self) {
        let place = Place::new(self.viewport.center);
        self.places.push(place);
        self.persist();
    }

    /// Replaces the selected place with `edited`.
    ///
    /// # Contract
    /// - Requires a selection; without one this is a silent no-op.
    /// - The entry matching the selection by id is replaced in place at
    ///   its existing position, then the list is persisted.
    /// - A stale selection (no id match) is a silent no-op as well.
    pub fn update_place(&mut self, edited: Place) {
        let Some(selected) = self.selected.as_ref() else {
            return;
        };

        // Id-only equality: this matches the selected entry even when
        // its other fields were edited since selection.
        if let Some(index) = self.places.iter().position(|place| place == selected) {
            self.places[index] = edited;
            self.persist();
        }
    }

    /// Starts one identity verification attempt.
    ///
    /// When the device cannot verify at all, the error state is set
    /// immediately and no request is issued. Otherwise the platform
    /// prompt runs; its outcome arrives through the internal channel and
    /// is applied by `pump_authentication` on the owning thread.
    pub fn authenticate(&mut self) {
        if !self.authenticator.can_verify() {
            warn!("event=authenticate module=store status=error reason=unsupported_device");
            self.unlocked = false;
            self.authentication_error = UNSUPPORTED_DEVICE_MESSAGE.to_string();
            self.show_authentication_error = true;
            return;
        }

        info!("event=authenticate module=store status=start");
        let tx = self.verification_tx.clone();
        self.authenticator.request_verification(
            VERIFICATION_REASON,
            Box::new(move |result| {
                // The receiver is only gone when the store was dropped
                // mid-flight; the outcome is irrelevant then.
                let _ = tx.send(result);
            }),
        );
    }

    /// Applies verification outcomes delivered since the last call.
    ///
    /// Must be called from the owning thread. Returns how many outcomes
    /// were applied.
    ///
    /// # Contract
    /// - Success sets the unlocked flag and touches nothing else.
    /// - Failure sets the retry message and the visibility flag; an
    ///   already unlocked store stays unlocked.
    pub fn pump_authentication(&mut self) -> usize {
        let results: Vec<VerificationResult> = self.verification_rx.try_iter().collect();
        let applied = results.len();
        for result in results {
            self.apply_verification_result(result);
        }
        applied
    }

    fn apply_verification_result(&mut self, result: VerificationResult) {
        match result {
            Ok(()) => {
                info!("event=authenticate module=store status=ok");
                self.unlocked = true;
            }
            Err(failure) => {
                warn!("event=authenticate module=store status=error reason={failure}");
                self.authentication_error = VERIFICATION_FAILED_MESSAGE.to_string();
                self.show_authentication_error = true;
            }
        }
    }
}
