//! Invariant catalog for the session model and preview pipeline.
#![allow(dead_code)]

/// Must keep the active file either unset or naming an open session.
///
/// - Enforced in: [`crate::view::ActiveView::switch_to`], [`crate::view::ActiveView::close`]
/// - Tested by: [`crate::invariants::test_active_file_is_registered`]
/// - Failure symptom: Status bar, save and preview read a file that has no buffer.
pub(crate) const ACTIVE_FILE_IS_REGISTERED: () = ();

/// Must bind the primary surface to the active session's buffer, or to nothing
/// when no file is active. A released buffer is never left bound.
///
/// - Enforced in: [`crate::view::ActiveView::close`], [`crate::session::SessionRegistry::close`]
/// - Tested by: [`crate::invariants::test_active_file_is_registered`]
/// - Failure symptom: Typing lands in a closed file, or the widget shows stale text.
pub(crate) const PRIMARY_BINDING_FOLLOWS_ACTIVE: () = ();

/// Must hold at most one session per file identifier; reopening returns the
/// existing session with its content and dirty flag untouched.
///
/// - Enforced in: [`crate::session::SessionRegistry::open`]
/// - Tested by: [`crate::invariants::test_reopen_returns_existing_session`]
/// - Failure symptom: Two tabs for one file diverge and unsaved edits vanish.
pub(crate) const ONE_SESSION_PER_FILE: () = ();

/// Must capture the outgoing cursor before rebinding the primary surface.
///
/// - Enforced in: [`crate::view::ActiveView::switch_to`]
/// - Tested by: [`crate::invariants::test_cursor_captured_before_rebind`]
/// - Failure symptom: Switching back to a tab always lands at the start of the file.
pub(crate) const CAPTURE_CURSOR_BEFORE_REBIND: () = ();

/// Must treat the split view buffer as an independent copy: its edits never
/// reach a session and closing it never releases a session buffer.
///
/// - Enforced in: [`crate::view::ActiveView::open_split`], [`crate::view::ActiveView::close_split`], [`crate::Workspace::handle_content_changed`]
/// - Tested by: [`crate::invariants::test_split_buffer_is_independent`]
/// - Failure symptom: Closing split view blanks the main editor or marks it dirty.
pub(crate) const SPLIT_BUFFER_IS_INDEPENDENT: () = ();

/// Must validate identity changes before mutating anything.
///
/// - Enforced in: [`crate::Workspace::create_file`], [`crate::Workspace::rename_file`]
/// - Tested by: [`crate::invariants::test_rejected_identity_change_mutates_nothing`]
/// - Failure symptom: A refused rename still closes the tab or drops the old record.
pub(crate) const VALIDATE_BEFORE_IDENTITY_MUTATION: () = ();

/// Must compile only for the most recently armed debounce timer.
///
/// - Enforced in: [`crate::preview::PreviewScheduler::accept`], [`crate::Workspace::handle_msg`]
/// - Tested by: [`crate::invariants::test_stale_timer_never_compiles`]
/// - Failure symptom: The preview flickers through intermediate states of an edit burst.
pub(crate) const LATEST_TIMER_ONLY: () = ();
