//! Outbound HTTP layer for the Samvidha portal.
//!
//! The portal keeps its session server-side against cookies handed out by
//! the login endpoint, so every login owns a fresh cookie jar and every
//! page fetch replays it. Nothing here parses HTML; that lives in
//! [`crate::scrape`].

mod client;

pub use client::{PortalClient, PortalSession};

/// Query actions understood by the portal's `/home` dispatcher.
///
/// These strings are upstream contract surface; if the portal renames an
/// action the corresponding page silently stops resolving.
pub mod actions {
    /// Attendance summary per subject.
    pub const ATTENDANCE: &str = "stud_att_STD";
    /// Continuous internal evaluation (mid-term) marks.
    pub const MID_MARKS: &str = "cie_marks_ug";
    /// Student profile.
    pub const PROFILE: &str = "profile";
}
