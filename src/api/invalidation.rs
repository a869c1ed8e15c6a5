use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::TemporalAxis;
use crate::core::Temporal;

/// Ordered invalidation levels requested by axis setters.
///
/// `Layout` asks the host to re-run the layout pass with the current range;
/// `Range` additionally discards the current range so auto-ranging recomputes
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum AxisInvalidation {
    #[default]
    None,
    Layout,
    Range,
}

impl AxisInvalidation {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

/// Host hook invoked whenever a setter requests a new layout pass.
pub type RelayoutCallback = Arc<dyn Fn(AxisInvalidation) + Send + Sync + 'static>;

impl<T: Temporal> TemporalAxis<T> {
    pub fn set_relayout_callback(&mut self, callback: RelayoutCallback) {
        self.relayout_callback = Some(callback);
    }

    pub fn clear_relayout_callback(&mut self) {
        self.relayout_callback = None;
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> AxisInvalidation {
        self.pending_invalidation
    }

    /// Returns and clears the pending invalidation level.
    pub fn take_invalidation(&mut self) -> AxisInvalidation {
        std::mem::take(&mut self.pending_invalidation)
    }

    pub(super) fn invalidate_range_only(&mut self) {
        self.range_valid = false;
        self.request(AxisInvalidation::Range);
    }

    pub(super) fn request_layout(&mut self) {
        self.request(AxisInvalidation::Layout);
    }

    fn request(&mut self, level: AxisInvalidation) {
        self.pending_invalidation = self.pending_invalidation.max(level);
        if let Some(callback) = &self.relayout_callback {
            callback(level);
        }
    }
}
