//! Channel assignment state: maps each raw telemetry channel to a standard
//! category, a unit, and an optional secondary metric.
//!
//! One assignment exists per catalog channel for the whole application run.
//! The set is created through mapping inference and only ever mutated through
//! the edit operations below; `reset_all` rebuilds it from scratch.
//!
//! Invariant maintained by every operation: `category_id`, `unit` and
//! `secondary_id` are all `None` together, or `category_id` and `unit` are
//! both set (with `secondary_id` optionally set for categories that support
//! secondary metrics).

use log::warn;

use crate::catalog::{RawChannel, CATALOG};
use crate::error::ShellError;
use crate::mapping;

/// Mutable mapping state for a single raw channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelAssignment {
    pub channel: &'static RawChannel,
    pub category_id: Option<&'static str>,
    pub unit: Option<String>,
    pub secondary_id: Option<String>,
}

impl ChannelAssignment {
    /// Build the initial assignment for a channel via mapping inference.
    ///
    /// An inferred category brings its default unit along; the secondary
    /// metric is never auto-assigned.
    fn inferred(channel: &'static RawChannel) -> Self {
        let category = mapping::infer(channel).and_then(|id| CATALOG.category(id));
        Self {
            channel,
            category_id: category.map(|c| c.id),
            unit: category.map(|c| c.default_unit().to_string()),
            secondary_id: None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.category_id.is_some()
    }
}

/// Ordered set of channel assignments, one per catalog channel.
pub struct AssignmentModel {
    assignments: Vec<ChannelAssignment>,
}

impl Default for AssignmentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentModel {
    pub fn new() -> Self {
        Self {
            assignments: CATALOG
                .channels()
                .iter()
                .map(ChannelAssignment::inferred)
                .collect(),
        }
    }

    /// All assignments, in catalog order.
    pub fn assignments(&self) -> &[ChannelAssignment] {
        &self.assignments
    }

    fn find_mut(&mut self, channel_id: &str) -> Result<&mut ChannelAssignment, ShellError> {
        self.assignments
            .iter_mut()
            .find(|a| a.channel.id == channel_id)
            .ok_or_else(|| ShellError::ChannelNotFound {
                id: channel_id.to_string(),
            })
    }

    /// Assign a standard category (or clear the assignment with `None`).
    ///
    /// Assigning a category always resets the unit to that category's default.
    /// The secondary metric is cleared when the category changes or does not
    /// support secondary metrics; re-selecting the current category keeps the
    /// secondary metric as long as it is still a valid option.
    pub fn set_category(
        &mut self,
        channel_id: &str,
        category_id: Option<&str>,
    ) -> Result<(), ShellError> {
        let assignment = self.find_mut(channel_id)?;
        let Some(category_id) = category_id else {
            assignment.category_id = None;
            assignment.unit = None;
            assignment.secondary_id = None;
            return Ok(());
        };
        let Some(category) = CATALOG.category(category_id) else {
            // The UI only offers catalog categories, so this is unreachable in
            // practice; log and keep prior state.
            warn!("ignoring assignment to unknown category '{category_id}'");
            return Ok(());
        };

        let changed = assignment.category_id != Some(category.id);
        assignment.category_id = Some(category.id);
        assignment.unit = Some(category.default_unit().to_string());
        assignment.secondary_id = if !category.supports_secondary || changed {
            None
        } else {
            assignment
                .secondary_id
                .take()
                .filter(|s| CATALOG.is_valid_secondary(category.id, s))
        };
        Ok(())
    }

    /// Set the unit directly.
    ///
    /// No validation against the category's unit list happens here; the
    /// presented choice list already constrains the input to valid options.
    pub fn set_unit(&mut self, channel_id: &str, unit: &str) -> Result<(), ShellError> {
        let assignment = self.find_mut(channel_id)?;
        assignment.unit = Some(unit.to_string());
        Ok(())
    }

    /// Set the secondary metric; an empty id clears it.
    pub fn set_secondary(&mut self, channel_id: &str, secondary_id: &str) -> Result<(), ShellError> {
        let assignment = self.find_mut(channel_id)?;
        assignment.secondary_id = if secondary_id.is_empty() {
            None
        } else {
            Some(secondary_id.to_string())
        };
        Ok(())
    }

    /// Discard all edits and rebuild every assignment from inference.
    pub fn reset_all(&mut self) {
        self.assignments = CATALOG
            .channels()
            .iter()
            .map(ChannelAssignment::inferred)
            .collect();
    }

    /// Number of channels with a category assigned.
    pub fn assigned_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_assigned()).count()
    }

    /// Channels still waiting for a category.
    pub fn pending_channels(&self) -> impl Iterator<Item = &ChannelAssignment> {
        self.assignments.iter().filter(|a| !a.is_assigned())
    }
}
