// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Submit gating derived from the last validation outcome of every tracked field.

use std::collections::BTreeMap;

use crate::models::Validity;

/// Form fields whose validity gates submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Hashtags,
    Comment,
}

impl FieldId {
    pub const ALL: [FieldId; 2] = [FieldId::Hashtags, FieldId::Comment];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Hashtags => "Hashtags",
            FieldId::Comment => "Comment",
        }
    }
}

/// True when none of the given field outcomes carries an error.
pub fn is_submit_allowed<I>(states: I) -> bool
where
    I: IntoIterator<Item = Validity>,
{
    states.into_iter().all(Validity::is_valid)
}

/// Tracks per-field validity plus whether a submission is currently in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitGate {
    fields: BTreeMap<FieldId, Validity>,
    in_flight: bool,
}

impl Default for SubmitGate {
    fn default() -> Self {
        Self {
            fields: FieldId::ALL
                .into_iter()
                .map(|id| (id, Validity::Valid))
                .collect(),
            in_flight: false,
        }
    }
}

impl SubmitGate {
    /// Store the latest outcome for a field, replacing the previous one.
    pub fn record(&mut self, field: FieldId, validity: Validity) {
        self.fields.insert(field, validity);
    }

    pub fn field(&self, field: FieldId) -> Validity {
        self.fields.get(&field).copied().unwrap_or_default()
    }

    /// First field currently showing an error, in declaration order.
    pub fn first_error(&self) -> Option<(FieldId, Validity)> {
        self.fields
            .iter()
            .find(|(_, v)| !v.is_valid())
            .map(|(id, v)| (*id, *v))
    }

    pub fn has_errors(&self) -> bool {
        !is_submit_allowed(self.fields.values().copied())
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the submit control should currently be enabled.
    pub fn is_allowed(&self) -> bool {
        !self.in_flight && !self.has_errors()
    }

    /// Close the gate for the duration of a submission.
    pub fn begin_submission(&mut self) {
        self.in_flight = true;
    }

    /// Reopen the gate once the submission outcome is known.
    pub fn finish_submission(&mut self) {
        self.in_flight = false;
    }

    /// Back to the initial state: every field valid, nothing in flight.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
