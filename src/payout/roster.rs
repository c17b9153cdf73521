// src/payout/roster.rs
use std::collections::HashSet;
use std::num::NonZeroU32;

use super::participant::{Participant, ParticipantId};

/// What `Roster::add` did with the incoming record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Appended(ParticipantId),
    /// Same name already present; a missing external id was filled in.
    MergedId(ParticipantId),
    /// Same name already present; nothing changed.
    Unchanged(ParticipantId),
}

impl AddOutcome {
    pub fn id(self) -> ParticipantId {
        match self {
            AddOutcome::Appended(id) | AddOutcome::MergedId(id) | AddOutcome::Unchanged(id) => id,
        }
    }
}

/// Insertion-ordered participants, unique by exact name.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    participants: Vec<Participant>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self { Self::default() }

    /// Append, or merge into the entry with the same name. Merging only fills
    /// a missing `external_id`; the first id seen wins. `dynamic_default`
    /// seeds the weight of appended participants when dynamic shares are on.
    pub fn add(&mut self, mut incoming: Participant, dynamic_default: Option<NonZeroU32>) -> AddOutcome {
        if let Some(existing) = self.participants.iter_mut().find(|p| p.name == incoming.name) {
            if existing.external_id.is_none() && incoming.external_id.is_some() {
                existing.external_id = incoming.external_id.take();
                return AddOutcome::MergedId(existing.id);
            }
            return AddOutcome::Unchanged(existing.id);
        }

        self.next_id += 1;
        incoming.id = ParticipantId(self.next_id);
        incoming.share = 0.0;
        if let Some(w) = dynamic_default {
            incoming.share_weight = w;
        }
        let id = incoming.id;
        self.participants.push(incoming);
        AddOutcome::Appended(id)
    }

    /// Drop every participant whose id is in `ids`. Returns how many went.
    pub fn remove(&mut self, ids: &HashSet<ParticipantId>) -> usize {
        let before = self.participants.len();
        if !ids.is_empty() {
            self.participants.retain(|p| !ids.contains(&p.id));
        }
        before - self.participants.len()
    }

    pub fn clear(&mut self) {
        self.participants.clear();
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: ParticipantId) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    #[inline] pub fn iter(&self) -> std::slice::Iter<'_, Participant> { self.participants.iter() }
    #[inline] pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Participant> { self.participants.iter_mut() }
    #[inline] pub fn len(&self) -> usize { self.participants.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.participants.is_empty() }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;
    fn into_iter(self) -> Self::IntoIter { self.participants.iter() }
}
