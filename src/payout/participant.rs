// src/payout/participant.rs
use std::fmt;
use std::num::NonZeroU32;

/// Stable handle for table selection; assigned by the roster, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(pub(crate) u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Line,
    Scout,
}

impl Role {
    pub fn toggled(self) -> Self {
        match self {
            Role::Line => Role::Scout,
            Role::Scout => Role::Line,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Line => "Line",
            Role::Scout => "Scout",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Participant {
    pub(crate) id: ParticipantId,
    pub name: String,
    pub included: bool,
    pub role: Role,
    /// Character id resolved from a killboard or ESI; only used for mail links.
    pub external_id: Option<String>,
    pub share_weight: NonZeroU32,
    pub(crate) share: f64,
}

impl Participant {
    /// Fresh, included line member with weight 1. The id is a placeholder
    /// until the roster appends it.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId(0),
            name: name.into(),
            included: true,
            role: Role::Line,
            external_id: None,
            share_weight: NonZeroU32::MIN,
            share: 0.0,
        }
    }

    pub fn with_external_id(mut self, id: Option<String>) -> Self {
        self.external_id = id;
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    #[inline] pub fn id(&self) -> ParticipantId { self.id }

    /// Computed payout; read-only outside the calculator.
    #[inline] pub fn share(&self) -> f64 { self.share }

    #[inline] pub fn is_scout(&self) -> bool { self.role == Role::Scout }
}
