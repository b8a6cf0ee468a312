//! Protocol phases, directions and peer roles.

use std::fmt;

/// A protocol phase. Each phase has its own packet ID space per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Handshake,
    Status,
    Login,
    Play,
}

impl Phase {
    /// All phases in progression order.
    pub const ALL: [Self; 4] = [Self::Handshake, Self::Status, Self::Login, Self::Play];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` if `next` is a legal successor of this phase.
    ///
    /// The only edges are Handshake to Status, Handshake to Login and
    /// Login to Play.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Handshake, Self::Status | Self::Login) | (Self::Login, Self::Play)
        )
    }

    /// Returns `true` if no transition leaves this phase.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Status | Self::Play)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Handshake => "Handshake",
            Self::Status => "Status",
            Self::Login => "Login",
            Self::Play => "Play",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Packet direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Server to client.
    ClientBound,
    /// Client to server.
    ServerBound,
}

impl Direction {
    pub const ALL: [Self; 2] = [Self::ClientBound, Self::ServerBound];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::ClientBound => Self::ServerBound,
            Self::ServerBound => Self::ClientBound,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClientBound => "ClientBound",
            Self::ServerBound => "ServerBound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Which end of the connection a session plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Server,
    Client,
}

impl Role {
    /// Direction of packets this role receives.
    #[must_use]
    pub const fn inbound(self) -> Direction {
        match self {
            Self::Server => Direction::ServerBound,
            Self::Client => Direction::ClientBound,
        }
    }

    /// Direction of packets this role sends.
    #[must_use]
    pub const fn outbound(self) -> Direction {
        self.inbound().opposite()
    }
}
