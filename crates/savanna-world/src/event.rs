//! Domain events reported to the world's observer during a tick.

use savanna_core::{AgentId, Cell};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorldEvent {
    /// A move reflected off the world boundary
    Bounced { agent: AgentId, name: String },
    /// A herbivore ate the plant on its cell
    Grazed {
        agent: AgentId,
        name: String,
        cell: Cell,
    },
    /// A carnivore caught and removed its prey
    Killed {
        hunter: AgentId,
        hunter_name: String,
        prey: AgentId,
        prey_name: String,
    },
}

impl fmt::Display for WorldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldEvent::Bounced { name, .. } => write!(f, "{name} bounces off the boundary."),
            WorldEvent::Grazed { name, cell, .. } => write!(f, "{name} grazes at {cell}."),
            WorldEvent::Killed {
                hunter_name,
                prey_name,
                ..
            } => write!(f, "{hunter_name} kills {prey_name}."),
        }
    }
}

/// Receiver for world events.
///
/// Called synchronously from inside `World::tick`; implementations must not
/// block and cannot reach back into the world.
pub trait EventSink {
    fn notify(&mut self, event: &WorldEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&WorldEvent),
{
    fn notify(&mut self, event: &WorldEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_messages() {
        let bounced = WorldEvent::Bounced {
            agent: AgentId(1),
            name: "Simba".to_string(),
        };
        assert_eq!(bounced.to_string(), "Simba bounces off the boundary.");

        let grazed = WorldEvent::Grazed {
            agent: AgentId(2),
            name: "Wolle".to_string(),
            cell: Cell::new(5, 5),
        };
        assert_eq!(grazed.to_string(), "Wolle grazes at (5, 5).");

        let killed = WorldEvent::Killed {
            hunter: AgentId(1),
            hunter_name: "Simba".to_string(),
            prey: AgentId(2),
            prey_name: "Wolle".to_string(),
        };
        assert_eq!(killed.to_string(), "Simba kills Wolle.");
    }

    #[test]
    fn test_closure_is_a_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |event: &WorldEvent| seen.push(event.to_string());
            sink.notify(&WorldEvent::Bounced {
                agent: AgentId(0),
                name: "Bello".to_string(),
            });
        }
        assert_eq!(seen, vec!["Bello bounces off the boundary.".to_string()]);
    }

    #[test]
    fn test_event_serialization() {
        let event = WorldEvent::Grazed {
            agent: AgentId(4),
            name: "Hippo1".to_string(),
            cell: Cell::new(1, 2),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"kind\":\"grazed\""));
        let parsed: WorldEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
