//! Agent configuration toggles.
//!
//! DESIGN
//! ======
//! Every toggle change is an `AgentMsg` applied by `AgentsState::apply`.
//! Fields are addressed through the closed `AgentField` enum, so there is no
//! string-keyed property access and an unknown agent is a no-op.

#[cfg(test)]
#[path = "agents_test.rs"]
mod agents_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AgentSettings {
    pub enabled: bool,
    pub auto_reply: bool,
    pub appointment_reminders: bool,
    pub after_hours: bool,
    pub escalate_to_staff: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentField {
    Enabled,
    AutoReply,
    AppointmentReminders,
    AfterHours,
    EscalateToStaff,
}

impl AgentField {
    pub const ALL: [Self; 5] = [
        Self::Enabled,
        Self::AutoReply,
        Self::AppointmentReminders,
        Self::AfterHours,
        Self::EscalateToStaff,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Enabled => "Agent enabled",
            Self::AutoReply => "Auto-reply to patient messages",
            Self::AppointmentReminders => "Send appointment reminders",
            Self::AfterHours => "Active after clinic hours",
            Self::EscalateToStaff => "Escalate urgent cases to staff",
        }
    }

    pub fn get(self, settings: &AgentSettings) -> bool {
        match self {
            Self::Enabled => settings.enabled,
            Self::AutoReply => settings.auto_reply,
            Self::AppointmentReminders => settings.appointment_reminders,
            Self::AfterHours => settings.after_hours,
            Self::EscalateToStaff => settings.escalate_to_staff,
        }
    }

    pub fn set(self, settings: &mut AgentSettings, value: bool) {
        let slot = match self {
            Self::Enabled => &mut settings.enabled,
            Self::AutoReply => &mut settings.auto_reply,
            Self::AppointmentReminders => &mut settings.appointment_reminders,
            Self::AfterHours => &mut settings.after_hours,
            Self::EscalateToStaff => &mut settings.escalate_to_staff,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub settings: AgentSettings,
    /// Settings restored by `AgentMsg::Reset`.
    pub defaults: AgentSettings,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentMsg {
    Set { agent_id: String, field: AgentField, value: bool },
    Toggle { agent_id: String, field: AgentField },
    Reset { agent_id: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AgentsState {
    pub agents: Vec<AgentConfig>,
}

impl AgentsState {
    pub fn new(agents: Vec<AgentConfig>) -> Self {
        Self { agents }
    }

    pub fn agent(&self, agent_id: &str) -> Option<&AgentConfig> {
        self.agents.iter().find(|a| a.id == agent_id)
    }

    /// Apply one update. Returns whether any setting changed.
    pub fn apply(&mut self, msg: AgentMsg) -> bool {
        let agent_id = match &msg {
            AgentMsg::Set { agent_id, .. } | AgentMsg::Toggle { agent_id, .. } | AgentMsg::Reset { agent_id } => {
                agent_id.as_str()
            }
        };
        let Some(agent) = self.agents.iter_mut().find(|a| a.id == agent_id) else {
            log::debug!("agents: ignoring update for unknown agent {agent_id}");
            return false;
        };
        let before = agent.settings;
        match msg {
            AgentMsg::Set { field, value, .. } => field.set(&mut agent.settings, value),
            AgentMsg::Toggle { field, .. } => {
                let current = field.get(&agent.settings);
                field.set(&mut agent.settings, !current);
            }
            AgentMsg::Reset { .. } => agent.settings = agent.defaults,
        }
        agent.settings != before
    }

    /// Number of agents currently enabled.
    pub fn enabled_count(&self) -> usize {
        self.agents.iter().filter(|a| a.settings.enabled).count()
    }
}

fn agent(id: &str, name: &str, description: &str, settings: AgentSettings) -> AgentConfig {
    AgentConfig {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        settings,
        defaults: settings,
    }
}

pub fn demo_agents() -> Vec<AgentConfig> {
    vec![
        agent(
            "receptionist",
            "Front-desk Receptionist",
            "Answers patient enquiries and books open slots.",
            AgentSettings { enabled: true, auto_reply: true, appointment_reminders: false, after_hours: false, escalate_to_staff: true },
        ),
        agent(
            "reminder-bot",
            "Reminder Bot",
            "Sends SMS and email reminders ahead of appointments.",
            AgentSettings { enabled: true, auto_reply: false, appointment_reminders: true, after_hours: true, escalate_to_staff: false },
        ),
        agent(
            "triage",
            "Triage Assistant",
            "Collects symptoms before the consultation.",
            AgentSettings { enabled: false, auto_reply: false, appointment_reminders: false, after_hours: false, escalate_to_staff: true },
        ),
    ]
}
