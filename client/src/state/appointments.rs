//! Clinic appointment list state for the dashboard.
//!
//! Appointments are static demo data; the page only filters, searches and
//! summarizes them for the status pie chart.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [Self; 4] = [Self::Scheduled, Self::Completed, Self::Cancelled, Self::NoShow];

    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::NoShow => "No-show",
        }
    }

    /// Chart/badge color.
    pub fn color(self) -> &'static str {
        match self {
            Self::Scheduled => "#3b82f6",
            Self::Completed => "#22c55e",
            Self::Cancelled => "#f97316",
            Self::NoShow => "#ef4444",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Appointment {
    pub id: &'static str,
    pub patient: &'static str,
    pub doctor: &'static str,
    pub department: &'static str,
    /// `YYYY-MM-DD`
    pub date: &'static str,
    /// `HH:MM`
    pub time: &'static str,
    pub status: AppointmentStatus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppointmentFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

impl AppointmentFilter {
    pub fn admits(self, status: AppointmentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(s) => s == status,
        }
    }
}

/// Dashboard-local UI state.
#[derive(Clone, Debug, Default)]
pub struct AppointmentsState {
    pub filter: AppointmentFilter,
    pub query: String,
}

/// Filter + search, ordered by date then time.
pub fn visible_appointments(list: &[Appointment], filter: AppointmentFilter, query: &str) -> Vec<Appointment> {
    let needle = query.trim().to_lowercase();
    let mut out: Vec<Appointment> = list
        .iter()
        .filter(|a| filter.admits(a.status))
        .filter(|a| {
            needle.is_empty()
                || [a.patient, a.doctor, a.department]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    out.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
    out
}

/// Count per status in `AppointmentStatus::ALL` order, zeros included.
pub fn status_breakdown(list: &[Appointment]) -> Vec<(AppointmentStatus, usize)> {
    AppointmentStatus::ALL
        .iter()
        .map(|&status| (status, list.iter().filter(|a| a.status == status).count()))
        .collect()
}

pub fn demo_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "apt-201",
            patient: "Meera Nair",
            doctor: "Dr. Rao",
            department: "Cardiology",
            date: "2026-10-16",
            time: "09:00",
            status: AppointmentStatus::Completed,
        },
        Appointment {
            id: "apt-202",
            patient: "Arjun Patel",
            doctor: "Dr. Iyer",
            department: "Orthopedics",
            date: "2026-10-16",
            time: "10:30",
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "apt-203",
            patient: "Sara Thomas",
            doctor: "Dr. Rao",
            department: "Cardiology",
            date: "2026-10-15",
            time: "15:00",
            status: AppointmentStatus::NoShow,
        },
        Appointment {
            id: "apt-204",
            patient: "Kabir Singh",
            doctor: "Dr. Menon",
            department: "Dermatology",
            date: "2026-10-17",
            time: "11:15",
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "apt-205",
            patient: "Lina Das",
            doctor: "Dr. Iyer",
            department: "Orthopedics",
            date: "2026-10-14",
            time: "13:45",
            status: AppointmentStatus::Cancelled,
        },
        Appointment {
            id: "apt-206",
            patient: "Rohan Gupta",
            doctor: "Dr. Menon",
            department: "Dermatology",
            date: "2026-10-16",
            time: "08:15",
            status: AppointmentStatus::Completed,
        },
    ]
}
