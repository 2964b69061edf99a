//! Help-center FAQ state.

#[cfg(test)]
#[path = "help_test.rs"]
mod help_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HelpCategory {
    Appointments,
    Billing,
    Exams,
    Account,
}

impl HelpCategory {
    pub const ALL: [Self; 4] = [Self::Appointments, Self::Billing, Self::Exams, Self::Account];

    pub fn label(self) -> &'static str {
        match self {
            Self::Appointments => "Appointments",
            Self::Billing => "Billing",
            Self::Exams => "Exams",
            Self::Account => "Account",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpArticle {
    pub id: &'static str,
    pub category: HelpCategory,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HelpState {
    pub query: String,
    /// `None` shows every category.
    pub category: Option<HelpCategory>,
    /// Id of the single expanded article.
    pub expanded: Option<String>,
}

impl HelpState {
    pub fn visible_articles(&self, articles: &[HelpArticle]) -> Vec<HelpArticle> {
        let needle = self.query.trim().to_lowercase();
        articles
            .iter()
            .filter(|a| self.category.map_or(true, |c| c == a.category))
            .filter(|a| {
                needle.is_empty()
                    || a.question.to_lowercase().contains(&needle)
                    || a.answer.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Expand `id`, or collapse it if it is already expanded.
    pub fn toggle(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_owned());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }
}

pub fn demo_articles() -> Vec<HelpArticle> {
    vec![
        HelpArticle {
            id: "faq-book",
            category: HelpCategory::Appointments,
            question: "How do I book an appointment?",
            answer: "Open the dashboard, pick a department and choose any open slot. You will receive a confirmation SMS.",
        },
        HelpArticle {
            id: "faq-reschedule",
            category: HelpCategory::Appointments,
            question: "Can I reschedule a visit?",
            answer: "Yes, up to 4 hours before the slot. Cancelled slots are released to the waiting list.",
        },
        HelpArticle {
            id: "faq-invoice",
            category: HelpCategory::Billing,
            question: "Where can I download my invoice?",
            answer: "Invoices are emailed after each completed consultation and can be requested from the front desk.",
        },
        HelpArticle {
            id: "faq-hall-ticket",
            category: HelpCategory::Exams,
            question: "When is my exam seat allotted?",
            answer: "Seats are published a few days before the exam. Check the Exam Allotment page for your room and hall ticket.",
        },
        HelpArticle {
            id: "faq-not-eligible",
            category: HelpCategory::Exams,
            question: "Why is my status Not eligible?",
            answer: "Usually attendance or fee dues. The reason column on the allotment table shows the exact cause.",
        },
        HelpArticle {
            id: "faq-password",
            category: HelpCategory::Account,
            question: "How do I enable two-factor sign-in?",
            answer: "Go to Settings and switch on two-factor authentication, then save your profile.",
        },
    ]
}
