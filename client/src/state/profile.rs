//! User-profile settings form state.
//!
//! DESIGN
//! ======
//! The form edits a `draft` copy; `saved` is the last accepted version.
//! Updates arrive as `ProfileMsg` values so inputs never address fields by
//! string key. Saving validates the draft first and is all-or-nothing.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("phone number needs at least 7 digits")]
    InvalidPhone,
}

/// Minimum digits accepted in a phone number.
const MIN_PHONE_DIGITS: usize = 7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub notify_email: bool,
    pub notify_sms: bool,
    pub two_factor: bool,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            full_name: "Priya Raman".to_owned(),
            email: "priya.raman@example.edu".to_owned(),
            phone: "+91 98450 12345".to_owned(),
            department: "Computer Science".to_owned(),
            notify_email: true,
            notify_sms: false,
            two_factor: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileText {
    FullName,
    Email,
    Phone,
    Department,
}

impl ProfileText {
    pub const ALL: [Self; 4] = [Self::FullName, Self::Email, Self::Phone, Self::Department];

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Department => "Department",
        }
    }

    /// HTML input type for the field.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::FullName | Self::Department => "text",
        }
    }

    pub fn get(self, form: &ProfileForm) -> &str {
        match self {
            Self::FullName => &form.full_name,
            Self::Email => &form.email,
            Self::Phone => &form.phone,
            Self::Department => &form.department,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileFlag {
    NotifyEmail,
    NotifySms,
    TwoFactor,
}

impl ProfileFlag {
    pub const ALL: [Self; 3] = [Self::NotifyEmail, Self::NotifySms, Self::TwoFactor];

    pub fn label(self) -> &'static str {
        match self {
            Self::NotifyEmail => "Email notifications",
            Self::NotifySms => "SMS notifications",
            Self::TwoFactor => "Two-factor authentication",
        }
    }

    pub fn get(self, form: &ProfileForm) -> bool {
        match self {
            Self::NotifyEmail => form.notify_email,
            Self::NotifySms => form.notify_sms,
            Self::TwoFactor => form.two_factor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileMsg {
    SetText { field: ProfileText, value: String },
    SetFlag { flag: ProfileFlag, value: bool },
}

/// Validate a form; an empty result means it can be saved.
pub fn validate(form: &ProfileForm) -> Vec<ProfileError> {
    let mut errors = Vec::new();
    if form.full_name.trim().is_empty() {
        errors.push(ProfileError::EmptyName);
    }
    if !is_plausible_email(form.email.trim()) {
        errors.push(ProfileError::InvalidEmail);
    }
    if form.phone.chars().filter(char::is_ascii_digit).count() < MIN_PHONE_DIGITS {
        errors.push(ProfileError::InvalidPhone);
    }
    errors
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub saved: ProfileForm,
    pub draft: ProfileForm,
}

impl ProfileState {
    pub fn apply(&mut self, msg: ProfileMsg) {
        match msg {
            ProfileMsg::SetText { field, value } => {
                let slot = match field {
                    ProfileText::FullName => &mut self.draft.full_name,
                    ProfileText::Email => &mut self.draft.email,
                    ProfileText::Phone => &mut self.draft.phone,
                    ProfileText::Department => &mut self.draft.department,
                };
                *slot = value;
            }
            ProfileMsg::SetFlag { flag, value } => {
                let slot = match flag {
                    ProfileFlag::NotifyEmail => &mut self.draft.notify_email,
                    ProfileFlag::NotifySms => &mut self.draft.notify_sms,
                    ProfileFlag::TwoFactor => &mut self.draft.two_factor,
                };
                *slot = value;
            }
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.saved != self.draft
    }

    /// Accept the draft if it validates.
    ///
    /// # Errors
    ///
    /// Returns every validation failure; `saved` is left untouched.
    pub fn save(&mut self) -> Result<(), Vec<ProfileError>> {
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            return Err(errors);
        }
        self.draft.full_name = self.draft.full_name.trim().to_owned();
        self.draft.email = self.draft.email.trim().to_owned();
        self.saved = self.draft.clone();
        Ok(())
    }

    /// Throw away unsaved edits.
    pub fn discard(&mut self) {
        self.draft = self.saved.clone();
    }
}
