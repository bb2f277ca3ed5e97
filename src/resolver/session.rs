pub trait SessionStateProvider: Send + Sync {
    fn is_logged_in(&self) -> Option<bool>;
    fn should_anonymize_ip(&self) -> Option<bool>;
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct StaticSession {
    pub logged_in: Option<bool>,
    pub anonymize_ip: Option<bool>,
}

impl StaticSession {
    pub fn new(logged_in: Option<bool>, anonymize_ip: Option<bool>) -> Self {
        Self {
            logged_in,
            anonymize_ip,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.logged_in.is_some() || self.anonymize_ip.is_some()
    }
}

impl SessionStateProvider for StaticSession {
    fn is_logged_in(&self) -> Option<bool> {
        self.logged_in
    }

    fn should_anonymize_ip(&self) -> Option<bool> {
        self.anonymize_ip
    }
}
