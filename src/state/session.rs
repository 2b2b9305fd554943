/// Login form state
///
/// The "login" is local field validation only. Credentials are never
/// checked against any store and never leave the process.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::LoginError;

/// Letters (including the Spanish accented set) and whitespace
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-záéíóúÁÉÍÓÚñÑ\s]+$").expect("valid name pattern"));

const MIN_PASSWORD_LEN: usize = 6;

/// Which form field an edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    is_authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Update one field of the form
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Password => self.password = value,
        }
    }

    /// Validate the current form contents and mark the session authenticated
    pub fn submit(&mut self) -> Result<(), LoginError> {
        validate(&self.first_name, &self.last_name, &self.password)?;
        self.is_authenticated = true;
        Ok(())
    }

    /// "First Last" for the gallery header
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Check the three fields; the first failing rule wins
pub fn validate(first_name: &str, last_name: &str, password: &str) -> Result<(), LoginError> {
    if [first_name, last_name, password]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(LoginError::EmptyField);
    }
    if !NAME_PATTERN.is_match(first_name) {
        return Err(LoginError::InvalidFirstName);
    }
    if !NAME_PATTERN.is_match(last_name) {
        return Err(LoginError::InvalidLastName);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(LoginError::WeakPassword);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(first: &str, last: &str, password: &str) -> Session {
        let mut session = Session::new();
        session.edit(Field::FirstName, first.to_string());
        session.edit(Field::LastName, last.to_string());
        session.edit(Field::Password, password.to_string());
        session
    }

    #[test]
    fn test_empty_or_blank_fields_rejected() {
        for (first, last, password) in [
            ("", "García", "secret1"),
            ("Ana", "   ", "secret1"),
            ("Ana", "García", ""),
            ("\t", "\n", " "),
        ] {
            let mut s = session(first, last, password);
            assert_eq!(s.submit(), Err(LoginError::EmptyField));
            assert!(!s.is_authenticated());
        }
    }

    #[test]
    fn test_names_with_digits_or_symbols_rejected() {
        let mut s = session("Ana2", "García", "secret1");
        assert_eq!(s.submit(), Err(LoginError::InvalidFirstName));

        let mut s = session("Ana", "Gar-cía", "secret1");
        assert_eq!(s.submit(), Err(LoginError::InvalidLastName));
        assert!(!s.is_authenticated());
    }

    #[test]
    fn test_empty_check_precedes_name_check() {
        // Invalid first name but empty password: the empty rule reports first
        let mut s = session("Ana2", "García", "");
        assert_eq!(s.submit(), Err(LoginError::EmptyField));
    }

    #[test]
    fn test_first_name_checked_before_last_name() {
        let mut s = session("Ana!", "G4rcía", "secret1");
        assert_eq!(s.submit(), Err(LoginError::InvalidFirstName));
    }

    #[test]
    fn test_password_length_boundary() {
        let mut s = session("Ana", "García", "abcde");
        assert_eq!(s.submit(), Err(LoginError::WeakPassword));
        assert!(!s.is_authenticated());

        let mut s = session("Ana", "García", "abcdef");
        assert_eq!(s.submit(), Ok(()));
        assert!(s.is_authenticated());
    }

    #[test]
    fn test_accented_names_and_spaces_accepted() {
        let mut s = session("José María", "Núñez Ibáñez", "secret1");
        assert_eq!(s.submit(), Ok(()));
        assert_eq!(s.display_name(), "José María Núñez Ibáñez");
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Six characters but more than six bytes
        assert_eq!(validate("Ana", "García", "ñññññ"), Err(LoginError::WeakPassword));
        assert_eq!(validate("Ana", "García", "ññññññ"), Ok(()));
    }
}
