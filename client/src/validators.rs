use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Shared primitive validators used by the form schemas

// Compile regex patterns once at startup
// These patterns are hardcoded and always valid, so we use expect() with explicit reasoning
static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Hours 1-3 digits, minutes 00-59
    Regex::new(r"^\d{1,3}:[0-5]\d$").expect("hardcoded duration regex is invalid - fix source code")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9 ()\-]{7,20}$").expect("hardcoded phone regex is invalid - fix source code")
});

/// Symbols accepted by the password strength rule
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()";

/// Minimum password length
pub const PASSWORD_MIN_LEN: usize = 8;

/// Validate a video duration string (`H{1,3}:MM`)
pub fn validate_duration(duration: &str) -> Result<(), ValidationError> {
    if DURATION_REGEX.is_match(duration) {
        Ok(())
    } else {
        Err(error(
            "invalid_duration",
            "duration must look like H:MM with minutes below 60",
        ))
    }
}

/// Validate password strength.
///
/// Each missing character class is reported with its own code and a message
/// naming the class, checked in order: length, uppercase, lowercase, digit,
/// symbol.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(error(
            "password_too_short",
            "password must be at least 8 characters",
        ));
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(error(
            "password_missing_uppercase",
            "password must contain an uppercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(error(
            "password_missing_lowercase",
            "password must contain a lowercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(error("password_missing_digit", "password must contain a digit"));
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(error(
            "password_missing_symbol",
            "password must contain one of !@#$%^&*()",
        ));
    }
    Ok(())
}

/// Validate an absolute URL
pub fn validate_absolute_url(value: &str) -> Result<(), ValidationError> {
    if is_absolute_url(value) {
        Ok(())
    } else {
        Err(error("invalid_url", "must be a well-formed URL"))
    }
}

/// Whether `value` parses as an absolute URL
pub fn is_absolute_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Validate a phone number shape (digits with optional +, spaces, dashes)
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(error("invalid_phone", "must be a valid phone number"))
    }
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_durations() {
        assert!(validate_duration("0:00").is_ok());
        assert!(validate_duration("12:59").is_ok());
        assert!(validate_duration("123:59").is_ok());
    }

    #[test]
    fn test_invalid_durations() {
        assert!(validate_duration("1:60").is_err()); // Minutes overflow
        assert!(validate_duration("abc").is_err());
        assert!(validate_duration("12:5").is_err()); // Single minute digit
        assert!(validate_duration("1234:00").is_err()); // Too many hour digits
        assert!(validate_duration(":30").is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password_strength("Str0ng!pass").is_ok());
        assert!(validate_password_strength("Aa1!Aa1!").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        let err = validate_password_strength("Aa1!x").unwrap_err();
        assert_eq!(err.code, "password_too_short");
    }

    #[test]
    fn test_password_missing_each_class() {
        assert_eq!(
            validate_password_strength("str0ng!pass").unwrap_err().code,
            "password_missing_uppercase"
        );
        assert_eq!(
            validate_password_strength("STR0NG!PASS").unwrap_err().code,
            "password_missing_lowercase"
        );
        assert_eq!(
            validate_password_strength("Strong!pass").unwrap_err().code,
            "password_missing_digit"
        );
        assert_eq!(
            validate_password_strength("Str0ngpass").unwrap_err().code,
            "password_missing_symbol"
        );
    }

    #[test]
    fn test_password_messages_name_the_class() {
        let err = validate_password_strength("str0ng!pass").unwrap_err();
        assert!(err.message.unwrap().contains("uppercase"));
        let err = validate_password_strength("Str0ngpass").unwrap_err();
        assert!(err.message.unwrap().contains("!@#$%^&*()"));
    }

    #[test]
    fn test_urls() {
        assert!(validate_absolute_url("https://cdn.example.com/v/1.mp4").is_ok());
        assert!(validate_absolute_url("not a url").is_err());
        assert!(validate_absolute_url("/relative/path").is_err());
    }

    #[test]
    fn test_phones() {
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("5551234").is_ok());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("123").is_err());
    }
}
