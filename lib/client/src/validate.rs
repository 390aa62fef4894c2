//! Client-side signup validation.
//!
//! A failed check stops the operation before any request is made; the
//! server never sees a payload that the client already knows is invalid.

/// Characters the policy counts as special.
const SPECIAL_CHARS: &str = "!@#$%^&*";

/// One password-policy rule.
pub struct PasswordRule {
    /// Human-readable requirement, shown when unmet.
    pub text: &'static str,
    check: fn(&str) -> bool,
}

impl PasswordRule {
    pub fn is_met(&self, password: &str) -> bool {
        (self.check)(password)
    }
}

fn has_min_length(pwd: &str) -> bool {
    pwd.chars().count() >= 8
}

fn has_uppercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

fn has_special(pwd: &str) -> bool {
    pwd.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// The signup password policy. All rules must hold.
pub const PASSWORD_RULES: &[PasswordRule] = &[
    PasswordRule {
        text: "at least 8 characters",
        check: has_min_length,
    },
    PasswordRule {
        text: "an uppercase letter (A-Z)",
        check: has_uppercase,
    },
    PasswordRule {
        text: "a lowercase letter (a-z)",
        check: has_lowercase,
    },
    PasswordRule {
        text: "a number (0-9)",
        check: has_digit,
    },
    PasswordRule {
        text: "a special character (!@#$%^&*)",
        check: has_special,
    },
];

/// Rules the given password does not satisfy. Empty means acceptable.
pub fn unmet_rules(password: &str) -> Vec<&'static str> {
    PASSWORD_RULES
        .iter()
        .filter(|rule| !rule.is_met(password))
        .map(|rule| rule.text)
        .collect()
}

/// All problems with a signup attempt: unmet password rules, a mismatched
/// confirmation, unaccepted terms. Empty means the signup may proceed.
pub fn validate_signup(password: &str, confirmation: &str, agreed_to_terms: bool) -> Vec<String> {
    let mut problems: Vec<String> = unmet_rules(password)
        .into_iter()
        .map(|rule| format!("password needs {rule}"))
        .collect();
    if password != confirmation {
        problems.push("passwords do not match".to_string());
    }
    if !agreed_to_terms {
        problems.push("the terms of service must be accepted".to_string());
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_meets_every_rule() {
        assert!(unmet_rules("Aa1!aaaa").is_empty());
    }

    #[test]
    fn each_rule_is_reported_when_unmet() {
        assert_eq!(unmet_rules("Aa1!a").len(), 1); // too short
        assert_eq!(unmet_rules("aa1!aaaa").len(), 1); // no uppercase
        assert_eq!(unmet_rules("AA1!AAAA").len(), 1); // no lowercase
        assert_eq!(unmet_rules("Aaa!aaaa").len(), 1); // no digit
        assert_eq!(unmet_rules("Aa1aaaaa").len(), 1); // no special
        assert_eq!(unmet_rules("").len(), 5);
    }

    #[test]
    fn signup_requires_matching_confirmation() {
        let problems = validate_signup("Aa1!aaaa", "Aa1!bbbb", true);
        assert_eq!(problems, vec!["passwords do not match".to_string()]);
    }

    #[test]
    fn signup_requires_accepted_terms() {
        let problems = validate_signup("Aa1!aaaa", "Aa1!aaaa", false);
        assert_eq!(
            problems,
            vec!["the terms of service must be accepted".to_string()]
        );
    }

    #[test]
    fn valid_signup_has_no_problems() {
        assert!(validate_signup("Aa1!aaaa", "Aa1!aaaa", true).is_empty());
    }
}
