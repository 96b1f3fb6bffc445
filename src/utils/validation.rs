/// Validación local antes de llamar al backend: un email vacío o sin `@`
/// nunca genera una petición de red.
pub fn normalized_email(input: &str) -> Option<String> {
    let email = input.trim();
    if email.is_empty() || !email.contains('@') {
        return None;
    }
    Some(email.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_rejected_before_any_request() {
        assert_eq!(normalized_email(""), None);
        assert_eq!(normalized_email("   "), None);
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        assert_eq!(normalized_email("not-an-email"), None);
    }

    #[test]
    fn valid_email_is_trimmed() {
        assert_eq!(
            normalized_email("  cliente@mail.com "),
            Some("cliente@mail.com".to_string())
        );
    }
}
