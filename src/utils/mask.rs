/// Masks contact data before it reaches the logs. Keeps the first and last
/// two characters so operators can still correlate submissions.
pub fn mask_sensitive(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_and_phone() {
        assert_eq!(mask_sensitive("ana@acmecorp.com"), "an************om");
        assert_eq!(mask_sensitive("5512345678"), "55******78");
        assert_eq!(mask_sensitive("abc"), "***");
        assert_eq!(mask_sensitive(""), "");
    }
}
